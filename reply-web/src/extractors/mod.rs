pub mod body;
pub mod query;

// Re-export commonly used extractors
pub use body::{BodyKind, JsonOrForm};
pub use query::{PaginationParams, PaginationQuery, DEFAULT_LIMIT, MAX_LIMIT};
