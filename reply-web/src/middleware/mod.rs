pub mod assets;
pub mod auth;
pub mod cors;
pub mod request_log;
pub mod setup;

// Re-export layer creation functions
pub use assets::{mount_public_dir, public_dir_service, send_file};
pub use auth::{authorize, forbidden, role_guard, AuthContext, RequiredRole};
pub use cors::{cors_layer, cors_layer_with_config};
pub use request_log::{request_logger_middleware, RequestId, REQUEST_ID_HEADER};
pub use setup::{body_limit_layer, setup_basic_middlewares};
