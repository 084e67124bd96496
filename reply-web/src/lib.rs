//! # Reply Web Utilities
//!
//! Standardised JSON responses and small middleware helpers for Axum.
//!
//! ## Features
//!
//! - **Status catalog**: reason phrases and classes for the supported codes
//! - **Responses**: `{success, msg, data?}` envelopes, per-class senders,
//!   generic and catch-all senders
//! - **Pagination**: 1-indexed slicing with metadata and a query extractor
//! - **Middleware**: role guard, request logger, CORS, body limits, static
//!   files and Handlebars views
//!
//! ## Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use reply_config::WebConfig;
//! use reply_web::{
//!     middleware::{role_guard, setup_basic_middlewares, RequiredRole},
//!     response::{send_success, JsonResponder},
//!     WebResult,
//! };
//!
//! async fn health() -> WebResult<JsonResponder> {
//!     let mut res = JsonResponder::new();
//!     send_success(&mut res, 200, "Service is healthy", None)?;
//!     Ok(res)
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = WebConfig::default();
//! let admin = Router::new()
//!     .route("/admin/health", get(health))
//!     .route_layer(middleware::from_fn_with_state(RequiredRole::new("admin"), role_guard));
//!
//! let routes = Router::new().route("/health", get(health)).merge(admin);
//! let app = setup_basic_middlewares(routes, &config).unwrap();
//!
//! let listener = tokio::net::TcpListener::bind(config.server.socket_address()).await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod pagination;
pub mod response;
pub mod status;
pub mod views;

// Re-export commonly used types and functions
pub use errors::{WebError, WebResult};
pub use extractors::{JsonOrForm, PaginationParams, PaginationQuery};
pub use middleware::{
    cors_layer, request_logger_middleware, role_guard, setup_basic_middlewares, AuthContext,
    RequiredRole,
};
pub use pagination::{paginate, paginate_owned, Page, PageMeta};
pub use response::{
    error_handler, send_catch_response, send_client_error, send_informational, send_redirection,
    send_response, send_server_error, send_status, send_success, CatchPayload, Envelope,
    EnvelopeOptions, JsonResponder, Reply, ResponseTransport,
};
pub use status::{reason_phrase, StatusClass, StatusEntry};
pub use views::{ViewEngine, ViewError};
