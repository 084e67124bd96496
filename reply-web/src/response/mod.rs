//! Standardised JSON response envelopes
//!
//! [`Reply`] is the pure part: it validates arguments and builds the
//! `{success, msg, data?}` envelope. The `send_*` functions write a reply to
//! a [`ResponseTransport`], which for Axum handlers is [`JsonResponder`].
//!
//! ```rust,no_run
//! use axum::response::IntoResponse;
//! use reply_web::{response::{send_success, JsonResponder}, WebResult};
//! use serde_json::json;
//!
//! async fn show_user() -> WebResult<impl IntoResponse> {
//!     let mut res = JsonResponder::new();
//!     send_success(&mut res, 200, "User fetched", Some(json!({"id": 7})))?;
//!     Ok(res)
//! }
//! ```

mod envelope;
mod senders;
mod transport;

pub use envelope::{to_payload, Envelope, EnvelopeOptions, Reply};
pub use senders::{
    error_handler, error_trace, send_catch_response, send_client_error,
    send_client_error_with_options, send_in_class, send_informational,
    send_informational_with_options, send_redirection, send_redirection_with_options,
    send_response, send_server_error, send_server_error_with_options, send_status,
    send_status_with_options, send_success, send_success_with_options, CatchPayload,
};
pub use transport::{DiagnosticSink, JsonResponder, ResponseTransport, TracingSink};
