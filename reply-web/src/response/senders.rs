//! Response senders
//!
//! Each sender validates its arguments, builds a [`Reply`] and writes it to
//! the transport exactly once. Validation failures return before the
//! transport is touched.
//!
//! Catalog-driven senders come in pairs: the plain form uses the default
//! [`EnvelopeOptions`], the `_with_options` form takes them explicitly, for
//! example from the `envelope` configuration domain:
//!
//! ```rust
//! use reply_config::EnvelopeConfig;
//! use reply_web::response::{send_success_with_options, EnvelopeOptions, JsonResponder};
//!
//! let config = EnvelopeConfig { include_status_code: true };
//! let mut res = JsonResponder::new();
//! send_success_with_options(&mut res, 200, "Ready", None, EnvelopeOptions::from(&config))
//!     .unwrap();
//!
//! assert_eq!(res.body().unwrap()["statusCode"], serde_json::json!(200));
//! ```

use serde_json::{json, Value};
use std::error::Error;
use tracing::debug;

use super::envelope::{EnvelopeOptions, Reply};
use super::transport::{DiagnosticSink, ResponseTransport};
use crate::errors::WebResult;
use crate::status::StatusClass;

/// Send a catalog-driven envelope for any supported code
pub fn send_status<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
) -> WebResult<()> {
    send_status_with_options(transport, code, message, data, EnvelopeOptions::default())
}

pub fn send_status_with_options<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
    options: EnvelopeOptions,
) -> WebResult<()> {
    let reply = Reply::for_status(code, message, data, options)?;
    write(transport, reply);
    Ok(())
}

/// Send a catalog-driven envelope whose code must belong to `class`
pub fn send_in_class<T: ResponseTransport>(
    transport: &mut T,
    class: StatusClass,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
    options: EnvelopeOptions,
) -> WebResult<()> {
    let reply = Reply::for_class(class, code, message, data, options)?;
    write(transport, reply);
    Ok(())
}

/// 1xx envelope, `success: true`
///
/// A final response with a 1xx status is only meaningful to transports that
/// hand the body back to the caller, such as [`JsonResponder`] in tests or a
/// custom [`ResponseTransport`]. Hyper does not send 1xx codes as final
/// responses and replaces them with an empty `500`.
///
/// Uses the default [`EnvelopeOptions`]; see [`send_informational_with_options`].
///
/// [`JsonResponder`]: super::JsonResponder
pub fn send_informational<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
) -> WebResult<()> {
    send_informational_with_options(transport, code, message, data, EnvelopeOptions::default())
}

pub fn send_informational_with_options<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
    options: EnvelopeOptions,
) -> WebResult<()> {
    send_in_class(
        transport,
        StatusClass::Informational,
        code,
        message,
        data,
        options,
    )
}

/// 2xx envelope, `success: true`
///
/// Uses the default [`EnvelopeOptions`]; see [`send_success_with_options`].
pub fn send_success<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
) -> WebResult<()> {
    send_success_with_options(transport, code, message, data, EnvelopeOptions::default())
}

pub fn send_success_with_options<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
    options: EnvelopeOptions,
) -> WebResult<()> {
    send_in_class(
        transport,
        StatusClass::Success,
        code,
        message,
        data,
        options,
    )
}

/// 3xx envelope, `success: true`
///
/// Uses the default [`EnvelopeOptions`]; see [`send_redirection_with_options`].
pub fn send_redirection<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
) -> WebResult<()> {
    send_redirection_with_options(transport, code, message, data, EnvelopeOptions::default())
}

pub fn send_redirection_with_options<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
    options: EnvelopeOptions,
) -> WebResult<()> {
    send_in_class(
        transport,
        StatusClass::Redirection,
        code,
        message,
        data,
        options,
    )
}

/// 4xx envelope, `success: false`
///
/// Uses the default [`EnvelopeOptions`]; see [`send_client_error_with_options`].
pub fn send_client_error<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
) -> WebResult<()> {
    send_client_error_with_options(transport, code, message, data, EnvelopeOptions::default())
}

pub fn send_client_error_with_options<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
    options: EnvelopeOptions,
) -> WebResult<()> {
    send_in_class(
        transport,
        StatusClass::ClientError,
        code,
        message,
        data,
        options,
    )
}

/// 5xx envelope, `success: false`
///
/// Uses the default [`EnvelopeOptions`]; see [`send_server_error_with_options`].
pub fn send_server_error<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
) -> WebResult<()> {
    send_server_error_with_options(transport, code, message, data, EnvelopeOptions::default())
}

pub fn send_server_error_with_options<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    message: impl Into<String>,
    data: Option<Value>,
    options: EnvelopeOptions,
) -> WebResult<()> {
    send_in_class(
        transport,
        StatusClass::ServerError,
        code,
        message,
        data,
        options,
    )
}

/// Send an envelope with caller-chosen `success` and a verbatim `msg`
pub fn send_response<T: ResponseTransport>(
    transport: &mut T,
    code: u16,
    success: bool,
    msg: impl Into<String>,
    data: Option<Value>,
) -> WebResult<()> {
    let reply = Reply::generic(code, success, msg, data)?;
    write(transport, reply);
    Ok(())
}

/// Record the error trace, then send a `success: false` envelope
///
/// The trace is recorded even when the arguments turn out to be invalid.
pub fn error_handler<T, E>(
    transport: &mut T,
    sink: &dyn DiagnosticSink,
    code: u16,
    msg: impl Into<String>,
    error: &E,
) -> WebResult<()>
where
    T: ResponseTransport,
    E: Error + ?Sized,
{
    sink.record(&error_trace(error));
    let reply = Reply::generic(code, false, msg, None)?;
    write(transport, reply);
    Ok(())
}

/// Payload accepted by [`send_catch_response`]
#[derive(Debug, Clone, PartialEq)]
pub enum CatchPayload {
    /// JSON object or array
    Data(Value),
    /// A caught error and its source chain
    Error {
        message: String,
        causes: Vec<String>,
    },
}

impl CatchPayload {
    pub fn from_error<E: Error + ?Sized>(error: &E) -> Self {
        CatchPayload::Error {
            message: error.to_string(),
            causes: causes(error),
        }
    }

    fn into_value(self) -> Value {
        match self {
            CatchPayload::Data(value) => value,
            CatchPayload::Error { message, causes } => json!({
                "error": message,
                "causes": causes,
            }),
        }
    }
}

impl From<Value> for CatchPayload {
    fn from(value: Value) -> Self {
        CatchPayload::Data(value)
    }
}

/// Catch-all 500 envelope, `success: false`
pub fn send_catch_response<T: ResponseTransport>(
    transport: &mut T,
    message: impl Into<String>,
    payload: Option<CatchPayload>,
) -> WebResult<()> {
    let data = payload.map(CatchPayload::into_value);
    let reply = Reply::for_class(
        StatusClass::ServerError,
        500,
        message,
        data,
        EnvelopeOptions::default(),
    )?;
    write(transport, reply);
    Ok(())
}

/// Error display followed by one `Caused by:` line per source
pub fn error_trace<E: Error + ?Sized>(error: &E) -> String {
    let mut trace = error.to_string();
    for cause in causes(error) {
        trace.push_str("\nCaused by: ");
        trace.push_str(&cause);
    }
    trace
}

fn causes<E: Error + ?Sized>(error: &E) -> Vec<String> {
    let mut causes = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    causes
}

fn write<T: ResponseTransport>(transport: &mut T, reply: Reply) {
    debug!(
        status = reply.status().as_u16(),
        "Writing response envelope"
    );
    reply.write_to(transport);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::JsonResponder;
    use axum::http::StatusCode;
    use std::cell::RefCell;
    use std::fmt;

    #[derive(Default)]
    struct RecordingSink {
        traces: RefCell<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn record(&self, trace: &str) {
            self.traces.borrow_mut().push(trace.to_string());
        }
    }

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("connection reset")
        }
    }

    impl Error for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("query failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_success_sender_rejects_client_error_code() {
        let mut responder = JsonResponder::new();
        let result = send_success(&mut responder, 404, "missing", None);

        assert!(result.is_err());
        assert!(!responder.is_written());
        assert_eq!(responder.write_count(), 0);
    }

    #[test]
    fn test_each_class_sender_writes_once() {
        let mut responder = JsonResponder::new();
        send_redirection(&mut responder, 301, "moved", None)
            .unwrap();

        assert_eq!(responder.write_count(), 1);
        assert_eq!(responder.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            responder.body(),
            Some(&json!({"success": true, "msg": "Moved Permanently : moved"}))
        );
    }

    #[test]
    fn test_success_follows_class_for_every_catalog_code() {
        for entry in crate::status::CATALOG {
            for data in [None, Some(json!({"id": 1})), Some(json!([]))] {
                let with_data = data.is_some();
                let mut responder = JsonResponder::new();
                send_status(&mut responder, entry.code, "checked", data)
                    .unwrap();

                let body = responder.body().unwrap();
                assert_eq!(responder.status().as_u16(), entry.code);
                assert_eq!(
                    body["success"],
                    json!(entry.class.is_success()),
                    "code {}",
                    entry.code
                );
                assert_eq!(
                    body.get("data").is_some(),
                    with_data,
                    "code {}",
                    entry.code
                );
            }
        }
    }

    #[test]
    fn test_class_senders_accept_every_code_of_their_class() {
        use StatusClass::*;

        type Sender = fn(&mut JsonResponder, u16, &'static str, Option<Value>) -> WebResult<()>;
        let senders: [(StatusClass, Sender); 5] = [
            (Informational, |t, c, m, d| send_informational(t, c, m, d)),
            (Success, |t, c, m, d| send_success(t, c, m, d)),
            (Redirection, |t, c, m, d| send_redirection(t, c, m, d)),
            (ClientError, |t, c, m, d| send_client_error(t, c, m, d)),
            (ServerError, |t, c, m, d| send_server_error(t, c, m, d)),
        ];

        for (class, sender) in senders {
            for entry in crate::status::CATALOG {
                let mut responder = JsonResponder::new();
                let result = sender(&mut responder, entry.code, "checked", None);
                assert_eq!(result.is_ok(), entry.class == class, "code {}", entry.code);
                assert_eq!(responder.is_written(), entry.class == class);
            }
        }
    }

    #[test]
    fn test_with_options_senders_include_status_code() {
        let mut responder = JsonResponder::new();
        send_client_error_with_options(
            &mut responder,
            409,
            "duplicate",
            None,
            EnvelopeOptions::with_status_code(),
        )
        .unwrap();

        assert_eq!(
            responder.body(),
            Some(&json!({"success": false, "msg": "Conflict : duplicate", "statusCode": 409}))
        );
    }

    #[test]
    fn test_error_trace_walks_sources() {
        assert_eq!(
            error_trace(&Outer(Inner)),
            "query failed\nCaused by: connection reset"
        );
    }

    #[test]
    fn test_error_handler_records_then_writes_failure() {
        let mut responder = JsonResponder::new();
        let sink = RecordingSink::default();

        error_handler(
            &mut responder,
            &sink,
            502,
            "upstream broke",
            &Outer(Inner),
        )
        .unwrap();

        assert_eq!(sink.traces.borrow().len(), 1);
        assert!(sink.traces.borrow()[0].contains("connection reset"));
        assert_eq!(responder.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            responder.body(),
            Some(&json!({"success": false, "msg": "upstream broke"}))
        );
    }

    #[test]
    fn test_error_handler_records_even_on_invalid_code() {
        let mut responder = JsonResponder::new();
        let sink = RecordingSink::default();

        let result = error_handler(&mut responder, &sink, 42, "bad", &Inner);

        assert!(result.is_err());
        assert_eq!(sink.traces.borrow().len(), 1);
        assert!(!responder.is_written());
    }

    #[test]
    fn test_catch_response_with_error_payload() {
        let mut responder = JsonResponder::new();
        send_catch_response(
            &mut responder,
            "lookup crashed",
            Some(CatchPayload::from_error(&Outer(Inner))),
        )
        .unwrap();

        assert_eq!(responder.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            responder.body(),
            Some(&json!({
                "success": false,
                "msg": "Internal Server Error : lookup crashed",
                "data": {"error": "query failed", "causes": ["connection reset"]}
            }))
        );
    }

    #[test]
    fn test_catch_response_without_payload_omits_data() {
        let mut responder = JsonResponder::new();
        send_catch_response(&mut responder, "boom", None).unwrap();

        let body = responder.body().unwrap();
        assert!(body.get("data").is_none());
        assert_eq!(body["success"], json!(false));
    }

    #[test]
    fn test_catch_response_rejects_scalar_data() {
        let mut responder = JsonResponder::new();
        let result = send_catch_response(&mut responder, "boom", Some(json!("text").into()));

        assert!(result.is_err());
        assert!(!responder.is_written());
    }
}
