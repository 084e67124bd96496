use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{error, warn};

/// Boundary the senders write a finished response to
pub trait ResponseTransport {
    /// Set the response status
    fn set_status(&mut self, status: StatusCode) -> &mut Self;

    /// Write the JSON body, completing the response
    fn write_json(&mut self, body: Value);
}

/// Boundary that receives diagnostic traces from [`error_handler`](super::error_handler)
pub trait DiagnosticSink {
    fn record(&self, trace: &str);
}

/// Default sink that forwards traces to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, trace: &str) {
        error!(trace = %trace, "Request failed");
    }
}

/// Transport backed by an Axum response
///
/// Holds the status and the single JSON body written by a sender and turns
/// into a [`Response`] when returned from a handler. A second body is
/// ignored so that the first write always wins.
#[derive(Debug, Clone, Default)]
pub struct JsonResponder {
    status: StatusCode,
    body: Option<Value>,
    writes: usize,
}

impl JsonResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Number of `write_json` calls seen, including ignored ones
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn is_written(&self) -> bool {
        self.body.is_some()
    }
}

impl ResponseTransport for JsonResponder {
    fn set_status(&mut self, status: StatusCode) -> &mut Self {
        if self.body.is_none() {
            self.status = status;
        }
        self
    }

    fn write_json(&mut self, body: Value) {
        self.writes += 1;
        if self.body.is_some() {
            warn!("Response body already written, ignoring second write");
            return;
        }
        self.body = Some(body);
    }
}

impl IntoResponse for JsonResponder {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}
