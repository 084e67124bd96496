use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reply_config::EnvelopeConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::transport::ResponseTransport;
use crate::errors::{WebError, WebResult};
use crate::status::{self, StatusClass, StatusEntry};

/// Standard response body: `{ success, msg, data?, statusCode? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    success: bool,
    msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(
        rename = "statusCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    status_code: Option<u16>,
}

impl Envelope {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// JSON form of the envelope; absent fields are omitted, never `null`
    pub fn to_value(&self) -> Value {
        // Plain struct of string keys and JSON values; serialisation cannot fail
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Options for catalog-driven envelopes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvelopeOptions {
    /// Add the numeric `statusCode` field to the body
    pub include_status_code: bool,
}

impl EnvelopeOptions {
    pub fn with_status_code() -> Self {
        Self {
            include_status_code: true,
        }
    }
}

impl From<&EnvelopeConfig> for EnvelopeOptions {
    fn from(config: &EnvelopeConfig) -> Self {
        Self {
            include_status_code: config.include_status_code,
        }
    }
}

/// A validated response that has not been written yet
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    status: StatusCode,
    envelope: Envelope,
}

impl Reply {
    /// Catalog-driven reply for any supported code
    ///
    /// `msg` becomes `"<reason phrase> : <message>"` and `success` follows
    /// the status class.
    pub fn for_status(
        code: u16,
        message: impl Into<String>,
        data: Option<Value>,
        options: EnvelopeOptions,
    ) -> WebResult<Self> {
        let entry = status::lookup(code).ok_or_else(|| {
            WebError::invalid_argument(
                "status_code",
                format!("{} is not a supported status code", code),
            )
        })?;
        Self::from_entry(entry, message.into(), data, options)
    }

    /// Catalog-driven reply whose code must belong to `class`
    pub fn for_class(
        class: StatusClass,
        code: u16,
        message: impl Into<String>,
        data: Option<Value>,
        options: EnvelopeOptions,
    ) -> WebResult<Self> {
        let entry = status::lookup_in_class(class, code)?;
        Self::from_entry(entry, message.into(), data, options)
    }

    /// Reply with a caller-chosen `success` flag and a verbatim `msg`
    pub fn generic(
        code: u16,
        success: bool,
        msg: impl Into<String>,
        data: Option<Value>,
    ) -> WebResult<Self> {
        let status = http_status(code)?;
        let data = normalize_payload(data)?;
        Ok(Self {
            status,
            envelope: Envelope {
                success,
                msg: msg.into(),
                data,
                status_code: None,
            },
        })
    }

    fn from_entry(
        entry: &'static StatusEntry,
        message: String,
        data: Option<Value>,
        options: EnvelopeOptions,
    ) -> WebResult<Self> {
        let status = http_status(entry.code)?;
        let data = normalize_payload(data)?;
        Ok(Self {
            status,
            envelope: Envelope {
                success: entry.class.is_success(),
                msg: compose_message(entry.reason_phrase, &message),
                data,
                status_code: options.include_status_code.then_some(entry.code),
            },
        })
    }

    /// Infallible catalog reply for codes this crate emits itself
    pub(crate) fn rejection(status: StatusCode, message: impl AsRef<str>) -> Self {
        let phrase = status::lookup(status.as_u16())
            .map(|entry| entry.reason_phrase)
            .or_else(|| status.canonical_reason())
            .unwrap_or("Error");
        Self {
            status,
            envelope: Envelope {
                success: !(status.is_client_error() || status.is_server_error()),
                msg: compose_message(phrase, message.as_ref()),
                data: None,
                status_code: None,
            },
        }
    }

    /// 500 catch-all reply without payload
    pub(crate) fn internal_error(message: impl AsRef<str>) -> Self {
        Self::rejection(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Write status and body to the transport, once
    pub fn write_to<T: ResponseTransport>(self, transport: &mut T) {
        transport
            .set_status(self.status)
            .write_json(self.envelope.to_value());
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}

/// Convert a typed value into an envelope payload
pub fn to_payload<T: Serialize>(value: &T) -> WebResult<Value> {
    let value = serde_json::to_value(value)
        .map_err(|e| WebError::invalid_argument("data", format!("not serializable: {}", e)))?;
    normalize_payload(Some(value))?
        .ok_or_else(|| WebError::invalid_argument("data", "serialized to null"))
}

/// `null` counts as no payload; anything else must be an object or array
pub(crate) fn normalize_payload(data: Option<Value>) -> WebResult<Option<Value>> {
    match data {
        None | Some(Value::Null) => Ok(None),
        Some(value @ (Value::Object(_) | Value::Array(_))) => Ok(Some(value)),
        Some(other) => Err(WebError::invalid_argument(
            "data",
            format!("must be a JSON object or array, got {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn compose_message(reason_phrase: &str, message: &str) -> String {
    format!("{} : {}", reason_phrase, message)
}

fn http_status(code: u16) -> WebResult<StatusCode> {
    if StatusClass::of(code).is_none() {
        return Err(WebError::invalid_argument(
            "status_code",
            format!("{} is outside the 100..=599 range", code),
        ));
    }
    StatusCode::from_u16(code)
        .map_err(|e| WebError::invalid_argument("status_code", e.to_string()))
}
