//! Status code catalog
//!
//! Maps every status code the response senders accept to its reason phrase
//! and status class. The table is constant data; lookups never allocate and
//! are safe from any thread.

use serde::Serialize;
use std::fmt;

use crate::errors::{WebError, WebResult};

/// HTTP status class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    /// 1xx
    Informational,
    /// 2xx
    Success,
    /// 3xx
    Redirection,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
}

impl StatusClass {
    /// Class of a numeric code, `None` outside 100..=599
    pub fn of(code: u16) -> Option<Self> {
        match code {
            100..=199 => Some(StatusClass::Informational),
            200..=299 => Some(StatusClass::Success),
            300..=399 => Some(StatusClass::Redirection),
            400..=499 => Some(StatusClass::ClientError),
            500..=599 => Some(StatusClass::ServerError),
            _ => None,
        }
    }

    /// Value of the envelope `success` flag for this class
    pub fn is_success(self) -> bool {
        matches!(
            self,
            StatusClass::Informational | StatusClass::Success | StatusClass::Redirection
        )
    }

    /// Catalog entries belonging to this class, ascending by code
    pub fn entries(self) -> impl Iterator<Item = &'static StatusEntry> {
        CATALOG.iter().filter(move |entry| entry.class == self)
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatusClass::Informational => "informational",
            StatusClass::Success => "success",
            StatusClass::Redirection => "redirection",
            StatusClass::ClientError => "client error",
            StatusClass::ServerError => "server error",
        };
        f.write_str(label)
    }
}

/// One supported status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub code: u16,
    pub reason_phrase: &'static str,
    pub class: StatusClass,
}

const fn entry(code: u16, reason_phrase: &'static str, class: StatusClass) -> StatusEntry {
    StatusEntry {
        code,
        reason_phrase,
        class,
    }
}

use StatusClass::{ClientError, Informational, Redirection, ServerError, Success};

/// Every supported code, sorted by code
pub static CATALOG: &[StatusEntry] = &[
    entry(100, "Continue", Informational),
    entry(101, "Switching Protocols", Informational),
    entry(102, "Processing", Informational),
    entry(200, "OK", Success),
    entry(201, "Created", Success),
    entry(202, "Accepted", Success),
    entry(203, "Non-Authoritative Information", Success),
    entry(204, "No Content", Success),
    entry(205, "Reset Content", Success),
    entry(206, "Partial Content", Success),
    entry(300, "Multiple Choices", Redirection),
    entry(301, "Moved Permanently", Redirection),
    entry(302, "Found", Redirection),
    entry(303, "See Other", Redirection),
    entry(304, "Not Modified", Redirection),
    entry(307, "Temporary Redirect", Redirection),
    entry(308, "Permanent Redirect", Redirection),
    entry(400, "Bad Request", ClientError),
    entry(401, "Unauthorized", ClientError),
    entry(403, "Forbidden", ClientError),
    entry(404, "Not Found", ClientError),
    entry(405, "Method Not Allowed", ClientError),
    entry(406, "Not Acceptable", ClientError),
    entry(408, "Request Timeout", ClientError),
    entry(409, "Conflict", ClientError),
    entry(410, "Gone", ClientError),
    entry(411, "Length Required", ClientError),
    entry(412, "Precondition Failed", ClientError),
    entry(413, "Payload Too Large", ClientError),
    entry(414, "URI Too Long", ClientError),
    entry(415, "Unsupported Media Type", ClientError),
    entry(429, "Too Many Requests", ClientError),
    entry(500, "Internal Server Error", ServerError),
    entry(501, "Not Implemented", ServerError),
    entry(502, "Bad Gateway", ServerError),
    entry(503, "Service Unavailable", ServerError),
    entry(504, "Gateway Timeout", ServerError),
    entry(505, "HTTP Version Not Supported", ServerError),
];

/// Catalog entry for a code
pub fn lookup(code: u16) -> Option<&'static StatusEntry> {
    CATALOG
        .binary_search_by_key(&code, |entry| entry.code)
        .ok()
        .map(|index| &CATALOG[index])
}

/// Reason phrase for a supported code
///
/// Unsupported codes are rejected, including ones inside a known class
/// such as 207 or 418.
pub fn reason_phrase(code: u16) -> WebResult<&'static str> {
    lookup(code)
        .map(|entry| entry.reason_phrase)
        .ok_or_else(|| unsupported(code))
}

/// Catalog entry for a code that must belong to `class`
pub fn lookup_in_class(class: StatusClass, code: u16) -> WebResult<&'static StatusEntry> {
    let entry = lookup(code).ok_or_else(|| unsupported(code))?;
    if entry.class != class {
        return Err(WebError::invalid_argument(
            "status_code",
            format!(
                "{} is a {} code, expected a {} code",
                code, entry.class, class
            ),
        ));
    }
    Ok(entry)
}

fn unsupported(code: u16) -> WebError {
    WebError::invalid_argument(
        "status_code",
        format!("{} is not a supported status code", code),
    )
}
