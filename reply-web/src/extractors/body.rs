use axum::{
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::response::Reply;

/// Body extractor accepting JSON or URL-encoded forms into the same type
///
/// Unsupported content types are rejected with a `415` envelope, bodies
/// over the configured limit with `413` and malformed bodies with `400`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

/// Body encodings understood by [`JsonOrForm`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Form,
}

impl BodyKind {
    /// Classify a `Content-Type` header value
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime == "application/json"
            || (mime.starts_with("application/") && mime.ends_with("+json"))
        {
            Some(BodyKind::Json)
        } else if mime == "application/x-www-form-urlencoded" {
            Some(BodyKind::Form)
        } else {
            None
        }
    }
}

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Reply;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(BodyKind::from_content_type);

        match kind {
            Some(BodyKind::Json) => Json::<T>::from_request(req, state)
                .await
                .map(|Json(value)| JsonOrForm(value))
                .map_err(|err| body_rejection(err.status(), err.body_text())),
            Some(BodyKind::Form) => Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| JsonOrForm(value))
                .map_err(|err| body_rejection(err.status(), err.body_text())),
            None => Err(Reply::rejection(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected application/json or application/x-www-form-urlencoded",
            )),
        }
    }
}

fn body_rejection(status: StatusCode, detail: String) -> Reply {
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => Reply::rejection(status, detail),
        _ => Reply::rejection(StatusCode::BAD_REQUEST, detail),
    }
}
