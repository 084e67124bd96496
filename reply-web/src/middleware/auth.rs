//! Role-based authorization guard

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

/// Identity of the caller, inserted into request extensions by the host's
/// authentication layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// User ID
    pub user_id: String,
    /// User role
    pub role: String,
}

impl AuthContext {
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

/// Role a route requires, used as middleware state
#[derive(Debug, Clone)]
pub struct RequiredRole(Arc<str>);

impl RequiredRole {
    pub fn new(role: impl AsRef<str>) -> Self {
        Self(Arc::from(role.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Check the caller against a required role
///
/// A missing context counts as a mismatch.
pub fn authorize(context: Option<&AuthContext>, required: &str) -> Result<(), Response> {
    match context {
        Some(context) if context.has_role(required) => {
            debug!(user_id = %context.user_id, role = %required, "Role check passed");
            Ok(())
        }
        Some(context) => {
            warn!(
                user_id = %context.user_id,
                role = %context.role,
                required = %required,
                "Role check failed"
            );
            Err(forbidden())
        }
        None => {
            warn!(required = %required, "Role check failed: no auth context");
            Err(forbidden())
        }
    }
}

/// 403 with `{"message":"Unauthorized"}`
pub fn forbidden() -> Response {
    let body = Json(json!({ "message": "Unauthorized" }));
    (StatusCode::FORBIDDEN, body).into_response()
}

/// Role guard middleware
///
/// ```rust,no_run
/// use axum::{middleware, routing::get, Router};
/// use reply_web::middleware::{role_guard, RequiredRole};
///
/// let admin: Router = Router::new()
///     .route("/admin", get(|| async { "ok" }))
///     .route_layer(middleware::from_fn_with_state(RequiredRole::new("admin"), role_guard));
/// ```
pub async fn role_guard(
    State(required): State<RequiredRole>,
    request: Request,
    next: Next,
) -> Response {
    match authorize(request.extensions().get::<AuthContext>(), required.as_str()) {
        Ok(()) => next.run(request).await,
        Err(response) => response,
    }
}
