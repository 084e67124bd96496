use axum::{extract::DefaultBodyLimit, middleware, Router};
use reply_config::WebConfig;
use tracing::info;

use super::{
    assets::mount_public_dir, cors::cors_layer_with_config,
    request_log::request_logger_middleware,
};
use crate::errors::WebResult;

/// Cap request bodies read by the `Json`, `Form` and `JsonOrForm` extractors
pub fn body_limit_layer(limit_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(limit_bytes)
}

/// Apply the common middleware stack to a router
///
/// In order: static files from the public directory, the body size limit,
/// CORS, then the request logger as the outermost layer.
pub fn setup_basic_middlewares<S>(router: Router<S>, config: &WebConfig) -> WebResult<Router<S>>
where
    S: Clone + Send + Sync + 'static,
{
    let cors = cors_layer_with_config(&config.cors)?;

    let router = mount_public_dir(router, &config.assets)?
        .layer(body_limit_layer(config.body.limit_bytes))
        .layer(cors)
        .layer(middleware::from_fn(request_logger_middleware));

    info!(
        body_limit = config.body.limit_bytes,
        public_dir = %config.assets.public_path().display(),
        "Basic middlewares configured"
    );

    Ok(router)
}
