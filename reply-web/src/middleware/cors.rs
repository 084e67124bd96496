use axum::http::{HeaderName, HeaderValue, Method};
use reply_config::{CorsConfig, Validatable};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::errors::{WebError, WebResult};

/// Create CORS layer with the default permissive configuration
pub fn cors_layer() -> CorsLayer {
    tracing::warn!("CORS configured to allow any origin");
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
}

/// Create CORS layer from the `cors` configuration domain
///
/// Invalid configurations and unparsable origins, methods or headers are
/// rejected instead of being silently dropped.
pub fn cors_layer_with_config(config: &CorsConfig) -> WebResult<CorsLayer> {
    config
        .validate()
        .map_err(|e| WebError::invalid_argument("cors", e.to_string()))?;

    let mut cors = CorsLayer::new();

    if config.allows_any_origin() {
        tracing::warn!("CORS configured to allow any origin");
        cors = cors.allow_origin(AllowOrigin::any());
    } else {
        let origins = parse_all::<HeaderValue>(&config.allowed_origins, "origin")?;
        cors = cors.allow_origin(origins);
    }

    cors = cors
        .allow_methods(parse_all::<Method>(&config.allowed_methods, "method")?)
        .allow_headers(parse_all::<HeaderName>(&config.allowed_headers, "header")?)
        .expose_headers(parse_all::<HeaderName>(&config.expose_headers, "exposed header")?)
        .max_age(config.max_age);

    if config.allow_credentials {
        cors = cors.allow_credentials(true);
    }

    Ok(cors)
}

fn parse_all<T>(values: &[String], what: &str) -> WebResult<Vec<T>>
where
    T: std::str::FromStr,
{
    values
        .iter()
        .map(|value| {
            value.parse::<T>().map_err(|_| {
                WebError::invalid_argument("cors", format!("invalid {} '{}'", what, value))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds() {
        assert!(cors_layer_with_config(&CorsConfig::default()).is_ok());
    }

    #[test]
    fn test_explicit_origins_build() {
        let config = CorsConfig::with_origins(vec!["https://app.example.com".to_string()]);
        assert!(cors_layer_with_config(&config).is_ok());
    }

    #[test]
    fn test_wildcard_with_credentials_is_rejected() {
        let config = CorsConfig {
            allow_credentials: true,
            ..Default::default()
        };
        assert!(cors_layer_with_config(&config).is_err());
    }

    #[test]
    fn test_bad_header_is_rejected() {
        let config = CorsConfig {
            allowed_headers: vec!["not a header".to_string()],
            ..Default::default()
        };
        let err = cors_layer_with_config(&config).unwrap_err();
        assert_eq!(err.argument(), "cors");
    }
}
