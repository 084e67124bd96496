//! Static file serving

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use reply_config::{AssetsConfig, Validatable};
use std::path::{Component, Path, PathBuf};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::debug;

use crate::errors::{WebError, WebResult};
use crate::response::Reply;

/// Service serving the configured public directory
pub fn public_dir_service(config: &AssetsConfig) -> ServeDir {
    ServeDir::new(config.public_path())
}

/// Mount the public directory on the router
///
/// A `/` mount path serves files for every request no route matched. The
/// configuration is validated first, so route patterns in the mount path
/// are reported as errors.
pub fn mount_public_dir<S>(router: Router<S>, config: &AssetsConfig) -> WebResult<Router<S>>
where
    S: Clone + Send + Sync + 'static,
{
    config
        .validate()
        .map_err(|e| WebError::invalid_argument("assets", e.to_string()))?;

    let service = public_dir_service(config);
    debug!(
        dir = %config.public_path().display(),
        mount = %config.mount_path,
        "Serving static files"
    );

    let router = if config.mount_path == "/" {
        router.fallback_service(service)
    } else {
        router.nest_service(&config.mount_path, service)
    };
    Ok(router)
}

/// Serve a single file from below `base`
///
/// Paths that would leave `base` are answered with a `400` envelope and
/// missing files with a `404` envelope.
pub async fn send_file(base: impl AsRef<Path>, relative: &str) -> Response {
    let Some(path) = confine(base.as_ref(), relative) else {
        return Reply::rejection(
            StatusCode::BAD_REQUEST,
            format!("Path '{}' is outside the served directory", relative),
        )
        .into_response();
    };

    let response = ServeFile::new(&path)
        .oneshot(Request::new(Body::empty()))
        .await
        .unwrap_or_else(|never| match never {});

    if response.status() == StatusCode::NOT_FOUND {
        return Reply::rejection(
            StatusCode::NOT_FOUND,
            format!("File '{}' does not exist", relative),
        )
        .into_response();
    }

    response.map(Body::new)
}

/// Join `relative` onto `base`, refusing anything but plain descending segments
fn confine(base: &Path, relative: &str) -> Option<PathBuf> {
    let relative = relative.trim_start_matches('/');
    if relative.is_empty() {
        return None;
    }

    let mut path = base.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(segment) => path.push(segment),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confine_accepts_descending_paths() {
        let base = Path::new("/srv/files");
        assert_eq!(
            confine(base, "/files/example.pdf"),
            Some(PathBuf::from("/srv/files/files/example.pdf"))
        );
        assert_eq!(
            confine(base, "./a.txt"),
            Some(PathBuf::from("/srv/files/a.txt"))
        );
    }

    #[test]
    fn test_mount_rejects_route_patterns() {
        let config = AssetsConfig {
            mount_path: "/files/{*rest}".to_string(),
            ..Default::default()
        };
        let err = mount_public_dir(Router::<()>::new(), &config).unwrap_err();
        assert_eq!(err.argument(), "assets");
    }

    #[test]
    fn test_mount_accepts_literal_paths() {
        for mount_path in ["/", "/static", "/static/"] {
            let config = AssetsConfig {
                mount_path: mount_path.to_string(),
                ..Default::default()
            };
            assert!(mount_public_dir(Router::<()>::new(), &config).is_ok());
        }
    }

    #[test]
    fn test_confine_rejects_escapes() {
        let base = Path::new("/srv/files");
        assert_eq!(confine(base, "../etc/passwd"), None);
        assert_eq!(confine(base, "docs/../../secret"), None);
        assert_eq!(confine(base, ""), None);
        assert_eq!(confine(base, "/"), None);
    }
}
