//! Server-side view rendering with Handlebars

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use handlebars::Handlebars;
use reply_config::AssetsConfig;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

use crate::response::Reply;

/// View engine errors
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Failed to read views from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid template '{name}': {message}")]
    Template { name: String, message: String },

    #[error("View '{0}' not found")]
    NotFound(String),

    #[error("Failed to render view '{name}': {message}")]
    Render { name: String, message: String },
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        match &self {
            ViewError::NotFound(name) => {
                Reply::rejection(StatusCode::NOT_FOUND, format!("View '{}' not found", name))
                    .into_response()
            }
            _ => {
                error!("View rendering failed: {}", self);
                Reply::internal_error("Failed to render view")
                    .into_response()
            }
        }
    }
}

/// Handlebars engine loaded from a views directory
///
/// Templates are registered by their path relative to the directory with
/// the extension stripped, so `views/users/show.hbs` renders as
/// `users/show`. Strict mode turns missing variables into render errors.
#[derive(Debug, Clone)]
pub struct ViewEngine {
    handlebars: Handlebars<'static>,
    views_dir: PathBuf,
    extension: String,
}

impl ViewEngine {
    /// Empty engine rooted at `views_dir`; call [`ViewEngine::load`] to register templates
    pub fn new(views_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);

        Self {
            handlebars,
            views_dir: views_dir.into(),
            extension: extension.into(),
        }
    }

    /// Engine for the `assets` configuration domain, with templates loaded
    pub fn from_config(config: &AssetsConfig) -> Result<Self, ViewError> {
        let mut engine = Self::new(config.views_path(), config.view_extension.clone());
        engine.load()?;
        Ok(engine)
    }

    /// Register every template below the views directory
    pub fn load(&mut self) -> Result<usize, ViewError> {
        let root = self.views_dir.clone();
        let count = self.load_dir(&root, &root)?;
        debug!(dir = %root.display(), count, "Loaded view templates");
        Ok(count)
    }

    fn load_dir(&mut self, root: &Path, dir: &Path) -> Result<usize, ViewError> {
        let io_error = |source| ViewError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut count = 0;
        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();

            if path.is_dir() {
                count += self.load_dir(root, &path)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(self.extension.as_str()) {
                continue;
            }

            let Some(name) = template_name(root, &path) else {
                continue;
            };
            let source = std::fs::read_to_string(&path).map_err(|source| ViewError::Io {
                path: path.clone(),
                source,
            })?;
            self.register(&name, &source)?;
            count += 1;
        }
        Ok(count)
    }

    /// Register a template from a string
    pub fn register(&mut self, name: &str, source: &str) -> Result<(), ViewError> {
        self.handlebars
            .register_template_string(name, source)
            .map_err(|e| ViewError::Template {
                name: name.to_string(),
                message: e.to_string(),
            })
    }

    pub fn has_view(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a registered view
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<Html<String>, ViewError> {
        if !self.has_view(name) {
            return Err(ViewError::NotFound(name.to_string()));
        }

        self.handlebars
            .render(name, context)
            .map(Html)
            .map_err(|e| ViewError::Render {
                name: name.to_string(),
                message: e.to_string(),
            })
    }
}

/// `users/show` for `<root>/users/show.hbs`
fn template_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let segments: Vec<&str> = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn views_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("users")).unwrap();
        for (name, contents) in [
            ("index.hbs", "<h1>{{title}}</h1>"),
            ("users/show.hbs", "<p>{{user.name}}</p>"),
            ("notes.txt", "not a template"),
        ] {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_registers_nested_templates() {
        let dir = views_dir();
        let mut engine = ViewEngine::new(dir.path(), "hbs");

        assert_eq!(engine.load().unwrap(), 2);
        assert!(engine.has_view("index"));
        assert!(engine.has_view("users/show"));
        assert!(!engine.has_view("notes"));
    }

    #[test]
    fn test_render() {
        let dir = views_dir();
        let mut engine = ViewEngine::new(dir.path(), "hbs");
        engine.load().unwrap();

        let context = json!({"user": {"name": "Ada"}});
        let Html(page) = engine.render("users/show", &context).unwrap();
        assert_eq!(page, "<p>Ada</p>");
    }

    #[test]
    fn test_missing_variable_is_render_error() {
        let dir = views_dir();
        let mut engine = ViewEngine::new(dir.path(), "hbs");
        engine.load().unwrap();

        let result = engine.render("index", &json!({}));
        assert!(matches!(result, Err(ViewError::Render { .. })));
    }

    #[test]
    fn test_unknown_view() {
        let engine = ViewEngine::new("/nowhere", "hbs");
        let err = engine.render("index", &json!({})).unwrap_err();

        assert!(matches!(err, ViewError::NotFound(_)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let mut engine = ViewEngine::new("/definitely/not/here", "hbs");
        assert!(matches!(engine.load(), Err(ViewError::Io { .. })));
    }

    #[test]
    fn test_invalid_template_is_rejected() {
        let mut engine = ViewEngine::new("/nowhere", "hbs");
        let result = engine.register("broken", "{{#if}}");
        assert!(matches!(result, Err(ViewError::Template { .. })));
    }

    #[test]
    fn test_from_config() {
        let dir = views_dir();
        let config = AssetsConfig {
            root: dir.path().to_path_buf(),
            views_dir: ".".to_string(),
            ..Default::default()
        };

        let engine = ViewEngine::from_config(&config).unwrap();
        assert!(engine.has_view("index"));
    }
}
