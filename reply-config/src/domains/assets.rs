//! Static file and view template locations

use crate::error::ConfigResult;
use crate::validation::{validate_mount_path, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Static assets and view engine configuration
///
/// Relative directories are resolved against `root`, which defaults to the
/// process working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Base directory the other paths are resolved against
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directory served as static files
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// URL prefix the public directory is mounted under
    #[serde(default = "default_mount_path")]
    pub mount_path: String,

    /// Directory holding view templates
    #[serde(default = "default_views_dir")]
    pub views_dir: String,

    /// File extension of view templates, without the dot
    #[serde(default = "default_view_extension")]
    pub view_extension: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            public_dir: default_public_dir(),
            mount_path: default_mount_path(),
            views_dir: default_views_dir(),
            view_extension: default_view_extension(),
        }
    }
}

impl AssetsConfig {
    /// Absolute-or-root-relative public directory
    pub fn public_path(&self) -> PathBuf {
        resolve(&self.root, &self.public_dir)
    }

    /// Absolute-or-root-relative views directory
    pub fn views_path(&self) -> PathBuf {
        resolve(&self.root, &self.views_dir)
    }
}

fn resolve(root: &Path, dir: &str) -> PathBuf {
    let dir = Path::new(dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        root.join(dir)
    }
}

impl Validatable for AssetsConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.public_dir, "public_dir", self.domain_name())?;
        validate_mount_path(&self.mount_path, "mount_path", self.domain_name())?;
        validate_required_string(&self.views_dir, "views_dir", self.domain_name())?;
        validate_required_string(&self.view_extension, "view_extension", self.domain_name())?;

        if self.view_extension.starts_with('.') {
            return Err(self.validation_error("view_extension must not start with '.'"));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "assets"
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_public_dir() -> String {
    "public".to_string()
}

fn default_mount_path() -> String {
    "/".to_string()
}

fn default_views_dir() -> String {
    "views".to_string()
}

fn default_view_extension() -> String {
    "hbs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_against_root() {
        let config = AssetsConfig {
            root: PathBuf::from("/srv/app"),
            ..Default::default()
        };
        assert_eq!(config.public_path(), PathBuf::from("/srv/app/public"));
        assert_eq!(config.views_path(), PathBuf::from("/srv/app/views"));
    }

    #[test]
    fn test_absolute_dirs_ignore_root() {
        let config = AssetsConfig {
            root: PathBuf::from("/srv/app"),
            public_dir: "/var/www".to_string(),
            ..Default::default()
        };
        assert_eq!(config.public_path(), PathBuf::from("/var/www"));
    }

    #[test]
    fn test_validation() {
        assert!(AssetsConfig::default().validate().is_ok());

        let dotted = AssetsConfig {
            view_extension: ".hbs".to_string(),
            ..Default::default()
        };
        assert!(dotted.validate().is_err());

        let bad_mount = AssetsConfig {
            mount_path: "static".to_string(),
            ..Default::default()
        };
        assert!(bad_mount.validate().is_err());
    }
}
