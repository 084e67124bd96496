//! Configuration validation traits and utilities

use crate::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration
pub trait Validatable {
    /// Validate the configuration
    fn validate(&self) -> ConfigResult<()>;

    /// Get the domain name for error reporting
    fn domain_name(&self) -> &'static str;

    /// Helper to create a domain-specific validation error
    fn validation_error(&self, message: impl Into<String>) -> ConfigError {
        ConfigError::DomainError {
            domain: self.domain_name().to_string(),
            message: message.into(),
        }
    }
}

/// Validate a required string field
pub fn validate_required_string(value: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} cannot be empty", field_name),
        });
    }
    Ok(())
}

/// Validate a positive number
pub fn validate_positive<T>(value: T, field_name: &str, domain: &str) -> ConfigResult<()>
where
    T: PartialOrd + Default + std::fmt::Display,
{
    if value <= T::default() {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} must be greater than 0, got {}", field_name, value),
        });
    }
    Ok(())
}

/// Validate a literal URL mount path
///
/// Must start with `/` and cannot contain route captures or wildcards.
pub fn validate_mount_path(value: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    if !value.starts_with('/') {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} must start with '/', got '{}'", field_name, value),
        });
    }
    if value.contains(['{', '}', '*']) {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!(
                "{} must be a literal path without '{{', '}}' or '*', got '{}'",
                field_name, value
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert!(validate_required_string("public", "dir", "assets").is_ok());
        assert!(validate_required_string("", "dir", "assets").is_err());
        assert!(validate_required_string("   ", "dir", "assets").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(1usize, "limit", "body").is_ok());
        assert!(validate_positive(0usize, "limit", "body").is_err());

        let err = validate_positive(0u16, "port", "server").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Domain configuration error in server: port must be greater than 0, got 0"
        );
    }

    #[test]
    fn test_validate_mount_path() {
        for path in ["/", "/static", "/static/"] {
            assert!(validate_mount_path(path, "mount_path", "assets").is_ok());
        }
        for path in ["static", "/files/{*rest}", "/files/{id}", "/files/*"] {
            assert!(validate_mount_path(path, "mount_path", "assets").is_err());
        }
    }
}
