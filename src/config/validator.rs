//! Configuration validation rules.
//!
//! - `app_name` and `profile_prefix` must be set
//! - `app_name` is a bare bundle name, not a path
//! - `max_depth` must be at least 1
//! - `profiles_command` must name a program
//!
//! `minimum_version` is checked by the auditor once the precondition gate is
//! open, so an unusable policy never overrides a deferral.

use crate::config::schema::AuditConfig;
use crate::error::{AuditError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Offending field
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &AuditConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.app_name.trim().is_empty() {
        errors.push(ValidationError {
            field: "app_name".to_string(),
            message: "app_name is required".to_string(),
        });
    } else if config.app_name.contains('/') {
        errors.push(ValidationError {
            field: "app_name".to_string(),
            message: format!(
                "app_name '{}' must be a bundle name, not a path",
                config.app_name
            ),
        });
    }

    if config.profile_prefix.trim().is_empty() {
        errors.push(ValidationError {
            field: "profile_prefix".to_string(),
            message: "profile_prefix is required".to_string(),
        });
    }

    if config.max_depth == 0 {
        errors.push(ValidationError {
            field: "max_depth".to_string(),
            message: "max_depth must be at least 1".to_string(),
        });
    }

    if config.version_key.trim().is_empty() {
        errors.push(ValidationError {
            field: "version_key".to_string(),
            message: "version_key must not be empty".to_string(),
        });
    }

    if config.profiles_command.is_empty() || config.profiles_command[0].trim().is_empty() {
        errors.push(ValidationError {
            field: "profiles_command".to_string(),
            message: "profiles_command must name a program".to_string(),
        });
    }

    errors
}

/// Validate a configuration, failing on the first batch of errors.
pub fn validate(config: &AuditConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(AuditError::ConfigValidationError { message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AuditConfig {
        AuditConfig {
            app_name: "Cloudflare WARP.app".to_string(),
            profile_prefix: "com.cloudflare.warp".to_string(),
            minimum_version: "1.5.207.0".to_string(),
            ..Default::default()
        }
    }

    fn fields(config: &AuditConfig) -> Vec<String> {
        validate_config(config)
            .into_iter()
            .map(|e| e.field)
            .collect()
    }

    #[test]
    fn valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn empty_minimum_version_is_valid() {
        let config = AuditConfig {
            minimum_version: String::new(),
            ..valid_config()
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn missing_app_name_fails() {
        let config = AuditConfig {
            app_name: String::new(),
            ..valid_config()
        };
        assert_eq!(fields(&config), vec!["app_name"]);
    }

    #[test]
    fn app_name_path_fails() {
        let config = AuditConfig {
            app_name: "/Applications/Foo.app".to_string(),
            ..valid_config()
        };
        assert_eq!(fields(&config), vec!["app_name"]);
    }

    #[test]
    fn missing_prefix_fails() {
        let config = AuditConfig {
            profile_prefix: " ".to_string(),
            ..valid_config()
        };
        assert_eq!(fields(&config), vec!["profile_prefix"]);
    }

    #[test]
    fn zero_depth_fails() {
        let config = AuditConfig {
            max_depth: 0,
            ..valid_config()
        };
        assert_eq!(fields(&config), vec!["max_depth"]);
    }

    #[test]
    fn empty_profiles_command_fails() {
        let config = AuditConfig {
            profiles_command: Vec::new(),
            ..valid_config()
        };
        assert_eq!(fields(&config), vec!["profiles_command"]);
    }

    #[test]
    fn non_numeric_minimum_version_is_left_to_the_audit() {
        let config = AuditConfig {
            minimum_version: "1.5.207.0b".to_string(),
            ..valid_config()
        };
        assert!(fields(&config).is_empty());
    }

    #[test]
    fn collects_all_errors() {
        let config = AuditConfig {
            app_name: String::new(),
            profile_prefix: String::new(),
            ..valid_config()
        };
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("app_name"));
        assert!(msg.contains("profile_prefix"));
    }
}
