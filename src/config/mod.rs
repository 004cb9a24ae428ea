//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and layering in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use app_audit::config::{resolve_config, ConfigOverrides};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "app_name: Foo.app\nprofile_prefix: com.example\n").unwrap();
//!
//! let overrides = ConfigOverrides {
//!     minimum_version: Some("2.0.0.0".to_string()),
//!     ..Default::default()
//! };
//! let loaded = resolve_config(Some(path.as_path()), &path, &overrides).unwrap();
//! assert_eq!(loaded.config.app_name, "Foo.app");
//! assert_eq!(loaded.config.minimum_version, "2.0.0.0");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    discover_config_path, load_config, load_config_file, parse_config, resolve_config,
    LoadedConfig, SYSTEM_CONFIG_PATH,
};
pub use schema::{AuditConfig, ConfigOverrides};
pub use validator::{validate, validate_config, ValidationError};
