//! Configuration schema.
//!
//! [`AuditConfig`] is built once at process start and then passed by
//! reference to every audit stage. Fields missing from the YAML file take
//! their defaults; [`ConfigOverrides`] from the environment and command line
//! are applied on top.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::version::ComparisonMode;

/// Default directory searched for application bundles.
pub const DEFAULT_SEARCH_ROOT: &str = "/Applications";

/// Default number of directory levels searched below the root.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Default bundle metadata key holding the marketing version.
pub const DEFAULT_VERSION_KEY: &str = "CFBundleShortVersionString";

/// Default command listing deployed configuration profiles.
pub const DEFAULT_PROFILES_COMMAND: &[&str] = &["/usr/bin/profiles", "-C", "-v"];

/// Resolved audit configuration.
///
/// # Example
///
/// ```
/// use app_audit::config::AuditConfig;
///
/// let yaml = r#"
/// app_name: Cloudflare WARP.app
/// profile_prefix: com.cloudflare.warp
/// minimum_version: 1.5.207.0
/// "#;
/// let config: AuditConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.max_depth, 3);
/// assert!(config.has_minimum_version());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Exact bundle name to search for, e.g. `Cloudflare WARP.app`.
    pub app_name: String,

    /// Minimum acceptable version; empty disables enforcement.
    pub minimum_version: String,

    /// Identifier prefix of the profile that gates the audit.
    pub profile_prefix: String,

    /// Directory searched for the bundle.
    pub search_root: PathBuf,

    /// Directory levels searched below `search_root`.
    pub max_depth: usize,

    /// Metadata key holding the installed version.
    pub version_key: String,

    /// Command (argv) that lists deployed profiles.
    pub profiles_command: Vec<String>,

    /// How versions are ordered.
    pub comparison: ComparisonMode,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            minimum_version: String::new(),
            profile_prefix: String::new(),
            search_root: PathBuf::from(DEFAULT_SEARCH_ROOT),
            max_depth: DEFAULT_MAX_DEPTH,
            version_key: DEFAULT_VERSION_KEY.to_string(),
            profiles_command: DEFAULT_PROFILES_COMMAND
                .iter()
                .map(|s| s.to_string())
                .collect(),
            comparison: ComparisonMode::default(),
        }
    }
}

impl AuditConfig {
    /// Whether a minimum version is enforced.
    pub fn has_minimum_version(&self) -> bool {
        !self.minimum_version.trim().is_empty()
    }

    /// Apply overrides; set values replace the current ones.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = &overrides.app_name {
            self.app_name = v.clone();
        }
        if let Some(v) = &overrides.minimum_version {
            self.minimum_version = v.clone();
        }
        if let Some(v) = &overrides.profile_prefix {
            self.profile_prefix = v.clone();
        }
        if let Some(v) = &overrides.search_root {
            self.search_root = v.clone();
        }
        if let Some(v) = overrides.max_depth {
            self.max_depth = v;
        }
        if let Some(v) = &overrides.version_key {
            self.version_key = v.clone();
        }
        if let Some(v) = &overrides.profiles_command {
            self.profiles_command = v.clone();
        }
        if let Some(v) = overrides.comparison {
            self.comparison = v;
        }
    }
}

/// Values supplied by environment variables or command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub app_name: Option<String>,
    pub minimum_version: Option<String>,
    pub profile_prefix: Option<String>,
    pub search_root: Option<PathBuf>,
    pub max_depth: Option<usize>,
    pub version_key: Option<String>,
    pub profiles_command: Option<Vec<String>>,
    pub comparison: Option<ComparisonMode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_platform_layout() {
        let config = AuditConfig::default();
        assert_eq!(config.search_root, PathBuf::from("/Applications"));
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.version_key, "CFBundleShortVersionString");
        assert_eq!(config.profiles_command, vec!["/usr/bin/profiles", "-C", "-v"]);
        assert_eq!(config.comparison, ComparisonMode::Concatenated);
        assert!(!config.has_minimum_version());
    }

    #[test]
    fn parses_full_yaml() {
        let yaml = r#"
app_name: Cloudflare WARP.app
minimum_version: "1.5.207.0"
profile_prefix: com.cloudflare.warp
search_root: /opt/apps
max_depth: 2
version_key: CFBundleVersion
profiles_command: [/usr/local/bin/list-profiles, --all]
comparison: components
"#;
        let config: AuditConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.app_name, "Cloudflare WARP.app");
        assert_eq!(config.minimum_version, "1.5.207.0");
        assert_eq!(config.search_root, PathBuf::from("/opt/apps"));
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.version_key, "CFBundleVersion");
        assert_eq!(config.profiles_command.len(), 2);
        assert_eq!(config.comparison, ComparisonMode::Components);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: AuditConfig = serde_yaml::from_str("app_name: Foo.app").unwrap();
        assert_eq!(config.app_name, "Foo.app");
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<AuditConfig, _> = serde_yaml::from_str("app: Foo.app");
        assert!(result.is_err());
    }

    #[test]
    fn whitespace_minimum_version_is_not_enforced() {
        let config = AuditConfig {
            minimum_version: "  ".to_string(),
            ..Default::default()
        };
        assert!(!config.has_minimum_version());
    }

    #[test]
    fn apply_replaces_only_set_values() {
        let mut config = AuditConfig {
            app_name: "Old.app".to_string(),
            profile_prefix: "com.example".to_string(),
            ..Default::default()
        };
        let overrides = ConfigOverrides {
            app_name: Some("New.app".to_string()),
            max_depth: Some(5),
            ..Default::default()
        };

        config.apply(&overrides);

        assert_eq!(config.app_name, "New.app");
        assert_eq!(config.profile_prefix, "com.example");
        assert_eq!(config.max_depth, 5);
    }

    #[test]
    fn apply_can_clear_minimum_version() {
        let mut config = AuditConfig {
            minimum_version: "1.0".to_string(),
            ..Default::default()
        };
        config.apply(&ConfigOverrides {
            minimum_version: Some(String::new()),
            ..Default::default()
        });
        assert!(!config.has_minimum_version());
    }
}
