//! Bundle metadata reading.
//!
//! Application bundles describe themselves in `Contents/Info.plist`. Most
//! ship XML property lists; binary ones are converted to XML with `plutil`
//! before the key is looked up.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use regex::Regex;

use crate::error::{AuditError, Result};
use crate::version;

/// Magic prefix of a binary property list.
const BINARY_PLIST_MAGIC: &[u8] = b"bplist";

/// Reads string values from an application bundle's metadata.
pub trait BundleMetadata {
    /// Read the value of `key` for the bundle at `bundle`.
    fn read_value(&self, bundle: &Path, key: &str) -> Result<String>;
}

/// Reads values from the bundle's `Info.plist`.
#[derive(Debug, Clone)]
pub struct InfoPlist {
    plutil: PathBuf,
}

impl Default for InfoPlist {
    fn default() -> Self {
        Self {
            plutil: PathBuf::from("/usr/bin/plutil"),
        }
    }
}

impl InfoPlist {
    /// Create a reader that uses the given `plutil` for binary plists.
    pub fn with_plutil(plutil: impl Into<PathBuf>) -> Self {
        Self {
            plutil: plutil.into(),
        }
    }

    /// Locate the property list inside a bundle.
    pub fn plist_path(bundle: &Path) -> PathBuf {
        let contents = bundle.join("Contents").join("Info.plist");
        if contents.is_file() {
            return contents;
        }
        let flat = bundle.join("Info.plist");
        if flat.is_file() {
            flat
        } else {
            contents
        }
    }

    fn load_xml(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| AuditError::MetadataUnreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if !bytes.starts_with(BINARY_PLIST_MAGIC) {
            return Ok(String::from_utf8_lossy(&bytes).into_owned());
        }

        tracing::debug!("Converting binary plist {}", path.display());
        let output = Command::new(&self.plutil)
            .args(["-convert", "xml1", "-o", "-"])
            .arg(path)
            .output()
            .map_err(|e| AuditError::MetadataUnreadable {
                path: path.to_path_buf(),
                message: format!("cannot run {}: {}", self.plutil.display(), e),
            })?;

        if !output.status.success() {
            return Err(AuditError::MetadataUnreadable {
                path: path.to_path_buf(),
                message: format!(
                    "{} exited with code {:?}",
                    self.plutil.display(),
                    output.status.code()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl BundleMetadata for InfoPlist {
    fn read_value(&self, bundle: &Path, key: &str) -> Result<String> {
        let path = Self::plist_path(bundle);
        let xml = self.load_xml(&path)?;

        plist_string_value(&xml, key)?.ok_or_else(|| AuditError::MetadataUnreadable {
            path,
            message: format!("key {} not present", key),
        })
    }
}

/// Find the `<string>` value that follows `<key>{key}</key>` in an XML plist.
pub fn plist_string_value(xml: &str, key: &str) -> Result<Option<String>> {
    let pattern = format!(
        r"<key>\s*{}\s*</key>\s*<string>([^<]*)</string>",
        regex::escape(key)
    );
    let re = Regex::new(&pattern).map_err(|e| AuditError::Other(e.into()))?;

    Ok(re
        .captures(xml)
        .and_then(|caps| caps.get(1))
        .map(|m| unescape_xml(m.as_str().trim())))
}

fn unescape_xml(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Read a bundle's version string and normalize its separators.
///
/// An empty value is reported as unreadable.
pub fn extract_version(metadata: &dyn BundleMetadata, bundle: &Path, key: &str) -> Result<String> {
    let raw = metadata.read_value(bundle, key)?;
    let normalized = version::normalize(&raw);
    if normalized.is_empty() {
        return Err(AuditError::MetadataUnreadable {
            path: bundle.to_path_buf(),
            message: format!("key {} is empty", key),
        });
    }
    tracing::debug!("Raw version '{}' normalized to '{}'", raw, normalized);
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KEY: &str = "CFBundleShortVersionString";

    fn info_plist(version: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>CFBundleIdentifier</key>
	<string>com.cloudflare.1dot1dot1dot1.macos</string>
	<key>CFBundleShortVersionString</key>
	<string>{}</string>
	<key>CFBundleVersion</key>
	<string>20240115.1</string>
</dict>
</plist>
"#,
            version
        )
    }

    fn make_bundle(version: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let contents = temp.path().join("Contents");
        fs::create_dir_all(&contents).unwrap();
        fs::write(contents.join("Info.plist"), info_plist(version)).unwrap();
        temp
    }

    #[test]
    fn reads_short_version_string() {
        let value = plist_string_value(&info_plist("1.5.207.0"), KEY).unwrap();
        assert_eq!(value.as_deref(), Some("1.5.207.0"));
    }

    #[test]
    fn reads_requested_key_only() {
        let value = plist_string_value(&info_plist("1.5.207.0"), "CFBundleVersion").unwrap();
        assert_eq!(value.as_deref(), Some("20240115.1"));
    }

    #[test]
    fn missing_key_is_none() {
        let value = plist_string_value(&info_plist("1.0"), "CFBundleExecutable").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn unescapes_entities() {
        let xml = "<key>Name</key><string>A &amp; B</string>";
        let value = plist_string_value(xml, "Name").unwrap();
        assert_eq!(value.as_deref(), Some("A & B"));
    }

    #[test]
    fn info_plist_reads_from_bundle() {
        let bundle = make_bundle("2024.1.15-3");
        let value = InfoPlist::default().read_value(bundle.path(), KEY).unwrap();
        assert_eq!(value, "2024.1.15-3");
    }

    #[test]
    fn info_plist_falls_back_to_flat_layout() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Info.plist"), info_plist("3.0")).unwrap();
        let value = InfoPlist::default().read_value(temp.path(), KEY).unwrap();
        assert_eq!(value, "3.0");
    }

    #[test]
    fn missing_plist_is_unreadable() {
        let temp = TempDir::new().unwrap();
        let err = InfoPlist::default().read_value(temp.path(), KEY).unwrap_err();
        assert!(matches!(err, AuditError::MetadataUnreadable { .. }));
    }

    #[test]
    fn binary_plist_without_plutil_is_unreadable() {
        let temp = TempDir::new().unwrap();
        let contents = temp.path().join("Contents");
        fs::create_dir_all(&contents).unwrap();
        fs::write(contents.join("Info.plist"), b"bplist00\x00\x01").unwrap();

        let reader = InfoPlist::with_plutil(temp.path().join("no-plutil"));
        let err = reader.read_value(temp.path(), KEY).unwrap_err();
        assert!(matches!(err, AuditError::MetadataUnreadable { .. }));
    }

    #[test]
    fn extract_version_normalizes_hyphens() {
        let bundle = make_bundle("1.5.207-1");
        let version = extract_version(&InfoPlist::default(), bundle.path(), KEY).unwrap();
        assert_eq!(version, "1.5.207.1");
    }

    #[test]
    fn extract_version_rejects_empty_value() {
        let bundle = make_bundle("  ");
        let err = extract_version(&InfoPlist::default(), bundle.path(), KEY).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    struct FixedMetadata(&'static str);

    impl BundleMetadata for FixedMetadata {
        fn read_value(&self, _bundle: &Path, _key: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn extract_version_reports_bundle_for_any_reader() {
        let bundle = Path::new("/Applications/Foo.app");
        let err = extract_version(&FixedMetadata(""), bundle, KEY).unwrap_err();
        match err {
            AuditError::MetadataUnreadable { path, .. } => assert_eq!(path, bundle.to_path_buf()),
            other => panic!("Expected unreadable metadata, got {:?}", other),
        }
    }

    #[test]
    fn extract_version_accepts_custom_reader() {
        let version = extract_version(&FixedMetadata("2024-1-15"), Path::new("Foo.app"), KEY).unwrap();
        assert_eq!(version, "2024.1.15");
    }
}
