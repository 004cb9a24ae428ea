//! Version normalization and the minimum-version comparison policy.
//!
//! Installed and policy versions are four-component dotted strings such as
//! `1.5.207.0`. Some vendors use hyphens as an alternate separator, so every
//! hyphen is first rewritten to a dot.
//!
//! The default policy, [`ComparisonMode::Concatenated`], then strips every dot
//! and compares the remaining digits as one integer: `1.5.207.0` becomes
//! `152070`. Component boundaries are lost, so versions with a different
//! component count or digit width can mis-order (`1.2.0` → `120` sorts below
//! `1.1.99` → `1199`). Deployed policies depend on this ordering, so it is
//! the default. [`ComparisonMode::Components`] compares dotted components
//! one by one instead.
//!
//! # Example
//!
//! ```
//! use app_audit::version::{evaluate, ComparisonMode, Evaluation};
//!
//! let result = evaluate("1.5.207-1", "1.5.207.0", ComparisonMode::Concatenated).unwrap();
//! assert_eq!(result, Evaluation::Met);
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};

/// How installed and minimum versions are ordered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// Strip all separators and compare the digits as a single integer.
    #[default]
    Concatenated,
    /// Compare dot-separated components numerically, left to right.
    Components,
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonMode::Concatenated => write!(f, "concatenated"),
            ComparisonMode::Components => write!(f, "components"),
        }
    }
}

/// Outcome of comparing an installed version against a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Installed version is at or above the minimum.
    Met,
    /// Installed version is below the minimum.
    NotMet,
}

/// Rewrite hyphen separators to dots.
pub fn normalize(raw: &str) -> String {
    raw.trim().replace('-', ".")
}

/// A digit-only key derived from a version string.
///
/// Ordering is numeric over arbitrarily long digit strings, so keys never
/// overflow a machine integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionKey {
    digits: String,
}

impl VersionKey {
    /// Build the comparable key for a version string.
    ///
    /// Hyphens become dots, then every dot is removed. The remainder must be
    /// a non-empty run of ASCII digits.
    pub fn parse(version: &str) -> Result<Self> {
        let stripped = normalize(version).replace('.', "");
        Self::from_digits(version, &stripped)
    }

    fn from_digits(original: &str, digits: &str) -> Result<Self> {
        if digits.is_empty() {
            return Err(AuditError::InvalidVersion {
                value: original.to_string(),
                message: "no digits".to_string(),
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AuditError::InvalidVersion {
                value: original.to_string(),
                message: "contains non-digit characters".to_string(),
            });
        }

        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Ok(Self {
            digits: digits.to_string(),
        })
    }

    /// The canonical digit string, without leading zeros.
    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Split a version into per-component keys.
fn component_keys(version: &str) -> Result<Vec<VersionKey>> {
    normalize(version)
        .split('.')
        .map(|part| VersionKey::from_digits(version, part))
        .collect()
}

/// Check that a version string is usable under the given mode.
pub fn validate(version: &str, mode: ComparisonMode) -> Result<()> {
    match mode {
        ComparisonMode::Concatenated => VersionKey::parse(version).map(|_| ()),
        ComparisonMode::Components => component_keys(version).map(|_| ()),
    }
}

/// Order two versions under the given mode.
pub fn compare(installed: &str, minimum: &str, mode: ComparisonMode) -> Result<Ordering> {
    match mode {
        ComparisonMode::Concatenated => {
            let installed = VersionKey::parse(installed)?;
            let minimum = VersionKey::parse(minimum)?;
            Ok(installed.cmp(&minimum))
        }
        ComparisonMode::Components => {
            let installed = component_keys(installed)?;
            let minimum = component_keys(minimum)?;
            let zero = VersionKey {
                digits: "0".to_string(),
            };
            let len = installed.len().max(minimum.len());
            for i in 0..len {
                let a = installed.get(i).unwrap_or(&zero);
                let b = minimum.get(i).unwrap_or(&zero);
                match a.cmp(b) {
                    Ordering::Equal => continue,
                    other => return Ok(other),
                }
            }
            Ok(Ordering::Equal)
        }
    }
}

/// Decide whether `installed` satisfies `minimum`.
pub fn evaluate(installed: &str, minimum: &str, mode: ComparisonMode) -> Result<Evaluation> {
    let ordering = compare(installed, minimum, mode)?;
    if ordering == Ordering::Less {
        Ok(Evaluation::NotMet)
    } else {
        Ok(Evaluation::Met)
    }
}
