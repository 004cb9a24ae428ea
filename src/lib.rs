//! app-audit - Endpoint application presence and minimum-version audit.
//!
//! A device-management agent runs `app-audit` on a schedule. Each run checks
//! that the gating configuration profile has been deployed, searches for an
//! application bundle, and compares its version against a minimum. The
//! verdict is reported through the exit code: `0` when nothing needs to be
//! done, `1` when the installer should run.
//!
//! # Modules
//!
//! - [`audit`] - State machine sequencing the audit to a verdict
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, layering, and validation
//! - [`detection`] - Bundle search and metadata reading
//! - [`error`] - Error types and result aliases
//! - [`profiles`] - Deployed profile inventory and precondition gate
//! - [`ui`] - Command output
//! - [`version`] - Version normalization and comparison policy
//!
//! # Example
//!
//! ```
//! use app_audit::version::{evaluate, ComparisonMode, Evaluation};
//!
//! let result = evaluate("1.4.0.0", "1.5.207.0", ComparisonMode::Concatenated).unwrap();
//! assert_eq!(result, Evaluation::NotMet);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod profiles;
pub mod ui;
pub mod version;

pub use error::{AuditError, Result};
