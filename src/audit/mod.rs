//! Audit sequencing: precondition gate, bundle presence, version policy.
//!
//! # Modules
//!
//! - [`state`] - Audit states and transitions
//! - [`verdict`] - Terminal verdicts and exit codes
//! - [`auditor`] - The sequencer driving states to a verdict
//!
//! # Example
//!
//! ```
//! use app_audit::audit::{Auditor, Verdict};
//! use app_audit::config::AuditConfig;
//! use app_audit::detection::InfoPlist;
//! use app_audit::profiles::StaticProfiles;
//!
//! let config = AuditConfig {
//!     app_name: "Cloudflare WARP.app".to_string(),
//!     profile_prefix: "com.cloudflare.warp".to_string(),
//!     ..Default::default()
//! };
//! // No profile deployed yet: the audit defers.
//! let inventory = StaticProfiles::default();
//! let report = Auditor::new(&config, &inventory, &InfoPlist::default()).run();
//! assert_eq!(report.verdict, Verdict::Defer);
//! assert_eq!(report.exit_code(), 0);
//! ```

pub mod auditor;
pub mod state;
pub mod verdict;

pub use auditor::{AuditReport, Auditor};
pub use state::{AuditState, MissingReason};
pub use verdict::Verdict;
