//! Audit states.
//!
//! ```text
//! Start ─gate─▶ Deferred
//!   │
//!   └──────▶ GateOpen ─locate─▶ AppMissing
//!                │
//!                └──────▶ AppFound ─▶ NoPolicy | PolicyInvalid
//!                                      | VersionMet | VersionNotMet | VersionUnreadable
//! ```

use std::path::PathBuf;

use super::verdict::Verdict;

/// Why the application counts as not installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingReason {
    /// The search completed without a valid match.
    NotFound,
    /// The search reported an I/O failure.
    SearchFailed(String),
}

/// A point in the audit sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditState {
    /// Nothing checked yet.
    Start,
    /// The gating profile is deployed; the bundle search is next.
    GateOpen,
    /// The gating profile is absent. Terminal.
    Deferred,
    /// The bundle search found nothing usable. Terminal.
    AppMissing { reason: MissingReason },
    /// The bundle exists; the version policy is next.
    AppFound { bundle: PathBuf },
    /// The bundle exists and no minimum version is configured. Terminal.
    NoPolicy { bundle: PathBuf },
    /// The configured minimum version cannot be compared. Terminal.
    PolicyInvalid { minimum: String, reason: String },
    /// The installed version satisfies the minimum. Terminal.
    VersionMet { installed: String, minimum: String },
    /// The installed version is below the minimum. Terminal.
    VersionNotMet { installed: String, minimum: String },
    /// The installed version could not be read or compared. Terminal.
    VersionUnreadable { bundle: PathBuf, reason: String },
}

impl AuditState {
    /// The verdict for a terminal state, `None` while the audit is in progress.
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            AuditState::Start | AuditState::GateOpen | AuditState::AppFound { .. } => None,
            AuditState::Deferred => Some(Verdict::Defer),
            AuditState::NoPolicy { .. } | AuditState::VersionMet { .. } => {
                Some(Verdict::Satisfied)
            }
            AuditState::AppMissing { .. }
            | AuditState::PolicyInvalid { .. }
            | AuditState::VersionNotMet { .. }
            | AuditState::VersionUnreadable { .. } => Some(Verdict::Remediate),
        }
    }
}
