//! Audit verdicts and their exit codes.

use std::fmt;

/// Final outcome of one audit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The gating profile has not arrived yet; try again on the next run.
    Defer,
    /// The application is present and meets the policy.
    Satisfied,
    /// The application is missing or too old; the installer should run.
    Remediate,
}

impl Verdict {
    /// Process exit code reported to the scheduling agent.
    ///
    /// Only [`Verdict::Remediate`] is non-zero.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Defer | Verdict::Satisfied => 0,
            Verdict::Remediate => 1,
        }
    }

    /// Whether the installer needs to run.
    pub fn needs_remediation(self) -> bool {
        self == Verdict::Remediate
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Defer => write!(f, "defer"),
            Verdict::Satisfied => write!(f, "satisfied"),
            Verdict::Remediate => write!(f, "remediate"),
        }
    }
}
