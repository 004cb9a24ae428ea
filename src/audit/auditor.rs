//! Audit sequencing.
//!
//! The [`Auditor`] advances an [`AuditState`] one transition at a time.
//! Every stage error is resolved into a terminal state here; nothing is
//! retried, and nothing on disk is written.

use std::path::PathBuf;

use crate::config::AuditConfig;
use crate::detection::{extract_version, BundleLocator, BundleMetadata, LocateOutcome};
use crate::profiles::{PreconditionGate, ProfileInventory};
use crate::version::{self, ComparisonMode, Evaluation, VersionKey};

use super::state::{AuditState, MissingReason};
use super::verdict::Verdict;

/// Final state and verdict of one audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// The terminal state reached.
    pub state: AuditState,
    /// The verdict for that state.
    pub verdict: Verdict,
}

impl AuditReport {
    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        self.verdict.exit_code()
    }
}

/// Runs the gate, locator, and version policy against one configuration.
pub struct Auditor<'a> {
    config: &'a AuditConfig,
    inventory: &'a dyn ProfileInventory,
    metadata: &'a dyn BundleMetadata,
}

impl<'a> Auditor<'a> {
    /// Create an auditor over the given collaborators.
    pub fn new(
        config: &'a AuditConfig,
        inventory: &'a dyn ProfileInventory,
        metadata: &'a dyn BundleMetadata,
    ) -> Self {
        Self {
            config,
            inventory,
            metadata,
        }
    }

    /// Perform a single transition. Terminal states map to themselves.
    pub fn step(&self, state: AuditState) -> AuditState {
        match state {
            AuditState::Start => self.check_gate(),
            AuditState::GateOpen => self.locate(),
            AuditState::AppFound { bundle } => self.check_version(bundle),
            terminal => terminal,
        }
    }

    /// Run from [`AuditState::Start`] to a terminal state and explain it.
    pub fn run(&self) -> AuditReport {
        let mut state = AuditState::Start;
        let verdict = loop {
            if let Some(verdict) = state.verdict() {
                break verdict;
            }
            state = self.step(state);
        };

        self.explain(&state);
        tracing::debug!("Verdict: {} (exit {})", verdict, verdict.exit_code());
        AuditReport { state, verdict }
    }

    fn check_gate(&self) -> AuditState {
        let gate = PreconditionGate::new(self.inventory, &self.config.profile_prefix);
        if gate.is_open() {
            AuditState::GateOpen
        } else {
            AuditState::Deferred
        }
    }

    fn locate(&self) -> AuditState {
        let locator = BundleLocator::new(&self.config.search_root, self.config.max_depth);
        tracing::debug!(
            "Searching {} (depth {}) for {}",
            locator.root().display(),
            locator.max_depth(),
            self.config.app_name
        );

        match locator.locate(&self.config.app_name) {
            LocateOutcome::Found(bundle) => {
                tracing::info!("{} is installed at {}", self.config.app_name, bundle.display());
                AuditState::AppFound { bundle }
            }
            LocateOutcome::NotFound => AuditState::AppMissing {
                reason: MissingReason::NotFound,
            },
            LocateOutcome::SearchFailed(e) => AuditState::AppMissing {
                reason: MissingReason::SearchFailed(e.to_string()),
            },
        }
    }

    fn check_version(&self, bundle: PathBuf) -> AuditState {
        if !self.config.has_minimum_version() {
            return AuditState::NoPolicy { bundle };
        }

        let minimum = version::normalize(&self.config.minimum_version);
        if let Err(e) = version::validate(&minimum, self.config.comparison) {
            return AuditState::PolicyInvalid {
                minimum,
                reason: e.to_string(),
            };
        }

        let installed = match extract_version(self.metadata, &bundle, &self.config.version_key) {
            Ok(v) => v,
            Err(e) => {
                return AuditState::VersionUnreadable {
                    bundle,
                    reason: e.to_string(),
                }
            }
        };

        self.log_comparison(&installed, &minimum);

        match version::evaluate(&installed, &minimum, self.config.comparison) {
            Ok(Evaluation::Met) => AuditState::VersionMet { installed, minimum },
            Ok(Evaluation::NotMet) => AuditState::VersionNotMet { installed, minimum },
            Err(e) => AuditState::VersionUnreadable {
                bundle,
                reason: e.to_string(),
            },
        }
    }

    fn log_comparison(&self, installed: &str, minimum: &str) {
        tracing::info!("Installed version: {}", installed);
        tracing::info!("Minimum version: {}", minimum);
        if self.config.comparison == ComparisonMode::Concatenated {
            if let (Ok(a), Ok(b)) = (VersionKey::parse(installed), VersionKey::parse(minimum)) {
                tracing::info!("Comparing version keys {} and {}", a, b);
            }
        }
    }

    fn explain(&self, state: &AuditState) {
        let app = &self.config.app_name;
        match state {
            AuditState::Deferred => tracing::info!(
                "No configuration profile matching {} yet; waiting for it to be deployed",
                self.config.profile_prefix
            ),
            AuditState::AppMissing {
                reason: MissingReason::NotFound,
            } => tracing::info!(
                "{} not found under {}; remediation required",
                app,
                self.config.search_root.display()
            ),
            AuditState::AppMissing {
                reason: MissingReason::SearchFailed(e),
            } => tracing::warn!(
                "{}; treating {} as not installed, remediation required",
                e,
                app
            ),
            AuditState::NoPolicy { .. } => tracing::info!(
                "{} is installed and no minimum version is configured; nothing to do",
                app
            ),
            AuditState::PolicyInvalid { minimum, reason } => tracing::error!(
                "Minimum version '{}' for {} cannot be compared ({}); remediation required",
                minimum,
                app,
                reason
            ),
            AuditState::VersionMet { installed, minimum } => tracing::info!(
                "{} {} meets minimum version {}; nothing to do",
                app,
                installed,
                minimum
            ),
            AuditState::VersionNotMet { installed, minimum } => tracing::info!(
                "{} {} is below minimum version {}; remediation required",
                app,
                installed,
                minimum
            ),
            AuditState::VersionUnreadable { reason, .. } => tracing::warn!(
                "{}; treating {} as not installed, remediation required",
                reason,
                app
            ),
            AuditState::Start | AuditState::GateOpen | AuditState::AppFound { .. } => {}
        }
    }
}
