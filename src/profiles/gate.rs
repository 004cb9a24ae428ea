//! Precondition gate.
//!
//! The audit only runs once the deployment profile has arrived. A missing
//! profile is an expected state, not an error: the next scheduled run will
//! try again.

use super::inventory::ProfileInventory;

/// Checks whether a profile with the configured prefix is deployed.
pub struct PreconditionGate<'a> {
    inventory: &'a dyn ProfileInventory,
    prefix: &'a str,
}

impl<'a> PreconditionGate<'a> {
    /// Create a gate for the given identifier prefix.
    pub fn new(inventory: &'a dyn ProfileInventory, prefix: &'a str) -> Self {
        Self { inventory, prefix }
    }

    /// Whether any deployed profile identifier starts with the prefix.
    ///
    /// A failed inventory query counts as "not present".
    pub fn is_open(&self) -> bool {
        let identifiers = match self.inventory.identifiers() {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("Unable to list configuration profiles: {}", e);
                return false;
            }
        };

        match identifiers.iter().find(|id| id.starts_with(self.prefix)) {
            Some(id) => {
                tracing::info!("Found configuration profile {}", id);
                true
            }
            None => {
                tracing::debug!(
                    "{} profile(s) deployed, none match prefix {}",
                    identifiers.len(),
                    self.prefix
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuditError, Result};
    use crate::profiles::StaticProfiles;

    struct FailingProfiles;

    impl ProfileInventory for FailingProfiles {
        fn identifiers(&self) -> Result<Vec<String>> {
            Err(AuditError::ProfileQueryFailed {
                command: "profiles".to_string(),
                message: "not permitted".to_string(),
            })
        }
    }

    #[test]
    fn open_when_prefix_matches() {
        let inventory = StaticProfiles::new(["com.example.wifi", "com.cloudflare.warp.mdm"]);
        let gate = PreconditionGate::new(&inventory, "com.cloudflare.warp");
        assert!(gate.is_open());
    }

    #[test]
    fn closed_when_no_prefix_matches() {
        let inventory = StaticProfiles::new(["com.example.wifi"]);
        let gate = PreconditionGate::new(&inventory, "com.cloudflare.warp");
        assert!(!gate.is_open());
    }

    #[test]
    fn closed_when_inventory_empty() {
        let inventory = StaticProfiles::default();
        let gate = PreconditionGate::new(&inventory, "com.cloudflare");
        assert!(!gate.is_open());
    }

    #[test]
    fn prefix_match_is_not_substring_match() {
        let inventory = StaticProfiles::new(["org.vendor.com.cloudflare.warp"]);
        let gate = PreconditionGate::new(&inventory, "com.cloudflare.warp");
        assert!(!gate.is_open());
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        let inventory = StaticProfiles::new(["COM.CLOUDFLARE.WARP"]);
        let gate = PreconditionGate::new(&inventory, "com.cloudflare.warp");
        assert!(!gate.is_open());
    }

    #[test]
    fn closed_when_inventory_fails() {
        let gate = PreconditionGate::new(&FailingProfiles, "com.cloudflare");
        assert!(!gate.is_open());
    }
}
