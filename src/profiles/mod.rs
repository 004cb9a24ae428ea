//! Deployed profile detection.
//!
//! # Modules
//!
//! - [`inventory`] - Profile identifier sources (system command, fixed list)
//! - [`gate`] - Precondition gate keyed on an identifier prefix

pub mod gate;
pub mod inventory;

pub use gate::PreconditionGate;
pub use inventory::{parse_identifiers, ProfileInventory, StaticProfiles, SystemProfiles};
