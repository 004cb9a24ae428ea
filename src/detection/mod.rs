//! Application bundle detection.
//!
//! # Modules
//!
//! - [`locator`] - Bounded-depth search for a named bundle
//! - [`metadata`] - Version metadata read from the bundle's `Info.plist`

pub mod locator;
pub mod metadata;

pub use locator::{BundleLocator, LocateOutcome};
pub use metadata::{extract_version, BundleMetadata, InfoPlist};
