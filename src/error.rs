//! Error types for audit operations.
//!
//! This module defines [`AuditError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Stage errors (profile query, bundle search, metadata read) never escape
//!   the sequencer; each one resolves into a terminal audit state
//! - Configuration errors are the only errors that reach `main`
//! - Use `anyhow::Error` (via `AuditError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for audit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A version string does not reduce to a comparable digit key.
    #[error("Invalid version '{value}': {message}")]
    InvalidVersion { value: String, message: String },

    /// The deployed-profile inventory could not be queried.
    #[error("Profile query '{command}' failed: {message}")]
    ProfileQueryFailed { command: String, message: String },

    /// The bounded-depth bundle search reported an I/O failure.
    #[error("Search under {root} failed: {message}")]
    SearchFailed { root: PathBuf, message: String },

    /// The bundle's version metadata is missing or unreadable.
    #[error("Cannot read version metadata from {path}: {message}")]
    MetadataUnreadable { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
