//! Error types for the image resolver.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use serde::Serialize;
use thiserror::Error;

/// Contract violations detected while classifying a descriptor string.
///
/// These are programming errors on the producer of the descriptor list, not
/// recoverable runtime conditions: a malformed overlay descriptor fails the
/// whole resolve call instead of being absorbed as a candidate miss.
#[derive(Error, Debug, Serialize, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// Overlay descriptor without the required `url` query parameter
    #[error("Overlay descriptor missing url parameter: {0}")]
    MissingUrl(String),
    /// Overlay descriptor without the required `direction` query parameter
    #[error("Overlay descriptor missing direction parameter: {0}")]
    MissingDirection(String),
    /// Overlay descriptor with a `direction` value outside start/end
    #[error("Invalid overlay direction: {0}")]
    InvalidDirection(String),
    /// Overlay descriptor whose query section cannot be parsed at all
    #[error("Unparsable overlay descriptor: {0}")]
    Unparsable(String),
}

/// Main error type for the resolver.
///
/// Candidate misses and total exhaustion are normal control flow and never
/// surface here; only contract violations do.
#[derive(Error, Debug, Serialize, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// Descriptor classification failed
    #[error("Descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),
}

/// Convenience result type for resolver operations.
pub type ResolverResult<T> = Result<T, ResolverError>;

// Helper methods for descriptor error creation
impl DescriptorError {
    pub fn missing_url(descriptor: impl Into<String>) -> Self {
        Self::MissingUrl(descriptor.into())
    }

    pub fn missing_direction(descriptor: impl Into<String>) -> Self {
        Self::MissingDirection(descriptor.into())
    }

    pub fn invalid_direction(value: impl Into<String>) -> Self {
        Self::InvalidDirection(value.into())
    }

    pub fn unparsable(descriptor: impl Into<String>) -> Self {
        Self::Unparsable(descriptor.into())
    }
}
