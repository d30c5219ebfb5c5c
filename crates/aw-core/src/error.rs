//! Error types for the core crate.

/// Errors that can occur when working with continents and animals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A continent name did not match any known continent.
    #[error("unknown continent '{0}' (expected africa, north-america or eurasia)")]
    UnknownContinent(String),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
