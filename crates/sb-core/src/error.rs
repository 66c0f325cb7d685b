//! Error types for the core game model.

/// Errors that can occur while resolving events.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    /// The party has nobody who can take on the event.
    #[error("no eligible party member")]
    NoEligibleMember,

    /// The event already has a terminal status.
    #[error("event already resolved")]
    AlreadyResolved,

    /// An attribute name did not match any known attribute kind.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
