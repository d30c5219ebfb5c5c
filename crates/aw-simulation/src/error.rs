use crate::world::Stage;

/// Convenience result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while stepping a world.
///
/// Failed hunts are ordinary outcomes, not errors. The only failure is
/// driving the stage machine out of order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// A step was requested from a stage that cannot reach it.
    #[error("cannot move world from {from} to {to}")]
    InvalidTransition {
        /// The stage the world was in.
        from: Stage,
        /// The stage that was requested.
        to: Stage,
    },
}
