use codemint_core::Capacity;
use thiserror::Error;

/// Errors returned by generator construction.
///
/// Generation itself is infallible: every failure mode is a precondition
/// checked before the first candidate is drawn.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("cannot generate {requested} codes; only {capacity} combinations are possible")]
    InsufficientCapacity { requested: u64, capacity: Capacity },
}
