use thiserror::Error;

/// Error type shared by every container in the crate
///
/// All bounds and state checks run before any mutation; when an operation
/// returns an error, the container is exactly as it was before the call.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ContainerError {
    /// Index-based access, insertion, or removal outside the valid range
    #[error("index out of range: index {index} is beyond length {length}")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Number of live elements at the time of the call
        length: usize,
    },
    /// Removal or peek attempted on a container with no live elements
    #[error("operation on empty container")]
    EmptyContainer,
    /// Insertion attempted on a fixed-capacity container that is full
    #[error("container full: capacity of {capacity} elements reached")]
    ContainerFull {
        /// Fixed capacity of the container
        capacity: usize,
    },
    /// Value search found no matching element
    #[error("item not found")]
    ItemNotFound,
}
