//! Error values reported by [`RingDeque`](crate::RingDeque).

/// The error type for fallible deque operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DequeError {
    /// An element was requested from a deque that holds none.
    #[error("cannot pop from an empty deque")]
    EmptyCollection,
    /// A construction parameter was out of range.
    #[error("invalid {name} {value}: must be at least 1")]
    InvalidArgument {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },
}
