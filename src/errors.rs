use thiserror::Error;

/// Strict insertion into a full deque.
///
/// Carries the rejected element so the caller keeps ownership of it; the
/// deque itself is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("deque is full (capacity {capacity})")]
pub struct CapacityError<T> {
    /// Logical capacity of the deque that rejected the insertion.
    pub capacity: usize,
    /// The element that did not fit.
    pub element: T,
}

/// Strict access or removal on an empty deque.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("deque is empty")]
pub struct EmptyError;
