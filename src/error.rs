use thiserror::Error;

/// Error types for `GrowBuf` operations
///
/// Arithmetic overflow during size computations is deliberately *not* an
/// error variant: the buffer contract treats it as a silent no-op, so the
/// affected operations return `Ok(())` without mutating anything.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowBufError {
    /// The allocator returned null for a fresh allocation
    #[error("Allocation failed: allocator refused {requested_bytes} bytes")]
    AllocationFailed {
        /// Number of bytes requested from the allocator
        requested_bytes: usize,
    },
    /// The allocator returned null for a reallocation; the buffer is unchanged
    #[error("Reallocation failed: allocator refused {requested_bytes} bytes")]
    ReallocationFailed {
        /// Number of bytes requested from the allocator
        requested_bytes: usize,
    },
    /// Index is beyond the current buffer length
    #[error("Index out of bounds: index {index} is beyond buffer length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the buffer
        length: usize,
    },
}
