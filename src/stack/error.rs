use crate::config::{MAX_CAPACITY, MAX_ELEMENT_BYTE_SIZE};
use thiserror::Error;

pub type StackResult<T> = Result<T, StackError>;

/// Every way a stack operation can fail. Each failure leaves the stack in
/// the valid state it had before the call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// The allocator refused the initial buffer or a growth reallocation.
    #[error("out of memory")]
    OutOfMemory,
    #[error("stack full: already holding the maximum of {MAX_CAPACITY} elements")]
    StackFull,
    #[error("cannot pop from an empty stack")]
    StackEmpty,
    /// A variable-length element reported a serialized length over the limit.
    #[error("element too large: {size} bytes, must be under {MAX_ELEMENT_BYTE_SIZE}")]
    ElementTooLarge { size: usize },
}
