/// Capacity of a freshly created stack. The shrink policy never drops the
/// buffer below this many slots.
pub const INITIAL_CAPACITY: usize = 16;

/// Hard ceiling on the number of elements a stack will hold, independent of
/// how much buffer is currently allocated.
pub const MAX_CAPACITY: usize = 32_768;

/// Variable-length elements whose serialized length is at least this many
/// bytes are rejected by [`Stack::push`](crate::Stack::push).
pub const MAX_ELEMENT_BYTE_SIZE: usize = 256;
