/// Reports how large an element is on the way into a stack.
///
/// Types with a fixed, statically-known size return `None` and are exempt
/// from the per-element size limit. Variable-length types return the byte
/// length of their contents, which [`Stack::push`](crate::Stack::push)
/// checks against [`MAX_ELEMENT_BYTE_SIZE`](crate::MAX_ELEMENT_BYTE_SIZE).
pub trait Element {
    fn byte_len(&self) -> Option<usize>;
}

macro_rules! impl_fixed_size {
    ($($ty:ty),+ $(,)?) => {
        $(
        impl Element for $ty {
            fn byte_len(&self) -> Option<usize> {
                None
            }
        }
        )+
    };
}

impl_fixed_size![
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    bool, char, f32, f64, (),
];

impl Element for String {
    fn byte_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl Element for Box<str> {
    fn byte_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl Element for Vec<u8> {
    fn byte_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl Element for Box<[u8]> {
    fn byte_len(&self) -> Option<usize> {
        Some(self.len())
    }
}
