/// Compact byte-offset range into an [`Input`](crate::Input). 8 bytes per
/// reference.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// input buffer. Text is never materialized while parsing; callers decode a
/// `ByteSliceRef` on demand via [`Input::byte_slice`](crate::Input::byte_slice)
/// or [`Input::byte_slice_string`](crate::Input::byte_slice_string).
///
/// `u32` offsets limit a single input to 4 GiB.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
#[repr(C)]
pub struct ByteSliceRef {
    /// Offset of the first byte (inclusive).
    pub start: u32,
    /// Offset one past the last byte (exclusive).
    pub end: u32,
}

impl ByteSliceRef {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this range in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this range is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub(crate) fn as_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}
