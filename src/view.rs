//! `ZView`: a borrowing alias over an entire string's current content.
//!
//! A view captures the content bytes and length of a [`ZString`] at the
//! moment it is taken. It never owns the buffer it looks at: dropping a view
//! releases nothing, and the borrow it holds keeps the source string alive
//! and immutable for the view's whole lifetime. Code that would have
//! produced a dangling alias in a manual-memory setting (mutating or
//! freeing the source while a view exists) does not compile.

use std::fmt;

/// A read-only alias over the entire content of a [`ZString`](crate::ZString).
///
/// Obtained from [`ZString::view`](crate::ZString::view); any number of views
/// may alias one string at a time.
#[derive(Clone)]
pub struct ZView<'a> {
    bytes: &'a [u8],
}

impl<'a> ZView<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// The aliased content bytes, terminator excluded.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Length of the aliased content, snapshotted at view creation.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the aliased content is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Drops the view held in `slot`, if any. Only the alias itself goes away;
/// the aliased buffer is untouched. Idempotent on an empty slot.
pub fn destroy_view(slot: &mut Option<ZView<'_>>) {
    slot.take();
}

impl fmt::Debug for ZView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZView")
            .field("len", &self.len())
            .field("bytes", &self.bytes)
            .finish()
    }
}
