//! `ZString`: the owned, growable, null-terminated byte string.
//!
//! A `ZString` exclusively owns a heap buffer of `capacity` bytes holding
//! `len` content bytes followed by a `0` terminator. Two invariants hold
//! after every successful operation:
//!
//! - `capacity >= len + 1`
//! - `buffer[len] == 0`
//!
//! Mutation may reallocate the buffer. Any [`ZView`] or [`ZSlice`] derived
//! from the string borrows it, so the compiler rejects use of an alias across
//! a mutation or destruction of its source; the dangling-alias hazard of the
//! equivalent manual-memory design is a compile error here, not a runtime
//! condition.
//!
//! # Growth policy
//!
//! Growth is exact-fit, not amortized: when a mutation needs more room than
//! the current capacity provides, the buffer is reallocated to exactly the
//! new content length plus one terminator byte. Repeated appends are
//! therefore O(n) per call in the worst case. This is a deliberate,
//! documented policy: callers that care about reallocation timing can
//! predict it from [`capacity`](ZString::capacity) alone. Shrinking never
//! reallocates.
//!
//! # Examples
//!
//! ```
//! use zstring::ZString;
//!
//! # fn main() -> Result<(), zstring::Error> {
//! let mut s = ZString::from_bytes(b"Hello")?;
//! s.append(b", World!")?;
//!
//! assert_eq!(s.as_bytes(), b"Hello, World!");
//! assert_eq!(s.len(), 13);
//! assert_eq!(s.as_bytes_with_nul().last(), Some(&0));
//! # Ok(())
//! # }
//! ```

use crate::buffer::RawBuf;
use crate::error::Error;
use crate::slice::ZSlice;
use crate::view::ZView;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An owned, growable byte string that keeps a trailing `0` terminator.
///
/// Construction always copies the source bytes into a fresh allocation; a
/// `ZString` never adopts another owner's buffer. All fallible operations
/// return [`Error`] and leave the string untouched on failure.
pub struct ZString {
    buf: RawBuf,
    len: usize,
}

impl ZString {
    /// Creates a string by copying `bytes` into a fresh exact-fit allocation.
    ///
    /// The allocation is `bytes.len() + 1` bytes; the terminator is written
    /// at offset `bytes.len()`.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if the buffer cannot be allocated. Nothing is
    /// leaked on failure.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut buf = RawBuf::allocate(bytes.len())?;
        buf.as_mut_slice()[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            buf,
            len: bytes.len(),
        })
    }

    /// Creates an empty string whose buffer can hold `reserve` content bytes
    /// without reallocating.
    ///
    /// A zero reserve is legal and yields a one-byte buffer holding only the
    /// terminator.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if the buffer cannot be allocated.
    pub fn with_capacity(reserve: usize) -> Result<Self, Error> {
        let buf = RawBuf::allocate(reserve)?;
        Ok(Self { buf, len: 0 })
    }

    /// Creates a string by copying the bytes a [`ZView`] aliases.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if the buffer cannot be allocated.
    pub fn from_view(view: &ZView<'_>) -> Result<Self, Error> {
        Self::from_bytes(view.as_bytes())
    }

    /// Creates a string by copying the bytes a [`ZSlice`] aliases.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if the buffer cannot be allocated.
    pub fn from_slice(slice: &ZSlice<'_>) -> Result<Self, Error> {
        Self::from_bytes(slice.as_bytes())
    }

    /// Content bytes, terminator excluded.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_slice()[..self.len]
    }

    /// Content bytes plus the trailing terminator.
    ///
    /// This is the whole region a C-style consumer reads: `len + 1` bytes,
    /// the last of which is `0`. Interior content bytes may themselves be
    /// zero; the terminator is positional, not searched for.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf.as_slice()[..=self.len]
    }

    /// Content length in bytes, terminator excluded.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the string holds no content bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total allocated bytes, terminator slot included.
    ///
    /// Always at least `len() + 1`. Because growth is exact-fit, this is
    /// exactly `len + 1` immediately after any operation that grew the
    /// buffer, and unchanged by operations that shrank the content.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Borrows the entire current content as a [`ZView`].
    ///
    /// Many views may alias one string at a time. The view pins the string:
    /// mutating or destroying the string while the view lives is a compile
    /// error.
    #[inline]
    pub fn view(&self) -> ZView<'_> {
        ZView::new(self.as_bytes())
    }

    /// Borrows the sub-range `[start, end)` of the content as a [`ZSlice`].
    ///
    /// # Errors
    ///
    /// [`Error::Range`] unless `start < len`, `end <= len`, and
    /// `start < end`. Empty ranges are invalid, so slicing an empty string
    /// always fails. On failure no slice is produced and the string is
    /// unaffected.
    pub fn slice(&self, start: usize, end: usize) -> Result<ZSlice<'_>, Error> {
        if start >= self.len || end > self.len || start >= end {
            return Err(Error::Range {
                start,
                end,
                len: self.len,
            });
        }
        Ok(ZSlice::new(&self.as_bytes()[start..end], start))
    }

    /// Grows or shrinks the content length to `new_len`.
    ///
    /// Growing past the current capacity reallocates to exactly
    /// `new_len + 1` bytes. Bytes revealed between the old and new length
    /// are unspecified. Only the terminator at `new_len` is written, so
    /// callers must not assume any particular fill value. Shrinking never
    /// reallocates; it truncates and re-terminates in place.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if growth fails; content, length, and capacity
    /// are then unchanged.
    pub fn resize(&mut self, new_len: usize) -> Result<(), Error> {
        self.buf.grow_for(new_len)?;
        self.len = new_len;
        self.buf.as_mut_slice()[new_len] = 0;
        Ok(())
    }

    /// Replaces the entire content with a copy of `bytes`.
    ///
    /// Reallocates (exact-fit) only if `bytes.len() + 1` exceeds the current
    /// capacity.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if growth fails; the prior content is then
    /// unchanged.
    pub fn assign(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.buf.grow_for(bytes.len())?;
        let dst = self.buf.as_mut_slice();
        dst[..bytes.len()].copy_from_slice(bytes);
        dst[bytes.len()] = 0;
        self.len = bytes.len();
        Ok(())
    }

    /// Replaces the entire content with a copy of the bytes `view` aliases.
    ///
    /// The view necessarily aliases a *different* string: a view of `self`
    /// cannot coexist with the exclusive borrow this method takes.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if growth fails; the prior content is then
    /// unchanged.
    pub fn assign_from_view(&mut self, view: &ZView<'_>) -> Result<(), Error> {
        self.assign(view.as_bytes())
    }

    /// Replaces the entire content with a copy of the bytes `slice` aliases.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if growth fails; the prior content is then
    /// unchanged.
    pub fn assign_from_slice(&mut self, slice: &ZSlice<'_>) -> Result<(), Error> {
        self.assign(slice.as_bytes())
    }

    /// Appends a copy of `bytes` after the current content.
    ///
    /// The new length is `len + bytes.len()`; the prefix bytes are left
    /// unchanged and the terminator moves to the new length.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if growth fails; the prior content is then
    /// unchanged.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let new_len = self.len + bytes.len();
        self.buf.grow_for(new_len)?;
        let dst = self.buf.as_mut_slice();
        dst[self.len..new_len].copy_from_slice(bytes);
        dst[new_len] = 0;
        self.len = new_len;
        Ok(())
    }

    /// Consumes the string, releasing its buffer, and reports the number of
    /// heap bytes freed (the buffer capacity).
    ///
    /// Dropping a `ZString` frees the same memory; this form exists for
    /// callers that account for their allocations.
    pub fn destroy(self) -> usize {
        self.buf.capacity()
    }
}

/// Takes the string out of `slot` and destroys it, returning the freed byte
/// count. An already-empty slot is a no-op returning 0, so cleanup paths can
/// run this idempotently.
///
/// # Examples
///
/// ```
/// use zstring::{destroy_string, ZString};
///
/// # fn main() -> Result<(), zstring::Error> {
/// let mut slot = Some(ZString::from_bytes(b"Hello")?);
/// assert_eq!(destroy_string(&mut slot), 6);
/// assert_eq!(destroy_string(&mut slot), 0);
/// # Ok(())
/// # }
/// ```
pub fn destroy_string(slot: &mut Option<ZString>) -> usize {
    slot.take().map_or(0, ZString::destroy)
}

impl fmt::Debug for ZString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZString")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

/// Equality is two-valued: equal when the byte-wise comparison over the
/// shorter length finds no difference *and* the lengths match. No ordering
/// is defined for `ZString`; `Ord`/`PartialOrd` are deliberately absent.
impl PartialEq for ZString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ZString {}

impl PartialEq<[u8]> for ZString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&str> for ZString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Hash for ZString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl TryFrom<&[u8]> for ZString {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&str> for ZString {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Error> {
        Self::from_bytes(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_copies_and_terminates() {
        let s = ZString::from_bytes(b"Hello, World!").unwrap();
        assert_eq!(s.len(), 13);
        assert_eq!(s.as_bytes(), b"Hello, World!");
        assert_eq!(s.as_bytes_with_nul(), b"Hello, World!\0");
        assert_eq!(s.capacity(), 14);
    }

    #[test]
    fn with_capacity_zero_is_legal() {
        let s = ZString::with_capacity(0).unwrap();
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        assert_eq!(s.capacity(), 1);
        assert_eq!(s.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn with_capacity_reserves_without_content() {
        let s = ZString::with_capacity(32).unwrap();
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 33);
        assert_eq!(s.as_bytes(), b"");
    }

    #[test]
    fn append_within_capacity_keeps_buffer() {
        let mut s = ZString::with_capacity(16).unwrap();
        s.append(b"Hello").unwrap();
        assert_eq!(s.capacity(), 17);
        assert_eq!(s.as_bytes(), b"Hello");
    }

    #[test]
    fn append_grows_exact_fit() {
        let mut s = ZString::from_bytes(b"Hello").unwrap();
        assert_eq!(s.capacity(), 6);

        s.append(b", World!").unwrap();
        assert_eq!(s.as_bytes(), b"Hello, World!");
        assert_eq!(s.len(), 13);
        assert_eq!(s.capacity(), 14);
        assert_eq!(s.as_bytes_with_nul()[13], 0);
    }

    #[test]
    fn resize_grow_keeps_prefix_and_terminates() {
        let mut s = ZString::from_bytes(b"Hello, World!").unwrap();
        s.resize(20).unwrap();

        assert_eq!(s.len(), 20);
        assert_eq!(&s.as_bytes()[..13], b"Hello, World!");
        assert_eq!(s.as_bytes_with_nul()[20], 0);
        // Bytes 13..20 are unspecified: the test deliberately does not look.
    }

    #[test]
    fn resize_shrink_never_reallocates() {
        let mut s = ZString::from_bytes(b"Hello, World!").unwrap();
        let cap = s.capacity();

        s.resize(5).unwrap();
        assert_eq!(s.as_bytes(), b"Hello");
        assert_eq!(s.capacity(), cap);
        assert_eq!(s.as_bytes_with_nul(), b"Hello\0");
    }

    #[test]
    fn resize_to_zero() {
        let mut s = ZString::from_bytes(b"abc").unwrap();
        s.resize(0).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn assign_replaces_content() {
        let mut s = ZString::from_bytes(b"Hello").unwrap();
        s.assign(b"Goodbye").unwrap();
        assert_eq!(s.as_bytes(), b"Goodbye");
        assert_eq!(s.len(), 7);
        assert_eq!(s.capacity(), 8);
    }

    #[test]
    fn assign_shorter_reuses_buffer() {
        let mut s = ZString::from_bytes(b"Hello, World!").unwrap();
        let cap = s.capacity();

        s.assign(b"hi").unwrap();
        assert_eq!(s.as_bytes(), b"hi");
        assert_eq!(s.capacity(), cap);
    }

    #[test]
    fn failed_growth_leaves_prior_state() {
        let mut s = ZString::from_bytes(b"Hello").unwrap();
        let cap = s.capacity();

        let err = s.resize(usize::MAX).unwrap_err();
        assert!(matches!(err, Error::Allocation(_)));
        assert_eq!(s.as_bytes(), b"Hello");
        assert_eq!(s.len(), 5);
        assert_eq!(s.capacity(), cap);
        assert_eq!(s.as_bytes_with_nul(), b"Hello\0");
    }

    #[test]
    fn interior_nul_bytes_are_content() {
        let s = ZString::from_bytes(b"a\0b").unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_bytes(), b"a\0b");
        assert_eq!(s.as_bytes_with_nul(), b"a\0b\0");
    }

    #[test]
    fn equality_is_content_and_length() {
        let a = ZString::from_bytes(b"Hello").unwrap();
        let b = ZString::from_bytes(b"Hello").unwrap();
        let c = ZString::from_bytes(b"Goodbye").unwrap();
        let prefix = ZString::from_bytes(b"Hell").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, prefix);
        assert_eq!(a, b"Hello"[..]);
        assert_eq!(a, "Hello");
    }

    #[test]
    fn equality_ignores_capacity() {
        let a = ZString::from_bytes(b"Hello").unwrap();
        let mut b = ZString::with_capacity(64).unwrap();
        b.append(b"Hello").unwrap();

        assert_ne!(a.capacity(), b.capacity());
        assert_eq!(a, b);
    }

    #[test]
    fn destroy_reports_freed_bytes() {
        let s = ZString::from_bytes(b"Hello").unwrap();
        assert_eq!(s.destroy(), 6);
    }

    #[test]
    fn destroy_string_is_idempotent() {
        let mut slot = Some(ZString::from_bytes(b"Hello").unwrap());
        assert_eq!(destroy_string(&mut slot), 6);
        assert!(slot.is_none());
        assert_eq!(destroy_string(&mut slot), 0);
        assert_eq!(destroy_string(&mut None), 0);
    }

    #[test]
    fn try_from_str() {
        let s = ZString::try_from("Hello").unwrap();
        assert_eq!(s, "Hello");
    }
}
