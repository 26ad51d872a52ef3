//! Exact-fit growable byte storage backing [`ZString`](crate::ZString).
//!
//! This is the allocate/grow layer the owning string is built on. Capacity is
//! tracked by the buffer itself rather than delegated to [`Vec::capacity`], so
//! the exact-fit growth policy is observable and deterministic no matter what
//! the global allocator rounds requests to: after any growth, the logical
//! capacity is exactly the requested content length plus one terminator byte.
//!
//! Allocation goes through [`Vec::try_reserve_exact`], so out-of-memory and
//! capacity-overflow conditions surface as [`Error::Allocation`] instead of
//! aborting the process. A failed grow leaves the existing bytes and capacity
//! untouched.

use crate::error::Error;

/// Fixed-policy byte storage: every reachable byte is initialized, and the
/// logical capacity (`bytes.len()`) only ever moves to an exact fit.
pub(crate) struct RawBuf {
    /// Backing storage. The vector's length *is* the logical capacity; its
    /// spare capacity, if the allocator over-provisioned, is never exposed.
    bytes: Vec<u8>,
}

impl RawBuf {
    /// Allocates storage for `content` bytes plus the trailing terminator.
    ///
    /// All bytes start zeroed, so the terminator invariant holds for any
    /// content length the caller subsequently claims.
    pub(crate) fn allocate(content: usize) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        // One slot past `content` for the terminator. The saturation only
        // bites at usize::MAX, where the reserve is guaranteed to refuse the
        // request anyway.
        bytes.try_reserve_exact(content.saturating_add(1))?;
        bytes.resize(content + 1, 0);
        Ok(Self { bytes })
    }

    /// Grows the allocation, if needed, so it can hold `content` bytes plus
    /// the terminator. Never shrinks. On failure the buffer is unchanged.
    pub(crate) fn grow_for(&mut self, content: usize) -> Result<(), Error> {
        let cap = self.bytes.len();
        if content < cap {
            return Ok(());
        }
        let additional = (content - cap) + 1;
        self.bytes.try_reserve_exact(additional)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity = cap,
            new_capacity = content + 1,
            "growing string buffer"
        );
        self.bytes.resize(content + 1, 0);
        Ok(())
    }

    /// Total allocated bytes, including the terminator slot.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_is_exact_fit() {
        let buf = RawBuf::allocate(13).unwrap();
        assert_eq!(buf.capacity(), 14);
        assert!(buf.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn allocate_zero_holds_only_terminator() {
        let buf = RawBuf::allocate(0).unwrap();
        assert_eq!(buf.capacity(), 1);
        assert_eq!(buf.as_slice(), &[0]);
    }

    #[test]
    fn grow_preserves_existing_bytes() {
        let mut buf = RawBuf::allocate(3).unwrap();
        buf.as_mut_slice()[..3].copy_from_slice(b"abc");

        buf.grow_for(10).unwrap();
        assert_eq!(buf.capacity(), 11);
        assert_eq!(&buf.as_slice()[..3], b"abc");
    }

    #[test]
    fn grow_within_capacity_is_a_no_op() {
        let mut buf = RawBuf::allocate(10).unwrap();
        buf.grow_for(4).unwrap();
        assert_eq!(buf.capacity(), 11);
    }

    #[test]
    fn grow_never_shrinks() {
        let mut buf = RawBuf::allocate(20).unwrap();
        buf.grow_for(0).unwrap();
        assert_eq!(buf.capacity(), 21);
    }

    #[test]
    fn overflowing_request_fails_cleanly() {
        let mut buf = RawBuf::allocate(5).unwrap();
        buf.as_mut_slice()[..5].copy_from_slice(b"hello");

        assert!(buf.grow_for(usize::MAX).is_err());
        assert_eq!(buf.capacity(), 6);
        assert_eq!(&buf.as_slice()[..5], b"hello");
    }
}
