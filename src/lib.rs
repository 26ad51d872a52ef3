//! # `zstring`: owned, growable, null-terminated byte strings
//!
//! A manual dynamic-string container: [`ZString`] owns a heap buffer holding
//! content bytes plus a trailing `0` terminator, and two read-only accessors
//! are derived from it: [`ZView`] aliases the whole content, [`ZSlice`]
//! aliases a sub-range. The crate is about the ownership and buffer-growth
//! discipline, not text processing: there is no Unicode handling, formatting,
//! or search, and content bytes are arbitrary (interior zeros included).
//!
//! ## Ownership and aliasing
//!
//! A `ZString` exclusively owns its buffer; nothing else frees or
//! reallocates it. Views and slices are borrows tied to the source string's
//! lifetime, so the classic hazard of this design (an alias dangling after
//! the source grows or is freed) is a compile error rather than undefined
//! behavior. Constructing a string *from* a view or slice always copies into
//! a fresh allocation, never adopts the aliased buffer.
//!
//! ## Growth
//!
//! Growth is exact-fit: a mutation that needs more room reallocates to
//! exactly the new content length plus one terminator byte, with no
//! geometric over-allocation. [`ZString::capacity`] makes the policy
//! observable. Allocation failures are returned as [`Error::Allocation`]
//! with the string left in its prior valid state; the crate does not abort
//! on out-of-memory.
//!
//! ## Concurrency
//!
//! Operations are synchronous and run to completion; a string and its
//! aliases belong to one owner at a time. In Rust that rule needs no
//! documentation-only precondition: `ZString` has no interior mutability,
//! so the borrow checker enforces it.
//!
//! ## Features
//!
//! - `serde`: serialize strings, views, and slices as bytes; deserialize
//!   strings by fallible copy.
//! - `tracing`: emit a `trace!` event on every buffer growth.
//!
//! ## Example
//!
//! ```
//! use zstring::ZString;
//!
//! # fn main() -> Result<(), zstring::Error> {
//! let mut s = ZString::from_bytes(b"Hello")?;
//! s.append(b", World!")?;
//! assert_eq!(s.as_bytes(), b"Hello, World!");
//! assert_eq!(s.len(), 13);
//!
//! let slice = s.slice(0, 5)?;
//! let hello = ZString::from_slice(&slice)?;
//! assert_eq!(hello.as_bytes(), b"Hello");
//!
//! let freed = hello.destroy();
//! assert_eq!(freed, 6);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod buffer;
pub mod error;
pub mod slice;
pub mod string;
pub mod view;

#[cfg(feature = "serde")]
mod serde_impls;

pub use error::Error;
pub use slice::{destroy_slice, ZSlice};
pub use string::{destroy_string, ZString};
pub use view::{destroy_view, ZView};

// Compile-time layout checks: the aliases stay thin.
const _: () = {
    use core::mem;

    // A view is exactly a fat pointer to the aliased bytes.
    assert!(mem::size_of::<ZView<'static>>() == mem::size_of::<&[u8]>());

    // A slice adds only its start offset.
    assert!(
        mem::size_of::<ZSlice<'static>>() <= mem::size_of::<&[u8]>() + mem::size_of::<usize>()
    );
};
