//! Explicit allocators.
//!
//! Nothing in this crate allocates behind the caller's back. Containers take an [`Allocator`] on
//! every operation that might need memory, and the caller decides where that memory comes from:
//! the C heap, Rust's global allocator, a fixed stack buffer, or any of those wrapped in
//! [`Counting`] to observe the traffic.
//!
//! Backends deal only in bytes and regions. The [`AllocatorExt`] helpers layer element types,
//! overflow-checked sizing and reallocation on top of them.

mod counting;
mod error;
mod fixed;
mod global;
#[cfg(all(unix, feature = "heap"))]
mod heap;
mod region;
mod tests;
mod typed;

pub use counting::*;
pub use error::*;
pub use fixed::*;
pub use global::*;
#[cfg(all(unix, feature = "heap"))]
pub use heap::*;
pub use region::*;
pub use typed::*;

/// The alignment of every region returned by an [`Allocator`]. Element types aligned beyond this
/// are rejected by the typed helpers.
pub const ALIGN: usize = 16;

/// A source of raw memory.
///
/// All methods take `&self`, so a single allocator can be shared between several containers. A
/// backend that needs to track state does so through interior mutability.
pub trait Allocator {
    /// Allocates `len` bytes aligned to [`ALIGN`].
    ///
    /// On success the returned region is exactly `len` bytes long. On failure, and for `len == 0`,
    /// the empty sentinel is returned.
    fn alloc(&self, len: usize) -> Region<u8>;

    /// Attempts to change the length of `buf` to `new_len` without moving it. Returns `true` if the
    /// address is now valid for `new_len` bytes, and `false` if nothing changed.
    ///
    /// # Safety
    /// `buf` must be exactly a live region returned by this allocator (with the length it was last
    /// allocated or resized to) and `new_len` must be nonzero.
    unsafe fn resize(&self, buf: Region<u8>, new_len: usize) -> bool;

    /// Releases `buf`.
    ///
    /// # Safety
    /// `buf` must be exactly a live, non-empty region returned by this allocator (with the length it
    /// was last allocated or resized to). It must not be used afterwards.
    unsafe fn free(&self, buf: Region<u8>);
}

impl<A: Allocator + ?Sized> Allocator for &A {
    fn alloc(&self, len: usize) -> Region<u8> {
        (**self).alloc(len)
    }

    unsafe fn resize(&self, buf: Region<u8>, new_len: usize) -> bool {
        // SAFETY: The requirements are passed on to the caller.
        unsafe { (**self).resize(buf, new_len) }
    }

    unsafe fn free(&self, buf: Region<u8>) {
        // SAFETY: The requirements are passed on to the caller.
        unsafe { (**self).free(buf) }
    }
}
