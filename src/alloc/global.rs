use std::alloc::{self as std_alloc, Layout};
use std::ptr::NonNull;

use super::{ALIGN, Allocator, Region};
use crate::logging::{debug, trace};

/// Rust's global allocator.
///
/// The global allocator needs the exact layout back on deallocation, so regions can't change size
/// in place: [`resize`](Allocator::resize) only succeeds when the length doesn't change, and every
/// other resize goes through a new allocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

impl Allocator for Global {
    fn alloc(&self, len: usize) -> Region<u8> {
        if len == 0 {
            return Region::empty();
        }
        let Ok(layout) = Layout::from_size_align(len, ALIGN) else {
            return Region::empty();
        };

        // SAFETY: The layout has a nonzero size.
        match NonNull::new(unsafe { std_alloc::alloc(layout) }) {
            Some(ptr) => {
                trace!("global: allocated {len} bytes at {ptr:p}");
                // SAFETY: The allocation succeeded, so ptr is valid for len bytes.
                unsafe { Region::from_raw_parts(ptr, len) }
            }
            None => {
                debug!("global: failed to allocate {len} bytes");
                Region::empty()
            }
        }
    }

    unsafe fn resize(&self, buf: Region<u8>, new_len: usize) -> bool {
        trace!("global: resize {} -> {new_len} bytes", buf.len());
        buf.len() == new_len
    }

    unsafe fn free(&self, buf: Region<u8>) {
        trace!("global: freeing {} bytes at {:p}", buf.len(), buf.as_ptr());
        // SAFETY: The caller guarantees that buf is a live region from this allocator, which was
        // allocated with exactly this layout.
        unsafe {
            std_alloc::dealloc(
                buf.as_ptr().as_ptr(),
                Layout::from_size_align_unchecked(buf.len(), ALIGN),
            )
        }
    }
}
