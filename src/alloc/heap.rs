use std::ffi::c_void;
use std::ptr::{self, NonNull};

use super::{ALIGN, Allocator, Region};
use crate::logging::{debug, trace};

/// The C heap, through `posix_memalign` and `free`.
///
/// In-place resizing succeeds whenever the new length fits in the usable size the C allocator
/// reports for the block, which covers every shrink and any growth into slack the allocator
/// already rounded up to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CHeap;

impl Allocator for CHeap {
    fn alloc(&self, len: usize) -> Region<u8> {
        if len == 0 {
            return Region::empty();
        }

        let mut raw: *mut c_void = ptr::null_mut();
        // SAFETY: ALIGN is a power of two and a multiple of the pointer size, and raw is a valid
        // out pointer.
        let status = unsafe { libc::posix_memalign(&mut raw, ALIGN, len) };

        match NonNull::new(raw.cast::<u8>()) {
            Some(ptr) if status == 0 => {
                trace!("c heap: allocated {len} bytes at {ptr:p}");
                // SAFETY: posix_memalign succeeded, so ptr is valid for len bytes.
                unsafe { Region::from_raw_parts(ptr, len) }
            }
            _ => {
                debug!("c heap: failed to allocate {len} bytes (status {status})");
                Region::empty()
            }
        }
    }

    unsafe fn resize(&self, buf: Region<u8>, new_len: usize) -> bool {
        // SAFETY: The caller guarantees that buf is a live block from this allocator.
        let usable = unsafe { usable_size(buf.as_ptr()) };
        trace!("c heap: resize {} -> {new_len} bytes, {usable} usable", buf.len());
        new_len <= usable
    }

    unsafe fn free(&self, buf: Region<u8>) {
        trace!("c heap: freeing {} bytes at {:p}", buf.len(), buf.as_ptr());
        // SAFETY: The caller guarantees that buf is a live block from this allocator.
        unsafe { libc::free(buf.as_ptr().as_ptr().cast()) }
    }
}

#[cfg(target_os = "linux")]
unsafe fn usable_size(ptr: NonNull<u8>) -> usize {
    // SAFETY: ptr is a live block from the C heap.
    unsafe { libc::malloc_usable_size(ptr.as_ptr().cast()) }
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
unsafe fn usable_size(ptr: NonNull<u8>) -> usize {
    // SAFETY: ptr is a live block from the C heap.
    unsafe { libc::malloc_size(ptr.as_ptr().cast_const().cast()) }
}

// Without a way to query the block size, growth and shrinking both go through a new allocation.
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "ios")))]
unsafe fn usable_size(_ptr: NonNull<u8>) -> usize {
    0
}
