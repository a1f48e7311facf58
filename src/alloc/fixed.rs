use std::cell::Cell;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{ALIGN, Allocator, Region};
use crate::logging::{debug, trace};
use crate::num::Usize;

/// A bump allocator over a borrowed byte buffer.
///
/// Allocations are carved from the front of the buffer in order. Only the most recent allocation
/// can grow or shrink in place, or give its memory back when freed; freeing anything else is a
/// no-op until the buffer itself goes away. Once the buffer is exhausted, allocation fails with the
/// empty region, which makes this a convenient way to exercise out-of-memory paths.
///
/// # Examples
/// ```
/// use standard_core::alloc::{Allocator, AllocatorExt, FixedBuffer};
///
/// let mut backing = [0_u8; 64];
/// let buffer = FixedBuffer::new(&mut backing);
///
/// let region = buffer.alloc_array::<u32>(4);
/// assert_eq!(region.len(), 4);
/// assert!(buffer.try_alloc_array::<u32>(100).has_any_error());
/// ```
pub struct FixedBuffer<'a> {
    start: NonNull<u8>,
    capacity: usize,
    end: Cell<usize>,
    _buffer: PhantomData<&'a mut [u8]>,
}

impl<'a> FixedBuffer<'a> {
    pub fn new(buffer: &'a mut [u8]) -> FixedBuffer<'a> {
        FixedBuffer {
            capacity: buffer.len(),
            start: NonNull::from(buffer).cast(),
            end: Cell::new(0),
            _buffer: PhantomData,
        }
    }

    /// The total size of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of bytes up to the end of the last allocation, including alignment padding.
    pub fn used(&self) -> usize {
        self.end.get()
    }

    fn offset_of(&self, buf: Region<u8>) -> usize {
        buf.as_ptr().addr().get() - self.start.addr().get()
    }

    fn is_last(&self, buf: Region<u8>) -> bool {
        self.offset_of(buf) + buf.len() == self.end.get()
    }
}

impl Allocator for FixedBuffer<'_> {
    fn alloc(&self, len: usize) -> Region<u8> {
        if len == 0 {
            return Region::empty();
        }

        let base = self.start.addr().get();
        let padding = (ALIGN - (base + self.end.get()) % ALIGN) % ALIGN;
        let offset = Usize::new(self.end.get()).try_add(Usize::new(padding));
        let end = offset.and_then(|offset| offset.try_add(Usize::new(len)));

        match (offset, end) {
            (Some(offset), Some(end)) if end.get() <= self.capacity => {
                self.end.set(end.get());
                trace!("fixed buffer: allocated {len} bytes at offset {offset}");
                // SAFETY: offset + len is within the borrowed buffer, and the range past the old end
                // isn't handed out to anyone else.
                unsafe { Region::from_raw_parts(self.start.add(offset.get()), len) }
            }
            _ => {
                debug!(
                    "fixed buffer: failed to allocate {len} bytes, {} of {} used",
                    self.end.get(),
                    self.capacity
                );
                Region::empty()
            }
        }
    }

    unsafe fn resize(&self, buf: Region<u8>, new_len: usize) -> bool {
        trace!("fixed buffer: resize {} -> {new_len} bytes", buf.len());
        if !self.is_last(buf) {
            // Anything but the last allocation can still shrink, it just can't give memory back.
            return new_len <= buf.len();
        }

        let offset = self.offset_of(buf);
        if new_len > self.capacity - offset {
            return false;
        }
        self.end.set(offset + new_len);
        true
    }

    unsafe fn free(&self, buf: Region<u8>) {
        trace!("fixed buffer: freeing {} bytes", buf.len());
        if self.is_last(buf) {
            self.end.set(self.offset_of(buf));
        }
    }
}
