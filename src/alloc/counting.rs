use std::cell::Cell;

use super::{Allocator, Region};
use crate::num::Usize;

/// A snapshot of the traffic through a [`Counting`] allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Calls to `alloc` that returned memory.
    pub allocs: usize,
    /// Calls to `alloc` with a nonzero length that returned the empty region. Zero-length requests
    /// are passed through without being counted.
    pub failed_allocs: usize,
    /// Calls to `resize`, successful or not.
    pub resizes: usize,
    /// Calls to `resize` that succeeded.
    pub resized_in_place: usize,
    pub frees: usize,
    /// Bytes currently allocated.
    pub live_bytes: usize,
    /// The highest value `live_bytes` has reached.
    pub peak_bytes: usize,
}

impl Stats {
    /// The total number of calls made to the wrapped allocator.
    ///
    /// # Panics
    /// Panics if the total overflows `usize`.
    #[track_caller]
    pub fn calls(&self) -> usize {
        (Usize::new(self.allocs) + self.failed_allocs + self.resizes + self.frees).get()
    }

    /// The number of allocations that haven't been freed.
    ///
    /// # Panics
    /// Panics if more frees than allocations were recorded.
    #[track_caller]
    pub fn live_allocs(&self) -> usize {
        (Usize::new(self.allocs) - self.frees).get()
    }
}

/// Wraps an [`Allocator`] and counts every call made to it.
///
/// The byte counters use checked arithmetic, and a free is accounted before it reaches the wrapped
/// allocator. Freeing more bytes than are live panics without touching the backend, which catches a
/// double free while nothing else is allocated. Counting doesn't track individual regions, so a
/// double free that the live total can absorb still reaches the wrapped allocator.
///
/// # Examples
/// ```
/// use standard_core::alloc::{AllocatorExt, Counting, Global};
///
/// let alloc = Counting::new(Global);
/// let region = alloc.alloc_array::<u64>(8);
/// assert_eq!(alloc.stats().live_bytes, 64);
///
/// unsafe { alloc.free_array(region) };
/// assert_eq!(alloc.stats().live_bytes, 0);
/// assert_eq!(alloc.stats().peak_bytes, 64);
/// ```
#[derive(Debug, Default)]
pub struct Counting<A> {
    inner: A,
    allocs: Cell<Usize>,
    failed_allocs: Cell<Usize>,
    resizes: Cell<Usize>,
    resized_in_place: Cell<Usize>,
    frees: Cell<Usize>,
    live_bytes: Cell<Usize>,
    peak_bytes: Cell<Usize>,
}

impl<A: Allocator> Counting<A> {
    pub fn new(inner: A) -> Counting<A> {
        Counting {
            inner,
            allocs: Cell::default(),
            failed_allocs: Cell::default(),
            resizes: Cell::default(),
            resized_in_place: Cell::default(),
            frees: Cell::default(),
            live_bytes: Cell::default(),
            peak_bytes: Cell::default(),
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            allocs: self.allocs.get().get(),
            failed_allocs: self.failed_allocs.get().get(),
            resizes: self.resizes.get().get(),
            resized_in_place: self.resized_in_place.get().get(),
            frees: self.frees.get().get(),
            live_bytes: self.live_bytes.get().get(),
            peak_bytes: self.peak_bytes.get().get(),
        }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn into_inner(self) -> A {
        self.inner
    }

    fn grow_live(&self, bytes: usize) {
        let live = self.live_bytes.get() + bytes;
        self.live_bytes.set(live);
        self.peak_bytes.set(live.max(self.peak_bytes.get()));
    }
}

fn bump(counter: &Cell<Usize>) {
    let mut count = counter.get();
    count.inc();
    counter.set(count);
}

impl<A: Allocator> Allocator for Counting<A> {
    fn alloc(&self, len: usize) -> Region<u8> {
        if len == 0 {
            return self.inner.alloc(0);
        }
        let region = self.inner.alloc(len);
        if region.is_empty() {
            bump(&self.failed_allocs);
        } else {
            bump(&self.allocs);
            self.grow_live(region.len());
        }
        region
    }

    unsafe fn resize(&self, buf: Region<u8>, new_len: usize) -> bool {
        bump(&self.resizes);
        // SAFETY: The requirements are passed on to the caller.
        let resized = unsafe { self.inner.resize(buf, new_len) };
        if resized {
            bump(&self.resized_in_place);
            if new_len >= buf.len() {
                self.grow_live(new_len - buf.len());
            } else {
                self.live_bytes.set(self.live_bytes.get() - (buf.len() - new_len));
            }
        }
        resized
    }

    unsafe fn free(&self, buf: Region<u8>) {
        bump(&self.frees);
        self.live_bytes.set(self.live_bytes.get() - buf.len());
        // SAFETY: The requirements are passed on to the caller.
        unsafe { self.inner.free(buf) }
    }
}
