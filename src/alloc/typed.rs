use std::cmp;
use std::ptr::{self, NonNull};

use super::{ALIGN, AllocError, Allocator, CapacityOverflow, OutOfMemory, Region};
use crate::logging::trace;
use crate::num::Usize;
use crate::outcome::Outcome;
use crate::panic::{Fatal, OverAlignedPanic};

const MAX_BYTES: usize = isize::MAX as usize;

/// Element-typed helpers over any [`Allocator`].
///
/// These translate element counts into byte lengths, with the multiplication going through
/// [`Checked`](crate::num::Checked) arithmetic. Zero-sized element types never reach the backend:
/// their regions use a dangling address with the requested count.
///
/// The helpers come in two flavours. The `try_` versions report a failed allocation as an
/// [`AllocError`] and leave any region they were given untouched; the plain versions treat the same
/// failure as fatal.
///
/// Element types aligned beyond [`ALIGN`] are rejected with a panic by every helper.
pub trait AllocatorExt: Allocator {
    /// Allocates an uninitialized region of `count` elements.
    ///
    /// # Panics
    /// Panics if the allocation fails or its size overflows `isize::MAX`.
    #[track_caller]
    fn alloc_array<T>(&self, count: usize) -> Region<T> {
        match self.try_alloc_array(count).into_result() {
            Ok(region) => region,
            Err(error) => error.raise(),
        }
    }

    /// Allocates an uninitialized region of `count` elements.
    ///
    /// # Errors
    /// [`OutOfMemory`] if the backend can't provide the memory and [`CapacityOverflow`] if the
    /// size in bytes would exceed `isize::MAX`.
    ///
    /// # Panics
    /// Panics if `T` is over-aligned.
    #[track_caller]
    fn try_alloc_array<T>(&self, count: usize) -> Outcome<Region<T>, AllocError> {
        check_align::<T>();

        if count == 0 {
            return Outcome::ok(Region::empty());
        }
        if size_of::<T>() == 0 {
            // SAFETY: Any non-null, aligned address is valid for zero-sized reads and writes.
            return Outcome::ok(unsafe { Region::from_raw_parts(NonNull::dangling(), count) });
        }

        let Some(bytes) = byte_len::<T>(count) else {
            return Outcome::err(CapacityOverflow);
        };

        let region = self.alloc(bytes);
        if region.len() != bytes {
            return Outcome::err(OutOfMemory { bytes });
        }

        // SAFETY: The backend returned `bytes` bytes aligned to ALIGN, which covers `count`
        // elements of T with T's alignment <= ALIGN.
        Outcome::ok(unsafe { region.into_typed(count) })
    }

    /// Returns a region obtained from this allocator. Freeing the empty sentinel, or a region of
    /// zero-sized elements, does nothing.
    ///
    /// # Safety
    /// `region` must be exactly the region last returned for its allocation by one of the typed
    /// helpers of this allocator, and must not be used afterwards.
    unsafe fn free_array<T>(&self, region: Region<T>) {
        if region.is_empty() || size_of::<T>() == 0 {
            return;
        }
        // SAFETY: The caller guarantees that region is a live allocation of this allocator.
        unsafe { self.free(region.into_bytes()) }
    }

    /// Changes the number of elements in `region`, moving the allocation if it can't be resized in
    /// place. See [`try_realloc_array`](AllocatorExt::try_realloc_array).
    ///
    /// # Safety
    /// See [`try_realloc_array`](AllocatorExt::try_realloc_array).
    ///
    /// # Panics
    /// Panics if a new allocation is required and fails.
    #[track_caller]
    unsafe fn realloc_array<T>(&self, region: Region<T>, new_count: usize) -> Region<T> {
        // SAFETY: The requirements are passed on to the caller.
        match unsafe { self.try_realloc_array(region, new_count) }.into_result() {
            Ok(region) => region,
            Err(error) => error.raise(),
        }
    }

    /// Changes the number of elements in `region`.
    ///
    /// The backend is first asked to resize the allocation in place. If it can't, a new region is
    /// allocated, the first `min(old, new)` elements are moved across bitwise and the old region is
    /// freed. Reallocating to zero frees the region and returns the empty sentinel; reallocating the
    /// empty sentinel is a fresh allocation.
    ///
    /// # Errors
    /// As [`try_alloc_array`](AllocatorExt::try_alloc_array). On error, `region` is still valid and
    /// still owned by the caller.
    ///
    /// # Safety
    /// `region` must be the empty sentinel or exactly the region last returned for its allocation by
    /// one of the typed helpers of this allocator. On success it must not be used again; use the
    /// returned region instead. Elements past `new_count` are not dropped.
    #[track_caller]
    unsafe fn try_realloc_array<T>(
        &self,
        region: Region<T>,
        new_count: usize,
    ) -> Outcome<Region<T>, AllocError> {
        check_align::<T>();

        if size_of::<T>() == 0 {
            // SAFETY: Any non-null, aligned address is valid for zero-sized reads and writes.
            return Outcome::ok(unsafe { Region::from_raw_parts(NonNull::dangling(), new_count) });
        }
        if new_count == region.len() {
            return Outcome::ok(region);
        }
        if new_count == 0 {
            // SAFETY: The caller guarantees that region belongs to this allocator.
            unsafe { self.free_array(region) };
            return Outcome::ok(Region::empty());
        }
        if region.is_empty() {
            return self.try_alloc_array(new_count);
        }

        let Some(new_bytes) = byte_len::<T>(new_count) else {
            return Outcome::err(CapacityOverflow);
        };

        // SAFETY: region is a live allocation of this allocator and new_bytes is nonzero.
        if unsafe { self.resize(region.into_bytes(), new_bytes) } {
            trace!("resized {} -> {} elements in place", region.len(), new_count);
            // SAFETY: The backend confirmed that the address is now valid for new_bytes.
            return Outcome::ok(unsafe { region.with_len(new_count) });
        }

        let fresh = match self.try_alloc_array::<T>(new_count) {
            Outcome::Value(fresh) => fresh,
            other => return other,
        };
        trace!("moved {} -> {} elements to a new allocation", region.len(), new_count);

        // SAFETY: Both regions are valid for at least `min(old, new)` elements and belong to
        // distinct allocations, so they don't overlap.
        unsafe {
            ptr::copy_nonoverlapping(
                region.as_ptr().as_ptr(),
                fresh.as_ptr().as_ptr(),
                cmp::min(region.len(), new_count),
            );
            self.free_array(region);
        }

        Outcome::ok(fresh)
    }

    /// Moves `value` into a new single-element allocation.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[track_caller]
    fn create<T>(&self, value: T) -> NonNull<T> {
        let region = self.alloc_array::<T>(1);
        // SAFETY: region is valid for one, currently uninitialized, element.
        unsafe { region.as_ptr().write(value) };
        region.as_ptr()
    }

    /// Moves the value out of an allocation made by [`create`](AllocatorExt::create) and frees it.
    ///
    /// # Safety
    /// `item` must have been returned by `create` on this allocator and not destroyed already.
    unsafe fn destroy<T>(&self, item: NonNull<T>) -> T {
        // SAFETY: item points to an initialized T created by this allocator.
        unsafe {
            let value = item.read();
            self.free_array(Region::from_raw_parts(item, 1));
            value
        }
    }
}

impl<A: Allocator + ?Sized> AllocatorExt for A {}

/// The number of bytes taken by `count` elements of `T`, if that fits in an allocation.
fn byte_len<T>(count: usize) -> Option<usize> {
    Usize::new(count)
        .try_mul(Usize::new(size_of::<T>()))
        .map(Usize::get)
        .filter(|&bytes| bytes <= MAX_BYTES)
}

#[track_caller]
fn check_align<T>() {
    if align_of::<T>() > ALIGN {
        OverAlignedPanic {
            align: align_of::<T>(),
            limit: ALIGN,
        }
        .raise()
    }
}
