use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::ptr;

use crate::alloc::{AllocError, Allocator, AllocatorExt, CapacityOverflow, Region};
use crate::logging::{debug, trace};
use crate::num::Usize;
use crate::outcome::Outcome;

/// The capacity allocated by the first append.
pub const MIN_CAP: usize = 16;
/// The factor the capacity grows by when an append finds the list full.
pub const GROWTH_FACTOR: usize = 2;
/// A pop halves the capacity once fewer than `cap / SHRINK_DIVISOR` items are populated.
pub const SHRINK_DIVISOR: usize = 4;

/// A growable, contiguous list that doesn't own an allocator.
///
/// Every operation that might touch memory takes the [`Allocator`] as an argument, and every one of
/// those calls must receive the same allocator. That can't be checked, so those methods are
/// `unsafe`; [`Managed`](super::Managed) binds a list to its allocator and offers the same
/// operations safely.
///
/// The list is move-only. It must be released with [`deinit`](ArrayList::deinit); dropping a list
/// that still holds capacity leaks the backing region (and the items in it).
///
/// Capacity follows an amortized doubling and halving policy: the first append allocates
/// [`MIN_CAP`] slots, an append to a full list multiplies the capacity by [`GROWTH_FACTOR`], and a
/// pop from a list that is less than a quarter full halves the capacity first. The gap between the
/// two thresholds keeps alternating appends and pops from reallocating every time.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `deinit` | `O(n)` |
///
/// \* Amortized. A call that grows or shrinks the capacity may have to move every item.
pub struct ArrayList<T> {
    items: Region<T>,
    cap: Usize,
    _owned: PhantomData<T>,
}

impl<T> ArrayList<T> {
    /// Creates an empty ArrayList with capacity 0, without allocating.
    ///
    /// # Examples
    /// ```
    /// # use standard_core::collections::ArrayList;
    /// let list: ArrayList<u8> = ArrayList::init();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 0);
    /// ```
    pub const fn init() -> ArrayList<T> {
        ArrayList {
            items: Region::empty(),
            cap: Usize::new(0),
            _owned: PhantomData,
        }
    }

    /// Returns the number of populated items.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items the backing region can hold.
    pub const fn cap(&self) -> usize {
        self.cap.get()
    }

    /// Returns the populated items as a slice.
    pub const fn items(&self) -> &[T] {
        // SAFETY: Every item below len is initialized, and the borrow of self keeps the region
        // from being modified.
        unsafe { self.items.as_slice() }
    }

    /// Returns the populated items as a mutable slice.
    pub const fn items_mut(&mut self) -> &mut [T] {
        // SAFETY: Every item below len is initialized, and the mutable borrow of self gives
        // exclusive access.
        unsafe { self.items.as_mut_slice() }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items().get(index)
    }

    /// Appends `item` to the end of the list, growing the capacity if it is full.
    ///
    /// # Panics
    /// Panics if growing the list fails, either because the allocator is out of memory or because
    /// the new capacity doesn't fit in `isize::MAX` bytes.
    ///
    /// # Safety
    /// `alloc` must be the allocator used by every previous call on this list.
    ///
    /// # Examples
    /// ```
    /// # use standard_core::alloc::Global;
    /// # use standard_core::collections::ArrayList;
    /// let mut list = ArrayList::init();
    /// for i in 0..=16 {
    ///     // SAFETY: Global is used for every call on list.
    ///     unsafe { list.append(&Global, i) };
    /// }
    /// assert_eq!(list.len(), 17);
    /// assert_eq!(list.cap(), 32);
    /// unsafe { list.deinit(&Global) };
    /// ```
    #[track_caller]
    pub unsafe fn append<A: Allocator + ?Sized>(&mut self, alloc: &A, item: T) {
        if self.len() == self.cap() {
            // SAFETY: The caller guarantees that alloc owns the backing region.
            if let Err(error) = unsafe { self.try_grow(alloc) }.into_result() {
                error.raise()
            }
        }
        // SAFETY: There is now at least one free slot past len.
        unsafe { self.push_unchecked(item) }
    }

    /// Appends `item` to the end of the list, growing the capacity if it is full. If the list can't
    /// grow, `item` is dropped and the list is left unchanged.
    ///
    /// # Errors
    /// [`OutOfMemory`](crate::alloc::OutOfMemory) if the allocator can't provide the larger region
    /// and [`CapacityOverflow`] if the new capacity doesn't fit in `isize::MAX` bytes.
    ///
    /// # Safety
    /// `alloc` must be the allocator used by every previous call on this list.
    #[track_caller]
    pub unsafe fn try_append<A: Allocator + ?Sized>(
        &mut self,
        alloc: &A,
        item: T,
    ) -> Outcome<(), AllocError> {
        if self.len() == self.cap() {
            // SAFETY: The caller guarantees that alloc owns the backing region.
            crate::attempt!(unsafe { self.try_grow(alloc) });
        }
        // SAFETY: There is now at least one free slot past len.
        unsafe { self.push_unchecked(item) };
        Outcome::ok(())
    }

    /// Removes the last item and returns it, or returns `None` if the list is empty.
    ///
    /// If fewer than a quarter of the slots are populated, the capacity is halved first. A failed
    /// shrink is ignored and leaves the capacity as it was.
    ///
    /// # Safety
    /// `alloc` must be the allocator used by every previous call on this list.
    pub unsafe fn pop<A: Allocator + ?Sized>(&mut self, alloc: &A) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        if self.len() < self.cap() / SHRINK_DIVISOR {
            // SAFETY: The caller guarantees that alloc owns the backing region.
            unsafe { self.shrink(alloc) };
        }

        let last = self.len() - 1;
        // SAFETY: last is below len, so the slot is initialized. Shortening items afterwards means
        // the value is only ever owned by the caller.
        unsafe {
            let value = self.items.as_ptr().add(last).read();
            self.items = self.items.with_len(last);
            Some(value)
        }
    }

    /// Drops every item and releases the backing region. A list that never allocated makes no
    /// allocator call.
    ///
    /// # Safety
    /// `alloc` must be the allocator used by every previous call on this list.
    pub unsafe fn deinit<A: Allocator + ?Sized>(mut self, alloc: &A) {
        let backing = self.backing();
        let items = self.items;
        // Forget the region before running any item destructors, so that a panicking destructor
        // can't lead to the region being released twice.
        self.items = Region::empty();
        self.cap = Usize::new(0);

        // SAFETY: The items are initialized and nothing else refers to them any more. backing is
        // the region alloc last returned for this list, as guaranteed by the caller.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                items.as_ptr().as_ptr(),
                items.len(),
            ));
            alloc.free_array(backing);
        }
        trace!("array list: released capacity {}", backing.len());
    }

    /// Writes `item` into the slot past the last populated one.
    ///
    /// # Safety
    /// len must be below cap.
    const unsafe fn push_unchecked(&mut self, item: T) {
        let len = self.items.len();
        // SAFETY: The caller guarantees that the slot at len is within the backing region.
        unsafe {
            self.items.as_ptr().add(len).write(item);
            self.items = self.items.with_len(len + 1);
        }
    }

    /// The whole backing region, including unpopulated slots.
    const fn backing(&self) -> Region<T> {
        // SAFETY: The backing region is always cap items long, starting at the items.
        unsafe { self.items.with_len(self.cap.get()) }
    }

    /// Takes over `region` as the backing region, keeping the populated count.
    fn set_backing(&mut self, region: Region<T>) {
        // SAFETY: The caller moved the populated items into region, which holds at least len.
        self.items = unsafe { region.with_len(self.items.len()) };
        self.cap = Usize::new(region.len());
    }

    /// # Safety
    /// `alloc` must own the backing region.
    #[track_caller]
    unsafe fn try_grow<A: Allocator + ?Sized>(&mut self, alloc: &A) -> Outcome<(), AllocError> {
        let new_cap = if self.cap() == 0 {
            Usize::new(MIN_CAP)
        } else {
            match self.cap.try_mul(Usize::new(GROWTH_FACTOR)) {
                Some(new_cap) => new_cap,
                None => return Outcome::err(CapacityOverflow),
            }
        };

        // SAFETY: The caller guarantees that alloc owns the backing region. Every slot is
        // populated, so the reallocation preserves all items.
        let region = crate::attempt!(unsafe { alloc.try_realloc_array(self.backing(), new_cap.get()) });
        trace!("array list: grew capacity {} -> {}", self.cap, new_cap);
        self.set_backing(region);
        Outcome::ok(())
    }

    /// # Safety
    /// `alloc` must own the backing region.
    unsafe fn shrink<A: Allocator + ?Sized>(&mut self, alloc: &A) {
        let new_cap = self.cap() / 2;
        // SAFETY: The caller guarantees that alloc owns the backing region. len is below a quarter
        // of the capacity, so every populated item survives the shrink.
        match unsafe { alloc.try_realloc_array(self.backing(), new_cap) } {
            Outcome::Value(region) => {
                trace!("array list: shrank capacity {} -> {}", self.cap, new_cap);
                self.set_backing(region);
            }
            _ => {
                debug!("array list: failed to shrink capacity {} -> {}", self.cap, new_cap);
            }
        }
    }
}

// SAFETY: ArrayList owns its items and the backing region is never shared with another list, so
// sending the list sends the items.
unsafe impl<T: Send> Send for ArrayList<T> {}

// SAFETY: Shared access to an ArrayList only hands out shared references to its items.
unsafe impl<T: Sync> Sync for ArrayList<T> {}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        ArrayList::init()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        if self.cap() != 0 {
            debug!(
                "array list: dropped without deinit, leaking {} items and capacity {}",
                self.len(),
                self.cap
            );
        }
    }
}

impl<T> Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.items()
    }
}

impl<T> DerefMut for ArrayList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.items_mut()
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("items", &self.items())
            .field("cap", &self.cap())
            .finish()
    }
}
