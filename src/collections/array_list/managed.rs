use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::Deref;

use super::ArrayList;
use crate::alloc::{AllocError, Allocator};
use crate::outcome::Outcome;

/// An [`ArrayList`] bound to the allocator it lives in.
///
/// Holding the allocator makes every operation safe, and the backing region is released when the
/// Managed list goes out of scope.
///
/// # Examples
/// ```
/// # use standard_core::alloc::{Counting, Global};
/// # use standard_core::collections::Managed;
/// let alloc = Counting::new(Global);
/// {
///     let mut list = Managed::new(&alloc);
///     list.append("a");
///     list.append("b");
///     assert_eq!(list.pop(), Some("b"));
///     assert_eq!(&list[..], &["a"]);
/// }
/// assert_eq!(alloc.stats().live_bytes, 0);
/// ```
pub struct Managed<'a, T, A: Allocator + ?Sized> {
    list: ArrayList<T>,
    alloc: &'a A,
}

impl<'a, T, A: Allocator + ?Sized> Managed<'a, T, A> {
    pub const fn new(alloc: &'a A) -> Managed<'a, T, A> {
        Managed {
            list: ArrayList::init(),
            alloc,
        }
    }

    /// Binds an existing list to `alloc`.
    ///
    /// # Safety
    /// `alloc` must be the allocator used by every previous call on `list`.
    pub const unsafe fn from_list(list: ArrayList<T>, alloc: &'a A) -> Managed<'a, T, A> {
        Managed { list, alloc }
    }

    pub const fn allocator(&self) -> &'a A {
        self.alloc
    }

    /// Returns the populated items as a mutable slice.
    pub const fn items_mut(&mut self) -> &mut [T] {
        self.list.items_mut()
    }

    /// See [`ArrayList::append`].
    ///
    /// # Panics
    /// Panics if growing the list fails.
    #[track_caller]
    pub fn append(&mut self, item: T) {
        // SAFETY: self.alloc is the only allocator this list is ever used with.
        unsafe { self.list.append(self.alloc, item) }
    }

    /// See [`ArrayList::try_append`].
    ///
    /// # Errors
    /// As [`ArrayList::try_append`].
    #[track_caller]
    pub fn try_append(&mut self, item: T) -> Outcome<(), AllocError> {
        // SAFETY: self.alloc is the only allocator this list is ever used with.
        unsafe { self.list.try_append(self.alloc, item) }
    }

    /// See [`ArrayList::pop`].
    pub fn pop(&mut self) -> Option<T> {
        // SAFETY: self.alloc is the only allocator this list is ever used with.
        unsafe { self.list.pop(self.alloc) }
    }

    /// Detaches the list from its allocator without releasing it. The caller takes on the
    /// responsibility of eventually calling [`ArrayList::deinit`] with the same allocator.
    pub fn into_inner(mut self) -> ArrayList<T> {
        mem::take(&mut self.list)
    }
}

impl<T, A: Allocator + ?Sized> Deref for Managed<'_, T, A> {
    type Target = ArrayList<T>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl<T, A: Allocator + ?Sized> Drop for Managed<'_, T, A> {
    fn drop(&mut self) {
        let list = mem::take(&mut self.list);
        // SAFETY: self.alloc is the only allocator this list is ever used with.
        unsafe { list.deinit(self.alloc) }
    }
}

impl<T: Debug, A: Allocator + ?Sized> Debug for Managed<'_, T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Managed").field(&self.list).finish()
    }
}
