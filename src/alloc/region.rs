use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;
use std::slice;

/// A non-owning view of `len` contiguous elements of `T`, starting at a non-null address.
///
/// Regions are the currency of the [`Allocator`](super::Allocator) interface: backends hand out
/// byte regions (`Region<u8>`), and the typed helpers in [`AllocatorExt`](super::AllocatorExt)
/// reinterpret them as regions of elements. A Region carries no ownership. Copying one doesn't copy
/// the memory, and nothing prevents using a region after it has been freed; that is the job of the
/// owning type, such as [`ArrayList`](crate::collections::ArrayList).
///
/// The empty sentinel, returned by [`Region::empty`], has length zero and a dangling address. It
/// must never be dereferenced, and it never reaches a backend's `resize` or `free`.
pub struct Region<T> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T> Region<T> {
    /// Returns the empty sentinel region.
    pub const fn empty() -> Region<T> {
        Region {
            ptr: NonNull::dangling(),
            len: 0,
        }
    }

    /// Creates a Region from a start address and an element count.
    ///
    /// # Safety
    /// `ptr` must be valid for reads and writes of `len` elements of `T`, or `len` must be zero, or
    /// `T` must be zero-sized.
    pub const unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> Region<T> {
        Region { ptr, len }
    }

    /// The number of elements in the Region.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The start address of the Region. Dangling for the empty sentinel.
    pub const fn as_ptr(&self) -> NonNull<T> {
        self.ptr
    }

    /// The number of bytes covered by the Region.
    pub const fn byte_len(&self) -> usize {
        // A Region always describes memory that was allocated in one piece, so this can't overflow.
        self.len * size_of::<T>()
    }

    /// Reinterprets the Region as the bytes it covers.
    pub const fn into_bytes(self) -> Region<u8> {
        Region {
            ptr: self.ptr.cast(),
            len: self.byte_len(),
        }
    }

    /// Returns a Region with the same start address and a different length.
    ///
    /// # Safety
    /// The resulting Region must satisfy the requirements of [`Region::from_raw_parts`].
    pub const unsafe fn with_len(self, len: usize) -> Region<T> {
        Region { ptr: self.ptr, len }
    }

    /// Views the Region as a slice.
    ///
    /// # Safety
    /// All `len` elements must be initialized and the memory must stay valid and unaliased by
    /// mutable access for `'a`.
    pub const unsafe fn as_slice<'a>(&self) -> &'a [T] {
        // SAFETY: The caller guarantees that all elements are initialized and valid for 'a.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Views the Region as a mutable slice.
    ///
    /// # Safety
    /// All `len` elements must be initialized and the memory must stay valid and otherwise
    /// unaliased for `'a`.
    pub const unsafe fn as_mut_slice<'a>(&mut self) -> &'a mut [T] {
        // SAFETY: The caller guarantees that all elements are initialized and exclusively
        // accessible for 'a.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Region<u8> {
    /// Reinterprets a byte Region as a Region of `count` elements of `T`.
    ///
    /// # Safety
    /// The Region must be aligned for `T` and cover at least `count * size_of::<T>()` bytes.
    pub const unsafe fn into_typed<T>(self, count: usize) -> Region<T> {
        Region {
            ptr: self.ptr.cast(),
            len: count,
        }
    }
}

impl<T> Clone for Region<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Region<T> {}

impl<T> PartialEq for Region<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.len == other.len
    }
}

impl<T> Eq for Region<T> {}

impl<T> Debug for Region<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}
