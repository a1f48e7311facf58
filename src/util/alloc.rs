use std::cell::Cell;
use std::rc::Rc;

/// A zero-sized element, used to check that no allocator traffic occurs for ZSTs.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// An element that bumps a shared counter when dropped.
#[derive(Debug, Clone)]
pub struct DropCounter {
    count: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter {
            count: Rc::new(Cell::new(0)),
        }
    }

    /// Number of clones of this counter which have been dropped so far.
    pub fn dropped(&self) -> usize {
        self.count.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.count.set(self.count.get() + 1);
    }
}

/// A byte buffer aligned like every allocator region, so that offsets into it are predictable.
#[repr(C, align(16))]
pub struct AlignedBytes<const N: usize>(pub [u8; N]);

impl<const N: usize> AlignedBytes<N> {
    pub fn new() -> AlignedBytes<N> {
        AlignedBytes([0; N])
    }
}
