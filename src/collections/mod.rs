//! Collections that take their memory from an explicit [`Allocator`](crate::alloc::Allocator).

pub mod array_list;

#[doc(inline)]
pub use array_list::{ArrayList, Managed};
