mod array_list;
mod managed;

pub use array_list::*;
pub use managed::*;
