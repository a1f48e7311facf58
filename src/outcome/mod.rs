//! Error-or-value results over closed error sets.
//!
//! [`Outcome<T, E>`] is the return type of computations that can legitimately fail. `E` is an
//! [`ErrorSet`]: a closed enum listing every error kind the computation may produce. Kinds are
//! ordinary types (usually ZSTs deriving `Display` and `Error`), so the same kind can appear in
//! many sets, and an Outcome can be widened from a narrow set into any set that lists all of its
//! kinds.
//!
//! The [`error_set!`](crate::error_set), [`widen!`](crate::widen) and
//! [`attempt!`](crate::attempt) macros cover the boilerplate: declaring a set, declaring which
//! sets widen into which, and propagating errors upwards.

mod macros;
mod outcome;
mod set;

pub use outcome::*;
pub use set::*;
