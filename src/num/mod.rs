//! Overflow-checked integers.
//!
//! [`Checked<T>`] wraps one of the primitive integer types and replaces its wrapping (or, in debug
//! builds, inconsistently panicking) arithmetic with arithmetic that always produces the exact
//! result or panics. The aliases [`I8`] through [`Usize`] mirror the primitive names.
//!
//! Values of different widths never mix implicitly. To add an `I32` to an `I64`, promote the
//! narrower one first with [`Checked::promote`], or narrow with [`Checked::cast`], which panics if
//! the value doesn't fit.

mod checked;
mod int;
mod tests;

pub use checked::*;
pub use int::Int;
