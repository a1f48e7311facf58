//! Fatal conditions.
//!
//! Everything in this module describes a broken contract rather than an expected failure: an
//! arithmetic result that doesn't fit, an [`Outcome`](crate::outcome::Outcome) read in the wrong
//! state or an allocation that the caller declared it couldn't live without. Each condition is a
//! small type implementing [`Fatal`], which panics with the condition's message. All raise sites are
//! `#[track_caller]`, so the panic message points at the caller's source location.
//!
//! Binaries that want a hard abort instead of unwinding should set `panic = "abort"` in their
//! profile. The crate itself always unwinds, so that the fatal paths remain testable.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error};

/// A condition that terminates the current thread of execution.
pub trait Fatal: Error {
    /// Panics with the message of `self`.
    ///
    /// # Panics
    /// Always.
    #[track_caller]
    fn raise(&self) -> ! {
        panic!("{}", self)
    }
}

/// The arithmetic operation that triggered an [`OverflowPanic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Negation,
    LeftShift,
    Increment,
    Decrement,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Negation => "negation",
            Operation::LeftShift => "left shift",
            Operation::Increment => "increment",
            Operation::Decrement => "decrement",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Display, Error)]
#[display("integer overflow in {_0}")]
pub struct OverflowPanic(#[error(not(source))] pub Operation);
impl Fatal for OverflowPanic {}

#[derive(Debug, Display, Error)]
#[display("division by zero")]
pub struct DivideByZeroPanic;
impl Fatal for DivideByZeroPanic {}

#[derive(Debug, Display, Error)]
#[display("invalid shift amount {amount} for a {bits}-bit integer")]
pub struct InvalidShiftPanic {
    pub amount: i128,
    pub bits: u32,
}
impl Fatal for InvalidShiftPanic {}

#[derive(Debug, Display, Error)]
#[display("integer conversion overflow: {value} is not representable as {target}")]
pub struct ConversionPanic {
    pub value: String,
    pub target: &'static str,
}
impl Fatal for ConversionPanic {}

#[derive(Debug, Display, Error)]
#[display("outcome does not contain {expected}, it is {actual}")]
pub struct WrongStatePanic {
    pub expected: &'static str,
    pub actual: &'static str,
}
impl Fatal for WrongStatePanic {}

#[derive(Debug, Display, Error)]
#[display("memory allocation of {bytes} bytes failed")]
pub struct OutOfMemoryPanic {
    pub bytes: usize,
}
impl Fatal for OutOfMemoryPanic {}

#[derive(Debug, Display, Error)]
#[display("capacity overflow")]
pub struct CapacityOverflowPanic;
impl Fatal for CapacityOverflowPanic {}

#[derive(Debug, Display, Error)]
#[display("alignment {align} exceeds the allocator guarantee of {limit}")]
pub struct OverAlignedPanic {
    pub align: usize,
    pub limit: usize,
}
impl Fatal for OverAlignedPanic {}
