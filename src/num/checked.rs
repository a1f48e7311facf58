use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::Int;
use crate::panic::{
    ConversionPanic, DivideByZeroPanic, Fatal, InvalidShiftPanic, Operation, OverflowPanic,
};

/// A fixed-width integer whose arithmetic never wraps.
///
/// Every operator computes the mathematically exact result and panics if it isn't representable in
/// `T`. Overflow is treated as a bug in the caller rather than an expected failure, so there is no
/// [`Result`] to handle; use the `try_*` methods where overflow is a legitimate outcome.
///
/// | Operation | Fatal when |
/// |-|-|
/// | `+`, `-`, `*` | The exact result is outside `T::MIN..=T::MAX` |
/// | `/` | The divisor is zero, or `MIN / -1` |
/// | `%` | The divisor is zero (`MIN % -1` is `0`) |
/// | `<<` | The amount is outside `0..BITS`, or a set bit would be shifted out |
/// | `>>` | The amount is outside `0..BITS` |
/// | unary `-` | The value is `MIN` (not implemented at all for unsigned types) |
///
/// Comparisons and the bitwise operators `&`, `|`, `^` and `!` never fail.
///
/// # Examples
/// ```
/// # use standard_core::num::{Checked, I8};
/// let a = I8::new(100);
/// assert_eq!(a + 27, 127);
/// assert_eq!(a.try_add(Checked::new(28)), None);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Checked<T: Int>(T);

impl<T: Int> Checked<T> {
    pub const MIN: Checked<T> = Checked(T::MIN);
    pub const MAX: Checked<T> = Checked(T::MAX);
    pub const ZERO: Checked<T> = Checked(T::ZERO);
    pub const ONE: Checked<T> = Checked(T::ONE);

    /// Wraps a value of the same width. This can't fail.
    pub const fn new(value: T) -> Checked<T> {
        Checked(value)
    }

    /// Returns the wrapped primitive.
    pub const fn get(self) -> T {
        self.0
    }

    /// Constructs a `Checked<T>` from any primitive integer, narrowing if required.
    ///
    /// # Panics
    /// Panics if `value` isn't exactly representable as `T`.
    ///
    /// # Examples
    /// ```
    /// # use standard_core::num::{U8, I64};
    /// assert_eq!(U8::cast(200_i64), 200);
    /// assert_eq!(I64::cast(u32::MAX), 4_294_967_295_i64);
    /// ```
    #[track_caller]
    pub fn cast<U: Int>(value: U) -> Checked<T>
    where
        T: TryFrom<U>,
    {
        match T::try_from(value) {
            Ok(converted) => Checked(converted),
            Err(_) => ConversionPanic {
                value: value.to_string(),
                target: T::NAME,
            }
            .raise(),
        }
    }

    /// Constructs a `Checked<T>` from a `Checked` value of another width, through the same path as
    /// [`cast`](Checked::cast).
    ///
    /// # Panics
    /// Panics if `other` isn't exactly representable as `T`.
    #[track_caller]
    pub fn from_checked<U: Int>(other: Checked<U>) -> Checked<T>
    where
        T: TryFrom<U>,
    {
        Checked::cast(other.0)
    }

    /// Widens self into a type that can represent every value of `T`, e.g. `i32` into `i64`.
    /// Mixed-width arithmetic goes through this method so that the promotion is explicit.
    pub fn promote<U: Int + From<T>>(self) -> Checked<U> {
        Checked(U::from(self.0))
    }

    pub fn try_add(self, rhs: Checked<T>) -> Option<Checked<T>> {
        self.0.add_exact(rhs.0).map(Checked)
    }

    pub fn try_sub(self, rhs: Checked<T>) -> Option<Checked<T>> {
        self.0.sub_exact(rhs.0).map(Checked)
    }

    pub fn try_mul(self, rhs: Checked<T>) -> Option<Checked<T>> {
        self.0.mul_exact(rhs.0).map(Checked)
    }

    pub fn try_div(self, rhs: Checked<T>) -> Option<Checked<T>> {
        self.0.div_exact(rhs.0).map(Checked)
    }

    pub fn try_rem(self, rhs: Checked<T>) -> Option<Checked<T>> {
        self.0.rem_exact(rhs.0).map(Checked)
    }

    /// Returns [`None`] for `MIN` and for every unsigned value other than zero.
    pub fn try_neg(self) -> Option<Checked<T>> {
        if !T::SIGNED && self.0 == T::ZERO {
            return Some(self);
        }
        self.0.neg_exact().map(Checked)
    }

    pub fn try_shl(self, amount: u32) -> Option<Checked<T>> {
        self.0.shl_exact(amount).map(Checked)
    }

    pub fn try_shr(self, amount: u32) -> Option<Checked<T>> {
        self.0.shr_exact(amount).map(Checked)
    }

    /// Adds one in place, the counterpart of a prefix `++`.
    ///
    /// # Panics
    /// Panics if self is already `MAX`.
    #[track_caller]
    pub fn inc(&mut self) -> Checked<T> {
        match self.0.add_exact(T::ONE) {
            Some(value) => self.0 = value,
            None => OverflowPanic(Operation::Increment).raise(),
        }
        *self
    }

    /// Subtracts one in place, the counterpart of a prefix `--`.
    ///
    /// # Panics
    /// Panics if self is already `MIN`.
    #[track_caller]
    pub fn dec(&mut self) -> Checked<T> {
        match self.0.sub_exact(T::ONE) {
            Some(value) => self.0 = value,
            None => OverflowPanic(Operation::Decrement).raise(),
        }
        *self
    }

    #[track_caller]
    fn shift_amount(amount: Checked<T>) -> u32 {
        match amount.0.to_shift() {
            Some(amount) => amount,
            None => InvalidShiftPanic {
                amount: amount.0.to_i128(),
                bits: T::BITS,
            }
            .raise(),
        }
    }
}

#[track_caller]
fn unwrap_or_raise<T: Int>(value: Option<T>, op: Operation) -> Checked<T> {
    match value {
        Some(value) => Checked(value),
        None => OverflowPanic(op).raise(),
    }
}

#[track_caller]
fn checked_shl<T: Int>(value: T, amount: u32) -> Checked<T> {
    if amount >= T::BITS {
        InvalidShiftPanic {
            amount: amount.into(),
            bits: T::BITS,
        }
        .raise()
    }
    unwrap_or_raise(value.shl_exact(amount), Operation::LeftShift)
}

#[track_caller]
fn checked_shr<T: Int>(value: T, amount: u32) -> Checked<T> {
    match value.shr_exact(amount) {
        Some(value) => Checked(value),
        None => InvalidShiftPanic {
            amount: amount.into(),
            bits: T::BITS,
        }
        .raise(),
    }
}

#[track_caller]
fn checked_div<T: Int>(lhs: T, rhs: T) -> Checked<T> {
    if rhs == T::ZERO {
        DivideByZeroPanic.raise()
    }
    unwrap_or_raise(lhs.div_exact(rhs), Operation::Division)
}

#[track_caller]
fn checked_rem<T: Int>(lhs: T, rhs: T) -> Checked<T> {
    match lhs.rem_exact(rhs) {
        Some(value) => Checked(value),
        None => DivideByZeroPanic.raise(),
    }
}

impl<T: Int> From<T> for Checked<T> {
    fn from(value: T) -> Self {
        Checked(value)
    }
}

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, |$l:ident, $r:ident| $body:expr) => {
        impl<T: Int> $op for Checked<T> {
            type Output = Checked<T>;

            #[track_caller]
            fn $method(self, rhs: Checked<T>) -> Checked<T> {
                let ($l, $r) = (self.0, rhs.0);
                $body
            }
        }

        impl<T: Int> $op<T> for Checked<T> {
            type Output = Checked<T>;

            #[track_caller]
            fn $method(self, rhs: T) -> Checked<T> {
                $op::$method(self, Checked(rhs))
            }
        }

        impl<T: Int> $assign_op for Checked<T> {
            #[track_caller]
            fn $assign_method(&mut self, rhs: Checked<T>) {
                *self = $op::$method(*self, rhs);
            }
        }

        impl<T: Int> $assign_op<T> for Checked<T> {
            #[track_caller]
            fn $assign_method(&mut self, rhs: T) {
                *self = $op::$method(*self, Checked(rhs));
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, |l, r| unwrap_or_raise(
    l.add_exact(r),
    Operation::Addition
));
impl_binary_op!(Sub, sub, SubAssign, sub_assign, |l, r| unwrap_or_raise(
    l.sub_exact(r),
    Operation::Subtraction
));
impl_binary_op!(Mul, mul, MulAssign, mul_assign, |l, r| unwrap_or_raise(
    l.mul_exact(r),
    Operation::Multiplication
));
impl_binary_op!(Div, div, DivAssign, div_assign, |l, r| checked_div(l, r));
impl_binary_op!(Rem, rem, RemAssign, rem_assign, |l, r| checked_rem(l, r));
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, |l, r| Checked(l.bit_and(r)));
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, |l, r| Checked(l.bit_or(r)));
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, |l, r| Checked(l.bit_xor(r)));

impl<T: Int> Shl<u32> for Checked<T> {
    type Output = Checked<T>;

    #[track_caller]
    fn shl(self, amount: u32) -> Checked<T> {
        checked_shl(self.0, amount)
    }
}

impl<T: Int> Shl for Checked<T> {
    type Output = Checked<T>;

    #[track_caller]
    fn shl(self, amount: Checked<T>) -> Checked<T> {
        checked_shl(self.0, Self::shift_amount(amount))
    }
}

impl<T: Int> Shr<u32> for Checked<T> {
    type Output = Checked<T>;

    #[track_caller]
    fn shr(self, amount: u32) -> Checked<T> {
        checked_shr(self.0, amount)
    }
}

impl<T: Int> Shr for Checked<T> {
    type Output = Checked<T>;

    #[track_caller]
    fn shr(self, amount: Checked<T>) -> Checked<T> {
        checked_shr(self.0, Self::shift_amount(amount))
    }
}

impl<T: Int> ShlAssign<u32> for Checked<T> {
    #[track_caller]
    fn shl_assign(&mut self, amount: u32) {
        *self = *self << amount;
    }
}

impl<T: Int> ShrAssign<u32> for Checked<T> {
    #[track_caller]
    fn shr_assign(&mut self, amount: u32) {
        *self = *self >> amount;
    }
}

impl<T: Int> Not for Checked<T> {
    type Output = Checked<T>;

    fn not(self) -> Checked<T> {
        Checked(self.0.bit_not())
    }
}

// Negation only exists for signed widths, so `-U8::new(1)` is rejected at compile time.
macro_rules! impl_neg {
    ($($t:ty),*) => {$(
        impl Neg for Checked<$t> {
            type Output = Checked<$t>;

            #[track_caller]
            fn neg(self) -> Checked<$t> {
                unwrap_or_raise(self.0.neg_exact(), Operation::Negation)
            }
        }
    )*};
}

impl_neg!(i8, i16, i32, i64, isize);

impl<T: Int> PartialEq<T> for Checked<T> {
    fn eq(&self, other: &T) -> bool {
        self.0 == *other
    }
}

impl<T: Int> PartialOrd<T> for Checked<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.0.cmp(other))
    }
}

impl<T: Int> Debug for Checked<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<T: Int> Display for Checked<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

pub type I8 = Checked<i8>;
pub type I16 = Checked<i16>;
pub type I32 = Checked<i32>;
pub type I64 = Checked<i64>;
pub type Isize = Checked<isize>;
pub type U8 = Checked<u8>;
pub type U16 = Checked<u16>;
pub type U32 = Checked<u32>;
pub type U64 = Checked<u64>;
pub type Usize = Checked<usize>;
