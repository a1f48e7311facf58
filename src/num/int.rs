use std::fmt::{Debug, Display};
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// A primitive fixed-width integer that can be wrapped by [`Checked`](super::Checked).
///
/// The `*_exact` methods return [`None`] whenever the mathematically exact result isn't
/// representable in `Self`. They are the only place overflow detection happens; the operators on
/// `Checked` turn a [`None`] into a fatal panic and the `try_*` methods hand it back to the caller.
///
/// This trait is sealed: it is implemented for `i8`..`i64`, `isize`, `u8`..`u64` and `usize`.
pub trait Int:
    sealed::Sealed + Copy + Eq + Ord + Hash + Default + Debug + Display + Send + Sync + 'static
{
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;
    const BITS: u32;
    const SIGNED: bool;
    /// The type name used in diagnostics, e.g. `"i32"`.
    const NAME: &'static str;

    fn add_exact(self, rhs: Self) -> Option<Self>;
    fn sub_exact(self, rhs: Self) -> Option<Self>;
    fn mul_exact(self, rhs: Self) -> Option<Self>;
    /// Truncating division. [`None`] for a zero divisor and for `MIN / -1`.
    fn div_exact(self, rhs: Self) -> Option<Self>;
    /// Truncating remainder. [`None`] for a zero divisor. `MIN % -1` is `0`.
    fn rem_exact(self, rhs: Self) -> Option<Self>;
    fn neg_exact(self) -> Option<Self>;
    /// Left shift which fails if `amount >= BITS` or if a set bit would be shifted out.
    fn shl_exact(self, amount: u32) -> Option<Self>;
    /// Right shift which fails only if `amount >= BITS`. Signed values shift arithmetically.
    fn shr_exact(self, amount: u32) -> Option<Self>;

    fn bit_and(self, rhs: Self) -> Self;
    fn bit_or(self, rhs: Self) -> Self;
    fn bit_xor(self, rhs: Self) -> Self;
    fn bit_not(self) -> Self;

    /// Interprets `self` as a shift amount, returning [`None`] if it's negative or not below
    /// [`BITS`](Int::BITS).
    fn to_shift(self) -> Option<u32>;
    /// Widens `self` to an `i128` for use in diagnostics. Lossless for every implementor.
    fn to_i128(self) -> i128;
}

macro_rules! impl_int_common {
    ($t:ty, $signed:tt) => {
        impl sealed::Sealed for $t {}

        impl Int for $t {
            const MIN: $t = <$t>::MIN;
            const MAX: $t = <$t>::MAX;
            const ZERO: $t = 0;
            const ONE: $t = 1;
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
            const NAME: &'static str = stringify!($t);

            fn add_exact(self, rhs: $t) -> Option<$t> {
                add_exact!($signed, self, rhs)
            }

            fn sub_exact(self, rhs: $t) -> Option<$t> {
                sub_exact!($signed, self, rhs)
            }

            fn mul_exact(self, rhs: $t) -> Option<$t> {
                mul_exact!($signed, self, rhs)
            }

            fn div_exact(self, rhs: $t) -> Option<$t> {
                if rhs == 0 {
                    return None;
                }
                if $signed && self == <$t>::MIN && rhs == minus_one!($signed, $t) {
                    return None;
                }
                Some(self / rhs)
            }

            fn rem_exact(self, rhs: $t) -> Option<$t> {
                if rhs == 0 {
                    return None;
                }
                // The quotient of MIN / -1 doesn't fit, but the remainder is exactly zero.
                if $signed && self == <$t>::MIN && rhs == minus_one!($signed, $t) {
                    return Some(0);
                }
                Some(self % rhs)
            }

            fn neg_exact(self) -> Option<$t> {
                if !$signed || self == <$t>::MIN {
                    return None;
                }
                Some((0 as $t).wrapping_sub(self))
            }

            #[allow(unused_comparisons)]
            fn shl_exact(self, amount: u32) -> Option<$t> {
                if amount >= <$t>::BITS {
                    return None;
                }
                if amount > 0 {
                    // Any bit above MAX >> amount would be pushed past the sign / top bit.
                    if self > 0 && self > (<$t>::MAX >> amount) {
                        return None;
                    }
                    if $signed && self < 0 && self < (<$t>::MIN >> amount) {
                        return None;
                    }
                }
                Some(self << amount)
            }

            fn shr_exact(self, amount: u32) -> Option<$t> {
                if amount >= <$t>::BITS {
                    return None;
                }
                Some(self >> amount)
            }

            fn bit_and(self, rhs: $t) -> $t {
                self & rhs
            }

            fn bit_or(self, rhs: $t) -> $t {
                self | rhs
            }

            fn bit_xor(self, rhs: $t) -> $t {
                self ^ rhs
            }

            fn bit_not(self) -> $t {
                !self
            }

            #[allow(unused_comparisons)]
            fn to_shift(self) -> Option<u32> {
                if self < 0 || (self as u128) >= <$t>::BITS as u128 {
                    None
                } else {
                    Some(self as u32)
                }
            }

            fn to_i128(self) -> i128 {
                self as i128
            }
        }
    };
}

// -1 only exists for signed types, the unsigned arm is never evaluated at runtime.
macro_rules! minus_one {
    (true, $t:ty) => {
        (0 as $t).wrapping_sub(1)
    };
    (false, $t:ty) => {
        <$t>::MAX
    };
}

macro_rules! add_exact {
    (false, $a:expr, $b:expr) => {{
        let result = $a.wrapping_add($b);
        if result < $a { None } else { Some(result) }
    }};
    (true, $a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);
        if b > 0 && a > Self::MAX - b {
            None
        } else if b < 0 && a < Self::MIN - b {
            None
        } else {
            Some(a + b)
        }
    }};
}

macro_rules! sub_exact {
    (false, $a:expr, $b:expr) => {{
        if $a < $b { None } else { Some($a - $b) }
    }};
    (true, $a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);
        if b < 0 && a > Self::MAX + b {
            None
        } else if b > 0 && a < Self::MIN + b {
            None
        } else {
            Some(a - b)
        }
    }};
}

macro_rules! mul_exact {
    (false, $a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);
        if a == 0 || b == 0 {
            return Some(0);
        }
        let result = a.wrapping_mul(b);
        if result / a != b { None } else { Some(result) }
    }};
    (true, $a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);
        if a == 0 || b == 0 {
            return Some(0);
        }
        if (a == -1 && b == Self::MIN) || (b == -1 && a == Self::MIN) {
            return None;
        }
        let overflows = (a > 0 && b > 0 && a > Self::MAX / b)
            || (a < 0 && b < 0 && a < Self::MAX / b)
            || (a > 0 && b < 0 && b < Self::MIN / a)
            || (a < 0 && b > 0 && a < Self::MIN / b);
        if overflows { None } else { Some(a * b) }
    }};
}

impl_int_common!(i8, true);
impl_int_common!(i16, true);
impl_int_common!(i32, true);
impl_int_common!(i64, true);
impl_int_common!(isize, true);
impl_int_common!(u8, false);
impl_int_common!(u16, false);
impl_int_common!(u32, false);
impl_int_common!(u64, false);
impl_int_common!(usize, false);
