#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::panic::assert_panics;

/// Compares every operation on every pair of 8-bit operands against the exact result computed in
/// a wider type.
#[test]
fn test_exhaustive_i8() {
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            let (ca, cb) = (I8::new(a), I8::new(b));
            let (wa, wb) = (a as i32, b as i32);
            let fit = |v: i32| i8::try_from(v).ok().map(I8::new);

            assert_eq!(ca.try_add(cb), fit(wa + wb), "{a} + {b}");
            assert_eq!(ca.try_sub(cb), fit(wa - wb), "{a} - {b}");
            assert_eq!(ca.try_mul(cb), fit(wa * wb), "{a} * {b}");

            if b == 0 {
                assert_eq!(ca.try_div(cb), None, "{a} / 0");
                assert_eq!(ca.try_rem(cb), None, "{a} % 0");
            } else {
                assert_eq!(ca.try_div(cb), fit(wa / wb), "{a} / {b}");
                // The remainder always fits, including MIN % -1.
                assert_eq!(ca.try_rem(cb), fit(wa % wb), "{a} % {b}");
            }
        }
    }
}

#[test]
fn test_exhaustive_u8() {
    for a in u8::MIN..=u8::MAX {
        for b in u8::MIN..=u8::MAX {
            let (ca, cb) = (U8::new(a), U8::new(b));
            let (wa, wb) = (a as i32, b as i32);
            let fit = |v: i32| u8::try_from(v).ok().map(U8::new);

            assert_eq!(ca.try_add(cb), fit(wa + wb), "{a} + {b}");
            assert_eq!(ca.try_sub(cb), fit(wa - wb), "{a} - {b}");
            assert_eq!(ca.try_mul(cb), fit(wa * wb), "{a} * {b}");
        }
    }
}

#[test]
fn test_exhaustive_shl() {
    for a in i8::MIN..=i8::MAX {
        for amount in 0..8_u32 {
            let exact = (a as i32) << amount;
            assert_eq!(
                I8::new(a).try_shl(amount),
                i8::try_from(exact).ok().map(I8::new),
                "{a} << {amount}"
            );
        }
        assert_eq!(I8::new(a).try_shl(8), None, "Shifting by the width should fail.");
    }

    for a in u8::MIN..=u8::MAX {
        for amount in 0..8_u32 {
            let exact = (a as u32) << amount;
            assert_eq!(
                U8::new(a).try_shl(amount),
                u8::try_from(exact).ok().map(U8::new),
                "{a} << {amount}"
            );
        }
    }
}

#[test]
fn test_addition_boundaries() {
    assert_eq!(I32::MAX - 1 + 1, i32::MAX);
    assert_eq!(I32::MIN + 1 - 1, i32::MIN);
    assert_eq!(U64::MAX - U64::MAX, 0);

    assert_panics!({ I32::MAX + 1 }, "integer overflow in addition");
    assert_panics!({ I32::MIN + (-1) }, "integer overflow in addition");
    assert_panics!({ U8::new(0) - 1 }, "integer overflow in subtraction");
    assert_panics!({ I64::MIN - 1 }, "integer overflow in subtraction");
    assert_panics!({ U16::MAX * 2 }, "integer overflow in multiplication");
    assert_panics!({ I8::MIN * (-1) }, "integer overflow in multiplication");
    assert_panics!({ I8::new(-1) * I8::MIN }, "integer overflow in multiplication");
}

#[test]
fn test_division() {
    assert_eq!(I32::new(-7) / 2, -3, "Division should truncate towards zero.");
    assert_eq!(I32::new(-7) % 2, -1, "The remainder should take the sign of the dividend.");
    assert_eq!(I8::MIN % (-1), 0, "MIN % -1 should be zero rather than overflowing.");
    assert_eq!(I64::MIN % (-1), 0);

    assert_panics!({ I8::MIN / (-1) }, "integer overflow in division");
    assert_panics!({ U32::new(1) / 0 }, "division by zero");
    assert_panics!({ I16::new(1) % 0 }, "division by zero");
}

#[test]
fn test_shifts() {
    assert_eq!(U8::new(1) << 7, 128);
    assert_eq!(I8::new(-1) << 7, i8::MIN, "Shifting a negative value into MIN is exact.");
    assert_eq!(I8::new(-128) >> 7, -1, "Right shifts should be arithmetic for signed types.");
    assert_eq!(U32::new(u32::MAX) >> 31, 1);
    assert_eq!(I32::new(3) << I32::new(2), 12);

    assert_panics!({ U8::new(1) << 8 }, "invalid shift amount 8");
    assert_panics!({ U8::new(1) >> 8 }, "invalid shift amount 8");
    assert_panics!({ I32::new(1) << I32::new(-1) }, "invalid shift amount -1");
    assert_panics!({ U8::new(0b1000_0000) << 1 }, "integer overflow in left shift");
    assert_panics!({ I8::new(64) << 1 }, "integer overflow in left shift");
    assert_panics!({ I8::new(-65) << 1 }, "integer overflow in left shift");
}

#[test]
fn test_negation() {
    assert_eq!(-I32::new(5), -5);
    assert_eq!(-I8::new(-127), 127);
    assert_eq!(U8::new(0).try_neg(), Some(U8::new(0)));
    assert_eq!(U8::new(1).try_neg(), None);

    assert_panics!({ -I8::MIN }, "integer overflow in negation");
}

#[test]
fn test_bitwise_and_comparison() {
    let a = U8::new(0b1100);
    let b = U8::new(0b1010);
    assert_eq!(a & b, 0b1000);
    assert_eq!(a | b, 0b1110);
    assert_eq!(a ^ b, 0b0110);
    assert_eq!(!U8::new(0), u8::MAX);
    assert_eq!(!I8::new(0), -1);

    assert!(I32::MIN < I32::MAX);
    assert!(I32::new(3) > 2);
    assert!(U8::new(3) <= U8::new(3));
}

#[test]
fn test_compound_assignment() {
    let mut value = Usize::new(10);
    value += 5;
    value *= Usize::new(2);
    value -= 10;
    value /= 4;
    value %= 3;
    value <<= 4;
    value >>= 1;
    assert_eq!(value, 16);

    let mut counter = U8::new(254);
    assert_eq!(counter.inc(), 255);
    assert_panics!({ counter.inc() }, "integer overflow in increment");

    let mut counter = I8::new(-127);
    assert_eq!(counter.dec(), -128);
    assert_panics!({ counter.dec() }, "integer overflow in decrement");
}

#[test]
fn test_conversions() {
    assert_eq!(U8::cast(255_i32), 255);
    assert_eq!(I8::cast(-128_i64), -128);
    assert_eq!(I16::from_checked(I8::new(-3)), -3);
    assert_eq!(I8::new(-3).promote::<i64>(), -3_i64);
    assert_eq!(U32::new(7).promote::<u64>() + U64::new(1), 8);

    assert_panics!({ U8::cast(256_i32) }, "256 is not representable as u8");
    assert_panics!({ U8::cast(-1_i8) }, "-1 is not representable as u8");
    assert_panics!({ I32::cast(u64::MAX) }, "not representable as i32");
    assert_panics!({ U16::from_checked(I32::new(70_000)) }, "70000");
}

#[test]
fn test_mixed_width_through_promotion() {
    let small = I32::new(i32::MAX);
    let large = I64::new(1);
    assert_eq!(small.promote::<i64>() + large, i32::MAX as i64 + 1);

    let narrowed = I32::from_checked(small.promote::<i64>() - large);
    assert_eq!(narrowed, i32::MAX - 1);
}

proptest! {
    #[test]
    fn prop_i64_matches_i128(a in any::<i64>(), b in any::<i64>()) {
        let (ca, cb) = (I64::new(a), I64::new(b));
        let (wa, wb) = (a as i128, b as i128);
        let fit = |v: i128| i64::try_from(v).ok().map(I64::new);

        prop_assert_eq!(ca.try_add(cb), fit(wa + wb));
        prop_assert_eq!(ca.try_sub(cb), fit(wa - wb));
        prop_assert_eq!(ca.try_mul(cb), fit(wa * wb));
        if b != 0 {
            prop_assert_eq!(ca.try_div(cb), fit(wa / wb));
            prop_assert_eq!(ca.try_rem(cb), fit(wa % wb));
        }
    }

    #[test]
    fn prop_u64_matches_u128(a in any::<u64>(), b in any::<u64>()) {
        let (ca, cb) = (U64::new(a), U64::new(b));
        let (wa, wb) = (a as u128, b as u128);
        let fit = |v: u128| u64::try_from(v).ok().map(U64::new);

        prop_assert_eq!(ca.try_add(cb), fit(wa + wb));
        prop_assert_eq!(ca.try_sub(cb), wa.checked_sub(wb).and_then(fit));
        prop_assert_eq!(ca.try_mul(cb), fit(wa * wb));
    }

    #[test]
    fn prop_right_shift_never_fails(a in any::<i32>(), amount in 0_u32..32) {
        prop_assert_eq!(I32::new(a) >> amount, a >> amount);
    }
}
