//! Catalog of orders for primitive types.
//!
//! Every order here is zero-sized, `Copy`, and `Send + Sync`. Use the
//! accessor functions ([`integer`], [`float`], [`text`], ...) to obtain them.

use std::{cmp::Ordering, marker::PhantomData};

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;

use crate::orders::order::{Order, phantom_order};

/// The unit type has a single value, so everything is equivalent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitOrder;

impl Order for UnitOrder {
    type Item = ();

    #[inline]
    fn compare(&self, _a: &(), _b: &()) -> Ordering {
        Ordering::Equal
    }
}

/// `false` precedes `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoolOrder;

impl Order for BoolOrder {
    type Item = bool;

    #[inline]
    fn compare(&self, a: &bool, b: &bool) -> Ordering {
        a.cmp(b)
    }
}

/// Numeric order on the fixed-width integers.
///
/// Compares directly instead of subtracting, so the extremes of every width
/// compare correctly.
pub struct IntegerOrder<T: ?Sized>(PhantomData<fn(&T, &T)>);

phantom_order!(IntegerOrder);

macro_rules! integer_order {
    ($($int:ty),* $(,)?) => {$(
        impl Order for IntegerOrder<$int> {
            type Item = $int;

            #[inline]
            fn compare(&self, a: &$int, b: &$int) -> Ordering {
                a.cmp(b)
            }

            #[inline]
            fn lt(&self, a: &$int, b: &$int) -> bool {
                a < b
            }

            #[inline]
            fn lteq(&self, a: &$int, b: &$int) -> bool {
                a <= b
            }

            #[inline]
            fn gt(&self, a: &$int, b: &$int) -> bool {
                a > b
            }

            #[inline]
            fn gteq(&self, a: &$int, b: &$int) -> bool {
                a >= b
            }

            #[inline]
            fn equiv(&self, a: &$int, b: &$int) -> bool {
                a == b
            }
        }
    )*};
}

integer_order!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Unicode scalar value order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharOrder;

impl Order for CharOrder {
    type Item = char;

    #[inline]
    fn compare(&self, a: &char, b: &char) -> Ordering {
        a.cmp(b)
    }
}

/// Total order on floating point numbers.
///
/// Numbers follow IEEE 754 `totalOrder`, so `-0.0` precedes `+0.0`. Every
/// NaN, whatever its sign or payload, is equivalent to every other NaN and
/// follows `+inf`. The naive `<` is not a total order once NaN is involved.
pub struct FloatOrder<T: ?Sized>(PhantomData<fn(&T, &T)>);

phantom_order!(FloatOrder);

macro_rules! float_order {
    ($($float:ty),* $(,)?) => {$(
        impl Order for FloatOrder<$float> {
            type Item = $float;

            #[inline]
            fn compare(&self, a: &$float, b: &$float) -> Ordering {
                match (a.is_nan(), b.is_nan()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => a.total_cmp(b),
                }
            }
        }
    )*};
}

float_order!(f32, f64);

/// Magnitude order on arbitrary-precision signed integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BigIntOrder;

impl Order for BigIntOrder {
    type Item = BigInt;

    #[inline]
    fn compare(&self, a: &BigInt, b: &BigInt) -> Ordering {
        a.cmp(b)
    }
}

/// Magnitude order on arbitrary-precision unsigned integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BigUintOrder;

impl Order for BigUintOrder {
    type Item = BigUint;

    #[inline]
    fn compare(&self, a: &BigUint, b: &BigUint) -> Ordering {
        a.cmp(b)
    }
}

/// Numeric order on exact arbitrary-precision decimals.
///
/// Values are compared by magnitude, so `1/2` and `2/4` are equivalent
/// regardless of how they were written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecimalOrder;

impl Order for DecimalOrder {
    type Item = BigRational;

    #[inline]
    fn compare(&self, a: &BigRational, b: &BigRational) -> Ordering {
        a.cmp(b)
    }
}

/// Lexicographic order on text, identical to the standard string ordering
/// (byte-wise on UTF-8, which is code-point order).
pub struct TextOrder<S: ?Sized = str>(PhantomData<fn(&S, &S)>);

phantom_order!(TextOrder);

impl<S: ?Sized + AsRef<str>> Order for TextOrder<S> {
    type Item = S;

    #[inline]
    fn compare(&self, a: &S, b: &S) -> Ordering {
        a.as_ref().cmp(b.as_ref())
    }
}

pub fn unit() -> UnitOrder {
    UnitOrder
}

pub fn boolean() -> BoolOrder {
    BoolOrder
}

/// Order on any fixed-width integer type, e.g. `integer::<u64>()`.
pub fn integer<T>() -> IntegerOrder<T>
where
    IntegerOrder<T>: Order<Item = T>,
{
    IntegerOrder::new()
}

pub fn character() -> CharOrder {
    CharOrder
}

/// Total order on `f32` or `f64`, e.g. `float::<f64>()`.
pub fn float<T>() -> FloatOrder<T>
where
    FloatOrder<T>: Order<Item = T>,
{
    FloatOrder::new()
}

pub fn big_int() -> BigIntOrder {
    BigIntOrder
}

pub fn big_uint() -> BigUintOrder {
    BigUintOrder
}

pub fn decimal() -> DecimalOrder {
    DecimalOrder
}

/// Order on `str`.
pub fn text() -> TextOrder<str> {
    TextOrder::new()
}

/// Order on `String`; same ordering as [`text`].
pub fn string() -> TextOrder<String> {
    TextOrder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::hint::black_box;

    #[test]
    fn unit_and_bool() {
        assert_eq!(unit().compare(&(), &()), Ordering::Equal);
        assert!(boolean().lt(&false, &true));
        assert!(boolean().equiv(&true, &true));
    }

    #[test]
    fn integer_scenario() {
        let ord = integer::<i32>();
        assert!(ord.lt(&3, &7));
        assert_eq!(*ord.max(&3, &7), 7);
        assert_eq!(*ord.min(&3, &7), 3);
    }

    #[test]
    fn integer_extremes_do_not_overflow() {
        assert_eq!(integer::<i128>().compare(&i128::MIN, &i128::MAX), Ordering::Less);
        assert_eq!(integer::<i64>().compare(&i64::MAX, &-1), Ordering::Greater);
        assert_eq!(integer::<u128>().compare(&u128::MAX, &0), Ordering::Greater);
        assert_eq!(integer::<i8>().compare(&i8::MIN, &i8::MIN), Ordering::Equal);
    }

    #[test]
    fn float_nan_is_equivalent_to_itself() {
        let ord = float::<f64>();
        assert_eq!(ord.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
        assert!(ord.gt(&f64::NAN, &f64::INFINITY));
        assert!(ord.gt(&-f64::NAN, &f64::NEG_INFINITY));
        assert!(ord.equiv(&-f64::NAN, &f64::NAN));
    }

    #[test]
    fn float_computed_nan_matches_constant() {
        let computed = black_box(0.0_f64) / black_box(0.0_f64);
        assert!(computed.is_nan());
        let ord = float::<f64>();
        assert_eq!(ord.compare(&computed, &f64::NAN), Ordering::Equal);
        assert_eq!(ord.compare(&computed, &f64::INFINITY), Ordering::Greater);
        assert_eq!(ord.compare(&f64::NEG_INFINITY, &computed), Ordering::Less);

        let computed = black_box(0.0_f32) / black_box(0.0_f32);
        assert!(float::<f32>().equiv(&computed, &f32::NAN));
        assert!(float::<f32>().gt(&computed, &f32::MAX));
    }

    #[test]
    fn float_signed_zero() {
        let ord = float::<f32>();
        assert!(ord.lt(&-0.0, &0.0));
        assert!(!ord.equiv(&-0.0, &0.0));
        assert!(ord.lt(&1.5, &2.0));
    }

    #[test]
    fn big_numbers() {
        let big = BigInt::from(u128::MAX) * BigInt::from(u128::MAX);
        assert!(big_int().gt(&big, &BigInt::from(u128::MAX)));
        assert!(big_int().lt(&-big.clone(), &BigInt::from(i128::MIN)));
        assert!(big_uint().lt(&BigUint::from(1u8), &BigUint::from(2u8)));

        let half = BigRational::new(BigInt::from(1), BigInt::from(2));
        let two_quarters = BigRational::new(BigInt::from(2), BigInt::from(4));
        let third = BigRational::new(BigInt::from(1), BigInt::from(3));
        assert!(decimal().equiv(&half, &two_quarters));
        assert!(decimal().gt(&half, &third));
    }

    #[test]
    fn text_is_code_point_order() {
        let ord = text();
        assert!(ord.lt("Z", "a"));
        assert!(ord.lt("z", "é"));
        assert!(ord.lt("", "a"));
        assert!(ord.lt("ab", "abc"));
        assert!(string().gt(&"b".to_string(), &"abc".to_string()));
        assert!(character().lt(&'a', &'é'));
    }

    proptest! {
        #[test]
        fn prop_integer_matches_std(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(integer::<i64>().compare(&a, &b), a.cmp(&b));
        }

        #[test]
        fn prop_float_matches_total_cmp_off_nan(a in any::<f64>(), b in any::<f64>()) {
            let ord = float::<f64>();
            if !a.is_nan() && !b.is_nan() {
                prop_assert_eq!(ord.compare(&a, &b), a.total_cmp(&b));
            }
            prop_assert_eq!(ord.compare(&a, &a), Ordering::Equal);
            prop_assert_eq!(ord.compare(&a, &b), ord.compare(&b, &a).reverse());
            prop_assert!(ord.lteq(&a, &f64::NAN));
        }

        #[test]
        fn prop_text_matches_chars(a in "\\PC{0,6}", b in "\\PC{0,6}") {
            let by_chars = a.chars().cmp(b.chars());
            prop_assert_eq!(text().compare(&a, &b), by_chars);
        }
    }
}
