use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;

use crate::orders::{
    derived::{
        OptionOrder, SeqOrder, Tuple2Order, Tuple3Order, Tuple4Order, Tuple5Order, Tuple6Order,
        Tuple7Order, Tuple8Order, Tuple9Order,
    },
    order::Order,
    primitive::{
        BigIntOrder, BigUintOrder, BoolOrder, CharOrder, DecimalOrder, FloatOrder, IntegerOrder,
        TextOrder, UnitOrder,
    },
};

/// Types with a canonical order in the catalog.
///
/// This is compile-time resolution: `T::order()` names the catalog order for
/// `T`, and for `Option`, `Vec`, slices and tuples it is assembled from the
/// canonical orders of the parts. Types outside the catalog get an order
/// explicitly, through a combinator, a bridge, or a
/// [`Registry`](crate::orders::registry::Registry).
///
/// `f32` and `f64` resolve to [`FloatOrder`], the IEEE total order, which is
/// why floats inside tuples and sequences are orderable here even though
/// they are not [`Ord`].
pub trait Ordered {
    type Order: Order<Item = Self> + Default;

    fn order() -> Self::Order {
        Self::Order::default()
    }
}

/// Shorthand for `T::order()`.
pub fn order_of<T: Ordered + ?Sized>() -> T::Order {
    T::order()
}

macro_rules! ordered {
    ($($ty:ty => $order:ty),* $(,)?) => {$(
        impl Ordered for $ty {
            type Order = $order;
        }
    )*};
}

ordered! {
    () => UnitOrder,
    bool => BoolOrder,
    char => CharOrder,
    i8 => IntegerOrder<i8>,
    i16 => IntegerOrder<i16>,
    i32 => IntegerOrder<i32>,
    i64 => IntegerOrder<i64>,
    i128 => IntegerOrder<i128>,
    isize => IntegerOrder<isize>,
    u8 => IntegerOrder<u8>,
    u16 => IntegerOrder<u16>,
    u32 => IntegerOrder<u32>,
    u64 => IntegerOrder<u64>,
    u128 => IntegerOrder<u128>,
    usize => IntegerOrder<usize>,
    f32 => FloatOrder<f32>,
    f64 => FloatOrder<f64>,
    BigInt => BigIntOrder,
    BigUint => BigUintOrder,
    BigRational => DecimalOrder,
    str => TextOrder<str>,
    String => TextOrder<String>,
}

impl<T: Ordered> Ordered for Option<T> {
    type Order = OptionOrder<T::Order>;
}

impl<T: Ordered> Ordered for [T] {
    type Order = SeqOrder<T::Order, [T]>;
}

impl<T: Ordered> Ordered for Vec<T> {
    type Order = SeqOrder<T::Order, Vec<T>>;
}

macro_rules! ordered_tuple {
    ($name:ident; $($T:ident),+) => {
        impl<$($T: Ordered),+> Ordered for ($($T,)+) {
            type Order = $name<$($T::Order),+>;
        }
    };
}

ordered_tuple!(Tuple2Order; T1, T2);
ordered_tuple!(Tuple3Order; T1, T2, T3);
ordered_tuple!(Tuple4Order; T1, T2, T3, T4);
ordered_tuple!(Tuple5Order; T1, T2, T3, T4, T5);
ordered_tuple!(Tuple6Order; T1, T2, T3, T4, T5, T6);
ordered_tuple!(Tuple7Order; T1, T2, T3, T4, T5, T6, T7);
ordered_tuple!(Tuple8Order; T1, T2, T3, T4, T5, T6, T7, T8);
ordered_tuple!(Tuple9Order; T1, T2, T3, T4, T5, T6, T7, T8, T9);
