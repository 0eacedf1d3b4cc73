//! Orders for composite types, built from orders for their parts.
//!
//! All of them are lexicographic: parts are compared first to last and the
//! first non-`Equal` result decides. Later parts are not looked at once a
//! decision is made.

use std::{cmp::Ordering, marker::PhantomData};

use crate::orders::order::{Order, field_order};

/// `None` precedes every `Some`; two `Some`s compare by their contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptionOrder<O> {
    element: O,
}

impl<O> OptionOrder<O> {
    pub fn new(element: O) -> Self {
        Self { element }
    }
}

impl<O> Order for OptionOrder<O>
where
    O: Order,
    O::Item: Sized,
{
    type Item = Option<O::Item>;

    #[inline]
    fn compare(&self, a: &Self::Item, b: &Self::Item) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.element.compare(a, b),
        }
    }
}

/// Lexicographic order on homogeneous sequences.
///
/// `C` is the sequence type being ordered, `[T]` or `Vec<T>`. A strict
/// prefix precedes the longer sequence, so the empty sequence precedes every
/// other one.
pub struct SeqOrder<O, C: ?Sized> {
    element: O,
    _domain: PhantomData<fn(&C, &C)>,
}

impl<O: Order> SeqOrder<O, [O::Item]>
where
    O::Item: Sized,
{
    pub fn slice(element: O) -> Self {
        Self {
            element,
            _domain: PhantomData,
        }
    }
}

impl<O: Order> SeqOrder<O, Vec<O::Item>>
where
    O::Item: Sized,
{
    pub fn vec(element: O) -> Self {
        Self {
            element,
            _domain: PhantomData,
        }
    }
}

field_order!(SeqOrder<O; C> { element });

impl<O: Default, C: ?Sized> Default for SeqOrder<O, C> {
    fn default() -> Self {
        Self {
            element: O::default(),
            _domain: PhantomData,
        }
    }
}

impl<O, C> Order for SeqOrder<O, C>
where
    O: Order,
    O::Item: Sized,
    C: ?Sized + AsRef<[O::Item]>,
{
    type Item = C;

    fn compare(&self, a: &C, b: &C) -> Ordering {
        let (a, b) = (a.as_ref(), b.as_ref());
        for (x, y) in a.iter().zip(b) {
            match self.element.compare(x, y) {
                Ordering::Equal => {}
                decided => return decided,
            }
        }
        a.len().cmp(&b.len())
    }

    fn equiv(&self, a: &C, b: &C) -> bool {
        let (a, b) = (a.as_ref(), b.as_ref());
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.element.equiv(x, y))
    }
}

pub fn option<O>(element: O) -> OptionOrder<O>
where
    O: Order,
    O::Item: Sized,
{
    OptionOrder::new(element)
}

/// Order on slices `[T]` from an order on `T`.
pub fn sequence<O>(element: O) -> SeqOrder<O, [O::Item]>
where
    O: Order,
    O::Item: Sized,
{
    SeqOrder::slice(element)
}

/// Order on `Vec<T>` from an order on `T`.
pub fn vector<O>(element: O) -> SeqOrder<O, Vec<O::Item>>
where
    O: Order,
    O::Item: Sized,
{
    SeqOrder::vec(element)
}

macro_rules! tuple_order {
    ($(#[$meta:meta])* $name:ident, $ctor:ident; $($idx:tt $O:ident $o:ident),+ $(,)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name<$($O),+>($(pub $O),+);

        impl<$($O),+> $name<$($O),+> {
            pub fn new($($o: $O),+) -> Self {
                Self($($o),+)
            }
        }

        impl<$($O),+> Order for $name<$($O),+>
        where
            $($O: Order, <$O as Order>::Item: Sized),+
        {
            type Item = ($(<$O as Order>::Item,)+);

            #[inline]
            fn compare(&self, a: &Self::Item, b: &Self::Item) -> Ordering {
                $(
                    match self.$idx.compare(&a.$idx, &b.$idx) {
                        Ordering::Equal => {}
                        decided => return decided,
                    }
                )+
                Ordering::Equal
            }
        }

        pub fn $ctor<$($O),+>($($o: $O),+) -> $name<$($O),+>
        where
            $($O: Order, <$O as Order>::Item: Sized),+
        {
            $name::new($($o),+)
        }
    };
}

tuple_order! {
    /// Lexicographic order on pairs.
    Tuple2Order, tuple2; 0 O1 o1, 1 O2 o2
}
tuple_order! {
    /// Lexicographic order on triples.
    Tuple3Order, tuple3; 0 O1 o1, 1 O2 o2, 2 O3 o3
}
tuple_order!(Tuple4Order, tuple4; 0 O1 o1, 1 O2 o2, 2 O3 o3, 3 O4 o4);
tuple_order!(Tuple5Order, tuple5; 0 O1 o1, 1 O2 o2, 2 O3 o3, 3 O4 o4, 4 O5 o5);
tuple_order!(Tuple6Order, tuple6; 0 O1 o1, 1 O2 o2, 2 O3 o3, 3 O4 o4, 4 O5 o5, 5 O6 o6);
tuple_order!(Tuple7Order, tuple7; 0 O1 o1, 1 O2 o2, 2 O3 o3, 3 O4 o4, 4 O5 o5, 5 O6 o6, 6 O7 o7);
tuple_order!(
    Tuple8Order, tuple8;
    0 O1 o1, 1 O2 o2, 2 O3 o3, 3 O4 o4, 4 O5 o5, 5 O6 o6, 6 O7 o7, 7 O8 o8
);
tuple_order!(
    Tuple9Order, tuple9;
    0 O1 o1, 1 O2 o2, 2 O3 o3, 3 O4 o4, 4 O5 o5, 5 O6 o6, 6 O7 o7, 7 O8 o8, 8 O9 o9
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::{
        combinators::{OrderExt, from_less_than},
        primitive::{boolean, character, float, integer, string, text, unit},
    };
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn option_law() {
        let ord = option(integer::<i32>());
        assert_eq!(ord.compare(&None, &None), Ordering::Equal);
        assert_eq!(ord.compare(&None, &Some(i32::MIN)), Ordering::Less);
        assert_eq!(ord.compare(&Some(i32::MIN), &None), Ordering::Greater);
        assert_eq!(ord.compare(&Some(1), &Some(2)), Ordering::Less);
    }

    #[test]
    fn option_of_reversed_keeps_none_first() {
        let ord = option(integer::<i32>().reverse());
        assert!(ord.lt(&None, &Some(5)));
        assert!(ord.lt(&Some(5), &Some(1)));
    }

    #[test]
    fn sequence_law() {
        let ord = sequence(integer::<i32>());
        let empty: &[i32] = &[];
        assert_eq!(ord.compare(empty, empty), Ordering::Equal);
        assert_eq!(ord.compare(empty, &[0]), Ordering::Less);
        assert_eq!(ord.compare(&[1, 2], &[1, 3]), Ordering::Less);
        assert_eq!(ord.compare(&[1, 9], &[2]), Ordering::Less);
    }

    #[test]
    fn sequence_prefix_precedes() {
        let ord = vector(integer::<i32>());
        assert_eq!(ord.compare(&vec![1, 2], &vec![1, 2, 3]), Ordering::Less);
        assert!(!ord.equiv(&vec![1, 2], &vec![1, 2, 3]));
        assert!(ord.equiv(&vec![1, 2], &vec![1, 2]));
    }

    #[test]
    fn sequence_uses_element_equivalence() {
        let by_len = integer::<usize>().on(|s: &String| s.len());
        let ord = vector(by_len);
        let a = vec!["ab".to_string(), "c".to_string()];
        let b = vec!["xy".to_string(), "z".to_string()];
        assert!(ord.equiv(&a, &b));
        assert_eq!(ord.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn tuple_scenario() {
        let ord = tuple2(integer::<i32>(), string());
        let left = (1, "b".to_string());
        let right = (1, "a".to_string());
        assert_eq!(ord.compare(&left, &right), Ordering::Greater);
    }

    #[test]
    fn tuple_stops_at_first_difference() {
        let calls = Cell::new(0);
        let second = from_less_than(|a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a < b
        });
        let ord = tuple2(integer::<i32>(), second);

        assert_eq!(ord.compare(&(1, 100), &(2, 0)), Ordering::Less);
        assert_eq!(calls.get(), 0);

        assert_eq!(ord.compare(&(1, 100), &(1, 0)), Ordering::Greater);
        assert!(calls.get() > 0);
    }

    #[test]
    fn tuple9_compares_last_field() {
        let ord = tuple9(
            unit(),
            boolean(),
            integer::<u8>(),
            integer::<i64>(),
            character(),
            float::<f64>(),
            string(),
            option(integer::<u16>()),
            vector(integer::<i32>()),
        );
        let a = ((), true, 1u8, -1i64, 'x', 0.5, "k".to_string(), Some(3u16), vec![1]);
        let mut b = a.clone();
        assert_eq!(ord.compare(&a, &b), Ordering::Equal);
        b.8.push(0);
        assert_eq!(ord.compare(&a, &b), Ordering::Less);
        b.1 = false;
        assert_eq!(ord.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn tuple_fields_reach_unsized_through_projection() {
        let name = text().on_ref(|s: &String| s.as_str());
        let ord = tuple3(name, integer::<u8>(), boolean());
        assert!(ord.lt(&("a".to_string(), 9, true), &("b".to_string(), 0, false)));
    }

    prop_compose! {
        fn arb_pair()(x in -3i32..3, y in "[a-c]{0,2}") -> (i32, String) {
            (x, y)
        }
    }

    proptest! {
        #[test]
        fn prop_tuple_first_field_decides(a in arb_pair(), b in arb_pair()) {
            let first = integer::<i32>();
            let ord = tuple2(first, string());
            let head = first.compare(&a.0, &b.0);
            if head != Ordering::Equal {
                prop_assert_eq!(ord.compare(&a, &b), head);
            } else {
                prop_assert_eq!(ord.compare(&a, &b), a.1.cmp(&b.1));
            }
        }

        #[test]
        fn prop_sequence_matches_std(
            a in proptest::collection::vec(-5i32..5, 0..6),
            b in proptest::collection::vec(-5i32..5, 0..6),
        ) {
            prop_assert_eq!(vector(integer::<i32>()).compare(&a, &b), a.cmp(&b));
            prop_assert_eq!(sequence(integer::<i32>()).compare(&a[..], &b[..]), a.cmp(&b));
        }

        #[test]
        fn prop_option_matches_std(a in any::<Option<u8>>(), b in any::<Option<u8>>()) {
            prop_assert_eq!(option(integer::<u8>()).compare(&a, &b), a.cmp(&b));
        }

        #[test]
        fn prop_tuple_antisymmetric(a in arb_pair(), b in arb_pair()) {
            let ord = tuple2(integer::<i32>(), string());
            prop_assert_eq!(ord.compare(&a, &b), ord.compare(&b, &a).reverse());
        }
    }
}
