use std::{cmp::Ordering, rc::Rc, sync::Arc};

/// A *total order* over [`Order::Item`], held as a value.
///
/// Unlike [`Ord`], which fixes one ordering per type, an `Order` is an
/// ordinary value: a type can have any number of orderings, and orderings can
/// be built from other orderings (see [`OrderExt`](crate::orders::combinators::OrderExt)).
///
/// In mathematics, a total order `⊑` on a set `X` satisfies:
///
/// * **Reflexivity**:    `x ⊑ x`
/// * **Antisymmetry**:   if `x ⊑ y` and `y ⊑ x` then `x ≡ y`
/// * **Transitivity**:   if `x ⊑ y` and `y ⊑ z` then `x ⊑ z`
/// * **Totality**:       `x ⊑ y` or `y ⊑ x`
///
/// In terms of [`Order::compare`]:
///
/// * `compare(x, x) == Equal`
/// * `compare(x, y) == compare(y, x).reverse()`
/// * `compare(x, y) != Greater` and `compare(y, z) != Greater` imply
///   `compare(x, z) != Greater`
///
/// These laws are a precondition on every implementation and are **not**
/// checked at runtime. An unlawful instance never makes `compare` fail, but
/// anything relying on the laws (sorting, searching, ordered maps) gets
/// unspecified results. [`check_laws`](crate::orders::laws::check_laws) can
/// test an instance against a finite sample.
///
/// Only [`Order::compare`] is required. Every other method has a default
/// defined in terms of it and may be overridden for efficiency, provided the
/// override stays consistent with `compare`.
pub trait Order {
    /// The type being ordered.
    type Item: ?Sized;

    /// Three-way comparison: `Less` if `a` precedes `b`, `Equal` if they are
    /// equivalent, `Greater` if `a` follows `b`.
    fn compare(&self, a: &Self::Item, b: &Self::Item) -> Ordering;

    /// Returns `true` if `a` strictly precedes `b`.
    #[inline]
    fn lt(&self, a: &Self::Item, b: &Self::Item) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns `true` if `a` precedes or is equivalent to `b`.
    #[inline]
    fn lteq(&self, a: &Self::Item, b: &Self::Item) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    /// Returns `true` if `a` strictly follows `b`.
    #[inline]
    fn gt(&self, a: &Self::Item, b: &Self::Item) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Returns `true` if `a` follows or is equivalent to `b`.
    #[inline]
    fn gteq(&self, a: &Self::Item, b: &Self::Item) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// Returns `true` if `a` and `b` are equivalent under this order.
    ///
    /// Equivalence need not coincide with [`PartialEq`]: an order by string
    /// length considers `"ab"` and `"cd"` equivalent.
    #[inline]
    fn equiv(&self, a: &Self::Item, b: &Self::Item) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Returns the greater of `a` and `b`, or `a` when they are equivalent.
    #[inline]
    fn max<'a>(&self, a: &'a Self::Item, b: &'a Self::Item) -> &'a Self::Item {
        if self.gteq(a, b) { a } else { b }
    }

    /// Returns the lesser of `a` and `b`, or `a` when they are equivalent.
    #[inline]
    fn min<'a>(&self, a: &'a Self::Item, b: &'a Self::Item) -> &'a Self::Item {
        if self.lteq(a, b) { a } else { b }
    }
}

/// A type-erased, shareable order. This is what a
/// [`Registry`](crate::orders::registry::Registry) hands out.
pub type DynOrder<T> = Arc<dyn Order<Item = T> + Send + Sync>;

// Pointers to an order are orders. Every method is forwarded, so an
// overridden predicate is still used behind the indirection.
macro_rules! forward_order {
    ($($pointer:ty),* $(,)?) => {$(
        impl<O: Order + ?Sized> Order for $pointer {
            type Item = O::Item;

            #[inline]
            fn compare(&self, a: &Self::Item, b: &Self::Item) -> Ordering {
                (**self).compare(a, b)
            }

            #[inline]
            fn lt(&self, a: &Self::Item, b: &Self::Item) -> bool {
                (**self).lt(a, b)
            }

            #[inline]
            fn lteq(&self, a: &Self::Item, b: &Self::Item) -> bool {
                (**self).lteq(a, b)
            }

            #[inline]
            fn gt(&self, a: &Self::Item, b: &Self::Item) -> bool {
                (**self).gt(a, b)
            }

            #[inline]
            fn gteq(&self, a: &Self::Item, b: &Self::Item) -> bool {
                (**self).gteq(a, b)
            }

            #[inline]
            fn equiv(&self, a: &Self::Item, b: &Self::Item) -> bool {
                (**self).equiv(a, b)
            }

            #[inline]
            fn max<'a>(&self, a: &'a Self::Item, b: &'a Self::Item) -> &'a Self::Item {
                (**self).max(a, b)
            }

            #[inline]
            fn min<'a>(&self, a: &'a Self::Item, b: &'a Self::Item) -> &'a Self::Item {
                (**self).min(a, b)
            }
        }
    )*};
}

forward_order!(&O, Box<O>, Rc<O>, Arc<O>);

// Std traits for orders that carry a `PhantomData` domain marker. Deriving
// would bound the marker's type parameter too, and `str` or `[T]` are not
// `Clone`.

/// For a zero-sized `Name<T>(PhantomData<..>)`: `new`, `Clone`, `Copy`,
/// `Default`, `PartialEq`, `Eq` and `Debug`, none of them bounding `T`.
macro_rules! phantom_order {
    ($name:ident) => {
        impl<T: ?Sized> $name<T> {
            pub const fn new() -> Self {
                Self(::std::marker::PhantomData)
            }
        }

        impl<T: ?Sized> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized> Copy for $name<T> {}

        impl<T: ?Sized> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized> PartialEq for $name<T> {
            fn eq(&self, _other: &Self) -> bool {
                true
            }
        }

        impl<T: ?Sized> Eq for $name<T> {}

        impl<T: ?Sized> ::std::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}<{}>", stringify!($name), ::std::any::type_name::<T>())
            }
        }
    };
}

/// For `Name<P.., D> { fields.., _domain: PhantomData<..> }`: `Clone` and
/// `Copy` bounded on the field parameters `P` only, and a `Debug` naming
/// the domain `D`.
macro_rules! field_order {
    ($name:ident<$($param:ident),+; $domain:ident> { $($field:ident),+ }) => {
        impl<$($param: Clone,)+ $domain: ?Sized> Clone for $name<$($param,)+ $domain> {
            fn clone(&self) -> Self {
                Self {
                    $($field: self.$field.clone(),)+
                    _domain: ::std::marker::PhantomData,
                }
            }
        }

        impl<$($param: Copy,)+ $domain: ?Sized> Copy for $name<$($param,)+ $domain> {}

        impl<$($param,)+ $domain: ?Sized> ::std::fmt::Debug for $name<$($param,)+ $domain> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}<{}>", stringify!($name), ::std::any::type_name::<$domain>())
            }
        }
    };
}

pub(crate) use {field_order, phantom_order};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    /// Orders strings by length only, so distinct strings can be equivalent.
    struct ByLen;

    impl Order for ByLen {
        type Item = str;

        fn compare(&self, a: &str, b: &str) -> Ordering {
            a.len().cmp(&b.len())
        }
    }

    /// Counts how often `compare` runs, to observe forwarding.
    struct Counting<'c> {
        calls: &'c Cell<usize>,
    }

    impl Order for Counting<'_> {
        type Item = i32;

        fn compare(&self, a: &i32, b: &i32) -> Ordering {
            self.calls.set(self.calls.get() + 1);
            a.cmp(b)
        }

        fn lt(&self, a: &i32, b: &i32) -> bool {
            a < b
        }
    }

    #[test]
    fn default_predicates() {
        let ord = ByLen;
        assert!(ord.lt("a", "bb"));
        assert!(!ord.lt("bb", "a"));
        assert!(ord.lteq("ab", "cd"));
        assert!(ord.gteq("ab", "cd"));
        assert!(ord.gt("abc", "cd"));
        assert!(ord.equiv("ab", "cd"));
        assert!(!ord.equiv("ab", "c"));
    }

    #[test]
    fn min_max_are_left_biased_on_ties() {
        let ord = ByLen;
        let (a, b) = ("ab", "cd");
        assert!(std::ptr::eq(ord.max(a, b), a));
        assert!(std::ptr::eq(ord.min(a, b), a));
        assert!(std::ptr::eq(ord.max(b, a), b));
        assert!(std::ptr::eq(ord.min(b, a), b));

        assert_eq!(ord.max("a", "bbb"), "bbb");
        assert_eq!(ord.min("a", "bbb"), "a");
    }

    #[test]
    fn pointers_forward_overrides() {
        let calls = Cell::new(0);
        let ord = Counting { calls: &calls };

        assert!((&ord).lt(&1, &2));
        assert!(Box::new(&ord).lt(&1, &2));
        assert!(Rc::new(&ord).lt(&1, &2));
        assert_eq!(calls.get(), 0, "overridden lt must not fall back to compare");

        assert_eq!((&&ord).compare(&2, &1), Ordering::Greater);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dyn_order_is_an_order() {
        let ord: DynOrder<str> = Arc::new(ByLen);
        assert!(ord.lt("x", "xy"));
        assert_eq!(ord.max("xyz", "x"), "xyz");
    }

    proptest! {
        #[test]
        fn prop_defaults_agree_with_compare(a in ".{0,8}", b in ".{0,8}") {
            let ord = ByLen;
            let c = ord.compare(&a, &b);
            prop_assert_eq!(ord.lt(&a, &b), c.is_lt());
            prop_assert_eq!(ord.lteq(&a, &b), c.is_le());
            prop_assert_eq!(ord.gt(&a, &b), c.is_gt());
            prop_assert_eq!(ord.gteq(&a, &b), c.is_ge());
            prop_assert_eq!(ord.equiv(&a, &b), c.is_eq());
        }

        #[test]
        fn prop_min_max_pick_an_argument(a in ".{0,8}", b in ".{0,8}") {
            let ord = ByLen;
            let hi = ord.max(&a, &b);
            let lo = ord.min(&a, &b);
            prop_assert!(ord.gteq(hi, lo));
            prop_assert!(hi == a.as_str() || hi == b.as_str());
            prop_assert!(lo == a.as_str() || lo == b.as_str());
        }
    }
}
