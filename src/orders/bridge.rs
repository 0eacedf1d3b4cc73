//! Orders adapted from comparison mechanisms that live outside this crate.
//!
//! These are the low-priority fallbacks of resolution (see
//! [`Resolution`](crate::orders::registry::Resolution)): a purpose-built
//! catalog order is always preferred over a bridge when both exist.

use std::{cmp::Ordering, marker::PhantomData};

use crate::orders::order::{Order, field_order, phantom_order};

/// The order a type defines for itself through its [`Ord`] implementation.
///
/// In mathematics, `Ord` is expected to be a total order `⊑`:
///
/// * **Reflexivity**:    `x ⊑ x`
/// * **Antisymmetry**:   if `x ⊑ y` and `y ⊑ x` then `x == y`
/// * **Transitivity**:   if `x ⊑ y` and `y ⊑ z` then `x ⊑ z`
///
/// The bridge adds nothing and checks nothing: it is exactly as lawful as
/// the `Ord` implementation it wraps.
pub struct Intrinsic<T: ?Sized>(PhantomData<fn(&T, &T)>);

phantom_order!(Intrinsic);

impl<T: ?Sized + Ord> Order for Intrinsic<T> {
    type Item = T;

    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn lt(&self, a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn lteq(&self, a: &T, b: &T) -> bool {
        a <= b
    }

    #[inline]
    fn gt(&self, a: &T, b: &T) -> bool {
        a > b
    }

    #[inline]
    fn gteq(&self, a: &T, b: &T) -> bool {
        a >= b
    }
}

/// Bridges `T`'s own [`Ord`] implementation.
pub fn from_intrinsic<T: ?Sized + Ord>() -> Intrinsic<T> {
    Intrinsic::new()
}

/// An order wrapping a three-way comparator function supplied from outside,
/// such as the closures accepted by [`slice::sort_by`].
pub struct Comparator<F, T: ?Sized> {
    compare: F,
    _domain: PhantomData<fn(&T, &T)>,
}

impl<F, T> Comparator<F, T>
where
    F: Fn(&T, &T) -> Ordering,
    T: ?Sized,
{
    pub fn new(compare: F) -> Self {
        Self {
            compare,
            _domain: PhantomData,
        }
    }

    pub fn into_inner(self) -> F {
        self.compare
    }
}

field_order!(Comparator<F; T> { compare });

impl<F, T> Order for Comparator<F, T>
where
    F: Fn(&T, &T) -> Ordering,
    T: ?Sized,
{
    type Item = T;

    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }
}

/// Wraps a supplied comparator function.
///
/// The comparator must describe a total order; a comparator that does not
/// (for example `|a: &f64, b: &f64| a.partial_cmp(b).unwrap_or(Equal)`) is
/// accepted as is and gives unspecified orderings.
pub fn from_comparator<T, F>(compare: F) -> Comparator<F, T>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    Comparator::new(compare)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::combinators::OrderExt;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct Version {
        major: u16,
        minor: u16,
    }

    #[test]
    fn intrinsic_uses_ord() {
        let ord = from_intrinsic::<Version>();
        let old = Version { major: 1, minor: 9 };
        let new = Version { major: 2, minor: 0 };
        assert!(ord.lt(&old, &new));
        assert_eq!(ord.max(&old, &new), &new);
        assert!(from_intrinsic::<str>().lt("a", "b"));
    }

    #[test]
    fn comparator_is_used_verbatim() {
        let by_minor = from_comparator(|a: &Version, b: &Version| a.minor.cmp(&b.minor));
        let a = Version { major: 9, minor: 1 };
        let b = Version { major: 1, minor: 2 };
        assert!(by_minor.lt(&a, &b));
        assert!(by_minor.reverse().gt(&a, &b));
    }

    #[test]
    fn comparator_accepts_std_functions() {
        let ord = from_comparator(i32::cmp);
        assert_eq!(ord.compare(&1, &2), Ordering::Less);
        let f = ord.into_inner();
        assert_eq!(f(&2, &1), Ordering::Greater);
    }

    #[test]
    fn bridges_clone_without_bounding_the_domain() {
        let by_len = from_comparator(|a: &str, b: &str| a.len().cmp(&b.len()));
        let copy = by_len;
        assert!(by_len.clone().lt("a", "bb"));
        assert!(copy.equiv("ab", "cd"));
        assert_eq!(format!("{by_len:?}"), "Comparator<str>");

        let intrinsic = from_intrinsic::<[u8]>();
        assert_eq!(intrinsic, Intrinsic::default());
        assert!(intrinsic.clone().lt(&[1, 2][..], &[1, 3][..]));
        assert_eq!(format!("{intrinsic:?}"), "Intrinsic<[u8]>");
    }

    proptest! {
        #[test]
        fn prop_intrinsic_predicates_agree(a in any::<(u8, u8)>(), b in any::<(u8, u8)>()) {
            let ord = Intrinsic::<(u8, u8)>::new();
            let c = ord.compare(&a, &b);
            prop_assert_eq!(ord.lt(&a, &b), c.is_lt());
            prop_assert_eq!(ord.lteq(&a, &b), c.is_le());
            prop_assert_eq!(ord.gt(&a, &b), c.is_gt());
            prop_assert_eq!(ord.gteq(&a, &b), c.is_ge());
        }
    }
}
