use std::{cmp::Ordering, fmt};

use crate::orders::order::Order;

/// A value bound to an order, for infix-style comparisons.
///
/// ```
/// use ordkit::prelude::*;
///
/// let ints = integer::<i32>();
/// assert!(ints.bind(&3) < 7);
/// assert!(ints.bind(&3).lt(&7));
/// assert_eq!(*ints.bind(&3).max(&7), 7);
///
/// let desc = ints.reverse();
/// assert!(desc.bind(&3) > 7);
/// ```
///
/// Every method delegates to the corresponding [`Order`] method, so a
/// `Bound` never disagrees with the order it wraps.
pub struct Bound<'a, O: Order + ?Sized> {
    value: &'a O::Item,
    order: &'a O,
}

impl<'a, O: Order + ?Sized> Bound<'a, O> {
    pub fn new(value: &'a O::Item, order: &'a O) -> Self {
        Self { value, order }
    }

    pub fn value(&self) -> &'a O::Item {
        self.value
    }

    pub fn order(&self) -> &'a O {
        self.order
    }

    #[inline]
    pub fn compare(&self, rhs: &O::Item) -> Ordering {
        self.order.compare(self.value, rhs)
    }

    #[inline]
    pub fn lt(&self, rhs: &O::Item) -> bool {
        self.order.lt(self.value, rhs)
    }

    #[inline]
    pub fn le(&self, rhs: &O::Item) -> bool {
        self.order.lteq(self.value, rhs)
    }

    #[inline]
    pub fn gt(&self, rhs: &O::Item) -> bool {
        self.order.gt(self.value, rhs)
    }

    #[inline]
    pub fn ge(&self, rhs: &O::Item) -> bool {
        self.order.gteq(self.value, rhs)
    }

    #[inline]
    pub fn equiv(&self, rhs: &O::Item) -> bool {
        self.order.equiv(self.value, rhs)
    }

    /// The bound value unless `rhs` strictly follows it.
    #[inline]
    pub fn max(&self, rhs: &'a O::Item) -> &'a O::Item {
        self.order.max(self.value, rhs)
    }

    /// The bound value unless `rhs` strictly precedes it.
    #[inline]
    pub fn min(&self, rhs: &'a O::Item) -> &'a O::Item {
        self.order.min(self.value, rhs)
    }
}

impl<O: Order + ?Sized> Clone for Bound<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: Order + ?Sized> Copy for Bound<'_, O> {}

impl<O> fmt::Debug for Bound<'_, O>
where
    O: Order + ?Sized,
    O::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bound").field(&self.value).finish()
    }
}

// `==` means equivalence under the bound order, not `PartialEq` of the item.
impl<O: Order + ?Sized> PartialEq<O::Item> for Bound<'_, O> {
    #[inline]
    fn eq(&self, other: &O::Item) -> bool {
        self.order.equiv(self.value, other)
    }
}

impl<O: Order + ?Sized> PartialOrd<O::Item> for Bound<'_, O> {
    #[inline]
    fn partial_cmp(&self, other: &O::Item) -> Option<Ordering> {
        Some(self.order.compare(self.value, other))
    }

    #[inline]
    fn lt(&self, other: &O::Item) -> bool {
        self.order.lt(self.value, other)
    }

    #[inline]
    fn le(&self, other: &O::Item) -> bool {
        self.order.lteq(self.value, other)
    }

    #[inline]
    fn gt(&self, other: &O::Item) -> bool {
        self.order.gt(self.value, other)
    }

    #[inline]
    fn ge(&self, other: &O::Item) -> bool {
        self.order.gteq(self.value, other)
    }
}
