use std::{cmp::Ordering, marker::PhantomData, sync::Arc};

use crate::orders::{
    ops::Bound,
    order::{DynOrder, Order, field_order},
};

/// Combinators available on every [`Order`].
///
/// All of them consume the receiver and return a new order that owns it.
/// Catalog orders are zero-sized and `Copy`; pass `&order` to keep using an
/// order after combining it.
pub trait OrderExt: Order + Sized {
    /// The same order, back to front.
    ///
    /// Reversing a [`Reversed`] hands back the original order instead of
    /// wrapping twice.
    fn reverse(self) -> Reversed<Self> {
        Reversed::new(self)
    }

    /// Orders `U` by mapping each value into `Self::Item` and comparing the
    /// images.
    ///
    /// The projection runs once per operand per comparison.
    fn on<U, F>(self, project: F) -> On<Self, F, U>
    where
        U: ?Sized,
        Self::Item: Sized,
        F: Fn(&U) -> Self::Item,
    {
        On::new(self, project)
    }

    /// Alias for [`OrderExt::on`].
    fn by<U, F>(self, project: F) -> On<Self, F, U>
    where
        U: ?Sized,
        Self::Item: Sized,
        F: Fn(&U) -> Self::Item,
    {
        self.on(project)
    }

    /// Like [`OrderExt::on`], but the projection borrows from its input, so
    /// nothing is cloned and `Self::Item` may be unsized (`str`, slices).
    fn on_ref<U, F>(self, project: F) -> OnRef<Self, F, U>
    where
        U: ?Sized,
        F: for<'a> Fn(&'a U) -> &'a Self::Item,
    {
        OnRef::new(self, project)
    }

    /// Lexicographic chaining: compare with `self`, and only on a tie with
    /// `next`.
    fn then<N>(self, next: N) -> Then<Self, N>
    where
        N: Order<Item = Self::Item>,
    {
        Then::new(self, next)
    }

    /// Binds `value` to this order for infix-style comparisons.
    fn bind<'a>(&'a self, value: &'a Self::Item) -> Bound<'a, Self> {
        Bound::new(value, self)
    }

    /// Erases the concrete type behind a shared pointer.
    fn shared(self) -> DynOrder<Self::Item>
    where
        Self: Send + Sync + 'static,
    {
        Arc::new(self)
    }

    /// Erases the concrete type behind a box.
    fn boxed(self) -> Box<dyn Order<Item = Self::Item> + Send + Sync>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<O: Order> OrderExt for O {}

/// An order with its arguments swapped.
///
/// Holds the order it reverses; [`Reversed::original`] gives it back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<O> {
    original: O,
}

impl<O> Reversed<O> {
    pub fn new(original: O) -> Self {
        Self { original }
    }

    pub fn original(&self) -> &O {
        &self.original
    }

    /// Reversing twice is the identity, so this unwraps instead of nesting.
    pub fn reverse(self) -> O {
        self.original
    }
}

impl<O: Order> Order for Reversed<O> {
    type Item = O::Item;

    #[inline]
    fn compare(&self, a: &Self::Item, b: &Self::Item) -> Ordering {
        self.original.compare(b, a)
    }

    // Swapping the operands of the original's predicates keeps any fast path
    // it overrides.

    #[inline]
    fn lt(&self, a: &Self::Item, b: &Self::Item) -> bool {
        self.original.lt(b, a)
    }

    #[inline]
    fn lteq(&self, a: &Self::Item, b: &Self::Item) -> bool {
        self.original.lteq(b, a)
    }

    #[inline]
    fn gt(&self, a: &Self::Item, b: &Self::Item) -> bool {
        self.original.gt(b, a)
    }

    #[inline]
    fn gteq(&self, a: &Self::Item, b: &Self::Item) -> bool {
        self.original.gteq(b, a)
    }

    #[inline]
    fn equiv(&self, a: &Self::Item, b: &Self::Item) -> bool {
        self.original.equiv(b, a)
    }
}

/// An order over `U` obtained by projecting into another order's domain.
pub struct On<O, F, U: ?Sized> {
    base: O,
    project: F,
    _domain: PhantomData<fn(&U)>,
}

impl<O, F, U: ?Sized> On<O, F, U> {
    pub fn new(base: O, project: F) -> Self {
        Self {
            base,
            project,
            _domain: PhantomData,
        }
    }
}

field_order!(On<O, F; U> { base, project });

impl<O, F, U> Order for On<O, F, U>
where
    O: Order,
    O::Item: Sized,
    F: Fn(&U) -> O::Item,
    U: ?Sized,
{
    type Item = U;

    #[inline]
    fn compare(&self, a: &U, b: &U) -> Ordering {
        self.base.compare(&(self.project)(a), &(self.project)(b))
    }

    #[inline]
    fn lt(&self, a: &U, b: &U) -> bool {
        self.base.lt(&(self.project)(a), &(self.project)(b))
    }

    #[inline]
    fn lteq(&self, a: &U, b: &U) -> bool {
        self.base.lteq(&(self.project)(a), &(self.project)(b))
    }

    #[inline]
    fn gt(&self, a: &U, b: &U) -> bool {
        self.base.gt(&(self.project)(a), &(self.project)(b))
    }

    #[inline]
    fn gteq(&self, a: &U, b: &U) -> bool {
        self.base.gteq(&(self.project)(a), &(self.project)(b))
    }
}

/// Borrowing counterpart of [`On`].
pub struct OnRef<O, F, U: ?Sized> {
    base: O,
    project: F,
    _domain: PhantomData<fn(&U)>,
}

impl<O, F, U: ?Sized> OnRef<O, F, U> {
    pub fn new(base: O, project: F) -> Self {
        Self {
            base,
            project,
            _domain: PhantomData,
        }
    }
}

field_order!(OnRef<O, F; U> { base, project });

impl<O, F, U> Order for OnRef<O, F, U>
where
    O: Order,
    F: for<'a> Fn(&'a U) -> &'a O::Item,
    U: ?Sized,
{
    type Item = U;

    #[inline]
    fn compare(&self, a: &U, b: &U) -> Ordering {
        self.base.compare((self.project)(a), (self.project)(b))
    }

    #[inline]
    fn lt(&self, a: &U, b: &U) -> bool {
        self.base.lt((self.project)(a), (self.project)(b))
    }

    #[inline]
    fn lteq(&self, a: &U, b: &U) -> bool {
        self.base.lteq((self.project)(a), (self.project)(b))
    }

    #[inline]
    fn gt(&self, a: &U, b: &U) -> bool {
        self.base.gt((self.project)(a), (self.project)(b))
    }

    #[inline]
    fn gteq(&self, a: &U, b: &U) -> bool {
        self.base.gteq((self.project)(a), (self.project)(b))
    }
}

/// Two orders over the same type, applied lexicographically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Order for Then<A, B>
where
    A: Order,
    B: Order<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn compare(&self, a: &Self::Item, b: &Self::Item) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.second.compare(a, b),
            decided => decided,
        }
    }
}

/// An order defined by a strict less-than predicate.
///
/// `compare` may call the predicate twice. `lt`, `gt`, `lteq` and `gteq` call
/// it exactly once.
pub struct FromLessThan<F, T: ?Sized> {
    less_than: F,
    _domain: PhantomData<fn(&T, &T)>,
}

/// Builds an order from a strict less-than predicate.
///
/// `less_than` must be a strict total order: irreflexive, asymmetric and
/// transitive, with incomparability being an equivalence.
pub fn from_less_than<T, F>(less_than: F) -> FromLessThan<F, T>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    FromLessThan {
        less_than,
        _domain: PhantomData,
    }
}

field_order!(FromLessThan<F; T> { less_than });

impl<F, T> Order for FromLessThan<F, T>
where
    F: Fn(&T, &T) -> bool,
    T: ?Sized,
{
    type Item = T;

    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if (self.less_than)(a, b) {
            Ordering::Less
        } else if (self.less_than)(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[inline]
    fn lt(&self, a: &T, b: &T) -> bool {
        (self.less_than)(a, b)
    }

    #[inline]
    fn gt(&self, a: &T, b: &T) -> bool {
        (self.less_than)(b, a)
    }

    #[inline]
    fn lteq(&self, a: &T, b: &T) -> bool {
        !(self.less_than)(b, a)
    }

    #[inline]
    fn gteq(&self, a: &T, b: &T) -> bool {
        !(self.less_than)(a, b)
    }
}
