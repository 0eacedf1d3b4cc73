//! Runtime resolution of orders.
//!
//! A [`Registry`] maps types to orders chosen by the caller. Resolution
//! consults it first and only then the fallbacks, in a fixed priority:
//!
//! 1. an order registered for the type,
//! 2. the catalog order `T::order()` ([`Resolution::or_ordered`]),
//! 3. the type's own [`Ord`] ([`Resolution::or_intrinsic`]),
//! 4. a comparator supplied at the call site ([`Resolution::or_comparator`]).
//!
//! The order in which the fallbacks are offered does not matter; a lower
//! tier never shadows a higher one. A naive `partial_cmp` comparator for
//! `f64` never replaces the registered float order, and one for
//! `Option<f64>` never replaces the catalog order assembled from it.

use std::{
    any::{Any, TypeId, type_name},
    cmp::Ordering,
    fmt,
    sync::Arc,
};

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::{
    error::ResolveError,
    orders::{
        bridge::{Comparator, Intrinsic},
        order::{DynOrder, Order},
        ordered::Ordered,
        policy::Policy,
    },
};

/// Where a resolved order came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Source {
    Registered,
    Catalog,
    Intrinsic,
    Comparator,
}

struct Entry {
    type_name: &'static str,
    // Always a `DynOrder<T>` for the `T` whose `TypeId` keys the entry.
    order: Box<dyn Any + Send + Sync>,
}

/// Orders registered per type, plus the [`Policy`] for fallbacks.
///
/// A registry is built with `&mut self` and then only read, so a finished
/// registry can be shared across threads as is.
#[derive(Default)]
pub struct Registry {
    entries: FxHashMap<TypeId, Entry>,
    policy: Policy,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: Policy) -> Self {
        Self {
            entries: FxHashMap::default(),
            policy,
        }
    }

    /// A registry preloaded with the primitive catalog.
    pub fn with_catalog() -> Self {
        let mut registry = Self::new();
        registry.register_catalog();
        registry
    }

    /// Registers the canonical order of every primitive catalog type.
    ///
    /// Existing entries for those types are replaced.
    pub fn register_catalog(&mut self) {
        self.register_ordered::<()>();
        self.register_ordered::<bool>();
        self.register_ordered::<char>();
        self.register_ordered::<i8>();
        self.register_ordered::<i16>();
        self.register_ordered::<i32>();
        self.register_ordered::<i64>();
        self.register_ordered::<i128>();
        self.register_ordered::<isize>();
        self.register_ordered::<u8>();
        self.register_ordered::<u16>();
        self.register_ordered::<u32>();
        self.register_ordered::<u64>();
        self.register_ordered::<u128>();
        self.register_ordered::<usize>();
        self.register_ordered::<f32>();
        self.register_ordered::<f64>();
        self.register_ordered::<BigInt>();
        self.register_ordered::<BigUint>();
        self.register_ordered::<BigRational>();
        self.register_ordered::<str>();
        self.register_ordered::<String>();
        debug!(entries = self.entries.len(), "registered primitive catalog");
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: Policy) {
        self.policy = policy;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Registers `order` for its item type, replacing and returning any
    /// previous registration.
    pub fn register<O>(&mut self, order: O) -> Option<DynOrder<O::Item>>
    where
        O: Order + Send + Sync + 'static,
        O::Item: 'static,
    {
        self.register_shared(Arc::new(order))
    }

    /// Registers the canonical catalog order of `T`.
    pub fn register_ordered<T>(&mut self) -> Option<DynOrder<T>>
    where
        T: Ordered + ?Sized + 'static,
        T::Order: Send + Sync + 'static,
    {
        self.register(T::order())
    }

    /// Registers an already type-erased order.
    pub fn register_shared<T: ?Sized + 'static>(
        &mut self,
        order: DynOrder<T>,
    ) -> Option<DynOrder<T>> {
        let entry = Entry {
            type_name: type_name::<T>(),
            order: Box::new(order),
        };
        let previous = self.entries.insert(TypeId::of::<T>(), entry)?;
        warn!(type_name = previous.type_name, "replaced registered order");
        Self::downcast::<T>(&previous)
    }

    /// Registers `order` unless an order for its item type is already
    /// present.
    pub fn try_register<O>(&mut self, order: O) -> Result<(), ResolveError>
    where
        O: Order + Send + Sync + 'static,
        O::Item: 'static,
    {
        if self.contains::<O::Item>() {
            return Err(ResolveError::Duplicate {
                type_name: type_name::<O::Item>(),
            });
        }
        self.register(order);
        Ok(())
    }

    /// Removes and returns the order registered for `T`.
    pub fn unregister<T: ?Sized + 'static>(&mut self) -> Option<DynOrder<T>> {
        let entry = self.entries.remove(&TypeId::of::<T>())?;
        Self::downcast::<T>(&entry)
    }

    /// The order registered for `T`, without any fallback.
    pub fn get<T: ?Sized + 'static>(&self) -> Option<DynOrder<T>> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(Self::downcast::<T>)
    }

    /// Starts resolving an order for `T`. Offer fallbacks on the returned
    /// [`Resolution`] and call [`Resolution::finish`].
    pub fn resolve<T: ?Sized + 'static>(&self) -> Resolution<'_, T> {
        Resolution::new(self)
    }

    fn downcast<T: ?Sized + 'static>(entry: &Entry) -> Option<DynOrder<T>> {
        entry.order.downcast_ref::<DynOrder<T>>().cloned()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.entries.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        f.debug_struct("Registry")
            .field("entries", &names)
            .field("policy", &self.policy)
            .finish()
    }
}

/// An in-progress resolution for `T`.
///
/// Each fallback is only recorded; [`Resolution::finish`] picks the highest
/// priority candidate that the registry's [`Policy`] allows.
pub struct Resolution<'r, T: ?Sized> {
    registry: &'r Registry,
    registered: Option<DynOrder<T>>,
    catalog: Option<DynOrder<T>>,
    intrinsic: Option<DynOrder<T>>,
    comparator: Option<DynOrder<T>>,
}

impl<'r, T: ?Sized + 'static> Resolution<'r, T> {
    fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            registered: registry.get::<T>(),
            catalog: None,
            intrinsic: None,
            comparator: None,
        }
    }

    /// Offers the catalog order [`Ordered::order`] of `T`.
    ///
    /// It ranks right below a registered order and above both bridges, and
    /// no policy switch disables it.
    pub fn or_ordered(mut self) -> Self
    where
        T: Ordered,
        T::Order: Send + Sync + 'static,
    {
        self.catalog = Some(Arc::new(T::order()));
        self
    }

    /// Offers `T`'s own [`Ord`] as a fallback.
    pub fn or_intrinsic(mut self) -> Self
    where
        T: Ord,
    {
        if self.registry.policy.intrinsic {
            self.intrinsic = Some(Arc::new(Intrinsic::<T>::new()));
        } else {
            trace!(type_name = type_name::<T>(), "intrinsic fallback disabled by policy");
        }
        self
    }

    /// Offers `compare` as the last-resort fallback.
    pub fn or_comparator<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        if self.registry.policy.comparator {
            self.comparator = Some(Arc::new(Comparator::new(compare)));
        } else {
            trace!(type_name = type_name::<T>(), "comparator fallback disabled by policy");
        }
        self
    }

    /// The tier that [`Resolution::finish`] would pick, if any.
    pub fn source(&self) -> Option<Source> {
        if self.registered.is_some() {
            Some(Source::Registered)
        } else if self.catalog.is_some() {
            Some(Source::Catalog)
        } else if self.intrinsic.is_some() {
            Some(Source::Intrinsic)
        } else if self.comparator.is_some() {
            Some(Source::Comparator)
        } else {
            None
        }
    }

    /// The resolved order.
    pub fn finish(self) -> Result<DynOrder<T>, ResolveError> {
        self.finish_with_source().map(|(_, order)| order)
    }

    /// The resolved order together with the tier it came from.
    pub fn finish_with_source(self) -> Result<(Source, DynOrder<T>), ResolveError> {
        let candidates = [
            (Source::Registered, self.registered),
            (Source::Catalog, self.catalog),
            (Source::Intrinsic, self.intrinsic),
            (Source::Comparator, self.comparator),
        ];
        for (source, candidate) in candidates {
            match candidate {
                Some(order) => {
                    debug!(type_name = type_name::<T>(), ?source, "resolved order");
                    return Ok((source, order));
                }
                None => trace!(type_name = type_name::<T>(), ?source, "no candidate"),
            }
        }
        debug!(type_name = type_name::<T>(), "no order available");
        Err(ResolveError::Unresolved {
            type_name: type_name::<T>(),
        })
    }
}
