//! Total orders as values.
//!
//! An [`Order`] compares two values of its [`Order::Item`] type. Unlike
//! [`Ord`], a type may have many orders, and new orders are built from old
//! ones:
//!
//! * combinators: [`OrderExt::reverse`], [`OrderExt::on`], [`OrderExt::then`],
//!   [`from_less_than`],
//! * a catalog for primitives ([`primitive`](orders::primitive)) and
//!   lexicographic builders for options, sequences and tuples up to arity 9
//!   ([`derived`](orders::derived)),
//! * bridges from [`Ord`] and from comparator functions
//!   ([`bridge`](orders::bridge)),
//! * explicit resolution with a fixed fallback priority ([`Registry`]).
//!
//! ```
//! use ordkit::prelude::*;
//!
//! let ord = tuple2(integer::<i32>(), string());
//! let a = (1, "b".to_string());
//! let b = (1, "a".to_string());
//! assert!(ord.gt(&a, &b));
//!
//! let by_len_desc = integer::<usize>().on(|s: &String| s.len()).reverse();
//! assert!(by_len_desc.lt(&"long".to_string(), &"s".to_string()));
//! ```

pub mod error;
pub mod orders;

pub use error::ResolveError;
pub use orders::{
    combinators::{OrderExt, from_less_than},
    order::{DynOrder, Order},
    ordered::Ordered,
    registry::Registry,
};

pub mod prelude {
    pub use crate::{
        error::ResolveError,
        orders::{
            bridge::{from_comparator, from_intrinsic},
            combinators::{OrderExt, from_less_than},
            derived::{
                option, sequence, tuple2, tuple3, tuple4, tuple5, tuple6, tuple7, tuple8, tuple9,
                vector,
            },
            laws::check_laws,
            order::{DynOrder, Order},
            ordered::{Ordered, order_of},
            policy::Policy,
            primitive::{
                big_int, big_uint, boolean, character, decimal, float, integer, string, text,
                unit,
            },
            registry::{Registry, Source},
        },
    };
}
