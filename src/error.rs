//! Errors surfaced while obtaining an order.

use thiserror::Error;

/// Configuration errors raised while resolving or registering an order.
///
/// These are reported when an order is requested or registered, never later
/// from `compare`: once an order exists, comparing with it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No registered order, intrinsic bridge, or comparator was available.
    #[error("no order available for `{type_name}`")]
    Unresolved {
        /// Name of the type that could not be ordered.
        type_name: &'static str,
    },

    /// A second order was offered for a type that already has one.
    #[error("an order for `{type_name}` is already registered")]
    Duplicate {
        /// Name of the type registered twice.
        type_name: &'static str,
    },
}
