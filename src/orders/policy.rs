//! Resolution policy for a [`Registry`](crate::orders::registry::Registry).
//!
//! # Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | `intrinsic` | `true` |
//! | `comparator` | `true` |

/// Which fallback tiers resolution may use.
///
/// Registered and catalog orders are always consulted first and cannot be
/// disabled. The switches only govern the bridges tried when neither exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Policy {
    /// Fall back to the type's own [`Ord`] implementation.
    pub intrinsic: bool,
    /// Fall back to a comparator supplied at the call site.
    pub comparator: bool,
}

impl Policy {
    /// Every tier enabled.
    pub const fn new() -> Self {
        Self {
            intrinsic: true,
            comparator: true,
        }
    }

    /// Only registered and catalog orders; both bridges disabled.
    pub const fn registered_only() -> Self {
        Self {
            intrinsic: false,
            comparator: false,
        }
    }

    #[must_use]
    pub const fn with_intrinsic(mut self, enabled: bool) -> Self {
        self.intrinsic = enabled;
        self
    }

    #[must_use]
    pub const fn with_comparator(mut self, enabled: bool) -> Self {
        self.comparator = enabled;
        self
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new()
    }
}
