//! Checking an order against the total-order laws on a finite sample.
//!
//! Orders are trusted, not verified: nothing in this crate calls the checker
//! on its own. It is meant for tests of hand-written orders, comparators and
//! less-than predicates.
//!
//! A passing check is evidence, not proof: it only covers the sample.

use std::{cmp::Ordering, ptr};

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use thiserror::Error;
use tracing::debug;

use crate::orders::order::Order;

/// A law broken by an order, with the sample indices that witness it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawViolation {
    #[error("not reflexive: sample {index} is not equivalent to itself")]
    Reflexivity { index: usize },

    #[error("not antisymmetric: comparing samples {left} and {right} both ways disagrees")]
    Antisymmetry { left: usize, right: usize },

    #[error(
        "not transitive: sample {first} <= {second} and {second} <= {third}, but {first} > {third}"
    )]
    Transitivity {
        first: usize,
        second: usize,
        third: usize,
    },

    #[error("`{predicate}` disagrees with `compare` on samples {left} and {right}")]
    Inconsistent {
        predicate: &'static str,
        left: usize,
        right: usize,
    },
}

/// Checks `order` on every pair and triple drawn from `samples`.
///
/// Besides reflexivity, antisymmetry and transitivity this verifies that
/// every derived predicate, overridden or not, agrees with `compare`, and
/// that `min` and `max` return the left operand on ties.
///
/// The work is cubic in the sample size and spread over the rayon thread
/// pool. The violation reported is the first one in sample index order, so
/// the result is deterministic.
pub fn check_laws<O>(order: &O, samples: &[O::Item]) -> Result<(), LawViolation>
where
    O: Order + Sync + ?Sized,
    O::Item: Sized + Sync,
{
    let n = samples.len();
    debug!(samples = n, "checking order laws");

    let result = check_reflexive(order, samples)
        .and_then(|()| check_pairs(order, samples))
        .and_then(|()| check_transitive(order, samples));

    if let Err(violation) = &result {
        debug!(%violation, "order law violated");
    }
    result
}

fn check_reflexive<O>(order: &O, samples: &[O::Item]) -> Result<(), LawViolation>
where
    O: Order + Sync + ?Sized,
    O::Item: Sized + Sync,
{
    match (0..samples.len())
        .into_par_iter()
        .find_first(|&i| order.compare(&samples[i], &samples[i]) != Ordering::Equal)
    {
        Some(index) => Err(LawViolation::Reflexivity { index }),
        None => Ok(()),
    }
}

fn check_pairs<O>(order: &O, samples: &[O::Item]) -> Result<(), LawViolation>
where
    O: Order + Sync + ?Sized,
    O::Item: Sized + Sync,
{
    let n = samples.len();
    match (0..n * n)
        .into_par_iter()
        .find_map_first(|k| check_pair(order, samples, k / n, k % n))
    {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

fn check_pair<O>(order: &O, samples: &[O::Item], left: usize, right: usize) -> Option<LawViolation>
where
    O: Order + ?Sized,
    O::Item: Sized,
{
    let (a, b) = (&samples[left], &samples[right]);
    let c = order.compare(a, b);

    if c != order.compare(b, a).reverse() {
        return Some(LawViolation::Antisymmetry { left, right });
    }

    let expected_max = if c == Ordering::Less { b } else { a };
    let expected_min = if c == Ordering::Greater { b } else { a };
    let checks = [
        ("lt", order.lt(a, b) == c.is_lt()),
        ("lteq", order.lteq(a, b) == c.is_le()),
        ("gt", order.gt(a, b) == c.is_gt()),
        ("gteq", order.gteq(a, b) == c.is_ge()),
        ("equiv", order.equiv(a, b) == c.is_eq()),
        ("max", ptr::eq(order.max(a, b), expected_max)),
        ("min", ptr::eq(order.min(a, b), expected_min)),
    ];
    checks
        .into_iter()
        .find(|&(_, holds)| !holds)
        .map(|(predicate, _)| LawViolation::Inconsistent {
            predicate,
            left,
            right,
        })
}

fn check_transitive<O>(order: &O, samples: &[O::Item]) -> Result<(), LawViolation>
where
    O: Order + Sync + ?Sized,
    O::Item: Sized + Sync,
{
    let n = samples.len();
    let found = (0..n).into_par_iter().find_map_first(|first| {
        let x = &samples[first];
        for second in 0..n {
            let y = &samples[second];
            if order.compare(x, y) == Ordering::Greater {
                continue;
            }
            for third in 0..n {
                let z = &samples[third];
                if order.compare(y, z) != Ordering::Greater
                    && order.compare(x, z) == Ordering::Greater
                {
                    return Some(LawViolation::Transitivity {
                        first,
                        second,
                        third,
                    });
                }
            }
        }
        None
    });
    match found {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}
