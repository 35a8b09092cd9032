use std::cmp::Ordering;
use std::fmt::Debug;

use super::Assert;
use crate::failure::messages;

/// Checks available on any `Debug + PartialOrd` value.
///
/// Values that do not compare (e.g. `NaN`) fail every check.
pub trait OrderingAssertions<T> {
    /// `actual < other`
    fn is_less_than(&self, other: T) -> &Self;

    /// `actual <= other`
    fn is_less_than_or_equal_to(&self, other: T) -> &Self;

    /// `actual > other`
    fn is_greater_than(&self, other: T) -> &Self;

    /// `actual >= other`
    fn is_greater_than_or_equal_to(&self, other: T) -> &Self;

    /// `start <= actual <= end`
    fn is_between(&self, start: T, end: T) -> &Self;

    /// `start < actual < end`
    fn is_strictly_between(&self, start: T, end: T) -> &Self;
}

#[track_caller]
fn check_order<'a, 'p, T, P>(
    node: &'a Assert<'p, T, P>,
    other: &T,
    relation: &str,
    accept: fn(Ordering) -> bool,
) -> &'a Assert<'p, T, P>
where
    T: Debug + PartialOrd,
{
    let comparison = node.comparison();
    node.verify(|actual| {
        let ok = comparison.compare(actual, other).is_some_and(accept);
        (!ok).then(|| {
            messages::should_be_ordered(
                &node.represent(actual),
                relation,
                &node.represent(other),
                comparison.description(),
            )
        })
    })
}

#[track_caller]
fn check_range<'a, 'p, T, P>(
    node: &'a Assert<'p, T, P>,
    start: &T,
    end: &T,
    inclusive: bool,
) -> &'a Assert<'p, T, P>
where
    T: Debug + PartialOrd,
{
    let comparison = node.comparison();
    node.verify(|actual| {
        let above = comparison.compare(actual, start).is_some_and(|o| {
            o == Ordering::Greater || (inclusive && o == Ordering::Equal)
        });
        let below = comparison.compare(actual, end).is_some_and(|o| {
            o == Ordering::Less || (inclusive && o == Ordering::Equal)
        });
        (!(above && below)).then(|| {
            messages::should_be_between(
                &node.represent(actual),
                &node.represent(start),
                &node.represent(end),
                inclusive,
                comparison.description(),
            )
        })
    })
}

impl<T, P> OrderingAssertions<T> for Assert<'_, T, P>
where
    T: Debug + PartialOrd,
{
    #[track_caller]
    fn is_less_than(&self, other: T) -> &Self {
        check_order(self, &other, "less than", Ordering::is_lt)
    }

    #[track_caller]
    fn is_less_than_or_equal_to(&self, other: T) -> &Self {
        check_order(self, &other, "less than or equal to", Ordering::is_le)
    }

    #[track_caller]
    fn is_greater_than(&self, other: T) -> &Self {
        check_order(self, &other, "greater than", Ordering::is_gt)
    }

    #[track_caller]
    fn is_greater_than_or_equal_to(&self, other: T) -> &Self {
        check_order(self, &other, "greater than or equal to", Ordering::is_ge)
    }

    #[track_caller]
    fn is_between(&self, start: T, end: T) -> &Self {
        check_range(self, &start, &end, true)
    }

    #[track_caller]
    fn is_strictly_between(&self, start: T, end: T) -> &Self {
        check_range(self, &start, &end, false)
    }
}
