use std::fmt::Debug;
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::code::panic_message;
use super::Assert;
use crate::condition::Condition;
use crate::failure::messages;

/// Checks available on any `Debug + PartialEq` value.
pub trait ObjectAssertions<T> {
    /// The actual value equals `expected` under the active comparison.
    fn is_equal_to(&self, expected: T) -> &Self;

    /// The actual value differs from `other` under the active comparison.
    fn is_not_equal_to(&self, other: T) -> &Self;

    /// The actual value is one of `values`.
    fn is_in(&self, values: impl IntoIterator<Item = T>) -> &Self;

    /// The actual value is none of `values`.
    fn is_not_in(&self, values: impl IntoIterator<Item = T>) -> &Self;

    /// The actual value is accepted by `predicate`, shown as `description`.
    fn matches<F>(&self, predicate: F, description: &str) -> &Self
    where
        F: FnOnce(&T) -> bool;

    /// `requirements` runs on the actual value without failing.
    ///
    /// Strict assertions made inside `requirements` are caught and reported
    /// as a failure of this node, so they are collected in soft mode.
    fn satisfies<F>(&self, requirements: F) -> &Self
    where
        F: FnOnce(&T);

    /// The actual value meets `condition`, phrased `to be ...`.
    fn is(&self, condition: &dyn Condition<T>) -> &Self;

    /// The actual value does not meet `condition`.
    fn is_not(&self, condition: &dyn Condition<T>) -> &Self;

    /// The actual value meets `condition`, phrased `to have ...`.
    fn has(&self, condition: &dyn Condition<T>) -> &Self;

    /// The actual value does not meet `condition`, phrased `not to have ...`.
    fn does_not_have(&self, condition: &dyn Condition<T>) -> &Self;
}

impl<T, P> ObjectAssertions<T> for Assert<'_, T, P>
where
    T: Debug + PartialEq,
{
    #[track_caller]
    fn is_equal_to(&self, expected: T) -> &Self {
        let comparison = self.comparison();
        self.verify(|actual| {
            (!comparison.are_equal(actual, &expected)).then(|| {
                messages::should_be_equal(
                    &self.represent(actual),
                    &self.represent(&expected),
                    comparison.description(),
                )
            })
        })
    }

    #[track_caller]
    fn is_not_equal_to(&self, other: T) -> &Self {
        let comparison = self.comparison();
        self.verify(|actual| {
            comparison.are_equal(actual, &other).then(|| {
                messages::should_not_be_equal(
                    &self.represent(actual),
                    &self.represent(&other),
                    comparison.description(),
                )
            })
        })
    }

    #[track_caller]
    fn is_in(&self, values: impl IntoIterator<Item = T>) -> &Self {
        let values: Vec<T> = values.into_iter().collect();
        let comparison = self.comparison();
        self.verify(|actual| {
            (!values.iter().any(|v| comparison.are_equal(actual, v))).then(|| {
                messages::should_be_in(&self.represent(actual), &self.represent(&values))
            })
        })
    }

    #[track_caller]
    fn is_not_in(&self, values: impl IntoIterator<Item = T>) -> &Self {
        let values: Vec<T> = values.into_iter().collect();
        let comparison = self.comparison();
        self.verify(|actual| {
            values.iter().any(|v| comparison.are_equal(actual, v)).then(|| {
                messages::should_not_be_in(&self.represent(actual), &self.represent(&values))
            })
        })
    }

    #[track_caller]
    fn matches<F>(&self, predicate: F, description: &str) -> &Self
    where
        F: FnOnce(&T) -> bool,
    {
        self.verify(|actual| {
            (!predicate(actual))
                .then(|| messages::should_match(&self.represent(actual), description))
        })
    }

    #[track_caller]
    fn satisfies<F>(&self, requirements: F) -> &Self
    where
        F: FnOnce(&T),
    {
        self.verify(|actual| {
            catch_unwind(AssertUnwindSafe(|| requirements(actual)))
                .err()
                .map(|payload| {
                    messages::should_satisfy(&self.represent(actual), &panic_message(&*payload))
                })
        })
    }

    #[track_caller]
    fn is(&self, condition: &dyn Condition<T>) -> &Self {
        self.verify(|actual| {
            (!condition.matches(actual))
                .then(|| messages::should_be(&self.represent(actual), &condition.describe()))
        })
    }

    #[track_caller]
    fn is_not(&self, condition: &dyn Condition<T>) -> &Self {
        self.verify(|actual| {
            condition
                .matches(actual)
                .then(|| messages::should_not_be(&self.represent(actual), &condition.describe()))
        })
    }

    #[track_caller]
    fn has(&self, condition: &dyn Condition<T>) -> &Self {
        self.verify(|actual| {
            (!condition.matches(actual))
                .then(|| messages::should_have(&self.represent(actual), &condition.describe()))
        })
    }

    #[track_caller]
    fn does_not_have(&self, condition: &dyn Condition<T>) -> &Self {
        self.verify(|actual| {
            condition.matches(actual).then(|| {
                messages::should_not_have(&self.represent(actual), &condition.describe())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::{assert_that, expect_assertion_failure, OrderingAssertions};
    use crate::condition::condition;
    use crate::soft::SoftAssertions;

    #[test]
    fn test_is_equal_to_passes() {
        assert_that(5).is_equal_to(5).is_not_equal_to(6);
        assert_that("abc").is_equal_to("abc");
    }

    #[test]
    #[should_panic(expected = "expected: 2\n but was: 1")]
    fn test_is_equal_to_fails() {
        assert_that(1).is_equal_to(2);
    }

    #[test]
    fn test_is_equal_to_message_with_description() {
        let message = expect_assertion_failure(|| {
            assert_that("Frodo").described_as("name").is_equal_to("Sam");
        });
        assert_eq!(message, "[name] \nexpected: \"Sam\"\n but was: \"Frodo\"");
    }

    #[test]
    fn test_is_equal_to_with_comparator() {
        assert_that(-3)
            .using_comparator("absolute value", |a: &i32, b: &i32| a.abs().cmp(&b.abs()))
            .is_equal_to(3);

        let message = expect_assertion_failure(|| {
            assert_that(-3)
                .using_comparator("absolute value", |a: &i32, b: &i32| a.abs().cmp(&b.abs()))
                .is_equal_to(4);
        });
        assert!(message.ends_with("when comparing values using absolute value"));
    }

    #[test]
    fn test_is_in_and_is_not_in() {
        assert_that('b').is_in(['a', 'b']).is_not_in(['x', 'y']);

        let message = expect_assertion_failure(|| {
            assert_that(3).is_in([1, 2]);
        });
        assert_eq!(message, "\nExpecting actual:\n  3\nto be in:\n  [1, 2]");
    }

    #[test]
    fn test_matches() {
        assert_that(4).matches(|x| x % 2 == 0, "an even number");

        let message = expect_assertion_failure(|| {
            assert_that(3).matches(|x| x % 2 == 0, "an even number");
        });
        assert_eq!(message, "\nExpecting actual:\n  3\nto match an even number.");
    }

    #[test]
    fn test_satisfies_reports_inner_failure() {
        let softly = SoftAssertions::new();
        softly.assert_that(10).satisfies(|v| {
            assert_that(*v).is_less_than(5);
        });

        let errors = softly.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message().contains("to satisfy given requirements"));
        assert!(errors[0].message().contains("to be less than"));
    }

    #[test]
    fn test_conditions() {
        let even = condition(|x: &i32| x % 2 == 0, "even");
        assert_that(2).is(&even).has(&even);
        assert_that(3).is_not(&even).does_not_have(&even);

        let message = expect_assertion_failure(|| {
            assert_that(3).is(&even);
        });
        assert_eq!(message, "\nExpecting actual:\n  3\nto be even");
    }
}
