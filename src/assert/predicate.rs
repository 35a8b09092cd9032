use std::fmt::{self, Debug};

use super::Assert;
use crate::failure::messages;
use crate::soft::FailureHandler;

const DEFAULT_DESCRIPTION: &str = "given predicate";

/// A described boolean test over values of type `T`.
///
/// # Example
///
/// ```rust
/// use testkit_assert::prelude::*;
///
/// let positive = Predicate::with_description(|x: &i32| *x > 0, "x > 0");
/// assert_that_predicate(positive).accepts(5).rejects(-1);
/// ```
pub struct Predicate<T: ?Sized> {
    test: Box<dyn Fn(&T) -> bool>,
    description: String,
}

impl<T: ?Sized> Predicate<T> {
    /// Wrap `test`, described as "given predicate".
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        Self::with_description(test, DEFAULT_DESCRIPTION)
    }

    /// Wrap `test` with the description used in failure messages.
    pub fn with_description<F>(test: F, description: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        Self {
            test: Box::new(test),
            description: description.into(),
        }
    }

    /// Run the test.
    pub fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }

    /// The description used in failure messages.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<T: ?Sized> Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

pub(crate) fn predicate_with<T>(
    predicate: Predicate<T>,
    handler: FailureHandler,
) -> Assert<'static, Predicate<T>> {
    Assert::with_handler(predicate, handler)
}

/// Assert on the values a predicate accepts or rejects.
#[must_use]
pub fn assert_that_predicate<T>(predicate: Predicate<T>) -> Assert<'static, Predicate<T>> {
    predicate_with(predicate, FailureHandler::Raise)
}

/// Checks on predicates.
pub trait PredicateAssertions<T> {
    /// The predicate accepts `value`.
    fn accepts(&self, value: T) -> &Self;

    /// The predicate rejects `value`.
    fn rejects(&self, value: T) -> &Self;

    /// The predicate accepts every one of `values`.
    fn accepts_all(&self, values: impl IntoIterator<Item = T>) -> &Self;

    /// The predicate rejects every one of `values`.
    fn rejects_all(&self, values: impl IntoIterator<Item = T>) -> &Self;
}

impl<T, P> PredicateAssertions<T> for Assert<'_, Predicate<T>, P>
where
    T: Debug,
{
    #[track_caller]
    fn accepts(&self, value: T) -> &Self {
        self.verify(|predicate| {
            (!predicate.test(&value))
                .then(|| messages::should_accept(predicate.description(), &self.represent(&value)))
        })
    }

    #[track_caller]
    fn rejects(&self, value: T) -> &Self {
        self.verify(|predicate| {
            predicate.test(&value).then(|| {
                messages::should_not_accept(predicate.description(), &self.represent(&value))
            })
        })
    }

    #[track_caller]
    fn accepts_all(&self, values: impl IntoIterator<Item = T>) -> &Self {
        let values: Vec<T> = values.into_iter().collect();
        self.verify(|predicate| {
            let rejected = values.iter().find(|v| !predicate.test(v))?;
            Some(messages::should_accept(predicate.description(), &self.represent(rejected)))
        })
    }

    #[track_caller]
    fn rejects_all(&self, values: impl IntoIterator<Item = T>) -> &Self {
        let values: Vec<T> = values.into_iter().collect();
        self.verify(|predicate| {
            let accepted = values.iter().find(|v| predicate.test(v))?;
            Some(messages::should_not_accept(predicate.description(), &self.represent(accepted)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::expect_assertion_failure;

    #[test]
    fn test_accepts_and_rejects() {
        let positive = Predicate::with_description(|x: &i32| *x > 0, "x > 0");
        assert_that_predicate(positive)
            .accepts(5)
            .rejects(-1)
            .accepts_all([1, 2, 3])
            .rejects_all([0, -5]);
    }

    #[test]
    fn test_rejected_value_message() {
        let message = expect_assertion_failure(|| {
            assert_that_predicate(Predicate::with_description(|x: &i32| *x > 0, "x > 0"))
                .accepts(-1);
        });
        assert_eq!(message, "\nExpecting actual:\n  x > 0\nto accept -1 but it did not.");
    }

    #[test]
    fn test_default_description() {
        let message = expect_assertion_failure(|| {
            assert_that_predicate(Predicate::new(|s: &&str| s.is_empty())).accepts("ring");
        });
        assert_eq!(
            message,
            "\nExpecting actual:\n  given predicate\nto accept \"ring\" but it did not."
        );
    }

    #[test]
    fn test_accepts_all_names_first_rejected() {
        let message = expect_assertion_failure(|| {
            assert_that_predicate(Predicate::new(|x: &i32| x % 2 == 0)).accepts_all([2, 3, 5]);
        });
        assert!(message.contains("to accept 3 but"));
    }
}
