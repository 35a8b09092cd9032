use std::fmt::Debug;

use super::Assert;
use crate::failure::messages;

/// Checks on `Option` values.
pub trait OptionAssertions<V> {
    /// The option holds a value.
    fn is_some(&self) -> &Self;

    /// The option is `None`.
    fn is_none(&self) -> &Self;

    /// The option holds `expected`.
    ///
    /// A `None` fails as an absent subject.
    fn contains(&self, expected: V) -> &Self;

    /// Navigate to the held value. Checks on it fail as absent when the
    /// option is `None`.
    fn value(&self) -> Assert<'_, V, Self>
    where
        Self: Sized,
        V: Clone;
}

impl<V, P> OptionAssertions<V> for Assert<'_, Option<V>, P>
where
    V: Debug + PartialEq,
{
    #[track_caller]
    fn is_some(&self) -> &Self {
        self.verify(|actual| actual.is_none().then(messages::should_be_some))
    }

    #[track_caller]
    fn is_none(&self) -> &Self {
        self.verify(|actual| {
            actual
                .as_ref()
                .map(|value| messages::should_be_none(&self.represent(value)))
        })
    }

    #[track_caller]
    fn contains(&self, expected: V) -> &Self {
        self.verify(|actual| match actual {
            None => Some(messages::option_was_none(Some(
                self.represent(&expected).as_str(),
            ))),
            Some(value) if *value == expected => None,
            Some(_) => Some(messages::option_should_contain(
                &self.represent(actual),
                &self.represent(&expected),
            )),
        })
    }

    fn value(&self) -> Assert<'_, V, Self>
    where
        V: Clone,
    {
        self.child(self.actual().and_then(Option::clone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::{assert_that, expect_assertion_failure, NumericAssertions, ObjectAssertions};
    use crate::failure::FailureKind;
    use crate::soft::SoftAssertions;

    #[test]
    fn test_option_checks() {
        assert_that(Some(3)).is_some().contains(3);
        assert_that(None::<i32>).is_none();
    }

    #[test]
    fn test_is_none_message() {
        let message = expect_assertion_failure(|| {
            assert_that(Some("ring")).is_none();
        });
        assert_eq!(
            message,
            "\nExpecting an Option to be None but was containing value:\n  \"ring\""
        );
    }

    #[test]
    fn test_contains_on_none_is_absent_subject() {
        let softly = SoftAssertions::new();
        softly.assert_that(None::<i32>).contains(3).is_none();

        let errors = softly.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), FailureKind::SubjectAbsent);
        assert_eq!(errors[0].message(), "\nExpecting Option to contain:\n  3\nbut was None.");
    }

    #[test]
    fn test_value_navigation() {
        assert_that(Some(7))
            .value()
            .is_positive()
            .is_equal_to(7)
            .return_to_parent()
            .is_some();
    }

    #[test]
    fn test_value_of_none_is_absent() {
        let softly = SoftAssertions::new();
        softly.assert_that(None::<i32>).value().is_positive().is_zero();

        let errors = softly.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.kind() == FailureKind::SubjectAbsent));
    }
}
