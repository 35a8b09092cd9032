use super::Assert;
use crate::failure::messages;

/// Checks on `bool` values.
pub trait BooleanAssertions {
    /// `actual == true`
    fn is_true(&self) -> &Self;

    /// `actual == false`
    fn is_false(&self) -> &Self;
}

impl<P> BooleanAssertions for Assert<'_, bool, P> {
    #[track_caller]
    fn is_true(&self) -> &Self {
        self.verify(|actual| (!*actual).then(|| messages::should_be_equal("false", "true", None)))
    }

    #[track_caller]
    fn is_false(&self) -> &Self {
        self.verify(|actual| (*actual).then(|| messages::should_be_equal("true", "false", None)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::{assert_that, expect_assertion_failure};

    #[test]
    fn test_boolean_checks() {
        assert_that("".is_empty()).is_true();
        assert_that("a".is_empty()).is_false();
    }

    #[test]
    fn test_is_true_message() {
        let message = expect_assertion_failure(|| {
            assert_that(false).described_as("ready").is_true();
        });
        assert_eq!(message, "[ready] \nexpected: true\n but was: false");
    }
}
