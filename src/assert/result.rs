use std::fmt::Debug;

use super::Assert;
use crate::failure::messages;

/// Checks on `Result` values.
pub trait ResultAssertions<R, E> {
    /// The result is `Ok`.
    fn is_ok(&self) -> &Self;

    /// The result is `Err`.
    fn is_err(&self) -> &Self;

    /// The result is `Ok(expected)`. An `Err` fails as an absent subject.
    fn contains_ok(&self, expected: R) -> &Self
    where
        R: PartialEq;

    /// The result is `Err(expected)`. An `Ok` fails as an absent subject.
    fn contains_err(&self, expected: E) -> &Self
    where
        E: PartialEq;

    /// Navigate to the `Ok` value.
    fn ok_value(&self) -> Assert<'_, R, Self>
    where
        Self: Sized,
        R: Clone;

    /// Navigate to the `Err` value.
    fn err_value(&self) -> Assert<'_, E, Self>
    where
        Self: Sized,
        E: Clone;
}

impl<R, E, P> ResultAssertions<R, E> for Assert<'_, Result<R, E>, P>
where
    R: Debug,
    E: Debug,
{
    #[track_caller]
    fn is_ok(&self) -> &Self {
        self.verify(|actual| {
            actual
                .is_err()
                .then(|| messages::should_be_variant(&self.represent(actual), "Ok"))
        })
    }

    #[track_caller]
    fn is_err(&self) -> &Self {
        self.verify(|actual| {
            actual
                .is_ok()
                .then(|| messages::should_be_variant(&self.represent(actual), "Err"))
        })
    }

    #[track_caller]
    fn contains_ok(&self, expected: R) -> &Self
    where
        R: PartialEq,
    {
        self.verify(|actual| match actual {
            Ok(value) if *value == expected => None,
            Ok(value) => Some(messages::should_be_equal(
                &self.represent(value),
                &self.represent(&expected),
                None,
            )),
            Err(_) => Some(messages::result_variant_absent(&self.represent(actual), "Ok")),
        })
    }

    #[track_caller]
    fn contains_err(&self, expected: E) -> &Self
    where
        E: PartialEq,
    {
        self.verify(|actual| match actual {
            Err(error) if *error == expected => None,
            Err(error) => Some(messages::should_be_equal(
                &self.represent(error),
                &self.represent(&expected),
                None,
            )),
            Ok(_) => Some(messages::result_variant_absent(&self.represent(actual), "Err")),
        })
    }

    fn ok_value(&self) -> Assert<'_, R, Self>
    where
        R: Clone,
    {
        self.child(self.actual().and_then(|actual| actual.as_ref().ok().cloned()))
    }

    fn err_value(&self) -> Assert<'_, E, Self>
    where
        E: Clone,
    {
        self.child(self.actual().and_then(|actual| actual.as_ref().err().cloned()))
    }
}
