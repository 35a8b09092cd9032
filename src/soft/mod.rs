//! Soft assertions: collect every failure of a session instead of stopping
//! at the first one.
//!
//! Nodes built by a [`SoftAssertions`] session carry a
//! [`FailureHandler::Collect`] pointing at the session's [`SoftCollector`].
//! They offer exactly the checks strict nodes offer; failing checks are
//! recorded and the chain goes on. The session reports everything at once
//! when it ends.
//!
//! # Example
//!
//! ```rust
//! use testkit_assert::prelude::*;
//!
//! let softly = SoftAssertions::new();
//! softly.assert_that("Frodo").starts_with("Sam");
//! softly.assert_that(33).is_greater_than(50);
//!
//! assert_eq!(softly.errors().len(), 2);
//! assert!(softly.result().is_err());
//! ```

mod collector;
mod handler;

use std::any::type_name;
use std::future::Future;
use std::ops::Deref;
use std::panic::Location;
use std::thread;

pub use collector::SoftCollector;
pub use handler::FailureHandler;

use crate::assert::{
    code::{code_with, short_type_name, thrown_by_with},
    future::{completed_with, future_with},
    predicate::predicate_with,
    Assert, CodeOutcome, FutureOutcome, Outcome, Predicate, Thrown,
};
use crate::error::{Error, MultipleFailures};
use crate::failure::{messages, AssertionFailure};

/// A soft assertion session.
///
/// Reads ([`errors`](Self::errors), [`has_errors`](Self::has_errors)) never
/// clear the collected failures. [`assert_all`](Self::assert_all) and
/// [`result`](Self::result) turn them into one [`MultipleFailures`].
#[derive(Debug, Clone, Default)]
pub struct SoftAssertions {
    collector: SoftCollector,
    description: Option<String>,
}

impl SoftAssertions {
    /// Start a session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session whose aggregate report is headed by `description`.
    #[must_use]
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    fn handler(&self) -> FailureHandler {
        FailureHandler::Collect(self.collector.clone())
    }

    /// Create a node whose failures are collected by this session.
    #[must_use]
    pub fn assert_that<T>(&self, actual: T) -> Assert<'static, T> {
        Assert::with_handler(actual, self.handler())
    }

    /// BDD-style alias of [`assert_that`](Self::assert_that).
    #[must_use]
    pub fn then<T>(&self, actual: T) -> Assert<'static, T> {
        self.assert_that(actual)
    }

    /// Run `code` and assert on what it did.
    pub fn assert_that_code<F, O>(&self, code: F) -> Assert<'static, CodeOutcome>
    where
        F: FnOnce() -> O,
        O: Outcome,
    {
        code_with(code, self.handler())
    }

    /// Run `code` and assert on what it raised. Records a failure if it
    /// raised nothing.
    #[track_caller]
    pub fn assert_that_thrown_by<F, O>(&self, code: F) -> Assert<'static, Thrown>
    where
        F: FnOnce() -> O,
        O: Outcome,
    {
        thrown_by_with(code, self.handler())
    }

    /// Assert on the values `predicate` accepts or rejects.
    #[must_use]
    pub fn assert_that_predicate<T>(&self, predicate: Predicate<T>) -> Assert<'static, Predicate<T>> {
        predicate_with(predicate, self.handler())
    }

    /// Poll `future` once and assert on its state.
    pub fn assert_that_future<F: Future>(&self, future: F) -> Assert<'static, FutureOutcome<F::Output>> {
        future_with(future, self.handler())
    }

    /// Block on `future` and assert on its value.
    pub fn assert_that_completed<F: Future>(
        &self,
        future: F,
    ) -> Assert<'static, FutureOutcome<F::Output>> {
        completed_with(future, self.handler())
    }

    /// Record a failure with `message`.
    #[track_caller]
    pub fn fail(&self, message: impl Into<String>) {
        self.collector.record(AssertionFailure::new(message));
    }

    /// Record that an error of type `E` should have been raised.
    ///
    /// Call it after the statement that was expected to raise, typically at
    /// the end of a `match` arm handling the success case.
    #[track_caller]
    pub fn should_have_thrown<E>(&self) {
        let message = messages::expected_throwable_not_thrown(short_type_name(type_name::<E>()));
        self.collector
            .record(AssertionFailure::from_message(message, None, None, Location::caller()));
    }

    /// The collected failures, in the order the checks failed.
    #[must_use]
    pub fn errors(&self) -> Vec<AssertionFailure> {
        self.collector.errors()
    }

    /// Whether any failure was collected.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.collector.has_errors()
    }

    /// Whether the last check of this session passed.
    #[must_use]
    pub fn was_success(&self) -> bool {
        self.collector.was_success()
    }

    /// Run `callback` after each collected failure.
    pub fn set_after_failure_collected<F>(&self, callback: F)
    where
        F: Fn(&AssertionFailure) + Send + Sync + 'static,
    {
        self.collector.set_after_failure_collected(callback);
    }

    /// Send every later failure of this session into `outer`.
    ///
    /// Reads on either session then see the same failures, in the order
    /// they were collected across both.
    ///
    /// # Panics
    ///
    /// Panics if `outer` already forwards into this session.
    pub fn set_delegate(&self, outer: &SoftAssertions) {
        self.collector.set_delegate(&outer.collector);
    }

    /// The collector behind this session.
    #[must_use]
    pub fn collector(&self) -> &SoftCollector {
        &self.collector
    }

    /// The session description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// `Err` with every collected failure, `Ok` if there were none.
    ///
    /// # Errors
    ///
    /// Returns [`MultipleFailures`] when at least one check failed.
    pub fn result(&self) -> Result<(), MultipleFailures> {
        let failures = self.collector.errors();
        tracing::debug!(failures = failures.len(), "soft assertion session ended");
        if failures.is_empty() {
            Ok(())
        } else {
            Err(MultipleFailures::new(self.description.clone(), failures))
        }
    }

    /// End the session as a crate [`Result`](crate::Result).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MultipleFailures`] when at least one check failed.
    pub fn into_result(self) -> crate::Result<()> {
        self.result().map_err(Error::from)
    }

    /// Panic with every collected failure, if there were any.
    ///
    /// # Panics
    ///
    /// Panics with the rendered [`MultipleFailures`] when at least one check
    /// failed.
    #[track_caller]
    pub fn assert_all(&self) {
        if let Err(failures) = self.result() {
            panic!("{failures}");
        }
    }
}

/// Run `body` against a fresh session, then [`assert_all`](SoftAssertions::assert_all).
///
/// # Panics
///
/// Panics if any check made in `body` failed.
///
/// # Example
///
/// ```rust,should_panic
/// use testkit_assert::prelude::*;
///
/// assert_softly(|softly| {
///     softly.assert_that(1).is_equal_to(2);
///     softly.assert_that("a").is_equal_to("b");
/// });
/// ```
#[track_caller]
pub fn assert_softly<F>(body: F)
where
    F: FnOnce(&SoftAssertions),
{
    let softly = SoftAssertions::new();
    body(&softly);
    softly.assert_all();
}

/// A session that calls [`assert_all`](SoftAssertions::assert_all) when it
/// goes out of scope.
///
/// Nothing is reported while the thread is already panicking.
#[derive(Debug, Default)]
pub struct SoftAssertionsGuard {
    inner: SoftAssertions,
}

impl SoftAssertionsGuard {
    /// Start a session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session whose aggregate report is headed by `description`.
    #[must_use]
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            inner: SoftAssertions::with_description(description),
        }
    }
}

impl Deref for SoftAssertionsGuard {
    type Target = SoftAssertions;

    fn deref(&self) -> &SoftAssertions {
        &self.inner
    }
}

impl Drop for SoftAssertionsGuard {
    fn drop(&mut self) {
        if !thread::panicking() {
            self.inner.assert_all();
        }
    }
}
