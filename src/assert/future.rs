use std::fmt::Debug;
use std::future::Future;

use futures::executor::block_on;
use futures::FutureExt;

use super::Assert;
use crate::failure::messages;
use crate::soft::FailureHandler;

/// State of a future at the time it was inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FutureOutcome<T> {
    /// The future completed with this value.
    Ready(T),
    /// The future was still pending.
    Pending,
}

impl<T> FutureOutcome<T> {
    /// Poll `future` once with a no-op waker.
    pub fn poll_once<F: Future<Output = T>>(future: F) -> Self {
        match future.now_or_never() {
            Some(value) => Self::Ready(value),
            None => Self::Pending,
        }
    }

    /// Drive `future` to completion on the current thread.
    pub fn complete<F: Future<Output = T>>(future: F) -> Self {
        Self::Ready(block_on(future))
    }

    /// The value, if the future had completed.
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Pending => None,
        }
    }
}

pub(crate) fn future_with<F: Future>(
    future: F,
    handler: FailureHandler,
) -> Assert<'static, FutureOutcome<F::Output>> {
    Assert::with_handler(FutureOutcome::poll_once(future), handler)
}

pub(crate) fn completed_with<F: Future>(
    future: F,
    handler: FailureHandler,
) -> Assert<'static, FutureOutcome<F::Output>> {
    Assert::with_handler(FutureOutcome::complete(future), handler)
}

/// Poll `future` once and assert on its state.
///
/// # Example
///
/// ```rust
/// use testkit_assert::prelude::*;
///
/// assert_that_future(async { 21 * 2 }).is_done().is_completed_with_value(42);
/// assert_that_future(futures::future::pending::<()>()).is_not_done();
/// ```
pub fn assert_that_future<F: Future>(future: F) -> Assert<'static, FutureOutcome<F::Output>> {
    future_with(future, FailureHandler::Raise)
}

/// Block on `future` until it completes and assert on its value.
pub fn assert_that_completed<F: Future>(future: F) -> Assert<'static, FutureOutcome<F::Output>> {
    completed_with(future, FailureHandler::Raise)
}

/// Checks on the state of a future.
pub trait FutureAssertions<V> {
    /// The future had completed.
    fn is_done(&self) -> &Self;

    /// The future was still pending.
    fn is_not_done(&self) -> &Self;

    /// The future had completed with `expected`. A pending future fails as
    /// an absent subject.
    fn is_completed_with_value(&self, expected: V) -> &Self
    where
        V: PartialEq;

    /// Navigate to the completion value.
    fn ready_value(&self) -> Assert<'_, V, Self>
    where
        Self: Sized,
        V: Clone;
}

impl<V, P> FutureAssertions<V> for Assert<'_, FutureOutcome<V>, P>
where
    V: Debug,
{
    #[track_caller]
    fn is_done(&self) -> &Self {
        self.verify(|outcome| outcome.ready().is_none().then(messages::should_be_done))
    }

    #[track_caller]
    fn is_not_done(&self) -> &Self {
        self.verify(|outcome| {
            outcome
                .ready()
                .map(|value| messages::should_not_be_done(&self.represent(value)))
        })
    }

    #[track_caller]
    fn is_completed_with_value(&self, expected: V) -> &Self
    where
        V: PartialEq,
    {
        self.verify(|outcome| match outcome.ready() {
            None => Some(messages::future_value_absent(Some(
                self.represent(&expected).as_str(),
            ))),
            Some(value) if *value == expected => None,
            Some(value) => Some(messages::should_be_equal(
                &self.represent(value),
                &self.represent(&expected),
                None,
            )),
        })
    }

    fn ready_value(&self) -> Assert<'_, V, Self>
    where
        V: Clone,
    {
        self.child(self.actual().and_then(|outcome| outcome.ready().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use futures::future::{pending, ready};

    use super::*;
    use crate::assert::{expect_assertion_failure, OrderingAssertions};
    use crate::failure::FailureKind;
    use crate::soft::SoftAssertions;

    #[test]
    fn test_ready_future() {
        assert_that_future(ready(5))
            .is_done()
            .is_completed_with_value(5)
            .ready_value()
            .is_greater_than(4);
    }

    #[test]
    fn test_pending_future() {
        assert_that_future(pending::<i32>()).is_not_done();

        let message = expect_assertion_failure(|| {
            assert_that_future(pending::<i32>()).is_done();
        });
        assert_eq!(message, "\nExpecting future to be done but it was still pending.");
    }

    #[test]
    fn test_pending_value_is_absent() {
        let softly = SoftAssertions::new();
        softly.assert_that_future(pending::<i32>()).is_completed_with_value(1);

        let errors = softly.errors();
        assert_eq!(errors[0].kind(), FailureKind::SubjectAbsent);
        assert_eq!(
            errors[0].message(),
            "\nExpecting future to be completed with:\n  1\nbut it was still pending."
        );
    }

    #[test]
    fn test_completed_blocks_until_done() {
        let (sender, receiver) = futures::channel::oneshot::channel();
        let worker = std::thread::spawn(move || sender.send("done"));

        assert_that_completed(receiver)
            .is_done()
            .is_completed_with_value(Ok("done"));
        assert!(worker.join().is_ok());
    }

    #[test]
    fn test_not_done_message() {
        let message = expect_assertion_failure(|| {
            assert_that_future(async { "ring" }).is_not_done();
        });
        assert_eq!(
            message,
            "\nExpecting future not to be done but it completed with:\n  \"ring\""
        );
    }
}
