//! Checks on blocks of code and on what they raised.
//!
//! A block "raises" when it panics or when it returns `Err`. Both are caught
//! and turned into a [`Thrown`], so strict and soft sessions see the same
//! subject.

use std::any::{type_name, Any, TypeId};
use std::fmt::{self, Display};
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::string::whole_match;
use super::Assert;
use crate::failure::{messages, AssertionFailure, ErrorMessage};
use crate::soft::FailureHandler;

const PANIC_TYPE: &str = "panic";

/// Extract the text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// `alloc::string::String` -> `String`, `core::num::ParseIntError` -> `ParseIntError`.
pub(crate) fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Something a block of code raised: a panic or a returned error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thrown {
    type_name: &'static str,
    type_id: Option<TypeId>,
    message: String,
}

impl Thrown {
    /// Capture a returned error.
    #[must_use]
    pub fn from_error<E: Display + 'static>(error: &E) -> Self {
        Self {
            type_name: type_name::<E>(),
            type_id: Some(TypeId::of::<E>()),
            message: error.to_string(),
        }
    }

    /// Capture a panic payload.
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        Self {
            type_name: PANIC_TYPE,
            type_id: None,
            message: panic_message(payload),
        }
    }

    /// Fully qualified type of the error, `"panic"` for panics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Type name without its module path.
    #[must_use]
    pub fn short_type_name(&self) -> &'static str {
        short_type_name(self.type_name)
    }

    /// The error's `Display` text or the panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this was a panic rather than a returned error.
    #[must_use]
    pub fn is_panic(&self) -> bool {
        self.type_id.is_none()
    }

    /// Whether the returned error has type `E`.
    #[must_use]
    pub fn is<E: 'static>(&self) -> bool {
        self.type_id == Some(TypeId::of::<E>())
    }

    fn matches_type_name(&self, name: &str) -> bool {
        name == self.type_name || name == self.short_type_name()
    }
}

impl Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\"", self.short_type_name(), self.message)
    }
}

/// Return types accepted from code blocks.
///
/// `()` never raises; `Result` raises its `Err`.
pub trait Outcome {
    /// The error carried by this value, if any.
    fn into_thrown(self) -> Option<Thrown>;
}

impl Outcome for () {
    fn into_thrown(self) -> Option<Thrown> {
        None
    }
}

impl<R, E: Display + 'static> Outcome for Result<R, E> {
    fn into_thrown(self) -> Option<Thrown> {
        self.err().map(|error| Thrown::from_error(&error))
    }
}

/// What running a block of code produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeOutcome {
    thrown: Option<Thrown>,
}

impl CodeOutcome {
    /// Run `code`, catching panics.
    pub fn capture<F, O>(code: F) -> Self
    where
        F: FnOnce() -> O,
        O: Outcome,
    {
        let thrown = match catch_unwind(AssertUnwindSafe(code)) {
            Ok(outcome) => outcome.into_thrown(),
            Err(payload) => Some(Thrown::from_panic(&*payload)),
        };
        Self { thrown }
    }

    /// What was raised, if anything.
    #[must_use]
    pub fn thrown(&self) -> Option<&Thrown> {
        self.thrown.as_ref()
    }
}

pub(crate) fn code_with<F, O>(code: F, handler: FailureHandler) -> Assert<'static, CodeOutcome>
where
    F: FnOnce() -> O,
    O: Outcome,
{
    Assert::with_handler(CodeOutcome::capture(code), handler)
}

#[track_caller]
pub(crate) fn thrown_by_with<F, O>(code: F, handler: FailureHandler) -> Assert<'static, Thrown>
where
    F: FnOnce() -> O,
    O: Outcome,
{
    match CodeOutcome::capture(code).thrown {
        Some(thrown) => Assert::with_handler(thrown, handler),
        None => {
            let node = Assert::absent(handler);
            node.report(messages::should_have_thrown_any());
            node
        }
    }
}

/// Run `code` and assert on what it did.
///
/// A block that only panics has no return type to pick an [`Outcome`] from.
/// Name it with `::<_, ()>` (or write the closure as `|| -> () { .. }`).
///
/// # Example
///
/// ```rust
/// use testkit_assert::prelude::*;
///
/// assert_that_code(|| "42".parse::<i32>()).does_not_throw_any_exception();
/// assert_that_code(|| "x".parse::<i32>()).throws_any_type_of(&["ParseIntError"]);
/// assert_that_code::<_, ()>(|| panic!("boom")).throws_any();
/// ```
pub fn assert_that_code<F, O>(code: F) -> Assert<'static, CodeOutcome>
where
    F: FnOnce() -> O,
    O: Outcome,
{
    code_with(code, FailureHandler::Raise)
}

/// Run `code` and assert on what it raised.
///
/// As with [`assert_that_code`], a block that only panics needs its outcome
/// named: `assert_that_thrown_by::<_, ()>(|| panic!(..))`.
///
/// # Panics
///
/// Panics right away if `code` raised nothing.
#[track_caller]
pub fn assert_that_thrown_by<F, O>(code: F) -> Assert<'static, Thrown>
where
    F: FnOnce() -> O,
    O: Outcome,
{
    thrown_by_with(code, FailureHandler::Raise)
}

/// Run `code`, which must raise a strict assertion failure, and return the
/// failure message.
///
/// Any panic counts: the message of whatever panic `code` raised is returned,
/// so keep `code` to the strict check under test.
///
/// # Panics
///
/// Panics if `code` completes without failing.
#[track_caller]
pub fn expect_assertion_failure<F: FnOnce()>(code: F) -> String {
    match catch_unwind(AssertUnwindSafe(code)) {
        Ok(()) => panic!(
            "{}",
            AssertionFailure::new("\nExpecting an assertion failure but none was raised")
        ),
        Err(payload) => panic_message(&*payload),
    }
}

/// Checks on the outcome of a block of code.
pub trait CodeAssertions {
    /// The block neither panicked nor returned `Err`.
    fn does_not_throw_any_exception(&self) -> &Self;

    /// The block did not panic. A returned `Err` is fine.
    fn does_not_panic(&self) -> &Self;

    /// The block panicked or returned `Err`.
    fn throws_any(&self) -> &Self;

    /// The block raised one of `types`, given as full or short type names
    /// (`"panic"` for panics).
    fn throws_any_type_of(&self, types: &[&str]) -> &Self;

    /// Navigate to what the block raised.
    fn thrown(&self) -> Assert<'_, Thrown, Self>
    where
        Self: Sized;
}

impl<P> CodeAssertions for Assert<'_, CodeOutcome, P> {
    #[track_caller]
    fn does_not_throw_any_exception(&self) -> &Self {
        self.verify(|outcome| {
            outcome
                .thrown()
                .map(|thrown| messages::should_not_have_thrown(&thrown.to_string()))
        })
    }

    #[track_caller]
    fn does_not_panic(&self) -> &Self {
        self.verify(|outcome| {
            outcome
                .thrown()
                .filter(|thrown| thrown.is_panic())
                .map(|thrown| messages::should_not_have_thrown(&thrown.to_string()))
        })
    }

    #[track_caller]
    fn throws_any(&self) -> &Self {
        self.verify(|outcome| {
            outcome
                .thrown()
                .is_none()
                .then(messages::should_have_thrown_any)
        })
    }

    #[track_caller]
    fn throws_any_type_of(&self, types: &[&str]) -> &Self {
        let listed = format!("[{}]", types.join(", "));
        self.verify(|outcome| match outcome.thrown() {
            None => Some(messages::should_have_thrown_any_of(&listed)),
            Some(thrown) if types.iter().any(|t| thrown.matches_type_name(t)) => None,
            Some(thrown) => Some(messages::should_be_instance_of_any(
                &thrown.to_string(),
                &listed,
            )),
        })
    }

    fn thrown(&self) -> Assert<'_, Thrown, Self> {
        self.child(self.actual().and_then(|outcome| outcome.thrown().cloned()))
    }
}

/// Checks on a raised panic or error.
pub trait ThrowableAssertions {
    /// The raised value is an error of type `E`.
    fn is_instance_of<E: 'static>(&self) -> &Self;

    /// The raised value is a panic.
    fn is_panic(&self) -> &Self;

    /// The raised value is a returned error.
    fn is_error(&self) -> &Self;

    /// The message equals `expected`.
    fn has_message(&self, expected: &str) -> &Self;

    /// The message contains `fragment`.
    fn has_message_containing(&self, fragment: &str) -> &Self;

    /// The message starts with `prefix`.
    fn has_message_starting_with(&self, prefix: &str) -> &Self;

    /// The message ends with `suffix`.
    fn has_message_ending_with(&self, suffix: &str) -> &Self;

    /// The whole message matches the regular expression `pattern`.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression.
    fn has_message_matching(&self, pattern: &str) -> &Self;

    /// Navigate to the message.
    fn message(&self) -> Assert<'_, String, Self>
    where
        Self: Sized;
}

#[track_caller]
fn check_thrown<'a, 'p, P, F>(node: &'a Assert<'p, Thrown, P>, check: F) -> &'a Assert<'p, Thrown, P>
where
    F: FnOnce(&Thrown) -> Option<ErrorMessage>,
{
    if node.actual().is_none() {
        return node.report(messages::thrown_was_absent());
    }
    node.verify(check)
}

#[track_caller]
fn check_message<'a, 'p, P>(
    node: &'a Assert<'p, Thrown, P>,
    relation: &str,
    expected: &str,
    accept: impl FnOnce(&str) -> bool,
) -> &'a Assert<'p, Thrown, P> {
    check_thrown(node, |thrown| {
        (!accept(thrown.message())).then(|| {
            messages::should_have_message(&thrown.to_string(), thrown.message(), relation, expected)
        })
    })
}

impl<P> ThrowableAssertions for Assert<'_, Thrown, P> {
    #[track_caller]
    fn is_instance_of<E: 'static>(&self) -> &Self {
        let expected = format!("[{}]", short_type_name(type_name::<E>()));
        check_thrown(self, |thrown| {
            (!thrown.is::<E>())
                .then(|| messages::should_be_instance_of_any(&thrown.to_string(), &expected))
        })
    }

    #[track_caller]
    fn is_panic(&self) -> &Self {
        check_thrown(self, |thrown| {
            (!thrown.is_panic()).then(|| {
                messages::should_be_instance_of_any(&thrown.to_string(), &format!("[{PANIC_TYPE}]"))
            })
        })
    }

    #[track_caller]
    fn is_error(&self) -> &Self {
        check_thrown(self, |thrown| {
            thrown.is_panic().then(|| {
                messages::should_be_instance_of_any(&thrown.to_string(), "[returned error]")
            })
        })
    }

    #[track_caller]
    fn has_message(&self, expected: &str) -> &Self {
        check_message(self, "to be", expected, |m| m == expected)
    }

    #[track_caller]
    fn has_message_containing(&self, fragment: &str) -> &Self {
        check_message(self, "to contain", fragment, |m| m.contains(fragment))
    }

    #[track_caller]
    fn has_message_starting_with(&self, prefix: &str) -> &Self {
        check_message(self, "to start with", prefix, |m| m.starts_with(prefix))
    }

    #[track_caller]
    fn has_message_ending_with(&self, suffix: &str) -> &Self {
        check_message(self, "to end with", suffix, |m| m.ends_with(suffix))
    }

    #[track_caller]
    fn has_message_matching(&self, pattern: &str) -> &Self {
        let regex = whole_match(pattern);
        check_message(self, "to match", pattern, |m| regex.is_match(m))
    }

    fn message(&self) -> Assert<'_, String, Self> {
        self.child(self.actual().map(|thrown| thrown.message().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::{assert_that, ObjectAssertions, StrAssertions};
    use crate::failure::FailureKind;
    use crate::soft::SoftCollector;

    #[derive(Debug)]
    struct IllegalState(&'static str);

    impl Display for IllegalState {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    fn illegal_state() -> Result<(), IllegalState> {
        Err(IllegalState("bad"))
    }

    #[test]
    fn test_quiet_block_passes() {
        assert_that_code(|| {}).does_not_throw_any_exception().does_not_panic();
        assert_that_code(|| Ok::<_, IllegalState>(1)).does_not_throw_any_exception();
    }

    #[test]
    fn test_raising_block_names_type_and_message() {
        let message = expect_assertion_failure(|| {
            assert_that_code(illegal_state).does_not_throw_any_exception();
        });
        assert_eq!(
            message,
            "\nExpecting code not to raise a throwable but caught\n  IllegalState: \"bad\""
        );
    }

    #[test]
    fn test_panicking_block_is_caught() {
        assert_that_code::<_, ()>(|| panic!("kaboom"))
            .throws_any()
            .throws_any_type_of(&["panic"]);
    }

    #[test]
    fn test_error_is_not_a_panic() {
        assert_that_code(illegal_state).does_not_panic().throws_any();
    }

    #[test]
    fn test_throws_any_type_of_nothing_thrown() {
        let message = expect_assertion_failure(|| {
            assert_that_code(|| {}).throws_any_type_of(&["IllegalState", "ParseIntError"]);
        });
        assert_eq!(
            message,
            "\nExpecting code block to raise a Throwable with any type below:\n  [IllegalState, ParseIntError]\nbut nothing was thrown"
        );
    }

    #[test]
    fn test_throws_any_type_of_wrong_type() {
        let message = expect_assertion_failure(|| {
            assert_that_code(illegal_state).throws_any_type_of(&["ParseIntError"]);
        });
        assert!(message.contains("to be an instance of any of:\n  [ParseIntError]"));
    }

    #[test]
    fn test_thrown_by_checks() {
        assert_that_thrown_by(illegal_state)
            .is_instance_of::<IllegalState>()
            .is_error()
            .has_message("bad")
            .has_message_starting_with("b")
            .has_message_ending_with("d")
            .has_message_containing("a")
            .has_message_matching("^b.d$");

        assert_that_thrown_by::<_, ()>(|| panic!("index out of range: 7")).is_panic();
    }

    #[test]
    fn test_has_message_matching_needs_whole_message() {
        let wrong_amount = || Err::<(), _>("wrong amount 123 euros".to_string());
        assert_that_thrown_by(wrong_amount).has_message_matching("wrong amount [0-9]* euros");

        let collector = SoftCollector::new();
        thrown_by_with(wrong_amount, FailureHandler::Collect(collector.clone()))
            .has_message_matching("wrong amount [0-9]*");

        let errors = collector.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message().contains("to match"));
    }

    #[test]
    fn test_has_message_failure() {
        let message = expect_assertion_failure(|| {
            assert_that_thrown_by(illegal_state).has_message_containing("worse");
        });
        assert!(message.starts_with("\nExpecting throwable message:\n  \"bad\"\nto contain:\n  \"worse\""));
    }

    #[test]
    #[should_panic(expected = "Expecting code to raise a throwable.")]
    fn test_thrown_by_quiet_block_fails() {
        let _ = assert_that_thrown_by(|| {});
    }

    #[test]
    fn test_thrown_by_quiet_block_in_soft_mode() {
        let collector = SoftCollector::new();
        thrown_by_with(|| {}, FailureHandler::Collect(collector.clone())).has_message("x");

        let errors = collector.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind(), FailureKind::Assertion);
        assert_eq!(errors[1].kind(), FailureKind::SubjectAbsent);
    }

    #[test]
    fn test_message_navigation() {
        let code = assert_that_code(illegal_state);
        code.thrown()
            .message()
            .is_equal_to("bad".to_string())
            .return_to_parent()
            .is_error();
    }

    #[test]
    fn test_thrown_navigation_on_quiet_block_is_absent() {
        let collector = SoftCollector::new();
        let code = code_with(|| {}, FailureHandler::Collect(collector.clone()));
        code.thrown().is_panic();

        assert_eq!(collector.errors()[0].kind(), FailureKind::SubjectAbsent);
    }

    #[test]
    fn test_message_child_string_checks() {
        assert_that_thrown_by(illegal_state).message().starts_with("b");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("core::num::error::ParseIntError"), "ParseIntError");
        assert_eq!(short_type_name("alloc::boxed::Box<dyn core::error::Error>"), "Box");
        assert_eq!(short_type_name("panic"), "panic");
    }

    #[test]
    #[should_panic(expected = "none was raised")]
    fn test_expect_assertion_failure_requires_failure() {
        expect_assertion_failure(|| {});
    }

    #[test]
    fn test_expect_assertion_failure_returns_any_panic_message() {
        let message = expect_assertion_failure(|| panic!("not an assertion"));
        assert_eq!(message, "not an assertion");
    }
}
