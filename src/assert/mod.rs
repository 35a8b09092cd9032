//! Assertion nodes and the checks they offer.
//!
//! An [`Assert`] wraps one actual value. Checks come from capability traits
//! implemented per value kind, so a node exposes exactly the checks that make
//! sense for its subject:
//!
//! - [`ObjectAssertions`] - equality, membership, predicates, conditions
//! - [`OrderingAssertions`] - `<`, `<=`, `>`, `>=`, ranges
//! - [`NumericAssertions`] / [`FloatAssertions`] - sign, zero, closeness, NaN
//! - [`BooleanAssertions`] - `true` / `false`
//! - [`StrAssertions`] - text content, prefixes, patterns, length
//! - [`EnumerableAssertions`] - element containment, order, size
//! - [`MapAssertions`] - keys, values, entries, size
//! - [`OptionAssertions`] / [`ResultAssertions`] - variants and held values
//! - [`PathAssertions`] - lexical path properties
//! - [`CodeAssertions`] / [`ThrowableAssertions`] - raised errors and panics
//! - [`PredicateAssertions`] - values a predicate accepts or rejects
//! - [`FutureAssertions`] - readiness and completion value
//!
//! Every check takes `&self` and returns `&Self`, so checks chain. A check
//! that fails hands its failure to the node's
//! [`FailureHandler`](crate::soft::FailureHandler): strict nodes panic, soft
//! nodes record the failure and the chain goes on.
//!
//! # Example
//!
//! ```rust
//! use testkit_assert::prelude::*;
//!
//! assert_that(vec![1, 2, 3])
//!     .described_as("ids")
//!     .contains([2])
//!     .size()
//!     .is_greater_than(2)
//!     .return_to_parent()
//!     .does_not_contain([4]);
//! ```

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::panic::Location;
use std::sync::Arc;

use crate::comparison::Comparison;
use crate::config::Configuration;
use crate::failure::{messages, AssertionFailure, ErrorMessage};
use crate::representation::{HexadecimalRepresentation, Representation, StandardRepresentation};
use crate::soft::FailureHandler;

mod boolean;
pub(crate) mod code;
mod enumerable;
pub(crate) mod future;
mod map;
mod numeric;
mod object;
mod option;
mod ordering;
mod path;
pub(crate) mod predicate;
mod result;
mod string;

pub use boolean::BooleanAssertions;
pub use code::{
    assert_that_code, assert_that_thrown_by, expect_assertion_failure, CodeAssertions,
    CodeOutcome, Outcome, ThrowableAssertions, Thrown,
};
pub use enumerable::{Enumerable, EnumerableAssertions};
pub use future::{assert_that_completed, assert_that_future, FutureAssertions, FutureOutcome};
pub use map::{MapAssertions, MapLike};
pub use numeric::{FloatAssertions, Numeric, NumericAssertions};
pub use object::ObjectAssertions;
pub use option::OptionAssertions;
pub use ordering::OrderingAssertions;
pub use path::PathAssertions;
pub use predicate::{assert_that_predicate, Predicate, PredicateAssertions};
pub use result::ResultAssertions;
pub use string::StrAssertions;

#[derive(Clone)]
struct AssertionInfo {
    description: Option<String>,
    overriding_message: Option<String>,
    representation: Arc<dyn Representation>,
}

impl Default for AssertionInfo {
    fn default() -> Self {
        Self {
            description: None,
            overriding_message: None,
            representation: Arc::new(StandardRepresentation),
        }
    }
}

/// An assertion node over one actual value.
///
/// `P` is the type of the parent node for nodes created by navigation
/// (e.g. [`EnumerableAssertions::size`]); root nodes use `()`.
///
/// The actual value is `None` only for nodes derived from a subject that was
/// not there (the value of a `None` option, the error of code that raised
/// nothing). Every check on such a node fails with
/// [`FailureKind::SubjectAbsent`](crate::failure::FailureKind::SubjectAbsent).
pub struct Assert<'p, T, P = ()> {
    actual: Option<T>,
    info: RefCell<AssertionInfo>,
    comparison: RefCell<Comparison<T>>,
    handler: FailureHandler,
    parent: Option<&'p P>,
}

impl<T> Assert<'static, T> {
    /// Create a strict node.
    #[must_use]
    pub fn new(actual: T) -> Self {
        Self::with_handler(actual, FailureHandler::Raise)
    }

    /// Create a node with an explicit failure handler.
    #[must_use]
    pub fn with_handler(actual: T, handler: FailureHandler) -> Self {
        Self::build(Some(actual), handler, None, AssertionInfo::default())
    }

    pub(crate) fn absent(handler: FailureHandler) -> Self {
        Self::build(None, handler, None, AssertionInfo::default())
    }
}

impl<'p, T, P> Assert<'p, T, P> {
    fn build(
        actual: Option<T>,
        handler: FailureHandler,
        parent: Option<&'p P>,
        info: AssertionInfo,
    ) -> Self {
        Self {
            actual,
            info: RefCell::new(info),
            comparison: RefCell::new(Comparison::Standard),
            handler,
            parent,
        }
    }

    /// The actual value, `None` if the subject is absent.
    #[must_use]
    pub fn actual(&self) -> Option<&T> {
        self.actual.as_ref()
    }

    /// Consume the node and return the actual value.
    #[must_use]
    pub fn into_actual(self) -> Option<T> {
        self.actual
    }

    /// The failure handler this node reports to.
    #[must_use]
    pub fn handler(&self) -> &FailureHandler {
        &self.handler
    }

    /// Prefix failure messages with `[description] `.
    pub fn described_as(&self, description: impl Into<String>) -> &Self {
        self.info.borrow_mut().description = Some(description.into());
        self
    }

    /// The current description.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        self.info.borrow().description.clone()
    }

    /// Replace the message of any later failure with `message`.
    pub fn with_fail_message(&self, message: impl Into<String>) -> &Self {
        self.info.borrow_mut().overriding_message = Some(message.into());
        self
    }

    /// Render values with `representation` in later failures.
    pub fn with_representation(&self, representation: impl Representation + 'static) -> &Self {
        self.info.borrow_mut().representation = Arc::new(representation);
        self
    }

    /// Render integers in hexadecimal in later failures.
    pub fn in_hexadecimal(&self) -> &Self {
        self.with_representation(HexadecimalRepresentation)
    }

    /// Compare with `compare` instead of `PartialEq`/`PartialOrd`.
    pub fn using_comparator<F>(&self, description: impl Into<String>, compare: F) -> &Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        *self.comparison.borrow_mut() = Comparison::custom(description, compare);
        self
    }

    /// Go back to natural comparison.
    pub fn using_default_comparator(&self) -> &Self {
        *self.comparison.borrow_mut() = Comparison::Standard;
        self
    }

    /// The comparison strategy in effect.
    #[must_use]
    pub fn comparison(&self) -> Comparison<T> {
        self.comparison.borrow().clone()
    }

    /// Render a value with this node's representation.
    #[must_use]
    pub fn represent(&self, value: &dyn Debug) -> String {
        self.info.borrow().representation.to_string_of(value)
    }

    /// Render a group of elements with this node's representation.
    #[must_use]
    pub fn represent_elements(&self, elements: &[&dyn Debug]) -> String {
        self.info.borrow().representation.to_string_of_elements(elements)
    }

    /// Turn `message` into a failure and hand it to the handler.
    ///
    /// # Panics
    ///
    /// Panics in strict mode.
    #[track_caller]
    pub fn report(&self, message: ErrorMessage) -> &Self {
        let failure = {
            let info = self.info.borrow();
            AssertionFailure::from_message(
                message,
                info.description.as_deref(),
                info.overriding_message.as_deref(),
                Location::caller(),
            )
        };
        self.handler.handle(failure);
        self
    }

    /// Run one check against the actual value.
    ///
    /// `check` returns `None` when the value passes and the failure message
    /// otherwise. An absent subject fails without running `check`.
    ///
    /// # Panics
    ///
    /// Panics in strict mode when the check fails.
    #[track_caller]
    pub fn verify<F>(&self, check: F) -> &Self
    where
        F: FnOnce(&T) -> Option<ErrorMessage>,
    {
        self.trace_description();
        let outcome = match &self.actual {
            None => Some(messages::should_not_be_absent()),
            Some(actual) => check(actual),
        };
        match outcome {
            Some(message) => {
                self.report(message);
            }
            None => self.handler.succeeded(),
        }
        self
    }

    fn trace_description(&self) {
        if Configuration::current().print_assertions_description {
            if let Some(description) = &self.info.borrow().description {
                tracing::info!(description = %description, "assertion");
            }
        }
    }

    /// Create a child node over a value derived from this node's subject.
    ///
    /// The child shares this node's handler, description and representation
    /// and can hand control back with [`Assert::return_to_parent`]. Pass
    /// `None` when the derived value does not exist; checks on the child then
    /// fail as absent.
    #[must_use]
    pub fn child<D>(&self, derived: Option<D>) -> Assert<'_, D, Self> {
        let info = self.info.borrow().clone();
        Assert::build(derived, self.handler.clone(), Some(self), AssertionInfo {
            overriding_message: None,
            ..info
        })
    }

    /// The node this one was derived from.
    ///
    /// # Panics
    ///
    /// Panics if this node was not created by navigation. This is misuse of
    /// the API and is never collected softly.
    #[track_caller]
    #[must_use]
    pub fn return_to_parent(&self) -> &'p P {
        match self.parent {
            Some(parent) => parent,
            None => panic!(
                "return_to_parent() called on an assertion that was not derived from a parent assertion"
            ),
        }
    }

    /// Whether this node was created by navigation.
    #[must_use]
    pub fn is_derived(&self) -> bool {
        self.parent.is_some()
    }
}

impl<T: Debug, P> Debug for Assert<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assert")
            .field("actual", &self.actual)
            .field("description", &self.info.borrow().description)
            .field("soft", &self.handler.is_soft())
            .field("derived", &self.parent.is_some())
            .finish()
    }
}

/// Create a strict assertion node.
///
/// # Example
///
/// ```rust
/// use testkit_assert::prelude::*;
///
/// assert_that(42).is_equal_to(42).is_positive();
/// ```
#[must_use]
pub fn assert_that<T>(actual: T) -> Assert<'static, T> {
    Assert::new(actual)
}

/// BDD-style alias of [`assert_that`].
#[must_use]
pub fn then<T>(actual: T) -> Assert<'static, T> {
    Assert::new(actual)
}

/// Fail right away with `message`.
///
/// # Panics
///
/// Always.
#[track_caller]
pub fn fail(message: impl Into<String>) -> ! {
    panic!("{}", AssertionFailure::new(message))
}
