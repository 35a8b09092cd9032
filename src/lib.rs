//! # testkit-assert 🧰
//!
//! > Fluent assertions with soft failure collection for Rust tests
//!
//! **testkit-assert** wraps a value in an assertion node and lets you chain
//! checks on it. A failing check either panics right away (strict mode) or is
//! recorded and the chain goes on (soft mode), so one test run can report
//! every broken expectation at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use testkit_assert::prelude::*;
//!
//! assert_that("Frodo").starts_with("Fro").has_length(5);
//! assert_that(vec![1, 2, 3]).contains_exactly([1, 2, 3]).is_sorted();
//!
//! let softly = SoftAssertions::new();
//! softly.assert_that(1).is_equal_to(2);
//! softly.assert_that("ring").is_empty();
//! assert_eq!(softly.errors().len(), 2);
//! ```
//!
//! ## Features
//!
//! - 🔗 **Fluent checks** - one capability trait per kind of value
//! - 🧺 **Soft assertions** - collect failures, report them together
//! - ↩️ **Navigation** - step into a derived value and back to its parent
//! - 💥 **Code assertions** - errors returned and panics raised by a block
//! - ⏳ **Future assertions** - readiness and completion values
//! - 🎯 **`#[soft_test]`** - a test attribute that closes the session for you

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assert;
pub mod comparison;
pub mod condition;
pub mod config;
pub mod error;
pub mod failure;
pub mod representation;
pub mod soft;

/// Prelude for convenient imports
///
/// The crate `Result` alias is left out so that glob imports in test files
/// keep `std::result::Result`.
///
/// ```rust
/// use testkit_assert::prelude::*;
///
/// fn parse(input: &str) -> Result<i32, std::num::ParseIntError> {
///     input.parse()
/// }
///
/// assert_that(parse("42")).is_ok().contains_ok(42);
/// ```
pub mod prelude {
    pub use crate::assert::{
        assert_that, assert_that_code, assert_that_completed, assert_that_future,
        assert_that_predicate, assert_that_thrown_by, expect_assertion_failure, fail, then,
        Assert, BooleanAssertions, CodeAssertions, Enumerable, EnumerableAssertions,
        FloatAssertions, FutureAssertions, FutureOutcome, MapAssertions, MapLike,
        NumericAssertions, ObjectAssertions, OptionAssertions, OrderingAssertions,
        PathAssertions, Predicate, PredicateAssertions, ResultAssertions, StrAssertions,
        ThrowableAssertions, Thrown,
    };
    pub use crate::condition::{all_of, any_of, condition, not, Condition};
    pub use crate::config::Configuration;
    pub use crate::error::{Error, MultipleFailures};
    pub use crate::failure::{AssertionFailure, FailureKind};
    pub use crate::soft::{assert_softly, SoftAssertions, SoftAssertionsGuard};
}

// Re-exports
pub use assert::{assert_that, then, Assert};
pub use error::{Error, Result};
pub use failure::{AssertionFailure, FailureKind};
pub use soft::{assert_softly, SoftAssertions, SoftAssertionsGuard};

// Re-export the soft test attribute when the macros feature is enabled
#[cfg(feature = "macros")]
pub use testkit_assert_macros::soft_test;
