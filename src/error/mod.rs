//! Error definitions
//!
//! This module provides the aggregate error of a soft assertion session and
//! the crate-level error type.

use std::fmt::Write as _;

use thiserror::Error;

use crate::config::Configuration;
use crate::failure::AssertionFailure;

/// Main error type for testkit-assert
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// A single check failed
    #[error(transparent)]
    Failure(#[from] AssertionFailure),

    /// A soft assertion session collected failures
    #[error(transparent)]
    MultipleFailures(#[from] MultipleFailures),
}

/// Every failure collected by a soft assertion session, in the order the
/// checks failed.
///
/// The rendered message lists each failure under a `-- failure N --` header,
/// followed by the location of the failing check unless
/// [`Configuration::bare_failure_messages`] is set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct MultipleFailures {
    heading: Option<String>,
    failures: Vec<AssertionFailure>,
    message: String,
}

impl MultipleFailures {
    /// Aggregate collected failures under an optional heading.
    #[must_use]
    pub fn new(heading: Option<String>, failures: Vec<AssertionFailure>) -> Self {
        let message = render(heading.as_deref(), &failures);
        Self {
            heading,
            failures,
            message,
        }
    }

    /// The collected failures.
    #[must_use]
    pub fn failures(&self) -> &[AssertionFailure] {
        &self.failures
    }

    /// The heading given to the session, if any.
    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    /// Number of collected failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Whether no failures were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

fn render(heading: Option<&str>, failures: &[AssertionFailure]) -> String {
    let count = failures.len();
    let noun = if count == 1 { "failure" } else { "failures" };
    let heading = heading.unwrap_or("Multiple Failures");
    let with_locations = !Configuration::current().bare_failure_messages;

    let mut out = format!("\n{heading} ({count} {noun})");
    for (index, failure) in failures.iter().enumerate() {
        let _ = write!(out, "\n-- failure {} --", index + 1);
        let message = failure.message();
        if !message.starts_with('\n') {
            out.push('\n');
        }
        out.push_str(message);
        if with_locations {
            if let Some(location) = failure.location() {
                let _ = write!(out, "\nat {location}");
            }
        }
    }
    out
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
