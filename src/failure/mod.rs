//! Failure descriptors.
//!
//! A failing check produces an [`ErrorMessage`] (what went wrong, in the
//! words of the check) which the assertion node turns into an
//! [`AssertionFailure`] (the message plus description, overriding message
//! and the location of the failing check). The failure is then either raised
//! or collected, depending on the node's
//! [`FailureHandler`](crate::soft::FailureHandler).

use std::panic::Location;

use thiserror::Error;

pub mod messages;

/// Distinguishes a check that evaluated false from a check that could not
/// run because its subject was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The expected condition was false.
    Assertion,
    /// The check needed a subject value and there was none.
    SubjectAbsent,
}

/// The rendered outcome of a failed check, before description and location
/// are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    kind: FailureKind,
    text: String,
    actual: Option<String>,
    expected: Option<String>,
}

impl ErrorMessage {
    /// Create an assertion failure message.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Assertion,
            text: text.into(),
            actual: None,
            expected: None,
        }
    }

    /// Create a message for a check whose subject was absent.
    #[must_use]
    pub fn subject_absent(text: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::SubjectAbsent,
            ..Self::new(text)
        }
    }

    /// Attach the rendered actual value.
    #[must_use]
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// Attach the rendered expected value.
    #[must_use]
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// The failure kind.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The rendered template text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A failed check, ready to be raised or collected.
///
/// The `Display` output is the self-sufficient message shown to the user:
/// the description prefix (if any) followed by either the overriding error
/// message or the rendered template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    kind: FailureKind,
    message: String,
    description: Option<String>,
    actual: Option<String>,
    expected: Option<String>,
    location: Option<&'static Location<'static>>,
}

impl AssertionFailure {
    /// Create a failure from a bare message, as `fail("...")` does.
    #[must_use]
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Assertion,
            message: message.into(),
            description: None,
            actual: None,
            expected: None,
            location: Some(Location::caller()),
        }
    }

    pub(crate) fn from_message(
        message: ErrorMessage,
        description: Option<&str>,
        overriding: Option<&str>,
        location: &'static Location<'static>,
    ) -> Self {
        let body = overriding.unwrap_or(&message.text);
        let rendered = match description {
            Some(description) => format!("[{description}] {body}"),
            None => body.to_string(),
        };

        Self {
            kind: message.kind,
            message: rendered,
            description: description.map(str::to_string),
            actual: message.actual,
            expected: message.expected,
            location: Some(location),
        }
    }

    /// The failure kind.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The full rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The description attached to the node that failed, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The rendered actual value, when the check had one.
    #[must_use]
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// The rendered expected value, when the check had one.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// Where the failing check was called from.
    #[must_use]
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_builder() {
        let message = ErrorMessage::new("boom").with_actual("1").with_expected("2");
        assert_eq!(message.kind(), FailureKind::Assertion);
        assert_eq!(message.text(), "boom");

        let absent = ErrorMessage::subject_absent("missing");
        assert_eq!(absent.kind(), FailureKind::SubjectAbsent);
    }

    #[test]
    fn test_failure_applies_description() {
        let message = ErrorMessage::new("\nexpected: 2\n but was: 1")
            .with_actual("1")
            .with_expected("2");
        let failure =
            AssertionFailure::from_message(message, Some("age"), None, Location::caller());

        assert_eq!(failure.to_string(), "[age] \nexpected: 2\n but was: 1");
        assert_eq!(failure.description(), Some("age"));
        assert_eq!(failure.actual(), Some("1"));
        assert_eq!(failure.expected(), Some("2"));
    }

    #[test]
    fn test_overriding_message_replaces_template() {
        let failure = AssertionFailure::from_message(
            ErrorMessage::new("template"),
            None,
            Some("custom"),
            Location::caller(),
        );
        assert_eq!(failure.message(), "custom");
    }

    #[test]
    fn test_new_records_location() {
        let failure = AssertionFailure::new("bad");
        let location = failure.location().unwrap();
        assert!(location.file().ends_with("mod.rs"));
    }
}
