use std::fmt::Debug;

use regex::Regex;

use super::Assert;
use crate::failure::{messages, ErrorMessage};

/// Checks on text: `&str`, `String`, `Cow<str>` and anything `AsRef<str>`.
pub trait StrAssertions {
    /// The text is `""`.
    fn is_empty(&self) -> &Self;

    /// The text is not `""`.
    fn is_not_empty(&self) -> &Self;

    /// The text is empty or only whitespace.
    fn is_blank(&self) -> &Self;

    /// The text has at least one non-whitespace character.
    fn is_not_blank(&self) -> &Self;

    /// The text contains `fragment`.
    fn contains(&self, fragment: &str) -> &Self;

    /// The text does not contain `fragment`.
    fn does_not_contain(&self, fragment: &str) -> &Self;

    /// The text starts with `prefix`.
    fn starts_with(&self, prefix: &str) -> &Self;

    /// The text ends with `suffix`.
    fn ends_with(&self, suffix: &str) -> &Self;

    /// The text has `expected` characters.
    fn has_length(&self, expected: usize) -> &Self;

    /// The whole text matches the regular expression `pattern`.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression.
    fn matches_pattern(&self, pattern: &str) -> &Self;

    /// The text equals `expected` ignoring case.
    fn is_equal_to_ignoring_case(&self, expected: &str) -> &Self;

    /// Navigate to the number of characters.
    fn length(&self) -> Assert<'_, usize, Self>
    where
        Self: Sized;
}

#[track_caller]
/// Compile `pattern` so that it must match the whole input.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression.
#[track_caller]
pub(crate) fn whole_match(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$"))
        .unwrap_or_else(|e| panic!("invalid regular expression {pattern:?}: {e}"))
}

fn check_fragment<'a, 'p, T, P>(
    node: &'a Assert<'p, T, P>,
    fragment: &str,
    accept: impl FnOnce(&str) -> bool,
    message: fn(&str, &str) -> ErrorMessage,
) -> &'a Assert<'p, T, P>
where
    T: AsRef<str> + Debug,
{
    node.verify(|actual| {
        (!accept(actual.as_ref()))
            .then(|| message(&node.represent(actual), &node.represent(&fragment)))
    })
}

impl<T, P> StrAssertions for Assert<'_, T, P>
where
    T: AsRef<str> + Debug,
{
    #[track_caller]
    fn is_empty(&self) -> &Self {
        self.verify(|actual| {
            (!actual.as_ref().is_empty()).then(|| messages::should_be_empty(&self.represent(actual)))
        })
    }

    #[track_caller]
    fn is_not_empty(&self) -> &Self {
        self.verify(|actual| actual.as_ref().is_empty().then(messages::should_not_be_empty))
    }

    #[track_caller]
    fn is_blank(&self) -> &Self {
        self.verify(|actual| {
            (!actual.as_ref().trim().is_empty())
                .then(|| messages::should_be_blank(&self.represent(actual)))
        })
    }

    #[track_caller]
    fn is_not_blank(&self) -> &Self {
        self.verify(|actual| {
            actual
                .as_ref()
                .trim()
                .is_empty()
                .then(|| messages::should_not_be_blank(&self.represent(actual)))
        })
    }

    #[track_caller]
    fn contains(&self, fragment: &str) -> &Self {
        check_fragment(self, fragment, |a| a.contains(fragment), messages::should_contain_str)
    }

    #[track_caller]
    fn does_not_contain(&self, fragment: &str) -> &Self {
        check_fragment(
            self,
            fragment,
            |a| !a.contains(fragment),
            messages::should_not_contain_str,
        )
    }

    #[track_caller]
    fn starts_with(&self, prefix: &str) -> &Self {
        check_fragment(self, prefix, |a| a.starts_with(prefix), messages::should_start_with)
    }

    #[track_caller]
    fn ends_with(&self, suffix: &str) -> &Self {
        check_fragment(self, suffix, |a| a.ends_with(suffix), messages::should_end_with)
    }

    #[track_caller]
    fn has_length(&self, expected: usize) -> &Self {
        self.verify(|actual| {
            let length = actual.as_ref().chars().count();
            (length != expected)
                .then(|| messages::should_have_size(&self.represent(actual), length, expected))
        })
    }

    #[track_caller]
    fn matches_pattern(&self, pattern: &str) -> &Self {
        let regex = whole_match(pattern);
        self.verify(|actual| {
            (!regex.is_match(actual.as_ref()))
                .then(|| messages::should_match_pattern(&self.represent(actual), pattern))
        })
    }

    #[track_caller]
    fn is_equal_to_ignoring_case(&self, expected: &str) -> &Self {
        self.verify(|actual| {
            (actual.as_ref().to_lowercase() != expected.to_lowercase()).then(|| {
                messages::should_be_equal_ignoring_case(
                    &self.represent(actual),
                    &self.represent(&expected),
                )
            })
        })
    }

    fn length(&self) -> Assert<'_, usize, Self> {
        self.child(self.actual().map(|text| text.as_ref().chars().count()))
    }
}
