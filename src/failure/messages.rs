//! Message templates for every built-in check.
//!
//! All arguments are already rendered through the node's
//! [`Representation`](crate::representation::Representation). Templates
//! start with a newline so the `[description] ` prefix sits on its own line.

use super::ErrorMessage;

fn comparison_suffix(comparison: Option<&str>) -> String {
    comparison
        .map(|c| format!("\nwhen comparing values using {c}"))
        .unwrap_or_default()
}

/// The subject of the check was absent.
#[must_use]
pub fn should_not_be_absent() -> ErrorMessage {
    ErrorMessage::subject_absent("\nExpecting actual not to be None")
}

/// Values differ.
#[must_use]
pub fn should_be_equal(actual: &str, expected: &str, comparison: Option<&str>) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nexpected: {expected}\n but was: {actual}{}",
        comparison_suffix(comparison)
    ))
    .with_actual(actual)
    .with_expected(expected)
}

/// Values are equal although they should not be.
#[must_use]
pub fn should_not_be_equal(actual: &str, other: &str, comparison: Option<&str>) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nnot to be equal to:\n  {other}{}",
        comparison_suffix(comparison)
    ))
    .with_actual(actual)
    .with_expected(other)
}

/// Value missing from a set of candidates.
#[must_use]
pub fn should_be_in(actual: &str, values: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto be in:\n  {values}"
    ))
    .with_actual(actual)
    .with_expected(values)
}

/// Value found among excluded candidates.
#[must_use]
pub fn should_not_be_in(actual: &str, values: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nnot to be in:\n  {values}"
    ))
    .with_actual(actual)
    .with_expected(values)
}

/// Value rejected by a predicate.
#[must_use]
pub fn should_match(actual: &str, predicate: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto match {predicate}."
    ))
    .with_actual(actual)
}

/// Requirements block raised a failure.
#[must_use]
pub fn should_satisfy(actual: &str, cause: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto satisfy given requirements, but it failed with:\n{cause}"
    ))
    .with_actual(actual)
}

/// Condition not met (`is`).
#[must_use]
pub fn should_be(actual: &str, condition: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting actual:\n  {actual}\nto be {condition}"))
        .with_actual(actual)
        .with_expected(condition)
}

/// Condition met although it should not be (`is_not`).
#[must_use]
pub fn should_not_be(actual: &str, condition: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nnot to be {condition}"
    ))
    .with_actual(actual)
}

/// Condition not met (`has`).
#[must_use]
pub fn should_have(actual: &str, condition: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting actual:\n  {actual}\nto have {condition}"))
        .with_actual(actual)
        .with_expected(condition)
}

/// Condition met although it should not be (`does_not_have`).
#[must_use]
pub fn should_not_have(actual: &str, condition: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nnot to have {condition}"
    ))
    .with_actual(actual)
}

/// Ordering relation between actual and a bound does not hold.
///
/// `relation` is the human phrase, e.g. `"less than"`.
#[must_use]
pub fn should_be_ordered(
    actual: &str,
    relation: &str,
    other: &str,
    comparison: Option<&str>,
) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto be {relation}:\n  {other}{}",
        comparison_suffix(comparison)
    ))
    .with_actual(actual)
    .with_expected(other)
}

/// Value outside of a range.
#[must_use]
pub fn should_be_between(
    actual: &str,
    start: &str,
    end: &str,
    inclusive: bool,
    comparison: Option<&str>,
) -> ErrorMessage {
    let (open, close) = if inclusive { ('[', ']') } else { (']', '[') };
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto be between:\n  {open}{start}, {end}{close}{}",
        comparison_suffix(comparison)
    ))
    .with_actual(actual)
    .with_expected(format!("{open}{start}, {end}{close}"))
}

/// Number too far from the expected value.
#[must_use]
pub fn should_be_close_to(actual: &str, expected: &str, offset: &str, difference: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto be close to:\n  {expected}\nby less than {offset} but difference was {difference}.\n(a difference of exactly {offset} being considered valid)"
    ))
    .with_actual(actual)
    .with_expected(expected)
}

/// Floating point value is not a number, or is one when it should not be.
#[must_use]
pub fn should_be_nan(actual: &str, negated: bool) -> ErrorMessage {
    let not = if negated { "not " } else { "" };
    ErrorMessage::new(format!("\nExpecting actual:\n  {actual}\n{not}to be NaN")).with_actual(actual)
}

/// Floating point value is infinite or NaN.
#[must_use]
pub fn should_be_finite(actual: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting actual:\n  {actual}\nto be finite")).with_actual(actual)
}

/// Sized subject was not empty.
#[must_use]
pub fn should_be_empty(actual: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting empty but was: {actual}")).with_actual(actual)
}

/// A group was checked against no values while it held elements.
#[must_use]
pub fn actual_is_not_empty_for_no_values() -> ErrorMessage {
    ErrorMessage::new("actual is not empty while group of values to look for is.")
}

/// Sized subject was empty.
#[must_use]
pub fn should_not_be_empty() -> ErrorMessage {
    ErrorMessage::new("\nExpecting actual not to be empty")
}

/// Wrong size.
#[must_use]
pub fn should_have_size(actual: &str, actual_size: usize, expected_size: usize) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpected size: {expected_size} but was: {actual_size} in:\n{actual}"
    ))
    .with_actual(actual_size.to_string())
    .with_expected(expected_size.to_string())
}

/// String was not blank.
#[must_use]
pub fn should_be_blank(actual: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting blank but was: {actual}")).with_actual(actual)
}

/// String was blank.
#[must_use]
pub fn should_not_be_blank(actual: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting not blank but was: {actual}")).with_actual(actual)
}

/// String does not contain a fragment.
#[must_use]
pub fn should_contain_str(actual: &str, fragment: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting actual:\n  {actual}\nto contain:\n  {fragment}"))
        .with_actual(actual)
        .with_expected(fragment)
}

/// String contains a forbidden fragment.
#[must_use]
pub fn should_not_contain_str(actual: &str, fragment: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nnot to contain:\n  {fragment}"
    ))
    .with_actual(actual)
}

/// Prefix missing.
#[must_use]
pub fn should_start_with(actual: &str, prefix: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto start with:\n  {prefix}"
    ))
    .with_actual(actual)
    .with_expected(prefix)
}

/// Suffix missing.
#[must_use]
pub fn should_end_with(actual: &str, suffix: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting actual:\n  {actual}\nto end with:\n  {suffix}"))
        .with_actual(actual)
        .with_expected(suffix)
}

/// Pattern mismatch.
#[must_use]
pub fn should_match_pattern(actual: &str, pattern: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto match pattern:\n  {pattern:?}"
    ))
    .with_actual(actual)
    .with_expected(pattern)
}

/// Case-insensitive equality failed.
#[must_use]
pub fn should_be_equal_ignoring_case(actual: &str, expected: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto be equal to:\n  {expected}\nwhen ignoring case considerations"
    ))
    .with_actual(actual)
    .with_expected(expected)
}

/// Elements missing from a group.
#[must_use]
pub fn should_contain(actual: &str, expected: &str, not_found: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto contain:\n  {expected}\nbut could not find the following element(s):\n  {not_found}"
    ))
    .with_actual(actual)
    .with_expected(expected)
}

/// Forbidden elements found in a group.
#[must_use]
pub fn should_not_contain(actual: &str, unexpected: &str, found: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nnot to contain:\n  {unexpected}\nbut found:\n  {found}"
    ))
    .with_actual(actual)
}

fn missing_and_unexpected(not_found: Option<&str>, not_expected: Option<&str>) -> String {
    let mut details = String::new();
    if let Some(not_found) = not_found {
        details.push_str(&format!(
            "\nbut could not find the following element(s):\n  {not_found}"
        ));
    }
    if let Some(not_expected) = not_expected {
        let lead = if not_found.is_some() { "and" } else { "but" };
        details.push_str(&format!(
            "\n{lead} the following element(s) were unexpected:\n  {not_expected}"
        ));
    }
    details
}

/// Group holds other elements than the expected ones.
#[must_use]
pub fn should_contain_only(
    actual: &str,
    expected: &str,
    not_found: Option<&str>,
    not_expected: Option<&str>,
) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto contain only:\n  {expected}{}",
        missing_and_unexpected(not_found, not_expected)
    ))
    .with_actual(actual)
    .with_expected(expected)
}

/// Group differs from the expected elements, order included.
#[must_use]
pub fn should_contain_exactly(
    actual: &str,
    expected: &str,
    not_found: Option<&str>,
    not_expected: Option<&str>,
) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto contain exactly (and in same order):\n  {expected}{}",
        missing_and_unexpected(not_found, not_expected)
    ))
    .with_actual(actual)
    .with_expected(expected)
}

/// Group differs from the expected elements, order ignored.
#[must_use]
pub fn should_contain_exactly_in_any_order(
    actual: &str,
    expected: &str,
    not_found: Option<&str>,
    not_expected: Option<&str>,
) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto contain exactly in any order:\n  {expected}{}",
        missing_and_unexpected(not_found, not_expected)
    ))
    .with_actual(actual)
    .with_expected(expected)
}

/// Same elements, wrong order.
#[must_use]
pub fn elements_differ_at_index(index: usize, actual_element: &str, expected_element: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nActual and expected have the same elements but not in the same order, at index {index} actual element was:\n  {actual_element}\nwhereas expected element was:\n  {expected_element}"
    ))
    .with_actual(actual_element)
    .with_expected(expected_element)
}

/// Contiguous sequence missing.
#[must_use]
pub fn should_contain_sequence(actual: &str, sequence: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto contain sequence:\n  {sequence}"
    ))
    .with_actual(actual)
    .with_expected(sequence)
}

/// Elements missing or repeated.
#[must_use]
pub fn should_contain_only_once(
    actual: &str,
    expected: &str,
    not_found: Option<&str>,
    duplicated: Option<&str>,
) -> ErrorMessage {
    let mut text = format!("\nExpecting actual:\n  {actual}\nto contain only once:\n  {expected}");
    if let Some(not_found) = not_found {
        text.push_str(&format!("\nbut some elements were not found:\n  {not_found}"));
    }
    if let Some(duplicated) = duplicated {
        let lead = if not_found.is_some() { "and others" } else { "but some elements" };
        text.push_str(&format!("\n{lead} were found more than once:\n  {duplicated}"));
    }
    ErrorMessage::new(text).with_actual(actual).with_expected(expected)
}

/// Duplicates found.
#[must_use]
pub fn should_not_have_duplicates(actual: &str, duplicates: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nFound duplicate(s):\n  {duplicates}\nin:\n  {actual}"))
        .with_actual(actual)
}

/// Group not sorted.
#[must_use]
pub fn should_be_sorted(index: usize, element: &str, next: &str, actual: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\ngroup is not sorted because element {index}:\n  {element}\nis not less or equal than element {}:\n  {next}\ngroup was:\n  {actual}",
        index + 1
    ))
    .with_actual(actual)
}

/// An element rejected by an all-match predicate.
#[must_use]
pub fn should_all_match(actual: &str, element: &str, predicate: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting all elements of:\n  {actual}\nto match {predicate} but this element did not:\n  {element}"
    ))
    .with_actual(actual)
}

/// No element accepted by an any-match predicate.
#[must_use]
pub fn should_any_match(actual: &str, predicate: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting any elements of:\n  {actual}\nto match {predicate} but none did."
    ))
    .with_actual(actual)
}

/// An element accepted by a none-match predicate.
#[must_use]
pub fn should_none_match(actual: &str, element: &str, predicate: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting no elements of:\n  {actual}\nto match {predicate} but this element did:\n  {element}"
    ))
    .with_actual(actual)
}

/// Missing map keys.
#[must_use]
pub fn should_contain_keys(actual: &str, keys: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting actual:\n  {actual}\nto contain key(s):\n  {keys}"))
        .with_actual(actual)
        .with_expected(keys)
}

/// Forbidden map keys present.
#[must_use]
pub fn should_not_contain_keys(actual: &str, keys: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nnot to contain key(s):\n  {keys}"
    ))
    .with_actual(actual)
}

/// Missing map entry.
#[must_use]
pub fn should_contain_entry(actual: &str, key: &str, value: &str, found: Option<&str>) -> ErrorMessage {
    let detail = match found {
        Some(found) => format!("\nbut key was mapped to:\n  {found}"),
        None => "\nbut key was not found".to_string(),
    };
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto contain entry:\n  {key}={value}{detail}"
    ))
    .with_actual(actual)
    .with_expected(format!("{key}={value}"))
}

/// Missing map value.
#[must_use]
pub fn should_contain_value(actual: &str, value: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting actual:\n  {actual}\nto contain value:\n  {value}"))
        .with_actual(actual)
        .with_expected(value)
}

/// `Option` was `None`.
#[must_use]
pub fn should_be_some() -> ErrorMessage {
    ErrorMessage::new("\nExpecting Option to contain a value but it was None.")
}

/// `Option` was `Some`.
#[must_use]
pub fn should_be_none(value: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting an Option to be None but was containing value:\n  {value}"
    ))
    .with_actual(value)
}

/// `Option` value differs from the expected one.
#[must_use]
pub fn option_should_contain(actual: &str, expected: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {actual}\nto contain:\n  {expected}\nbut did not."
    ))
    .with_actual(actual)
    .with_expected(expected)
}

/// `Option` was `None` where a value was needed.
#[must_use]
pub fn option_was_none(expected: Option<&str>) -> ErrorMessage {
    let text = match expected {
        Some(expected) => format!("\nExpecting Option to contain:\n  {expected}\nbut was None."),
        None => "\nExpecting Option to contain a value but it was None.".to_string(),
    };
    ErrorMessage::subject_absent(text)
}

/// `Result` variant mismatch.
#[must_use]
pub fn should_be_variant(actual: &str, variant: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting Result to be {variant} but was:\n  {actual}"))
        .with_actual(actual)
        .with_expected(variant)
}

/// `Result` held the other variant where a value was needed.
#[must_use]
pub fn result_variant_absent(actual: &str, variant: &str) -> ErrorMessage {
    ErrorMessage::subject_absent(format!(
        "\nExpecting Result to be {variant} but was:\n  {actual}"
    ))
    .with_actual(actual)
}

/// Path extension mismatch.
#[must_use]
pub fn should_have_extension(actual: &str, expected: &str, found: Option<&str>) -> ErrorMessage {
    let found = found.map_or_else(|| "no extension".to_string(), |f| format!("{f:?}"));
    ErrorMessage::new(format!(
        "\nExpecting\n  {actual}\nto have extension:\n  {expected:?}\nbut had:\n  {found}"
    ))
    .with_actual(actual)
    .with_expected(expected)
}

/// Path has an extension.
#[must_use]
pub fn should_have_no_extension(actual: &str, found: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting\n  {actual}\nnot to have an extension, but extension was: {found:?}"
    ))
    .with_actual(actual)
}

/// Path file name mismatch.
#[must_use]
pub fn should_have_file_name(actual: &str, expected: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting\n  {actual}\nto have file name:\n  {expected:?}"))
        .with_actual(actual)
        .with_expected(expected)
}

/// Path parent mismatch.
#[must_use]
pub fn should_have_parent(actual: &str, expected: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting\n  {actual}\nto have parent:\n  {expected}"))
        .with_actual(actual)
        .with_expected(expected)
}

/// Path has a parent.
#[must_use]
pub fn should_have_no_parent(actual: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting path\n  {actual}\nto have no parent")).with_actual(actual)
}

/// Path is not absolute / relative.
#[must_use]
pub fn should_be_path_kind(actual: &str, kind: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting actual:\n  {actual}\nto be {kind} path"))
        .with_actual(actual)
}

/// Path prefix / suffix mismatch.
#[must_use]
pub fn path_should_start_or_end_with(actual: &str, relation: &str, other: &str) -> ErrorMessage {
    ErrorMessage::new(format!("\nExpecting path:\n  {actual}\nto {relation}:\n  {other}"))
        .with_actual(actual)
        .with_expected(other)
}

/// Code raised something when it should not have.
#[must_use]
pub fn should_not_have_thrown(thrown: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting code not to raise a throwable but caught\n  {thrown}"
    ))
    .with_actual(thrown)
}

/// Code raised nothing.
#[must_use]
pub fn should_have_thrown_any() -> ErrorMessage {
    ErrorMessage::new("\nExpecting code to raise a throwable.")
}

/// A check on the raised throwable ran although nothing was raised.
#[must_use]
pub fn thrown_was_absent() -> ErrorMessage {
    ErrorMessage::subject_absent("\nExpecting code to raise a throwable.")
}

/// Code raised nothing while one of several types was expected.
#[must_use]
pub fn should_have_thrown_any_of(types: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting code block to raise a Throwable with any type below:\n  {types}\nbut nothing was thrown"
    ))
    .with_expected(types)
}

/// Raised throwable has the wrong type.
#[must_use]
pub fn should_be_instance_of_any(thrown: &str, types: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual throwable to be an instance of any of:\n  {types}\nbut was:\n  {thrown}"
    ))
    .with_actual(thrown)
    .with_expected(types)
}

/// Raised throwable message mismatch; `relation` is e.g. `"to contain"`.
#[must_use]
pub fn should_have_message(thrown: &str, message: &str, relation: &str, expected: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting throwable message:\n  {message:?}\n{relation}:\n  {expected:?}\nbut did not.\n\nThrowable that failed the check:\n\n  {thrown}"
    ))
    .with_actual(message)
    .with_expected(expected)
}

/// Predicate rejected a value.
#[must_use]
pub fn should_accept(predicate: &str, value: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {predicate}\nto accept {value} but it did not."
    ))
    .with_actual(value)
}

/// Predicate accepted a value.
#[must_use]
pub fn should_not_accept(predicate: &str, value: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting actual:\n  {predicate}\nnot to accept {value} but it did."
    ))
    .with_actual(value)
}

/// Future still pending.
#[must_use]
pub fn should_be_done() -> ErrorMessage {
    ErrorMessage::new("\nExpecting future to be done but it was still pending.")
}

/// Future already completed.
#[must_use]
pub fn should_not_be_done(value: &str) -> ErrorMessage {
    ErrorMessage::new(format!(
        "\nExpecting future not to be done but it completed with:\n  {value}"
    ))
    .with_actual(value)
}

/// Future pending where its value was needed.
#[must_use]
pub fn future_value_absent(expected: Option<&str>) -> ErrorMessage {
    let text = match expected {
        Some(expected) => format!(
            "\nExpecting future to be completed with:\n  {expected}\nbut it was still pending."
        ),
        None => "\nExpecting future to be completed but it was still pending.".to_string(),
    };
    ErrorMessage::subject_absent(text)
}

/// Expected error never raised (`should_have_thrown`).
#[must_use]
pub fn expected_throwable_not_thrown(type_name: &str) -> ErrorMessage {
    ErrorMessage::new(format!("{type_name} should have been thrown"))
}
