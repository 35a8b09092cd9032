//! Integration tests for soft assertion sessions.

use std::fmt::{self, Display};

use testkit_assert::prelude::*;

/// Install a test subscriber so `RUST_LOG=testkit_assert=debug` shows
/// collected failures.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug)]
struct IllegalState(&'static str);

impl Display for IllegalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

fn quiet() -> Result<(), IllegalState> {
    Ok(())
}

fn bad() -> Result<(), IllegalState> {
    Err(IllegalState("bad"))
}

/// Only the failing checks are collected, in the order they ran.
#[test]
fn test_collects_k_of_n_failures_in_order() {
    init_tracing();
    let softly = SoftAssertions::new();

    softly.assert_that(1).is_equal_to(1);
    softly.assert_that("Frodo").is_equal_to("Sam");
    softly.assert_that(vec![1, 2, 3]).contains([2]);
    softly.assert_that(Some(5)).is_none();
    softly.assert_that(10).is_less_than(20);
    softly.assert_that("ring").has_length(3);

    let errors = softly.errors();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0].message(), "\nexpected: \"Sam\"\n but was: \"Frodo\"");
    assert!(errors[1].message().contains("containing value:\n  5"));
    assert!(errors[2].message().contains("\"ring\""));
}

/// Reading the collected failures does not consume them.
#[test]
fn test_reads_are_idempotent() {
    let softly = SoftAssertions::new();
    softly.assert_that(1).is_equal_to(2);

    assert!(softly.has_errors());
    assert!(softly.has_errors());
    assert_eq!(softly.errors(), softly.errors());
    assert_eq!(softly.errors().len(), 1);
}

/// A soft chain keeps running after a failed check.
#[test]
fn test_soft_chain_continues_after_failure() {
    let softly = SoftAssertions::new();
    softly
        .assert_that("Gandalf")
        .starts_with("Sa")
        .ends_with("alf")
        .contains("x")
        .has_length(7);

    assert_eq!(softly.errors().len(), 2);
    assert!(softly.was_success());
}

/// Every condition a soft node can check is collected rather than raised.
#[test]
fn test_soft_nodes_never_panic_on_failed_checks() {
    let outcome = std::panic::catch_unwind(|| {
        let softly = SoftAssertions::new();
        softly.assert_that(None::<i32>).is_some().value().is_positive();
        softly.assert_that(Err::<i32, _>("nope")).is_ok().ok_value().is_zero();
        softly.assert_that(vec![3, 1]).is_sorted().size().is_equal_to(5);
        softly.assert_that(1.5_f64).is_nan().is_close_to(3.0, 0.1);
        softly.assert_that_code(bad).does_not_throw_any_exception();
        softly.assert_that_thrown_by(quiet).has_message("bad");
        softly.errors().len()
    });

    assert_eq!(outcome.ok(), Some(11));
}

/// A quiet block passes "no exception", a failing one names the error.
#[test]
fn test_code_scenario() {
    assert_that_code(quiet).does_not_throw_any_exception();

    let softly = SoftAssertions::new();
    softly.assert_that_code(quiet).does_not_throw_any_exception();
    softly.assert_that_code(bad).does_not_throw_any_exception();

    let errors = softly.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message(),
        "\nExpecting code not to raise a throwable but caught\n  IllegalState: \"bad\""
    );
}

/// `x > 0` rejects -1 with a message naming the predicate and the value.
#[test]
fn test_predicate_scenario() {
    let softly = SoftAssertions::new();
    softly
        .assert_that_predicate(Predicate::with_description(|x: &i32| *x > 0, "x > 0"))
        .accepts(5)
        .accepts(-1);

    let errors = softly.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message(),
        "\nExpecting actual:\n  x > 0\nto accept -1 but it did not."
    );
}

/// The aggregate report lists every failure with its heading.
#[test]
fn test_into_result_aggregates() {
    let softly = SoftAssertions::with_description("hobbits");
    softly.assert_that(33).is_greater_than(50);
    softly.fail("Sam is missing");

    let Err(Error::MultipleFailures(failures)) = softly.into_result() else {
        panic!("expected aggregated failures");
    };
    assert_eq!(failures.len(), 2);
    let rendered = failures.to_string();
    assert!(rendered.starts_with("\nhobbits (2 failures)\n-- failure 1 --"));
    assert!(rendered.contains("-- failure 2 --\nSam is missing"));
}

/// `assert_softly` reports everything at the end of the closure.
#[test]
#[should_panic(expected = "Multiple Failures (2 failures)")]
fn test_assert_softly_panics_at_end() {
    assert_softly(|softly| {
        softly.assert_that(1).is_equal_to(2);
        softly.assert_that("a").is_equal_to("b");
    });
}

/// A passing `assert_softly` block is silent.
#[test]
fn test_assert_softly_passes() {
    assert_softly(|softly| {
        softly.assert_that(vec!["Merry", "Pippin"]).has_size(2).contains(["Pippin"]);
    });
}

/// The guard reports on drop.
#[test]
#[should_panic(expected = "guarded (1 failure)")]
fn test_guard_reports_on_drop() {
    let softly = SoftAssertionsGuard::with_description("guarded");
    softly.assert_that(true).is_false();
}

/// Description and overriding message apply to collected failures.
#[test]
fn test_description_and_override_in_soft_mode() {
    let softly = SoftAssertions::new();
    softly.assert_that(1).described_as("count").is_equal_to(2);
    softly.assert_that(1).with_fail_message("custom").is_equal_to(2);

    let errors = softly.errors();
    assert_eq!(errors[0].message(), "[count] \nexpected: 2\n but was: 1");
    assert_eq!(errors[0].description(), Some("count"));
    assert_eq!(errors[1].message(), "custom");
}

/// Collected failures point at the failing check.
#[test]
fn test_collected_failure_location() {
    let softly = SoftAssertions::new();
    let line = line!() + 1;
    softly.assert_that("Frodo").is_empty();

    let location = softly.errors()[0].location().map(|l| (l.file(), l.line()));
    assert_eq!(location, Some((file!(), line)));
}

/// `should_have_thrown` records the missing error type.
#[test]
fn test_should_have_thrown() {
    let softly = SoftAssertions::new();
    if "42".parse::<i32>().is_ok() {
        softly.should_have_thrown::<std::num::ParseIntError>();
    }

    assert_eq!(softly.errors()[0].message(), "ParseIntError should have been thrown");
}
