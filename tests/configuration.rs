//! Integration test for process-wide configuration.
//!
//! Kept to a single test so no other test in this binary observes the
//! applied settings.

use testkit_assert::prelude::*;

#[test]
fn test_configuration_shapes_reports() {
    Configuration::new()
        .max_elements_for_printing(4)
        .bare_failure_messages(true)
        .print_assertions_description(true)
        .apply();

    let message = expect_assertion_failure(|| {
        assert_that((1..=10).collect::<Vec<_>>())
            .described_as("digits")
            .contains([42]);
    });
    assert!(message.starts_with("[digits] "));
    assert!(message.contains("[1, 2, ..., 9, 10]"));

    let softly = SoftAssertions::new();
    softly.assert_that(1).is_equal_to(2);
    let report = softly.result().map_err(|failures| failures.to_string());
    assert_eq!(
        report,
        Err("\nMultiple Failures (1 failure)\n-- failure 1 --\nexpected: 2\n but was: 1".to_string())
    );

    Configuration::reset();
    assert_eq!(Configuration::current(), Configuration::default());
}
