//! Process-wide assertion configuration.
//!
//! ```rust
//! use testkit_assert::config::Configuration;
//!
//! Configuration::new()
//!     .max_elements_for_printing(50)
//!     .print_assertions_description(true)
//!     .apply();
//!
//! assert_eq!(Configuration::current().max_elements_for_printing, 50);
//! Configuration::reset();
//! ```

use parking_lot::{const_rwlock, RwLock};

static CURRENT: RwLock<Configuration> = const_rwlock(Configuration::DEFAULT);

/// Settings shared by every assertion node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    /// Element lists longer than this are printed with their middle elided.
    pub max_elements_for_printing: usize,
    /// Rendered values longer than this switch to multi-line formatting.
    pub max_length_for_single_line_description: usize,
    /// Emit a `tracing` event with the description of each described check.
    pub print_assertions_description: bool,
    /// Leave the check location out of aggregated soft failure reports.
    pub bare_failure_messages: bool,
}

impl Configuration {
    const DEFAULT: Self = Self {
        max_elements_for_printing: 1000,
        max_length_for_single_line_description: 80,
        print_assertions_description: false,
        bare_failure_messages: false,
    };

    /// Create a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// The configuration currently in effect.
    #[must_use]
    pub fn current() -> Self {
        *CURRENT.read()
    }

    /// Restore the default configuration.
    pub fn reset() {
        *CURRENT.write() = Self::DEFAULT;
    }

    /// Make this configuration the one in effect.
    pub fn apply(self) {
        tracing::debug!(configuration = ?self, "applying assertion configuration");
        *CURRENT.write() = self;
    }

    /// Set the element count above which lists are elided.
    #[must_use]
    pub fn max_elements_for_printing(mut self, max: usize) -> Self {
        self.max_elements_for_printing = max;
        self
    }

    /// Set the length above which values are rendered over several lines.
    #[must_use]
    pub fn max_length_for_single_line_description(mut self, max: usize) -> Self {
        self.max_length_for_single_line_description = max;
        self
    }

    /// Emit described checks as `tracing` events.
    #[must_use]
    pub fn print_assertions_description(mut self, enabled: bool) -> Self {
        self.print_assertions_description = enabled;
        self
    }

    /// Omit check locations from aggregated reports.
    #[must_use]
    pub fn bare_failure_messages(mut self, enabled: bool) -> Self {
        self.bare_failure_messages = enabled;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}
