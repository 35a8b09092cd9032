//! What a node does with a failure: raise it or collect it.

use crate::failure::AssertionFailure;

use super::SoftCollector;

/// Failure-handling strategy, fixed when a node is built.
///
/// Nodes are the same type in both modes and run the same checks; only
/// this strategy differs.
#[derive(Debug, Clone, Default)]
pub enum FailureHandler {
    /// Panic with the rendered message, aborting the chain.
    #[default]
    Raise,
    /// Append to the collector and let the chain continue.
    Collect(SoftCollector),
}

impl FailureHandler {
    /// Route a failure.
    ///
    /// # Panics
    ///
    /// Panics with the failure message in [`FailureHandler::Raise`] mode.
    #[track_caller]
    pub fn handle(&self, failure: AssertionFailure) {
        match self {
            Self::Raise => panic!("{failure}"),
            Self::Collect(collector) => collector.record(failure),
        }
    }

    /// Note that a check passed.
    pub fn succeeded(&self) {
        if let Self::Collect(collector) = self {
            collector.succeeded();
        }
    }

    /// Whether failures are collected rather than raised.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::Collect(_))
    }

    /// The collector failures are routed into, in soft mode.
    #[must_use]
    pub fn collector(&self) -> Option<&SoftCollector> {
        match self {
            Self::Raise => None,
            Self::Collect(collector) => Some(collector),
        }
    }
}
