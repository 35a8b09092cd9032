//! Ordered accumulation of soft assertion failures.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::failure::AssertionFailure;

type Callback = Arc<dyn Fn(&AssertionFailure) + Send + Sync>;

/// Collects failures for one soft assertion session.
///
/// Cloning the collector yields another handle to the same sequence, which
/// is how every node created during a session routes into one place.
/// Reads never clear the sequence.
///
/// A collector can also hand its failures to another one with
/// [`set_delegate`](Self::set_delegate). Recording, success tracking and
/// every read then go to the delegate; only the after-failure callback
/// stays local.
///
/// # Example
///
/// ```rust
/// use testkit_assert::failure::AssertionFailure;
/// use testkit_assert::soft::SoftCollector;
///
/// let collector = SoftCollector::new();
/// let handle = collector.clone();
///
/// handle.record(AssertionFailure::new("first"));
/// handle.record(AssertionFailure::new("second"));
///
/// assert!(collector.has_errors());
/// assert_eq!(collector.errors().len(), 2);
/// assert_eq!(collector.errors()[0].message(), "first");
/// ```
#[derive(Clone, Default)]
pub struct SoftCollector {
    state: Arc<Mutex<CollectorState>>,
}

struct CollectorState {
    failures: Vec<AssertionFailure>,
    last_success: bool,
    callback: Option<Callback>,
    delegate: Option<SoftCollector>,
}

impl Default for CollectorState {
    fn default() -> Self {
        Self {
            failures: Vec::new(),
            last_success: true,
            callback: None,
            delegate: None,
        }
    }
}

impl SoftCollector {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure.
    pub fn record(&self, failure: AssertionFailure) {
        if let Some(delegate) = self.delegate() {
            let callback = self.state.lock().callback.clone();
            delegate.record(failure.clone());
            if let Some(callback) = callback {
                callback(&failure);
            }
            return;
        }

        let callback = {
            let mut state = self.state.lock();
            state.failures.push(failure.clone());
            state.last_success = false;
            tracing::debug!(
                collected = state.failures.len(),
                kind = ?failure.kind(),
                "soft assertion failure collected"
            );
            state.callback.clone()
        };

        // Called outside the lock so the callback may inspect the collector.
        if let Some(callback) = callback {
            callback(&failure);
        }
    }

    /// Mark the last check as passed.
    pub fn succeeded(&self) {
        if let Some(delegate) = self.delegate() {
            delegate.succeeded();
            return;
        }
        self.state.lock().last_success = true;
        tracing::trace!("soft assertion passed");
    }

    /// A copy of the collected failures, in the order they were recorded.
    #[must_use]
    pub fn errors(&self) -> Vec<AssertionFailure> {
        match self.delegate() {
            Some(delegate) => delegate.errors(),
            None => self.state.lock().failures.clone(),
        }
    }

    /// Whether any failure has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        match self.delegate() {
            Some(delegate) => delegate.has_errors(),
            None => !self.state.lock().failures.is_empty(),
        }
    }

    /// Number of recorded failures.
    #[must_use]
    pub fn error_count(&self) -> usize {
        match self.delegate() {
            Some(delegate) => delegate.error_count(),
            None => self.state.lock().failures.len(),
        }
    }

    /// Whether the last check routed through this collector passed.
    #[must_use]
    pub fn was_success(&self) -> bool {
        match self.delegate() {
            Some(delegate) => delegate.was_success(),
            None => self.state.lock().last_success,
        }
    }

    /// Register a callback run after each recorded failure.
    pub fn set_after_failure_collected<F>(&self, callback: F)
    where
        F: Fn(&AssertionFailure) + Send + Sync + 'static,
    {
        self.state.lock().callback = Some(Arc::new(callback));
    }

    /// Forward every later failure and read to `delegate`.
    ///
    /// Failures recorded before the call stay here and are no longer
    /// visible through this collector.
    ///
    /// # Panics
    ///
    /// Panics if `delegate` is this collector or already forwards to it.
    pub fn set_delegate(&self, delegate: &SoftCollector) {
        let mut next = Some(delegate.clone());
        while let Some(current) = next {
            assert!(
                !self.same_session(&current),
                "a soft collector cannot delegate to itself"
            );
            next = current.delegate();
        }
        tracing::debug!("soft collector delegating to another session");
        self.state.lock().delegate = Some(delegate.clone());
    }

    /// The collector failures are forwarded to, if any.
    #[must_use]
    pub fn delegate(&self) -> Option<SoftCollector> {
        self.state.lock().delegate.clone()
    }

    /// Whether two handles share the same sequence.
    #[must_use]
    pub fn same_session(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for SoftCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("SoftCollector")
            .field("failures", &state.failures.len())
            .field("last_success", &state.last_success)
            .field("delegating", &state.delegate.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_starts_clean() {
        let collector = SoftCollector::new();
        assert!(!collector.has_errors());
        assert!(collector.was_success());
        assert!(collector.errors().is_empty());
    }

    #[test]
    fn test_collector_keeps_order() {
        let collector = SoftCollector::new();
        for i in 0..5 {
            collector.record(AssertionFailure::new(format!("failure {i}")));
        }

        let messages: Vec<_> = collector
            .errors()
            .iter()
            .map(|f| f.message().to_string())
            .collect();
        assert_eq!(
            messages,
            vec!["failure 0", "failure 1", "failure 2", "failure 3", "failure 4"]
        );
    }

    #[test]
    fn test_reads_are_non_destructive() {
        let collector = SoftCollector::new();
        collector.record(AssertionFailure::new("x"));

        assert_eq!(collector.errors(), collector.errors());
        assert!(collector.has_errors());
        assert!(collector.has_errors());
        assert_eq!(collector.error_count(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let collector = SoftCollector::new();
        let handle = collector.clone();
        handle.record(AssertionFailure::new("x"));

        assert!(collector.has_errors());
        assert!(collector.same_session(&handle));
        assert!(!collector.same_session(&SoftCollector::new()));
    }

    #[test]
    fn test_was_success_tracks_last_check() {
        let collector = SoftCollector::new();
        collector.record(AssertionFailure::new("x"));
        assert!(!collector.was_success());

        collector.succeeded();
        assert!(collector.was_success());
        assert!(collector.has_errors());
    }

    #[test]
    fn test_callback_sees_each_failure() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let collector = SoftCollector::new();
        let sink = Arc::clone(&seen);
        collector.set_after_failure_collected(move |failure| {
            sink.lock().push(failure.message().to_string());
        });

        collector.record(AssertionFailure::new("a"));
        collector.record(AssertionFailure::new("b"));

        assert_eq!(*seen.lock(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_callback_may_read_collector() {
        let collector = SoftCollector::new();
        let inner = collector.clone();
        let counts = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&counts);
        collector.set_after_failure_collected(move |_| sink.lock().push(inner.error_count()));

        collector.record(AssertionFailure::new("a"));
        assert_eq!(*counts.lock(), vec![1]);
    }

    #[test]
    fn test_delegate_receives_failures_and_reads() {
        let outer = SoftCollector::new();
        outer.record(AssertionFailure::new("outer 1"));

        let nested = SoftCollector::new();
        nested.set_delegate(&outer);
        nested.record(AssertionFailure::new("nested 1"));
        nested.record(AssertionFailure::new("nested 2"));

        let messages: Vec<_> = outer.errors().iter().map(|f| f.message().to_string()).collect();
        assert_eq!(messages, vec!["outer 1", "nested 1", "nested 2"]);
        assert_eq!(nested.errors(), outer.errors());
        assert_eq!(nested.error_count(), 3);
        assert!(nested.delegate().is_some_and(|d| d.same_session(&outer)));
    }

    #[test]
    fn test_delegate_tracks_success() {
        let outer = SoftCollector::new();
        let nested = SoftCollector::new();
        nested.set_delegate(&outer);

        nested.record(AssertionFailure::new("x"));
        assert!(!outer.was_success());
        nested.succeeded();
        assert!(outer.was_success());
        assert!(nested.was_success());
    }

    #[test]
    fn test_local_callback_runs_when_delegating() {
        let seen = Arc::new(Mutex::new(0));
        let outer = SoftCollector::new();
        let nested = SoftCollector::new();
        nested.set_delegate(&outer);
        let sink = Arc::clone(&seen);
        nested.set_after_failure_collected(move |_| *sink.lock() += 1);

        nested.record(AssertionFailure::new("x"));
        assert_eq!(*seen.lock(), 1);
        assert_eq!(outer.error_count(), 1);
    }

    #[test]
    #[should_panic(expected = "cannot delegate to itself")]
    fn test_delegation_cycle_panics() {
        let first = SoftCollector::new();
        let second = SoftCollector::new();
        second.set_delegate(&first);
        first.set_delegate(&second);
    }
}
