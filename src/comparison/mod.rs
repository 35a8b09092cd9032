//! Comparison strategies deciding equality and ordering for a node.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// How an assertion node compares its actual value with expected values.
///
/// `Standard` uses `PartialEq`/`PartialOrd`. `Custom` uses a user
/// comparator and mentions its description in failure messages.
pub enum Comparison<T> {
    /// Natural equality and ordering.
    Standard,
    /// A user supplied comparator.
    Custom {
        /// Shown in failure messages as `when comparing values using ...`.
        description: String,
        /// The comparator itself.
        compare: Comparator<T>,
    },
}

impl<T> Comparison<T> {
    /// Build a comparator-based strategy.
    pub fn custom<F>(description: impl Into<String>, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::Custom {
            description: description.into(),
            compare: Arc::new(compare),
        }
    }

    /// Description of the comparator, `None` for natural comparison.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Standard => None,
            Self::Custom { description, .. } => Some(description),
        }
    }
}

impl<T: PartialEq> Comparison<T> {
    /// Whether two values are equal under this strategy.
    pub fn are_equal(&self, actual: &T, other: &T) -> bool {
        match self {
            Self::Standard => actual == other,
            Self::Custom { compare, .. } => compare(actual, other) == Ordering::Equal,
        }
    }
}

impl<T: PartialOrd> Comparison<T> {
    /// Order two values; `None` when they are not comparable (e.g. NaN).
    pub fn compare(&self, actual: &T, other: &T) -> Option<Ordering> {
        match self {
            Self::Standard => actual.partial_cmp(other),
            Self::Custom { compare, .. } => Some(compare(actual, other)),
        }
    }
}

impl<T> Default for Comparison<T> {
    fn default() -> Self {
        Self::Standard
    }
}

impl<T> Clone for Comparison<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Standard => Self::Standard,
            Self::Custom {
                description,
                compare,
            } => Self::Custom {
                description: description.clone(),
                compare: Arc::clone(compare),
            },
        }
    }
}

impl<T> fmt::Debug for Comparison<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("Standard"),
            Self::Custom { description, .. } => {
                f.debug_struct("Custom").field("description", description).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_comparison() {
        let comparison = Comparison::<i32>::Standard;
        assert!(comparison.are_equal(&1, &1));
        assert!(!comparison.are_equal(&1, &2));
        assert_eq!(comparison.compare(&1, &2), Some(Ordering::Less));
        assert_eq!(comparison.description(), None);
    }

    #[test]
    fn test_custom_comparison() {
        let comparison = Comparison::custom("absolute value", |a: &i32, b: &i32| {
            a.abs().cmp(&b.abs())
        });
        assert!(comparison.are_equal(&-3, &3));
        assert_eq!(comparison.compare(&-5, &4), Some(Ordering::Greater));
        assert_eq!(comparison.description(), Some("absolute value"));
    }

    #[test]
    fn test_nan_is_not_comparable() {
        let comparison = Comparison::<f64>::Standard;
        assert_eq!(comparison.compare(&f64::NAN, &1.0), None);
    }
}
