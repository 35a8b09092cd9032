// Allow must_use_candidate for condition factory functions since returning the condition
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Reusable, described conditions.
//!
//! A [`Condition`] is a described predicate that can be handed to
//! [`ObjectAssertions::is`](crate::assert::ObjectAssertions::is) and friends.
//! Conditions combine with [`all_of`], [`any_of`] and [`not`].
//!
//! # Example
//!
//! ```rust
//! use testkit_assert::condition::{condition, not, Condition};
//!
//! let even = condition(|x: &i32| x % 2 == 0, "even");
//! assert!(even.matches(&4));
//!
//! let odd = not(even);
//! assert_eq!(odd.describe(), "not even");
//! ```

/// A described predicate over `T`.
///
/// # Implementing Custom Conditions
///
/// ```rust
/// use testkit_assert::condition::Condition;
///
/// struct Adult;
///
/// impl Condition<u32> for Adult {
///     fn matches(&self, age: &u32) -> bool {
///         *age >= 18
///     }
///
///     fn describe(&self) -> String {
///         "an adult".to_string()
///     }
/// }
///
/// assert!(Adult.matches(&30));
/// ```
pub trait Condition<T: ?Sized> {
    /// Check if the value meets the condition.
    fn matches(&self, value: &T) -> bool;

    /// Describe the condition, e.g. `"even"`, used as `to be even`.
    fn describe(&self) -> String;
}

/// Create a condition from a predicate and its description.
///
/// # Example
///
/// ```rust
/// use testkit_assert::condition::{condition, Condition};
///
/// let short = condition(|s: &&str| s.len() < 5, "short");
/// assert!(short.matches(&"abc"));
/// assert!(!short.matches(&"abcdef"));
/// ```
pub fn condition<T, F>(predicate: F, description: &str) -> PredicateCondition<F>
where
    F: Fn(&T) -> bool,
{
    PredicateCondition {
        predicate,
        description: description.to_string(),
    }
}

/// Condition based on a predicate function.
pub struct PredicateCondition<F> {
    predicate: F,
    description: String,
}

impl<T, F: Fn(&T) -> bool> Condition<T> for PredicateCondition<F> {
    fn matches(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

/// Create a condition met when every inner condition is met.
///
/// # Example
///
/// ```rust
/// use testkit_assert::condition::{all_of, condition, Condition};
///
/// let conditions: Vec<Box<dyn Condition<i32>>> = vec![
///     Box::new(condition(|x: &i32| *x > 0, "positive")),
///     Box::new(condition(|x: &i32| *x < 100, "below 100")),
/// ];
/// let m = all_of(conditions);
/// assert!(m.matches(&50));
/// assert_eq!(m.describe(), "all of [positive, below 100]");
/// ```
pub fn all_of<T: ?Sized>(conditions: Vec<Box<dyn Condition<T>>>) -> AllOf<T> {
    AllOf { conditions }
}

/// Condition requiring all inner conditions.
pub struct AllOf<T: ?Sized> {
    conditions: Vec<Box<dyn Condition<T>>>,
}

impl<T: ?Sized> Condition<T> for AllOf<T> {
    fn matches(&self, value: &T) -> bool {
        self.conditions.iter().all(|c| c.matches(value))
    }

    fn describe(&self) -> String {
        let descriptions: Vec<_> = self.conditions.iter().map(|c| c.describe()).collect();
        format!("all of [{}]", descriptions.join(", "))
    }
}

/// Create a condition met when at least one inner condition is met.
pub fn any_of<T: ?Sized>(conditions: Vec<Box<dyn Condition<T>>>) -> AnyOf<T> {
    AnyOf { conditions }
}

/// Condition requiring at least one inner condition.
pub struct AnyOf<T: ?Sized> {
    conditions: Vec<Box<dyn Condition<T>>>,
}

impl<T: ?Sized> Condition<T> for AnyOf<T> {
    fn matches(&self, value: &T) -> bool {
        self.conditions.iter().any(|c| c.matches(value))
    }

    fn describe(&self) -> String {
        let descriptions: Vec<_> = self.conditions.iter().map(|c| c.describe()).collect();
        format!("any of [{}]", descriptions.join(", "))
    }
}

/// Create a negated condition.
pub fn not<T: ?Sized, C: Condition<T> + 'static>(condition: C) -> Not<T> {
    Not {
        inner: Box::new(condition),
    }
}

/// Condition met when the inner one is not.
pub struct Not<T: ?Sized> {
    inner: Box<dyn Condition<T>>,
}

impl<T: ?Sized> Condition<T> for Not<T> {
    fn matches(&self, value: &T) -> bool {
        !self.inner.matches(value)
    }

    fn describe(&self) -> String {
        format!("not {}", self.inner.describe())
    }
}

impl<T: ?Sized> Condition<T> for Box<dyn Condition<T>> {
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
