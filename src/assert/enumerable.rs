use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::fmt::Debug;
use std::hash::BuildHasher;

use super::Assert;
use crate::failure::{messages, ErrorMessage};

/// Groups of elements that can be inspected in iteration order.
pub trait Enumerable {
    /// Element type.
    type Item;

    /// The elements, in iteration order.
    fn elements(&self) -> Vec<&Self::Item>;
}

impl<E> Enumerable for [E] {
    type Item = E;

    fn elements(&self) -> Vec<&E> {
        self.iter().collect()
    }
}

impl<E, const N: usize> Enumerable for [E; N] {
    type Item = E;

    fn elements(&self) -> Vec<&E> {
        self.iter().collect()
    }
}

impl<E> Enumerable for Vec<E> {
    type Item = E;

    fn elements(&self) -> Vec<&E> {
        self.iter().collect()
    }
}

impl<E> Enumerable for VecDeque<E> {
    type Item = E;

    fn elements(&self) -> Vec<&E> {
        self.iter().collect()
    }
}

impl<E> Enumerable for LinkedList<E> {
    type Item = E;

    fn elements(&self) -> Vec<&E> {
        self.iter().collect()
    }
}

impl<E, S: BuildHasher> Enumerable for HashSet<E, S> {
    type Item = E;

    fn elements(&self) -> Vec<&E> {
        self.iter().collect()
    }
}

impl<E> Enumerable for BTreeSet<E> {
    type Item = E;

    fn elements(&self) -> Vec<&E> {
        self.iter().collect()
    }
}

impl<C: Enumerable + ?Sized> Enumerable for &C {
    type Item = C::Item;

    fn elements(&self) -> Vec<&C::Item> {
        (**self).elements()
    }
}

/// Checks on groups of elements.
///
/// Elements are compared with `PartialEq`; the node's comparator applies
/// to the group as a whole, not to its elements.
pub trait EnumerableAssertions<E> {
    /// The group has `expected` elements.
    fn has_size(&self, expected: usize) -> &Self;

    /// The group has no elements.
    fn is_empty(&self) -> &Self;

    /// The group has at least one element.
    fn is_not_empty(&self) -> &Self;

    /// Every one of `values` is in the group. Looking for no values passes
    /// only on an empty group; the same holds for `contains_only`,
    /// `contains_sequence` and `contains_only_once`.
    fn contains(&self, values: impl IntoIterator<Item = E>) -> &Self;

    /// None of `values` is in the group.
    fn does_not_contain(&self, values: impl IntoIterator<Item = E>) -> &Self;

    /// The group holds `values` and nothing else, in any order, duplicates
    /// ignored.
    fn contains_only(&self, values: impl IntoIterator<Item = E>) -> &Self;

    /// The group is exactly `values`, in the same order.
    fn contains_exactly(&self, values: impl IntoIterator<Item = E>) -> &Self;

    /// The group is exactly `values`, in any order.
    fn contains_exactly_in_any_order(&self, values: impl IntoIterator<Item = E>) -> &Self;

    /// `values` appear in the group contiguously and in order.
    fn contains_sequence(&self, values: impl IntoIterator<Item = E>) -> &Self;

    /// Each of `values` appears in the group exactly once.
    fn contains_only_once(&self, values: impl IntoIterator<Item = E>) -> &Self;

    /// No element appears twice.
    fn does_not_have_duplicates(&self) -> &Self;

    /// Every element is accepted by `predicate`, shown as `description`.
    fn all_match<F>(&self, predicate: F, description: &str) -> &Self
    where
        F: Fn(&E) -> bool;

    /// At least one element is accepted by `predicate`.
    fn any_match<F>(&self, predicate: F, description: &str) -> &Self
    where
        F: Fn(&E) -> bool;

    /// No element is accepted by `predicate`.
    fn none_match<F>(&self, predicate: F, description: &str) -> &Self
    where
        F: Fn(&E) -> bool;

    /// Each element is less than or equal to the next.
    fn is_sorted(&self) -> &Self
    where
        E: PartialOrd;

    /// Navigate to the number of elements.
    fn size(&self) -> Assert<'_, usize, Self>
    where
        Self: Sized;
}

fn render<T, P, E: Debug>(node: &Assert<'_, T, P>, items: &[&E]) -> String {
    let items: Vec<&dyn Debug> = items.iter().map(|e| *e as &dyn Debug).collect();
    node.represent_elements(&items)
}

/// Elements of `from` left after removing one occurrence of each of `remove`.
fn difference<'a, E: PartialEq>(from: &[&'a E], remove: &[&E]) -> Vec<&'a E> {
    let mut remaining = remove.to_vec();
    from.iter()
        .filter_map(|e| match remaining.iter().position(|r| *r == *e) {
            Some(index) => {
                remaining.swap_remove(index);
                None
            }
            None => Some(*e),
        })
        .collect()
}

/// `Some` when there are no values to look for: the check then passes only
/// on an empty group.
fn when_no_values<A, E>(elements: &[A], values: &[E]) -> Option<Option<ErrorMessage>> {
    values
        .is_empty()
        .then(|| (!elements.is_empty()).then(messages::actual_is_not_empty_for_no_values))
}

fn absent_from<'a, E: PartialEq>(wanted: &[&'a E], group: &[&E]) -> Vec<&'a E> {
    wanted.iter().filter(|w| !group.contains(*w)).copied().collect()
}

fn non_empty<T, P, E: Debug>(node: &Assert<'_, T, P>, items: &[&E]) -> Option<String> {
    (!items.is_empty()).then(|| render(node, items))
}

impl<T, P> EnumerableAssertions<T::Item> for Assert<'_, T, P>
where
    T: Enumerable,
    T::Item: Debug + PartialEq,
{
    #[track_caller]
    fn has_size(&self, expected: usize) -> &Self {
        self.verify(|actual| {
            let elements = actual.elements();
            (elements.len() != expected)
                .then(|| messages::should_have_size(&render(self, &elements), elements.len(), expected))
        })
    }

    #[track_caller]
    fn is_empty(&self) -> &Self {
        self.verify(|actual| {
            let elements = actual.elements();
            (!elements.is_empty()).then(|| messages::should_be_empty(&render(self, &elements)))
        })
    }

    #[track_caller]
    fn is_not_empty(&self) -> &Self {
        self.verify(|actual| actual.elements().is_empty().then(messages::should_not_be_empty))
    }

    #[track_caller]
    fn contains(&self, values: impl IntoIterator<Item = T::Item>) -> &Self {
        let values: Vec<T::Item> = values.into_iter().collect();
        self.verify(|actual| {
            let elements = actual.elements();
            if let Some(outcome) = when_no_values(&elements, &values) {
                return outcome;
            }
            let expected: Vec<&T::Item> = values.iter().collect();
            let not_found = absent_from(&expected, &elements);
            (!not_found.is_empty()).then(|| {
                messages::should_contain(
                    &render(self, &elements),
                    &render(self, &expected),
                    &render(self, &not_found),
                )
            })
        })
    }

    #[track_caller]
    fn does_not_contain(&self, values: impl IntoIterator<Item = T::Item>) -> &Self {
        let values: Vec<T::Item> = values.into_iter().collect();
        self.verify(|actual| {
            let elements = actual.elements();
            let unexpected: Vec<&T::Item> = values.iter().collect();
            let found: Vec<&T::Item> = unexpected
                .iter()
                .filter(|v| elements.contains(*v))
                .copied()
                .collect();
            (!found.is_empty()).then(|| {
                messages::should_not_contain(
                    &render(self, &elements),
                    &render(self, &unexpected),
                    &render(self, &found),
                )
            })
        })
    }

    #[track_caller]
    fn contains_only(&self, values: impl IntoIterator<Item = T::Item>) -> &Self {
        let values: Vec<T::Item> = values.into_iter().collect();
        self.verify(|actual| {
            let elements = actual.elements();
            if let Some(outcome) = when_no_values(&elements, &values) {
                return outcome;
            }
            let expected: Vec<&T::Item> = values.iter().collect();
            let not_found = absent_from(&expected, &elements);
            let not_expected = absent_from(&elements, &expected);
            (!not_found.is_empty() || !not_expected.is_empty()).then(|| {
                messages::should_contain_only(
                    &render(self, &elements),
                    &render(self, &expected),
                    non_empty(self, &not_found).as_deref(),
                    non_empty(self, &not_expected).as_deref(),
                )
            })
        })
    }

    #[track_caller]
    fn contains_exactly(&self, values: impl IntoIterator<Item = T::Item>) -> &Self {
        let values: Vec<T::Item> = values.into_iter().collect();
        self.verify(|actual| {
            let elements = actual.elements();
            let expected: Vec<&T::Item> = values.iter().collect();
            if elements == expected {
                return None;
            }
            let not_found = difference(&expected, &elements);
            let not_expected = difference(&elements, &expected);
            if not_found.is_empty() && not_expected.is_empty() {
                let index = elements.iter().zip(&expected).position(|(a, e)| a != e)?;
                return Some(messages::elements_differ_at_index(
                    index,
                    &self.represent(elements[index]),
                    &self.represent(expected[index]),
                ));
            }
            Some(messages::should_contain_exactly(
                &render(self, &elements),
                &render(self, &expected),
                non_empty(self, &not_found).as_deref(),
                non_empty(self, &not_expected).as_deref(),
            ))
        })
    }

    #[track_caller]
    fn contains_exactly_in_any_order(&self, values: impl IntoIterator<Item = T::Item>) -> &Self {
        let values: Vec<T::Item> = values.into_iter().collect();
        self.verify(|actual| {
            let elements = actual.elements();
            let expected: Vec<&T::Item> = values.iter().collect();
            let not_found = difference(&expected, &elements);
            let not_expected = difference(&elements, &expected);
            (!not_found.is_empty() || !not_expected.is_empty()).then(|| {
                messages::should_contain_exactly_in_any_order(
                    &render(self, &elements),
                    &render(self, &expected),
                    non_empty(self, &not_found).as_deref(),
                    non_empty(self, &not_expected).as_deref(),
                )
            })
        })
    }

    #[track_caller]
    fn contains_sequence(&self, values: impl IntoIterator<Item = T::Item>) -> &Self {
        let values: Vec<T::Item> = values.into_iter().collect();
        self.verify(|actual| {
            let elements = actual.elements();
            if let Some(outcome) = when_no_values(&elements, &values) {
                return outcome;
            }
            let sequence: Vec<&T::Item> = values.iter().collect();
            let found = elements
                .windows(sequence.len())
                .any(|window| window == sequence.as_slice());
            (!found).then(|| {
                messages::should_contain_sequence(&render(self, &elements), &render(self, &sequence))
            })
        })
    }

    #[track_caller]
    fn contains_only_once(&self, values: impl IntoIterator<Item = T::Item>) -> &Self {
        let values: Vec<T::Item> = values.into_iter().collect();
        self.verify(|actual| {
            let elements = actual.elements();
            if let Some(outcome) = when_no_values(&elements, &values) {
                return outcome;
            }
            let expected: Vec<&T::Item> = values.iter().collect();
            let count = |v: &T::Item| elements.iter().filter(|e| **e == v).count();
            let not_found: Vec<&T::Item> = expected.iter().filter(|v| count(**v) == 0).copied().collect();
            let duplicated: Vec<&T::Item> = expected.iter().filter(|v| count(**v) > 1).copied().collect();
            (!not_found.is_empty() || !duplicated.is_empty()).then(|| {
                messages::should_contain_only_once(
                    &render(self, &elements),
                    &render(self, &expected),
                    non_empty(self, &not_found).as_deref(),
                    non_empty(self, &duplicated).as_deref(),
                )
            })
        })
    }

    #[track_caller]
    fn does_not_have_duplicates(&self) -> &Self {
        self.verify(|actual| {
            let elements = actual.elements();
            let mut duplicates: Vec<&T::Item> = Vec::new();
            for (index, &element) in elements.iter().enumerate() {
                if elements[..index].contains(&element) && !duplicates.contains(&element) {
                    duplicates.push(element);
                }
            }
            (!duplicates.is_empty()).then(|| {
                messages::should_not_have_duplicates(&render(self, &elements), &render(self, &duplicates))
            })
        })
    }

    #[track_caller]
    fn all_match<F>(&self, predicate: F, description: &str) -> &Self
    where
        F: Fn(&T::Item) -> bool,
    {
        self.verify(|actual| {
            let elements = actual.elements();
            let rejected = elements.iter().find(|e| !predicate(**e))?;
            Some(messages::should_all_match(
                &render(self, &elements),
                &self.represent(*rejected),
                description,
            ))
        })
    }

    #[track_caller]
    fn any_match<F>(&self, predicate: F, description: &str) -> &Self
    where
        F: Fn(&T::Item) -> bool,
    {
        self.verify(|actual| {
            let elements = actual.elements();
            (!elements.iter().any(|e| predicate(*e)))
                .then(|| messages::should_any_match(&render(self, &elements), description))
        })
    }

    #[track_caller]
    fn none_match<F>(&self, predicate: F, description: &str) -> &Self
    where
        F: Fn(&T::Item) -> bool,
    {
        self.verify(|actual| {
            let elements = actual.elements();
            let accepted = elements.iter().find(|e| predicate(**e))?;
            Some(messages::should_none_match(
                &render(self, &elements),
                &self.represent(*accepted),
                description,
            ))
        })
    }

    #[track_caller]
    fn is_sorted(&self) -> &Self
    where
        T::Item: PartialOrd,
    {
        self.verify(|actual| {
            let elements = actual.elements();
            let index = elements.windows(2).position(|pair| {
                matches!(pair[0].partial_cmp(pair[1]), None | Some(Ordering::Greater))
            })?;
            Some(messages::should_be_sorted(
                index,
                &self.represent(elements[index]),
                &self.represent(elements[index + 1]),
                &render(self, &elements),
            ))
        })
    }

    fn size(&self) -> Assert<'_, usize, Self> {
        self.child(self.actual().map(|group| group.elements().len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::{assert_that, expect_assertion_failure, OrderingAssertions};
    use crate::soft::SoftAssertions;

    #[test]
    fn test_group_checks_pass() {
        let ring_bearers = vec!["Frodo", "Sam", "Bilbo"];
        assert_that(&ring_bearers)
            .has_size(3)
            .is_not_empty()
            .contains(["Sam"])
            .does_not_contain(["Sauron"])
            .contains_only(["Bilbo", "Sam", "Frodo"])
            .contains_exactly(["Frodo", "Sam", "Bilbo"])
            .contains_exactly_in_any_order(["Sam", "Bilbo", "Frodo"])
            .contains_sequence(["Sam", "Bilbo"])
            .contains_only_once(["Frodo"])
            .does_not_have_duplicates()
            .all_match(|name| !name.is_empty(), "non-empty names")
            .any_match(|name| name.starts_with('S'), "names starting with S")
            .none_match(|name| name.len() > 10, "long names");

        assert_that(Vec::<i32>::new()).is_empty().is_sorted();
        assert_that([1, 2, 2, 5]).is_sorted();
    }

    #[test]
    fn test_containers() {
        assert_that(VecDeque::from([1, 2])).contains([2]);
        assert_that(LinkedList::from([1, 2])).has_size(2);
        assert_that(HashSet::from([1, 2])).contains_only([2, 1]);
        assert_that(BTreeSet::from([3, 1])).contains_exactly([1, 3]);
        assert_that(&[1, 2, 3][..]).contains_sequence([2, 3]);
    }

    #[test]
    fn test_contains_message() {
        let message = expect_assertion_failure(|| {
            assert_that(vec![1, 2, 3]).contains([2, 4]);
        });
        assert_eq!(
            message,
            "\nExpecting actual:\n  [1, 2, 3]\nto contain:\n  [2, 4]\nbut could not find the following element(s):\n  [4]"
        );
    }

    #[test]
    fn test_contains_exactly_reports_order() {
        let message = expect_assertion_failure(|| {
            assert_that(vec![1, 2, 3]).contains_exactly([1, 3, 2]);
        });
        assert!(message.contains("not in the same order, at index 1 actual element was:\n  2"));
    }

    #[test]
    fn test_contains_exactly_reports_differences() {
        let message = expect_assertion_failure(|| {
            assert_that(vec![1, 2, 2]).contains_exactly([1, 2, 3]);
        });
        assert!(message.contains("could not find the following element(s):\n  [3]"));
        assert!(message.contains("and the following element(s) were unexpected:\n  [2]"));
    }

    #[test]
    fn test_duplicates_and_only_once() {
        let softly = SoftAssertions::new();
        softly
            .assert_that(vec!['a', 'b', 'a', 'a'])
            .does_not_have_duplicates()
            .contains_only_once(['a', 'c']);

        let errors = softly.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message().starts_with("\nFound duplicate(s):\n  ['a']"));
        assert!(errors[1].message().contains("not found:\n  ['c']"));
        assert!(errors[1].message().contains("found more than once:\n  ['a']"));
    }

    #[test]
    fn test_is_sorted_message() {
        let message = expect_assertion_failure(|| {
            assert_that(vec![1, 3, 2]).is_sorted();
        });
        assert!(message.starts_with("\ngroup is not sorted because element 1:\n  3"));
    }

    #[test]
    fn test_all_match_reports_first_rejected() {
        let message = expect_assertion_failure(|| {
            assert_that(vec![2, 4, 5, 7]).all_match(|x| x % 2 == 0, "even numbers");
        });
        assert!(message.ends_with("to match even numbers but this element did not:\n  5"));
    }

    #[test]
    fn test_size_navigation() {
        let names = vec!["a", "b"];
        let group = assert_that(&names);
        let size = group.size();
        size.is_greater_than(1).is_less_than(3);

        assert!(std::ptr::eq(size.return_to_parent(), &group));
        size.return_to_parent().contains(["b"]);
    }

    #[test]
    fn test_no_values_fail_on_non_empty_group() {
        let softly = SoftAssertions::new();
        softly
            .assert_that(vec![1, 2])
            .contains(Vec::new())
            .contains_only(Vec::new())
            .contains_sequence(Vec::new())
            .contains_only_once(Vec::new());

        let errors = softly.errors();
        assert_eq!(errors.len(), 4);
        assert!(errors
            .iter()
            .all(|e| e.message() == "actual is not empty while group of values to look for is."));
    }

    #[test]
    fn test_no_values_pass_on_empty_group() {
        assert_that(Vec::<i32>::new())
            .contains(Vec::new())
            .contains_only(Vec::new())
            .contains_sequence(Vec::new())
            .contains_only_once(Vec::new());
    }
}
