use std::cmp::Ordering;
use std::fmt::Debug;

use super::Assert;
use crate::failure::messages;

/// Primitive numbers.
pub trait Numeric: Copy + PartialOrd + Debug {
    /// Zero of this type.
    const ZERO: Self;

    /// Type of the distance between two values.
    type Distance: PartialOrd + Debug;

    /// `|self - other|`, without overflow.
    fn distance(self, other: Self) -> Self::Distance;

    /// `|self|` as a distance.
    fn magnitude(self) -> Self::Distance;
}

macro_rules! impl_numeric_signed {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl Numeric for $t {
            const ZERO: Self = 0;
            type Distance = $u;

            fn distance(self, other: Self) -> $u {
                self.abs_diff(other)
            }

            fn magnitude(self) -> $u {
                self.unsigned_abs()
            }
        }
    )*};
}

macro_rules! impl_numeric_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            const ZERO: Self = 0;
            type Distance = $t;

            fn distance(self, other: Self) -> $t {
                self.abs_diff(other)
            }

            fn magnitude(self) -> $t {
                self
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            const ZERO: Self = 0.0;
            type Distance = $t;

            fn distance(self, other: Self) -> $t {
                (self - other).abs()
            }

            fn magnitude(self) -> $t {
                self.abs()
            }
        }
    )*};
}

impl_numeric_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
impl_numeric_unsigned!(u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

/// Sign, zero and closeness checks on primitive numbers.
pub trait NumericAssertions<T> {
    /// `actual == 0`
    fn is_zero(&self) -> &Self;

    /// `actual != 0`
    fn is_not_zero(&self) -> &Self;

    /// `actual > 0`
    fn is_positive(&self) -> &Self;

    /// `actual < 0`
    fn is_negative(&self) -> &Self;

    /// `actual >= 0`
    fn is_not_negative(&self) -> &Self;

    /// `actual <= 0`
    fn is_not_positive(&self) -> &Self;

    /// `|actual - expected| <= offset`
    ///
    /// # Panics
    ///
    /// Panics if `offset` is negative or NaN.
    fn is_close_to(&self, expected: T, offset: T) -> &Self;
}

#[track_caller]
fn check_sign<'a, 'p, T, P>(
    node: &'a Assert<'p, T, P>,
    relation: &str,
    accept: impl FnOnce(&T) -> bool,
) -> &'a Assert<'p, T, P>
where
    T: Numeric,
{
    node.verify(|actual| {
        (!accept(actual)).then(|| {
            messages::should_be_ordered(
                &node.represent(actual),
                relation,
                &node.represent(&T::ZERO),
                None,
            )
        })
    })
}

impl<T, P> NumericAssertions<T> for Assert<'_, T, P>
where
    T: Numeric,
{
    #[track_caller]
    fn is_zero(&self) -> &Self {
        self.verify(|actual| {
            (*actual != T::ZERO).then(|| {
                messages::should_be_equal(&self.represent(actual), &self.represent(&T::ZERO), None)
            })
        })
    }

    #[track_caller]
    fn is_not_zero(&self) -> &Self {
        self.verify(|actual| {
            (*actual == T::ZERO).then(|| {
                messages::should_not_be_equal(&self.represent(actual), &self.represent(&T::ZERO), None)
            })
        })
    }

    #[track_caller]
    fn is_positive(&self) -> &Self {
        check_sign(self, "greater than", |a| *a > T::ZERO)
    }

    #[track_caller]
    fn is_negative(&self) -> &Self {
        check_sign(self, "less than", |a| *a < T::ZERO)
    }

    #[track_caller]
    fn is_not_negative(&self) -> &Self {
        check_sign(self, "greater than or equal to", |a| *a >= T::ZERO)
    }

    #[track_caller]
    fn is_not_positive(&self) -> &Self {
        check_sign(self, "less than or equal to", |a| *a <= T::ZERO)
    }

    #[track_caller]
    fn is_close_to(&self, expected: T, offset: T) -> &Self {
        if matches!(offset.partial_cmp(&T::ZERO), None | Some(Ordering::Less)) {
            panic!("offset must be a non-negative number but was {offset:?}");
        }
        let tolerance = offset.magnitude();
        self.verify(|actual| {
            let difference = actual.distance(expected);
            let too_far = matches!(
                difference.partial_cmp(&tolerance),
                None | Some(Ordering::Greater)
            );
            too_far.then(|| {
                messages::should_be_close_to(
                    &self.represent(actual),
                    &self.represent(&expected),
                    &self.represent(&offset),
                    &self.represent(&difference),
                )
            })
        })
    }
}

/// Checks specific to floating point numbers.
pub trait FloatAssertions {
    /// `actual.is_nan()`
    fn is_nan(&self) -> &Self;

    /// `!actual.is_nan()`
    fn is_not_nan(&self) -> &Self;

    /// `actual.is_finite()`
    fn is_finite(&self) -> &Self;
}

macro_rules! impl_float_assertions {
    ($($t:ty),*) => {$(
        impl<P> FloatAssertions for Assert<'_, $t, P> {
            #[track_caller]
            fn is_nan(&self) -> &Self {
                self.verify(|actual| {
                    (!actual.is_nan()).then(|| messages::should_be_nan(&self.represent(actual), false))
                })
            }

            #[track_caller]
            fn is_not_nan(&self) -> &Self {
                self.verify(|actual| {
                    actual.is_nan().then(|| messages::should_be_nan(&self.represent(actual), true))
                })
            }

            #[track_caller]
            fn is_finite(&self) -> &Self {
                self.verify(|actual| {
                    (!actual.is_finite()).then(|| messages::should_be_finite(&self.represent(actual)))
                })
            }
        }
    )*};
}

impl_float_assertions!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::{assert_that, expect_assertion_failure};

    #[test]
    fn test_sign_checks() {
        assert_that(0).is_zero().is_not_negative().is_not_positive();
        assert_that(3u8).is_not_zero().is_positive();
        assert_that(-2.5).is_negative().is_not_zero();
    }

    #[test]
    fn test_is_positive_message() {
        let message = expect_assertion_failure(|| {
            assert_that(-1).is_positive();
        });
        assert_eq!(message, "\nExpecting actual:\n  -1\nto be greater than:\n  0");
    }

    #[test]
    fn test_is_close_to() {
        assert_that(10).is_close_to(12, 2);
        assert_that(1.0_f64).is_close_to(1.05, 0.1);
        assert_that(i32::MIN).is_close_to(i32::MIN + 1, 1);

        let message = expect_assertion_failure(|| {
            assert_that(10).is_close_to(20, 5);
        });
        assert!(message.contains("by less than 5 but difference was 10."));
    }

    #[test]
    fn test_is_close_to_extreme_values() {
        let message = expect_assertion_failure(|| {
            assert_that(i64::MAX).is_close_to(i64::MIN, 1);
        });
        assert!(message.contains(&format!("difference was {}", u64::MAX)));
    }

    #[test]
    #[should_panic(expected = "offset must be a non-negative number")]
    fn test_negative_offset_is_misuse() {
        assert_that(1).is_close_to(1, -1);
    }

    #[test]
    fn test_float_checks() {
        assert_that(f64::NAN).is_nan();
        assert_that(1.0_f32).is_not_nan().is_finite();

        let message = expect_assertion_failure(|| {
            assert_that(f64::INFINITY).is_finite();
        });
        assert_eq!(message, "\nExpecting actual:\n  inf\nto be finite");
    }

    #[test]
    fn test_hexadecimal_rendering() {
        let message = expect_assertion_failure(|| {
            assert_that(255).in_hexadecimal().is_zero();
        });
        assert_eq!(message, "\nexpected: 0x0\n but was: 0xff");
    }
}
