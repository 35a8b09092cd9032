//! How values are rendered in failure messages.

use std::fmt::Debug;

use crate::config::Configuration;

/// Turns values into the text shown in failure messages.
pub trait Representation: Send + Sync {
    /// Render a single value.
    fn to_string_of(&self, value: &dyn Debug) -> String;

    /// Render a group of elements as `[a, b, c]`.
    ///
    /// Groups longer than
    /// [`Configuration::max_elements_for_printing`] keep their first and
    /// last halves with `...` in between.
    fn to_string_of_elements(&self, elements: &[&dyn Debug]) -> String {
        let max = Configuration::current().max_elements_for_printing;
        let rendered: Vec<String> = if elements.len() > max {
            let head = max.div_ceil(2);
            let tail = max / 2;
            elements[..head]
                .iter()
                .map(|e| self.to_string_of(*e))
                .chain(std::iter::once("...".to_string()))
                .chain(
                    elements[elements.len() - tail..]
                        .iter()
                        .map(|e| self.to_string_of(*e)),
                )
                .collect()
        } else {
            elements.iter().map(|e| self.to_string_of(*e)).collect()
        };
        format!("[{}]", rendered.join(", "))
    }
}

/// `Debug` output, switching to the pretty form for long values.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRepresentation;

impl Representation for StandardRepresentation {
    fn to_string_of(&self, value: &dyn Debug) -> String {
        let single = format!("{value:?}");
        if single.chars().count() > Configuration::current().max_length_for_single_line_description {
            format!("{value:#?}")
        } else {
            single
        }
    }
}

/// Integers rendered in hexadecimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexadecimalRepresentation;

impl Representation for HexadecimalRepresentation {
    fn to_string_of(&self, value: &dyn Debug) -> String {
        format!("{value:#x?}").replace('\n', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_uses_debug() {
        assert_eq!(StandardRepresentation.to_string_of(&"abc"), "\"abc\"");
        assert_eq!(StandardRepresentation.to_string_of(&42), "42");
    }

    #[test]
    fn test_standard_goes_multiline_for_long_values() {
        let long: Vec<String> = (0..20).map(|i| format!("element-{i}")).collect();
        let rendered = StandardRepresentation.to_string_of(&long);
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn test_standard_measures_length_in_characters() {
        let elvish = vec!["éééééééé"; 6];
        let rendered = StandardRepresentation.to_string_of(&elvish);
        assert!(rendered.len() > 80);
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(HexadecimalRepresentation.to_string_of(&255), "0xff");
    }

    #[test]
    fn test_elements() {
        let a = 1;
        let b = 2;
        let elements: [&dyn Debug; 2] = [&a, &b];
        assert_eq!(StandardRepresentation.to_string_of_elements(&elements), "[1, 2]");
    }

    #[test]
    fn test_elements_elided_past_limit() {
        let values: Vec<usize> = (0..1005).collect();
        let elements: Vec<&dyn Debug> = values.iter().map(|v| v as &dyn Debug).collect();
        let rendered = StandardRepresentation.to_string_of_elements(&elements);
        assert!(rendered.starts_with("[0, 1, "));
        assert!(rendered.contains("499, ..., 505"));
        assert!(rendered.ends_with("1004]"));
    }
}
