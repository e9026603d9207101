//! Presentation of quantities as text.
//!
//! Formatting never changes a quantity. [`DisplayOptions`] picks the unit to
//! show, the number of fraction digits, the separator and whether the symbol
//! is printed; a [`NumberFormat`] turns the number itself into text, which is
//! where locale-specific digit grouping plugs in.
//!
//! ```
//! use measura_core::format::{DisplayOptions, GroupedNumberFormat};
//! use measura_core::{Length, LengthUnit};
//!
//! let run = Length::kilometers(1.5);
//! let options = DisplayOptions::new().unit(LengthUnit::Meter).fraction_digits(1);
//! assert_eq!(run.to_display_string(&options), "1500.0\u{a0}m");
//!
//! let german = GroupedNumberFormat::new(',', Some('.'));
//! let options = DisplayOptions::new()
//!     .unit(LengthUnit::Meter)
//!     .fraction_digits(2)
//!     .number_format(&german)
//!     .separator(" ");
//! assert_eq!(run.to_display_string(&options), "1.500,00 m");
//! ```

use crate::unit::UnitInfo;

/// Default separator between a number and its unit symbol (U+00A0)
pub const NON_BREAKING_SPACE: &str = "\u{a0}";

/// Turns a magnitude into text
pub trait NumberFormat {
    /// Format `value`, with exactly `fraction_digits` digits after the decimal
    /// point when given, or the shortest round-tripping form otherwise.
    fn format_number(&self, value: f64, fraction_digits: Option<usize>) -> String;
}

/// Rust's own float formatting (`{}` or `{:.N}`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainNumberFormat;

impl NumberFormat for PlainNumberFormat {
    fn format_number(&self, value: f64, fraction_digits: Option<usize>) -> String {
        match fraction_digits {
            Some(digits) => format!("{value:.digits$}"),
            None => value.to_string(),
        }
    }
}

/// Digit grouping with configurable decimal and group separators.
///
/// `GroupedNumberFormat::new('.', Some(','))` renders `1234567.5` as
/// `1,234,567.5`; `GroupedNumberFormat::new(',', Some('.'))` as `1.234.567,5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupedNumberFormat {
    decimal_separator: char,
    group_separator: Option<char>,
}

impl GroupedNumberFormat {
    /// Create a format with the given separators (no grouping when `None`)
    pub const fn new(decimal_separator: char, group_separator: Option<char>) -> Self {
        Self {
            decimal_separator,
            group_separator,
        }
    }
}

impl NumberFormat for GroupedNumberFormat {
    fn format_number(&self, value: f64, fraction_digits: Option<usize>) -> String {
        let plain = PlainNumberFormat.format_number(value, fraction_digits);
        if !value.is_finite() {
            return plain;
        }

        let (sign, digits) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits, None),
        };

        let mut out = String::with_capacity(plain.len() + integer.len() / 3);
        out.push_str(sign);
        for (index, digit) in integer.chars().enumerate() {
            if index > 0 && (integer.len() - index) % 3 == 0 {
                if let Some(separator) = self.group_separator {
                    out.push(separator);
                }
            }
            out.push(digit);
        }
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

/// How a quantity should be rendered by `to_display_string`
#[derive(Clone, Copy)]
pub struct DisplayOptions<'a, U> {
    pub(crate) unit: Option<U>,
    fraction_digits: Option<usize>,
    show_symbol: bool,
    separator: &'a str,
    number_format: Option<&'a dyn NumberFormat>,
}

impl<U> Default for DisplayOptions<'_, U> {
    fn default() -> Self {
        Self {
            unit: None,
            fraction_digits: None,
            show_symbol: true,
            separator: NON_BREAKING_SPACE,
            number_format: None,
        }
    }
}

impl<'a, U> DisplayOptions<'a, U> {
    /// Options that print the stored value and unit as-is
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert to `unit` before formatting
    pub fn unit(mut self, unit: U) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Fixed number of digits after the decimal point
    pub fn fraction_digits(mut self, digits: usize) -> Self {
        self.fraction_digits = Some(digits);
        self
    }

    /// Print the number only
    pub fn without_symbol(mut self) -> Self {
        self.show_symbol = false;
        self
    }

    /// Text between number and symbol
    pub fn separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    /// Replace the default [`PlainNumberFormat`]
    pub fn number_format(mut self, format: &'a dyn NumberFormat) -> Self {
        self.number_format = Some(format);
        self
    }
}

/// Render an already-converted `(value, unit)` pair
pub(crate) fn render<U: UnitInfo>(value: f64, unit: U, options: &DisplayOptions<'_, U>) -> String {
    let number = match options.number_format {
        Some(format) => format.format_number(value, options.fraction_digits),
        None => PlainNumberFormat.format_number(value, options.fraction_digits),
    };
    if options.show_symbol {
        format!("{number}{}{}", options.separator, unit.symbol())
    } else {
        number
    }
}
