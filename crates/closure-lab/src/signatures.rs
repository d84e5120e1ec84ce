//! Calling conventions: positional arguments, defaults, variable arity,
//! parameters rebound as locals, and in-out parameters.

use crate::error::{LabError, Result};

/// Both arguments are positional; there are no labels to omit.
pub fn pair_label(first: i64, second: i64) -> String {
    format!("{first},{second}")
}

pub const DEFAULT_PARAMETER: i64 = 12;

/// `None` stands in for an omitted argument.
pub fn with_default(value: Option<i64>) -> i64 {
    value.unwrap_or(DEFAULT_PARAMETER)
}

/// Struct form of a defaulted parameter: `ParameterWithDefault::default()`
/// or struct-update syntax at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterWithDefault {
    pub value: i64,
}

impl Default for ParameterWithDefault {
    fn default() -> Self {
        Self {
            value: DEFAULT_PARAMETER,
        }
    }
}

/// Mean of a variable number of values.
///
/// The slice must not be empty: dividing by a count of zero is a
/// precondition violation and is reported as such, never as `NaN`.
pub fn arithmetic_mean(numbers: &[f64]) -> Result<f64> {
    if numbers.is_empty() {
        return Err(LabError::precondition(
            "arithmetic_mean",
            "at least one number is required",
        ));
    }
    let total: f64 = numbers.iter().sum();
    Ok(total / numbers.len() as f64)
}

/// Variable-arity call site for [`arithmetic_mean`]:
/// `mean!(1, 2, 3, 4, 5)` evaluates to `Ok(3.0)`.
#[macro_export]
macro_rules! mean {
    ($($number:expr),* $(,)?) => {
        $crate::signatures::arithmetic_mean(&[$(($number) as f64),*])
    };
}

/// Left-pads `text` with `pad` until it is `total_length` characters long.
pub fn align_right(text: &str, total_length: usize, pad: char) -> String {
    let mut text = text.to_owned();
    let amount_to_pad = total_length.saturating_sub(text.chars().count());
    if amount_to_pad < 1 {
        return text;
    }
    let padding: String = std::iter::repeat_n(pad, amount_to_pad).collect();
    text.insert_str(0, &padding);
    text
}

pub fn swap_two_ints(a: &mut i64, b: &mut i64) {
    let temporary = *a;
    *a = *b;
    *b = temporary;
}
