//! Parsing of user-supplied numbers.

use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("no numbers were given")]
    Empty,

    #[error("`{token}` is not a valid number")]
    InvalidNumber { token: String },

    #[error("got {weights} weights but {values} values")]
    LengthMismatch { weights: usize, values: usize },

    #[error("capacity {capacity} exceeds the limit of {max}", max = MAX_CAPACITY)]
    CapacityTooLarge { capacity: usize },
}

/// Largest accepted knapsack capacity.
///
/// Every filled cell is shown with a copy of the whole table, so wider
/// tables are neither readable nor cheap.
pub const MAX_CAPACITY: usize = 9_999;

/// Checks a knapsack capacity against [`MAX_CAPACITY`].
///
/// # Errors
///
/// Returns [`InputError::CapacityTooLarge`] if the capacity is over the limit.
pub fn check_capacity(capacity: usize) -> Result<usize, InputError> {
    if capacity > MAX_CAPACITY {
        return Err(InputError::CapacityTooLarge { capacity });
    }
    Ok(capacity)
}

/// Parses a comma-separated list of numbers, e.g. `"5, 2,8"`.
///
/// Whitespace around each number is ignored.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for blank input, and
/// [`InputError::InvalidNumber`] for any entry that does not parse as `T`
/// (including empty entries such as the one in `"1,,2"`).
pub fn parse_sequence<T: FromStr>(text: &str) -> Result<Vec<T>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    text.split(',')
        .map(str::trim)
        .map(|token| {
            token.parse().map_err(|_| InputError::InvalidNumber {
                token: token.to_owned(),
            })
        })
        .collect()
}

/// Parses matching weight and value lists for a knapsack run.
///
/// # Errors
///
/// Returns an error if either list fails to parse or the lengths differ.
pub fn parse_items(weights: &str, values: &str) -> Result<(Vec<usize>, Vec<u64>), InputError> {
    let weights: Vec<usize> = parse_sequence(weights)?;
    let values: Vec<u64> = parse_sequence(values)?;
    if weights.len() != values.len() {
        return Err(InputError::LengthMismatch {
            weights: weights.len(),
            values: values.len(),
        });
    }
    Ok((weights, values))
}
