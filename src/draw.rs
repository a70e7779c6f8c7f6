//! Uniform draws from a slice.
//!
//! The draw-without-replacement routine keeps a working copy of the input and
//! removes each drawn element from it, so no source position can be picked
//! twice and the caller's slice is never touched. Removal is order-preserving
//! (`Vec::remove`), so a draw costs O(count · n) in the worst case; for the
//! small rosters this crate targets that is fine.
//!
//! Notes:
//! - This module provides `*_with_rng` entrypoints for deterministic testing/benchmarking.
//! - Functions that call `rand::rng()` internally are convenience wrappers and are not
//!   deterministic across processes by design.

use rand::prelude::*;

/// Errors for the draw operations.
///
/// The `Display` text is part of the contract: callers match on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// The input sequence was absent.
    UndefinedValues,
    /// The input sequence was empty where a single pick needs at least one element.
    EmptyValues,
    /// A negative element count was requested.
    NegativeCount,
    /// Fewer than one group was requested.
    NonPositiveGroups,
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedValues => write!(f, "values is undefined"),
            Self::EmptyValues => write!(f, "values is empty"),
            Self::NegativeCount => write!(f, "Number of values must be 0 or greater"),
            Self::NonPositiveGroups => write!(f, "Number of groups must be greater than 0"),
        }
    }
}

impl std::error::Error for DrawError {}

/// Pick a uniform random index into `values`.
///
/// Fails on an absent (`None`) input, and on an empty slice (there is no
/// in-range index to return).
pub fn random_index<T>(values: Option<&[T]>) -> Result<usize, DrawError> {
    let mut rng = rand::rng();
    random_index_with_rng(values, &mut rng)
}

/// Pick a uniform random index using a caller-supplied RNG.
pub fn random_index_with_rng<T, R: Rng + ?Sized>(
    values: Option<&[T]>,
    rng: &mut R,
) -> Result<usize, DrawError> {
    let values = values.ok_or(DrawError::UndefinedValues)?;
    if values.is_empty() {
        return Err(DrawError::EmptyValues);
    }
    Ok(rng.random_range(0..values.len()))
}

/// Pick a uniform random element of `values`.
///
/// Same preconditions and errors as [`random_index`].
pub fn random_value<T>(values: Option<&[T]>) -> Result<&T, DrawError> {
    let mut rng = rand::rng();
    random_value_with_rng(values, &mut rng)
}

/// Pick a uniform random element using a caller-supplied RNG.
pub fn random_value_with_rng<'a, T, R: Rng + ?Sized>(
    values: Option<&'a [T]>,
    rng: &mut R,
) -> Result<&'a T, DrawError> {
    let values = values.ok_or(DrawError::UndefinedValues)?;
    let index = random_index_with_rng(Some(values), rng)?;
    Ok(&values[index])
}

/// Draw up to `count` distinct-by-position elements, uniformly, without replacement.
///
/// `count` is clamped to `values.len()`: asking for more than is available
/// silently returns every element. Output order is draw order, which carries
/// no relationship to the input order.
///
/// Fails with [`DrawError::NegativeCount`] when `count < 0` and with
/// [`DrawError::UndefinedValues`] when `values` is `None`. An empty slice is
/// valid input and yields an empty draw.
pub fn draw<T: Clone>(values: Option<&[T]>, count: i64) -> Result<Vec<T>, DrawError> {
    let mut rng = rand::rng();
    draw_with_rng(values, count, &mut rng)
}

/// Draw without replacement using a caller-supplied RNG.
pub fn draw_with_rng<T: Clone, R: Rng + ?Sized>(
    values: Option<&[T]>,
    count: i64,
    rng: &mut R,
) -> Result<Vec<T>, DrawError> {
    let values = values.ok_or(DrawError::UndefinedValues)?;
    if count < 0 {
        return Err(DrawError::NegativeCount);
    }
    let count = count.min(values.len() as i64) as usize;

    let mut remaining = values.to_vec();
    let mut result = Vec::with_capacity(count);
    for _ in 0..count {
        // `remaining` is non-empty here because of the clamp above.
        let index = random_index_with_rng(Some(remaining.as_slice()), rng)?;
        result.push(remaining.remove(index));
    }
    Ok(result)
}
