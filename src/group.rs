//! Round-robin group dealing.
//!
//! Draws a uniform subset of a slice and deals it into a fixed number of
//! groups, one element at a time, wrapping back to the first group after the
//! last. Typical use: splitting a roster of people into teams. When the drawn
//! total does not divide evenly, the earliest groups end up one element
//! larger, because leftovers land wherever the dealing pointer reaches first.

use rand::prelude::*;

use crate::draw::{draw_with_rng, DrawError};

/// Draw `total_count` elements of `values` and deal them round-robin into
/// `group_count` groups.
///
/// The result always contains exactly `group_count` groups; trailing groups
/// may be empty when fewer elements were drawn than there are groups.
/// `total_count` follows the same clamp-and-error policy as [`crate::draw`].
///
/// Fails with [`DrawError::NonPositiveGroups`] when `group_count < 1`.
pub fn draw_into_groups<T: Clone>(
    values: Option<&[T]>,
    total_count: i64,
    group_count: i64,
) -> Result<Vec<Vec<T>>, DrawError> {
    let mut rng = rand::rng();
    draw_into_groups_with_rng(values, total_count, group_count, &mut rng)
}

/// Group dealing with a caller-supplied RNG (for tests/benchmarks).
pub fn draw_into_groups_with_rng<T: Clone, R: Rng + ?Sized>(
    values: Option<&[T]>,
    total_count: i64,
    group_count: i64,
    rng: &mut R,
) -> Result<Vec<Vec<T>>, DrawError> {
    // Checks run in order: values, count, groups. The first failure wins.
    let values = values.ok_or(DrawError::UndefinedValues)?;
    if total_count < 0 {
        return Err(DrawError::NegativeCount);
    }
    if group_count < 1 {
        return Err(DrawError::NonPositiveGroups);
    }

    let drawn = draw_with_rng(Some(values), total_count, rng)?;
    let group_count = group_count as usize;

    let mut groups = vec![Vec::new(); group_count];
    for (i, value) in drawn.into_iter().enumerate() {
        groups[i % group_count].push(value);
    }
    Ok(groups)
}
