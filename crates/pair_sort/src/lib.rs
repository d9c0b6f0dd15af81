//! In-place heap sort of `f64` keys with a satellite value array.
//!
//! Every entry point reorders `keys` ascending and applies the identical
//! permutation to `values`, so `(keys[i], values[i])` pairs survive the sort.
//! The sort is not stable and allocates nothing.
//!
//! Two storage layouts are accepted:
//!
//! - [`Indexing::ZeroBased`]: the pairs live at `0..n` ([`sort_pairs`]).
//! - [`Indexing::OneBased`]: slot 0 is an unused sentinel and the pairs live
//!   at `1..=n` ([`sort_pairs_one_based`]).
//!
//! The checked entry points reject storage that is too short before touching
//! anything. [`sort_pairs_unchecked`] skips validation entirely.

mod common;
mod heap_sort;

use log::{debug, trace};
use thiserror::Error;

pub use common::{is_sorted_non_decreasing, same_pairs};
pub use heap_sort::heap_sort_pairs;

/// Where the `n` pairs sit inside the caller's storage.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Indexing {
    /// Pairs occupy positions `0..n`.
    ZeroBased,
    /// Position 0 is ignored; pairs occupy positions `1..=n`.
    OneBased,
}

impl Indexing {
    /// Minimum slice length needed to address `n` pairs.
    ///
    /// Saturates at `usize::MAX`, which no `f64` slice can reach.
    pub fn required_len(self, n: usize) -> usize {
        match self {
            Self::ZeroBased => n,
            Self::OneBased if n == 0 => 0,
            Self::OneBased => n.saturating_add(1),
        }
    }

    fn offset(self) -> usize {
        match self {
            Self::ZeroBased => 0,
            Self::OneBased => 1,
        }
    }
}

/// Precondition violations rejected by the checked entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    #[error("keys slice too short: need {required} elements, got {len}")]
    KeysTooShort { required: usize, len: usize },
    #[error("values slice too short: need {required} elements, got {len}")]
    ValuesTooShort { required: usize, len: usize },
}

/// Sorts the pairs at `0..n` by ascending key.
///
/// Elements past `n` are left untouched. Fails without mutating either slice
/// if `keys` or `values` holds fewer than `n` elements.
///
/// ```
/// let mut keys = [5.0, 3.0, 4.0, 1.0, 2.0];
/// let mut values = ["e", "c", "d", "a", "b"];
/// pair_sort::sort_pairs(5, &mut keys, &mut values).unwrap();
/// assert_eq!(keys, [1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(values, ["a", "b", "c", "d", "e"]);
/// ```
pub fn sort_pairs<V: Copy>(n: usize, keys: &mut [f64], values: &mut [V]) -> Result<(), SortError> {
    sort_pairs_with(Indexing::ZeroBased, n, keys, values)
}

/// Sorts the pairs at `1..=n` by ascending key; slot 0 is never read or written.
///
/// ```
/// let mut keys = [0.0, 3.0, 2.0, 1.0];
/// let mut values = [0, 30, 20, 10];
/// pair_sort::sort_pairs_one_based(3, &mut keys, &mut values).unwrap();
/// assert_eq!(keys, [0.0, 1.0, 2.0, 3.0]);
/// assert_eq!(values, [0, 10, 20, 30]);
/// ```
pub fn sort_pairs_one_based<V: Copy>(
    n: usize,
    keys: &mut [f64],
    values: &mut [V],
) -> Result<(), SortError> {
    sort_pairs_with(Indexing::OneBased, n, keys, values)
}

/// Sorts `n` pairs laid out according to `indexing`.
pub fn sort_pairs_with<V: Copy>(
    indexing: Indexing,
    n: usize,
    keys: &mut [f64],
    values: &mut [V],
) -> Result<(), SortError> {
    trace!("sort_pairs: n={n} indexing={indexing:?}");
    if let Err(err) = check_storage(indexing, n, keys.len(), values.len()) {
        debug!("sort_pairs rejected: {err}");
        return Err(err);
    }
    if n < 2 {
        return Ok(());
    }

    // Storage was checked to hold `offset + n` elements, so this cannot overflow.
    let start = indexing.offset();
    let range = start..start + n;
    heap_sort_pairs(&mut keys[range.clone()], &mut values[range]);
    Ok(())
}

/// Sorts the pairs at `0..n` without validating the slices.
///
/// # Safety
///
/// The caller must guarantee `n <= keys.len()` and `n <= values.len()`.
/// Violating this reads and writes out of bounds.
pub unsafe fn sort_pairs_unchecked<V: Copy>(n: usize, keys: &mut [f64], values: &mut [V]) {
    // SAFETY: forwarded from the caller.
    unsafe { heap_sort::heap_sort_pairs_unchecked(n, keys, values) }
}

fn check_storage(
    indexing: Indexing,
    n: usize,
    keys_len: usize,
    values_len: usize,
) -> Result<(), SortError> {
    let required = indexing.required_len(n);
    if keys_len < required {
        return Err(SortError::KeysTooShort {
            required,
            len: keys_len,
        });
    }
    if values_len < required {
        return Err(SortError::ValuesTooShort {
            required,
            len: values_len,
        });
    }
    Ok(())
}
