//! Array transforms: dedupe, flatten, chunk.
//!
//! All three produce fresh vectors and leave their input untouched.
//! `unique` and `flatten` follow the null-propagation policy (an empty
//! slice simply yields an empty vector); `chunk` is the one member of the
//! argument-contract tier, rejecting a zero chunk size as a programmer
//! error.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{Result, UtilError};

/// Remove duplicates, keeping the first occurrence of each value in its
/// original position.
///
/// # Examples
///
/// ```
/// use toolbelt::array::unique;
///
/// assert_eq!(unique(&[1, 2, 2, 3, 1, 4]), vec![1, 2, 3, 4]);
/// assert_eq!(unique(&["a", "b", "a", "c"]), vec!["a", "b", "c"]);
/// assert_eq!(unique::<i32>(&[]), Vec::<i32>::new());
/// ```
pub fn unique<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    let mut result = Vec::new();

    for item in items {
        if seen.insert(item) {
            result.push(item.clone());
        }
    }

    result
}

/// Flatten one level of nesting into a single vector.
///
/// This is the one-level contract: elements of the inner vectors are
/// copied out in order, and any deeper structure they carry stays as it
/// is.
///
/// # Examples
///
/// ```
/// use toolbelt::array::flatten;
///
/// assert_eq!(flatten(&[vec![1, 2], vec![3, 4], vec![5]]), vec![1, 2, 3, 4, 5]);
/// assert_eq!(flatten::<i32>(&[]), Vec::<i32>::new());
/// ```
pub fn flatten<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    nested.concat()
}

/// Split a slice into chunks of at most `size` elements; the last chunk
/// holds whatever remains.
///
/// # Errors
///
/// [`UtilError::InvalidChunkSize`] if `size` is zero. The size is
/// validated before the input, so an empty slice with a zero size is
/// still an error.
///
/// # Examples
///
/// ```
/// use toolbelt::array::chunk;
///
/// assert_eq!(
///     chunk(&[1, 2, 3, 4, 5], 2).unwrap(),
///     vec![vec![1, 2], vec![3, 4], vec![5]]
/// );
/// assert!(chunk(&[1, 2, 3], 0).is_err());
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(UtilError::InvalidChunkSize(
            "chunk size must be a positive integer".to_string(),
        ));
    }

    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── unique tests ────────────────────────────────────────────────────

    #[test]
    fn test_unique_keeps_first_occurrence_order() {
        assert_eq!(unique(&[1, 2, 2, 3, 1, 4]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unique_on_strings() {
        assert_eq!(unique(&["a", "b", "a", "c"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unique_empty() {
        assert_eq!(unique::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_unique_all_duplicates() {
        assert_eq!(unique(&[7, 7, 7]), vec![7]);
    }

    // ── flatten tests ───────────────────────────────────────────────────

    #[test]
    fn test_flatten_one_level() {
        assert_eq!(flatten(&[vec![1, 2], vec![3, 4]]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_flatten_uneven_inner_lengths() {
        assert_eq!(flatten(&[vec![1], vec![], vec![2, 3, 4]]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_flatten_empty() {
        assert_eq!(flatten::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_flatten_keeps_deeper_nesting() {
        let nested = [vec![vec![1, 2]], vec![vec![3]]];
        assert_eq!(flatten(&nested), vec![vec![1, 2], vec![3]]);
    }

    // ── chunk tests ─────────────────────────────────────────────────────

    #[test]
    fn test_chunk_even_split_with_remainder() {
        assert_eq!(
            chunk(&[1, 2, 3, 4, 5], 2).unwrap(),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
    }

    #[test]
    fn test_chunk_size_larger_than_input() {
        assert_eq!(chunk(&[1, 2, 3], 5).unwrap(), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_chunk_empty_input() {
        assert_eq!(chunk::<i32>(&[], 2).unwrap(), Vec::<Vec<i32>>::new());
    }

    #[test]
    fn test_chunk_zero_size_is_an_error() {
        let err = chunk(&[1, 2, 3], 0).unwrap_err();
        assert!(err.to_string().contains("Invalid chunk size"), "got: {err}");
    }

    #[test]
    fn test_chunk_zero_size_rejected_even_for_empty_input() {
        assert!(chunk::<i32>(&[], 0).is_err());
    }

    // ── property tests ──────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_unique_output_has_no_duplicates(items in proptest::collection::vec(0i32..50, 0..40)) {
            let deduped = unique(&items);
            let mut sorted = deduped.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(deduped.len(), sorted.len());
        }

        #[test]
        fn prop_unique_preserves_membership(items in proptest::collection::vec(0i32..50, 0..40)) {
            let deduped = unique(&items);
            for item in &items {
                prop_assert!(deduped.contains(item));
            }
        }

        #[test]
        fn prop_chunk_concat_round_trips(
            items in proptest::collection::vec(0i32..100, 0..40),
            size in 1usize..10,
        ) {
            let chunks = chunk(&items, size).unwrap();
            prop_assert!(chunks.iter().all(|c| c.len() <= size));
            prop_assert_eq!(flatten(&chunks), items);
        }
    }
}
