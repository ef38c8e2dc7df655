//! Prefix common array of two equal-length sequences.
//!
//! Position `i` of the result counts the values shared by `a[..=i]` and
//! `b[..=i]`. Each value of `a` is paired with its *first* occurrence in
//! `b`, so inputs where a value repeats on both sides are not treated as a
//! full multiset intersection.

use crate::error::InputError;

/// Computes the prefix common array of `a` and `b`.
///
/// For every `a[i]` the first index `j` with `b[j] == a[i]` is located by a
/// forward scan; the pair becomes common once both prefixes reach
/// `max(i, j)`. A running sum over those contributions yields the answer.
///
/// Empty inputs produce an empty result. Inputs are only borrowed.
///
/// # Examples
/// ```
/// use array_puzzles::find_the_prefix_common_array;
/// let counts = find_the_prefix_common_array(&[1, 3, 2, 4], &[3, 1, 2, 4]).unwrap();
/// assert_eq!(counts, vec![0, 2, 3, 4]);
/// ```
pub fn find_the_prefix_common_array<T: PartialEq>(
    a: &[T],
    b: &[T],
) -> Result<Vec<usize>, InputError> {
    if a.len() != b.len() {
        return Err(InputError::length_mismatch(a.len(), b.len()));
    }

    let mut counts = vec![0usize; a.len()];

    for (i, value) in a.iter().enumerate() {
        if let Some(j) = b.iter().position(|candidate| candidate == value) {
            counts[i.max(j)] += 1;
        }
    }

    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    Ok(counts)
}

/// Brute-force counterpart of [`find_the_prefix_common_array`].
///
/// Recounts every prefix from scratch using the same first-match rule.
/// Quadratic; meant for cross-checking and benchmarks.
pub fn prefix_common_reference<T: PartialEq>(
    a: &[T],
    b: &[T],
) -> Result<Vec<usize>, InputError> {
    if a.len() != b.len() {
        return Err(InputError::length_mismatch(a.len(), b.len()));
    }

    let first_match: Vec<Option<usize>> = a
        .iter()
        .map(|value| b.iter().position(|candidate| candidate == value))
        .collect();

    Ok((0..a.len())
        .map(|end| {
            first_match[..=end]
                .iter()
                .filter(|matched| matched.is_some_and(|j| j <= end))
                .count()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_example() {
        let result = find_the_prefix_common_array(&[1, 3, 2, 4], &[3, 1, 2, 4]).unwrap();
        assert_eq!(result, vec![0, 2, 3, 4]);
    }

    #[test]
    fn test_rotated_example() {
        let result = find_the_prefix_common_array(&[2, 3, 1], &[3, 1, 2]).unwrap();
        assert_eq!(result, vec![0, 1, 3]);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [i64; 0] = [];
        assert_eq!(find_the_prefix_common_array(&empty, &empty).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = find_the_prefix_common_array(&[1, 2], &[1]).unwrap_err();
        assert_eq!(err, InputError::LengthMismatch { left: 2, right: 1 });
    }

    #[test]
    fn test_disjoint_inputs() {
        let result = find_the_prefix_common_array(&[1, 2, 3], &[4, 5, 6]).unwrap();
        assert_eq!(result, vec![0, 0, 0]);
    }

    #[test]
    fn test_duplicates_use_first_match() {
        // Both 7s in `a` pair with b[0]; the second 7 in `b` is never used.
        let result = find_the_prefix_common_array(&[7, 7, 1], &[7, 1, 7]).unwrap();
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn test_inputs_untouched() {
        let a = vec![4, 1, 3, 2];
        let b = vec![2, 3, 1, 4];
        let first = find_the_prefix_common_array(&a, &b).unwrap();
        let second = find_the_prefix_common_array(&a, &b).unwrap();
        assert_eq!(first, second);
        assert_eq!(a, vec![4, 1, 3, 2]);
        assert_eq!(b, vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_works_for_non_integer_items() {
        let result = find_the_prefix_common_array(&["x", "y"], &["y", "x"]).unwrap();
        assert_eq!(result, vec![0, 2]);
    }

    #[test]
    fn test_reference_matches_fast_path() {
        let a = [5, 1, 5, 2, 9, 1];
        let b = [1, 5, 2, 2, 1, 9];
        assert_eq!(
            prefix_common_reference(&a, &b).unwrap(),
            find_the_prefix_common_array(&a, &b).unwrap()
        );
    }

    #[test]
    fn test_reference_rejects_mismatch() {
        assert!(prefix_common_reference(&[1], &[1, 2]).is_err());
    }
}
