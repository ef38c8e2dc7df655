//! Alternating parity ("special array") check.

use itertools::Itertools;

use crate::error::InputError;

const PROBLEM: &str = "special array check";

/// Parity of `n`. Negative odd values count as odd.
pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

/// Returns `true` when every pair of neighbours in `nums` has one odd and
/// one even element. Stops at the first pair that shares a parity.
///
/// A single element is trivially special; an empty slice is rejected.
///
/// # Examples
/// ```
/// use array_puzzles::is_array_special;
/// assert!(is_array_special(&[1, 2, 3, 4]).unwrap());
/// assert!(!is_array_special(&[4, 3, 1, 6]).unwrap());
/// ```
pub fn is_array_special(nums: &[i64]) -> Result<bool, InputError> {
    Ok(first_parity_break(nums)?.is_none())
}

/// Index `k` of the first neighbouring pair `(nums[k], nums[k + 1])` with
/// equal parity, or `None` if the parity alternates throughout.
pub fn first_parity_break(nums: &[i64]) -> Result<Option<usize>, InputError> {
    if nums.is_empty() {
        return Err(InputError::empty(PROBLEM));
    }

    Ok(nums
        .iter()
        .map(|&n| is_odd(n))
        .tuple_windows()
        .position(|(previous, current)| previous == current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_sequence() {
        assert!(is_array_special(&[1, 2, 3, 4]).unwrap());
        assert!(is_array_special(&[2, 1, 4]).unwrap());
    }

    #[test]
    fn test_two_odds_in_a_row() {
        assert!(!is_array_special(&[4, 3, 1, 6]).unwrap());
        assert_eq!(first_parity_break(&[4, 3, 1, 6]).unwrap(), Some(1));
    }

    #[test]
    fn test_single_element() {
        assert!(is_array_special(&[1]).unwrap());
        assert_eq!(first_parity_break(&[8]).unwrap(), None);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            is_array_special(&[]).unwrap_err(),
            InputError::Empty { problem: "special array check" }
        );
    }

    #[test]
    fn test_break_reported_at_first_pair() {
        assert_eq!(first_parity_break(&[2, 4, 6, 8]).unwrap(), Some(0));
        assert_eq!(first_parity_break(&[1, 2, 3, 5, 7]).unwrap(), Some(2));
    }

    #[test]
    fn test_negative_values() {
        assert!(is_odd(-3));
        assert!(!is_odd(-4));
        assert!(is_array_special(&[-3, -2, -1, 0]).unwrap());
        assert!(!is_array_special(&[-1, 1]).unwrap());
    }

    #[test]
    fn test_extreme_values() {
        assert!(is_array_special(&[i64::MIN, i64::MAX]).unwrap());
        assert!(!is_array_special(&[i64::MAX, 1]).unwrap());
    }
}
