/// Returns `true` if `keys` never decreases. Empty and single-element slices are sorted.
///
/// Any comparison involving NaN counts as out of order.
#[inline]
pub fn is_sorted_non_decreasing(keys: &[f64]) -> bool {
    keys.windows(2).all(|w| w[0] <= w[1])
}

/// Returns `true` if both key/value sequences hold the same multiset of pairs.
///
/// Keys are matched by bit pattern, so `NaN` pairs with `NaN` and `-0.0` is
/// distinct from `0.0`. Quadratic; meant for checks on test-sized inputs.
pub fn same_pairs<V: PartialEq>(
    before_keys: &[f64],
    before_values: &[V],
    after_keys: &[f64],
    after_values: &[V],
) -> bool {
    if before_keys.len() != before_values.len()
        || after_keys.len() != after_values.len()
        || before_keys.len() != after_keys.len()
    {
        return false;
    }

    let mut taken = vec![false; after_keys.len()];
    for (key, value) in before_keys.iter().zip(before_values) {
        let slot = after_keys
            .iter()
            .zip(after_values)
            .enumerate()
            .position(|(idx, (k, v))| !taken[idx] && k.to_bits() == key.to_bits() && v == value);
        match slot {
            Some(idx) => taken[idx] = true,
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sortedness_edge_cases() {
        assert!(is_sorted_non_decreasing(&[]));
        assert!(is_sorted_non_decreasing(&[1.5]));
        assert!(is_sorted_non_decreasing(&[1.0, 1.0, 2.0]));
        assert!(is_sorted_non_decreasing(&[-0.0, 0.0]));
        assert!(!is_sorted_non_decreasing(&[2.0, 1.0]));
        assert!(!is_sorted_non_decreasing(&[1.0, f64::NAN]));
    }

    #[test]
    fn pairs_match_regardless_of_order() {
        let before_keys = [2.0, 1.0, 2.0, 1.0];
        let before_values = [10, 20, 30, 40];
        let after_keys = [1.0, 1.0, 2.0, 2.0];
        assert!(same_pairs(&before_keys, &before_values, &after_keys, &[40, 20, 10, 30]));
        assert!(!same_pairs(&before_keys, &before_values, &after_keys, &[10, 20, 30, 40]));
    }

    #[test]
    fn pairs_reject_duplicates_and_length_mismatch() {
        assert!(!same_pairs(&[1.0, 2.0], &[1, 2], &[1.0, 1.0], &[1, 1]));
        assert!(!same_pairs(&[1.0], &[1], &[1.0, 1.0], &[1, 1]));
        assert!(!same_pairs(&[1.0, 2.0], &[1], &[1.0, 2.0], &[1, 2]));
    }

    #[test]
    fn pairs_compare_keys_bitwise() {
        assert!(same_pairs(&[f64::NAN], &['n'], &[f64::NAN], &['n']));
        assert!(!same_pairs(&[0.0], &['z'], &[-0.0], &['z']));
    }
}
