//! Piecewise-linear lookup over monotone tables.
//!
//! Both functions treat `(keys[i], values[i])` as the vertices of a polyline
//! and evaluate it at a query key. Queries outside the key span are clamped to
//! the first or last value; nothing is extrapolated.
//!
//! When a key is repeated (a flat run in a cumulative curve) a query equal to
//! that key yields the value paired with its last occurrence in the ascending
//! table.

/// Interpolates over a table whose keys are non-decreasing.
///
/// A NaN query yields NaN.
///
/// # Panics
///
/// Panics if `keys` and `values` differ in length or are empty.
///
/// # Examples
///
/// ```
/// use ogive_stats::interpolation::interp_ascending;
///
/// let keys = [0.0, 10.0, 20.0];
/// let values = [0.0, 50.0, 100.0];
/// assert_eq!(interp_ascending(5.0, &keys, &values), 25.0);
/// assert_eq!(interp_ascending(-1.0, &keys, &values), 0.0);
/// assert_eq!(interp_ascending(99.0, &keys, &values), 100.0);
/// ```
#[must_use]
pub fn interp_ascending(query: f64, keys: &[f64], values: &[f64]) -> f64 {
    assert_eq!(keys.len(), values.len(), "table columns must match in length");
    assert!(!keys.is_empty(), "table must not be empty");
    debug_assert!(
        keys.is_sorted_by(|a, b| a <= b),
        "keys must be non-decreasing"
    );

    if query.is_nan() {
        return f64::NAN;
    }
    let last = keys.len() - 1;
    if query < keys[0] {
        return values[0];
    }
    if query >= keys[last] {
        return values[last];
    }

    // Rightmost segment whose start key is <= query; its end key is > query,
    // so the segment never has zero width.
    let j = keys.partition_point(|&k| k <= query) - 1;
    let (k0, k1) = (keys[j], keys[j + 1]);
    let (v0, v1) = (values[j], values[j + 1]);
    v0 + (query - k0) / (k1 - k0) * (v1 - v0)
}

/// Interpolates over a table whose keys are non-increasing.
///
/// The table is reversed and evaluated with [`interp_ascending`].
///
/// # Examples
///
/// ```
/// use ogive_stats::interpolation::interp_descending;
///
/// let keys = [100.0, 50.0, 0.0];
/// let values = [0.0, 10.0, 20.0];
/// assert_eq!(interp_descending(75.0, &keys, &values), 5.0);
/// assert_eq!(interp_descending(120.0, &keys, &values), 0.0);
/// assert_eq!(interp_descending(-5.0, &keys, &values), 20.0);
/// ```
#[must_use]
pub fn interp_descending(query: f64, keys: &[f64], values: &[f64]) -> f64 {
    let keys = keys.iter().rev().copied().collect::<Vec<_>>();
    let values = values.iter().rev().copied().collect::<Vec<_>>();
    interp_ascending(query, &keys, &values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_vertices_exactly() {
        let keys = [10.0, 17.5, 25.0, 32.5, 40.0];
        let values = [0.0, 25.0, 50.0, 75.0, 100.0];
        for (k, v) in keys.iter().zip(values) {
            assert_eq!(interp_ascending(*k, &keys, &values), v);
        }
    }

    #[test]
    fn test_midpoint() {
        let keys = [0.0, 4.0];
        let values = [10.0, 30.0];
        assert_eq!(interp_ascending(1.0, &keys, &values), 15.0);
    }

    #[test]
    fn test_flat_run_takes_last_occurrence() {
        // Percentage column with an empty bin in the middle.
        let keys = [0.0, 40.0, 40.0, 100.0];
        let values = [0.0, 10.0, 20.0, 30.0];
        assert_eq!(interp_ascending(40.0, &keys, &values), 20.0);
        assert_eq!(interp_ascending(20.0, &keys, &values), 5.0);
        assert_eq!(interp_ascending(70.0, &keys, &values), 25.0);
    }

    #[test]
    fn test_leading_flat_run() {
        let keys = [0.0, 0.0, 50.0, 100.0];
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(interp_ascending(0.0, &keys, &values), 2.0);
    }

    #[test]
    fn test_single_point_table() {
        assert_eq!(interp_ascending(3.0, &[1.0], &[7.0]), 7.0);
        assert_eq!(interp_ascending(-3.0, &[1.0], &[7.0]), 7.0);
    }

    #[test]
    fn test_descending_clamps() {
        let keys = [100.0, 75.0, 50.0, 25.0, 0.0];
        let values = [10.0, 17.5, 25.0, 32.5, 40.0];
        assert_eq!(interp_descending(50.0, &keys, &values), 25.0);
        assert_eq!(interp_descending(100.0, &keys, &values), 10.0);
        assert_eq!(interp_descending(0.0, &keys, &values), 40.0);
        assert_eq!(interp_descending(62.5, &keys, &values), 21.25);
    }

    #[test]
    #[should_panic(expected = "table columns must match in length")]
    fn test_mismatched_columns_panic() {
        let _ = interp_ascending(0.0, &[0.0, 1.0], &[0.0]);
    }

    #[test]
    fn test_nan_query() {
        let keys = [0.0, 10.0, 20.0];
        let values = [0.0, 50.0, 100.0];
        assert!(interp_ascending(f64::NAN, &keys, &values).is_nan());
        assert!(interp_descending(f64::NAN, &[100.0, 0.0], &[0.0, 20.0]).is_nan());
    }
}
