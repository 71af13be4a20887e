//! Statistical helper functions for the Helios heatwave pipeline.
//!
//! Percentiles use the type-7 estimator (linear interpolation between
//! order statistics), matching numpy's default and R's `quantile()`.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Type-7 quantile of unsorted data, `p` in [0, 1].
///
/// Sorts a copy internally; use [`quantile_sorted`] when the data is
/// already ordered.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn quantile(data: &[f64], p: f64) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    quantile_sorted(&sorted, p)
}

/// Type-7 quantile of pre-sorted data, `p` in [0, 1].
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_sorted: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Median of unsorted data. For even length, averages the middle two values.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    median_sorted(&sorted)
}

/// Median of pre-sorted data.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "median_sorted: input must not be empty");
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Mean squared deviation between two equal-length slices.
///
/// # Panics
///
/// Panics if the slices are empty or of different lengths.
pub fn mean_squared_deviation(a: &[f64], b: &[f64]) -> f64 {
    assert!(
        !a.is_empty(),
        "mean_squared_deviation: input must not be empty"
    );
    assert_eq!(
        a.len(),
        b.len(),
        "mean_squared_deviation: slices must have equal length"
    );
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum();
    sum / a.len() as f64
}
