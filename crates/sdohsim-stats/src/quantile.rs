/// Computes a quantile from values sorted in ascending order.
///
/// Uses linear interpolation between order statistics: for `n` values the
/// `q`-quantile sits at rank `(n - 1) * q`, interpolating between the two
/// neighboring order statistics when the rank is fractional.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `q` - The quantile to compute (0.0 to 1.0)
///
/// # Returns
///
/// The interpolated value at the given quantile. Returns `f64::NAN` if the
/// input is empty.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use sdohsim_stats::quantile::quantile_sorted;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile_sorted(&values, 0.5), 2.5);
/// assert_eq!(quantile_sorted(&values, 0.0), 1.0);
/// assert_eq!(quantile_sorted(&values, 1.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn quantile_sorted(sorted_values: &[f64], q: f64) -> f64 {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    debug_assert!((0.0..=1.0).contains(&q), "quantile must be in 0.0..=1.0");

    if sorted_values.is_empty() {
        return f64::NAN;
    }

    let rank = (sorted_values.len() - 1) as f64 * q;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - rank.floor();
    sorted_values[lo] + (sorted_values[hi] - sorted_values[lo]) * frac
}

/// Computes a quantile from unsorted values.
///
/// Sorts a copy of the values internally (total order via
/// [`f64::total_cmp`]) before delegating to [`quantile_sorted`]. Callers
/// must filter out NaN values beforehand; a NaN in the input would sort to
/// the end and distort the rank.
///
/// # Examples
///
/// ```
/// use sdohsim_stats::quantile::quantile;
///
/// let values = vec![9.0, 1.0, 5.0, 3.0, 7.0];
/// assert_eq!(quantile(&values, 0.5), 5.0);
/// ```
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, q)
}
