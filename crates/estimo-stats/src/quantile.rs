//! Quantiles by linear interpolation between closest ranks.
//!
//! For sorted data `x[0..n]` the `p` quantile sits at position
//! `h = p * (n - 1)`; the result interpolates between `x[floor(h)]` and
//! `x[floor(h) + 1]`.

/// Sort finite values ascending, dropping NaN and infinities
pub fn sorted_finite(data: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Linear-interpolation quantile of already sorted data.
///
/// Returns `None` for empty data or `p` outside `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }

    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let fraction = position - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Linear-interpolation quantile of unsorted data
pub fn quantile(data: &[f64], p: f64) -> Option<f64> {
    quantile_sorted(&sorted_finite(data), p)
}
