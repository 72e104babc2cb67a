use serde::Serialize;

use crate::summary::FiveNumberSummary;

/// Multiplier applied to the interquartile range to place the Tukey fences.
pub const FENCE_FACTOR: f64 = 1.5;

/// Tukey outlier thresholds, `q1 - 1.5 * IQR` and `q3 + 1.5 * IQR`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fences {
    pub lower: f64,
    pub upper: f64,
}

impl Fences {
    #[must_use]
    pub fn new(summary: &FiveNumberSummary) -> Self {
        let iqr = summary.iqr();
        Self {
            lower: summary.q1 - FENCE_FACTOR * iqr,
            upper: summary.q3 + FENCE_FACTOR * iqr,
        }
    }
}

/// End points of the whiskers.
///
/// Each whisker ends on an actual sample value: the smallest value not below the
/// lower fence and the largest value not above the upper fence. When no value lies
/// inside a fence, that whisker falls back to `q1` (lower) or `q3` (upper).
///
/// # Examples
///
/// ```
/// use boxplot_stats::{summary::FiveNumberSummary, whiskers::WhiskerBounds};
///
/// let sorted = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0];
/// let summary = FiveNumberSummary::from_sorted(&sorted).unwrap();
/// let whiskers = WhiskerBounds::from_sorted(&sorted, &summary);
/// assert_eq!(whiskers.lower, 1.0);
/// assert_eq!(whiskers.upper, 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WhiskerBounds {
    pub lower: f64,
    pub upper: f64,
}

impl WhiskerBounds {
    /// Clips the whiskers of `summary` against the values of `sorted_values`.
    ///
    /// `sorted_values` must be the sorted sample `summary` was computed from.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], summary: &FiveNumberSummary) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let fences = Fences::new(summary);

        let lower_idx = sorted_values.partition_point(|&v| v < fences.lower);
        let lower = sorted_values.get(lower_idx).copied().unwrap_or(summary.q1);

        let upper_end = sorted_values.partition_point(|&v| v <= fences.upper);
        let upper = upper_end
            .checked_sub(1)
            .map_or(summary.q3, |idx| sorted_values[idx]);

        Self { lower, upper }
    }
}
