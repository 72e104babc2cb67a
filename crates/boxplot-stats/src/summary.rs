use serde::Serialize;

/// Quartiles of a sample: first quartile, median and third quartile.
///
/// Quartiles are taken positionally from the sorted sample. For a sample of `n`
/// values the elements at the 0-based indices `n / 4`, `n / 2` and `3 * n / 4`
/// (integer division) become Q1, median and Q3. No interpolation happens between
/// neighbouring elements, so every quartile is an actual sample value.
///
/// This differs from the interpolating estimators used by most statistics packages
/// (R-7, for instance). For `[1, 2, 3, 4]` an interpolating median is `2.5`, while
/// this summary reports `3`.
///
/// # Examples
///
/// ```
/// use boxplot_stats::summary::FiveNumberSummary;
///
/// let summary = FiveNumberSummary::new(&[8.0, 1.0, 7.0, 2.0, 6.0, 3.0, 5.0, 4.0]).unwrap();
/// assert_eq!(summary.q1, 3.0);
/// assert_eq!(summary.median, 5.0);
/// assert_eq!(summary.q3, 7.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
}

impl FiveNumberSummary {
    /// Computes the summary from unsorted values.
    ///
    /// The values are copied and sorted internally; the caller's slice is left untouched.
    ///
    /// # Returns
    ///
    /// * `Some(FiveNumberSummary)` - if the sample contains at least one value
    /// * `None` - if the sample is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use boxplot_stats::summary::FiveNumberSummary;
    ///
    /// assert!(FiveNumberSummary::new(&[]).is_none());
    ///
    /// let summary = FiveNumberSummary::new(&[42.0]).unwrap();
    /// assert_eq!(summary.q1, 42.0);
    /// assert_eq!(summary.q3, 42.0);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let sorted = sorted_copy(values);
        Self::from_sorted(&sorted)
    }

    /// Computes the summary from values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        if sorted_values.is_empty() {
            return None;
        }
        let n = sorted_values.len();
        Some(Self {
            q1: sorted_values[n / 4],
            median: sorted_values[n / 2],
            q3: sorted_values[n * 3 / 4],
        })
    }

    /// Interquartile range, `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Returns an ascending copy of `values`, ordered by [`f64::total_cmp`].
#[must_use]
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
