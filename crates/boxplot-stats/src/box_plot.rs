use serde::Serialize;

use crate::{
    layout::{self, DrawPrimitives, LayoutRect, LayoutStyle},
    summary::{FiveNumberSummary, sorted_copy},
    whiskers::{Fences, WhiskerBounds},
};

/// Runs the full pipeline: sample → summary → whiskers → primitives.
///
/// Returns an empty sequence for an empty sample.
///
/// # Examples
///
/// ```
/// use boxplot_stats::{
///     box_plot,
///     layout::{LayoutRect, LayoutStyle, PRIMITIVE_COUNT},
/// };
///
/// let rect = LayoutRect::new(0.0, 0.0, 700.0, 300.0);
/// let style = LayoutStyle::default();
///
/// assert!(box_plot::primitives(&[], &rect, &style).is_empty());
/// assert_eq!(box_plot::primitives(&[1.0, 2.0, 3.0], &rect, &style).len(), PRIMITIVE_COUNT);
/// ```
#[must_use]
pub fn primitives(sample: &[f64], rect: &LayoutRect, style: &LayoutStyle) -> DrawPrimitives {
    let sorted = sorted_copy(sample);
    let Some(summary) = FiveNumberSummary::from_sorted(&sorted) else {
        return DrawPrimitives::new();
    };
    let whiskers = WhiskerBounds::from_sorted(&sorted, &summary);
    layout::layout_with_style(&summary, &whiskers, rect, style)
}

/// Everything a box plot reports about a sample.
///
/// # Examples
///
/// ```
/// use boxplot_stats::box_plot::BoxPlotStats;
///
/// let stats = BoxPlotStats::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0]).unwrap();
/// assert_eq!(stats.count, 9);
/// assert_eq!(stats.whiskers.upper, 8.0);
/// assert_eq!(stats.outliers, [100.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotStats {
    /// Number of values in the sample.
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub summary: FiveNumberSummary,
    pub iqr: f64,
    pub fences: Fences,
    pub whiskers: WhiskerBounds,
    /// Values outside the whiskers, in ascending order.
    pub outliers: Vec<f64>,
}

impl BoxPlotStats {
    /// Computes the statistics from unsorted values.
    ///
    /// Returns `None` for an empty sample.
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let sorted = sorted_copy(values);
        Self::from_sorted(&sorted)
    }

    /// Computes the statistics from values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        let summary = FiveNumberSummary::from_sorted(sorted_values)?;
        let whiskers = WhiskerBounds::from_sorted(sorted_values, &summary);
        let outliers = sorted_values
            .iter()
            .copied()
            .filter(|&v| v < whiskers.lower || v > whiskers.upper)
            .collect();

        Some(Self {
            count: sorted_values.len(),
            min: *sorted_values.first()?,
            max: *sorted_values.last()?,
            summary,
            iqr: summary.iqr(),
            fences: Fences::new(&summary),
            whiskers,
            outliers,
        })
    }

    /// Lays out the plot of these statistics.
    #[must_use]
    pub fn layout(&self, rect: &LayoutRect, style: &LayoutStyle) -> DrawPrimitives {
        layout::layout_with_style(&self.summary, &self.whiskers, rect, style)
    }
}
