//! Box-and-whisker plot statistics and layout.
//!
//! This crate turns a sample of real numbers into the geometry of a Tukey box plot.
//! Everything here is a pure function of its inputs: no I/O, no shared state.
//!
//! - **Summary**: Q1, median and Q3 picked positionally from the sorted sample
//! - **Whiskers**: Tukey fences at 1.5 × IQR, clipped to actual sample values
//! - **Layout**: the summary mapped onto a rectangle as a fixed sequence of
//!   drawing primitives (box, median, whiskers, caps, labels)
//!
//! # Modules
//!
//! - [`summary`]: Quartiles by positional index
//! - [`whiskers`]: Fences and whisker clipping
//! - [`layout`]: Drawing primitives for a summary inside a rectangle
//! - [`box_plot`]: The sample → primitives pipeline and aggregated statistics
//!
//! # Examples
//!
//! ## Step by step
//!
//! ```
//! use boxplot_stats::{
//!     layout::{self, LayoutRect},
//!     summary::{FiveNumberSummary, sorted_copy},
//!     whiskers::WhiskerBounds,
//! };
//!
//! let sample = [7.0, 1.0, 5.0, 3.0, 8.0, 2.0, 6.0, 4.0];
//! let sorted = sorted_copy(&sample);
//!
//! let summary = FiveNumberSummary::from_sorted(&sorted).unwrap();
//! assert_eq!((summary.q1, summary.median, summary.q3), (3.0, 5.0, 7.0));
//!
//! let whiskers = WhiskerBounds::from_sorted(&sorted, &summary);
//! assert_eq!((whiskers.lower, whiskers.upper), (1.0, 8.0));
//!
//! let primitives = layout::layout(&summary, &whiskers, &LayoutRect::new(0.0, 0.0, 700.0, 300.0));
//! assert_eq!(primitives.len(), 9);
//! ```
//!
//! ## Whole pipeline
//!
//! ```
//! use boxplot_stats::{
//!     box_plot,
//!     layout::{LayoutRect, LayoutStyle},
//! };
//!
//! let rect = LayoutRect::new(0.0, 0.0, 700.0, 300.0);
//! let primitives = box_plot::primitives(&[], &rect, &LayoutStyle::default());
//! assert!(primitives.is_empty()); // nothing to draw
//! ```

pub mod box_plot;
pub mod layout;
pub mod summary;
pub mod whiskers;
