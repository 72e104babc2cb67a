//! Mapping of a box-plot summary onto drawing primitives.
//!
//! The layout works in screen coordinates: `x` grows to the right and `y` grows
//! downward. The output is a fixed sequence of primitives in this order:
//!
//! 1. the filled box (Q1 to Q3)
//! 2. the median line
//! 3. the lower whisker
//! 4. the upper whisker
//! 5. the lower whisker cap
//! 6. the upper whisker cap
//! 7. the Q1 label
//! 8. the median label
//! 9. the Q3 label

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::{summary::FiveNumberSummary, whiskers::WhiskerBounds};

/// Number of primitives produced for a non-empty sample.
pub const PRIMITIVE_COUNT: usize = 9;

/// Sequence of primitives produced by [`layout`].
pub type DrawPrimitives = ArrayVec<DrawPrimitive, PRIMITIVE_COUNT>;

/// Region to draw the plot into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Role of a line segment in the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Median,
    LowerWhisker,
    UpperWhisker,
    LowerCap,
    UpperCap,
}

/// Statistic shown by a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    Q1,
    Median,
    Q3,
}

/// Horizontal alignment of a label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// A single shape to be rasterized by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawPrimitive {
    FilledBox {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Segment {
        kind: SegmentKind,
        from: Point,
        to: Point,
    },
    Label {
        kind: LabelKind,
        anchor: Point,
        align: TextAlign,
        text: String,
    },
}

/// How values are placed along the horizontal axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalScale {
    /// Fixed geometry: the box spans the middle third of the rect and the whiskers
    /// extend a constant offset beyond it, whatever the values are.
    #[default]
    Schematic,
    /// The whisker range is mapped linearly onto the middle 80% of the rect.
    ///
    /// Falls back to [`Schematic`](Self::Schematic) when the whiskers coincide.
    Proportional,
}

/// Rendering proportions of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutStyle {
    /// Height of the box.
    pub box_height: f64,
    /// Length of each whisker in schematic scale.
    pub whisker_offset: f64,
    /// Half the length of the perpendicular whisker caps.
    pub cap_half_height: f64,
    /// Distance from the center line down to the labels.
    pub label_offset: f64,
    /// Number of decimals printed in the labels.
    pub precision: usize,
    pub scale: HorizontalScale,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            box_height: 20.0,
            whisker_offset: 30.0,
            cap_half_height: 5.0,
            label_offset: 35.0,
            precision: 2,
            scale: HorizontalScale::Schematic,
        }
    }
}

/// Lays out the plot with [`LayoutStyle::default`].
///
/// # Examples
///
/// ```
/// use boxplot_stats::{
///     layout::{self, DrawPrimitive, LayoutRect, PRIMITIVE_COUNT},
///     summary::FiveNumberSummary,
///     whiskers::WhiskerBounds,
/// };
///
/// let sorted = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// let summary = FiveNumberSummary::from_sorted(&sorted).unwrap();
/// let whiskers = WhiskerBounds::from_sorted(&sorted, &summary);
/// let primitives = layout::layout(&summary, &whiskers, &LayoutRect::new(0.0, 0.0, 900.0, 300.0));
///
/// assert_eq!(primitives.len(), PRIMITIVE_COUNT);
/// if let DrawPrimitive::FilledBox { x, width, .. } = primitives[0] {
///     assert_eq!((x, width), (300.0, 300.0));
/// }
/// ```
#[must_use]
pub fn layout(
    summary: &FiveNumberSummary,
    whiskers: &WhiskerBounds,
    rect: &LayoutRect,
) -> DrawPrimitives {
    layout_with_style(summary, whiskers, rect, &LayoutStyle::default())
}

/// Lays out the plot with explicit proportions.
///
/// The result depends only on the arguments.
#[must_use]
pub fn layout_with_style(
    summary: &FiveNumberSummary,
    whiskers: &WhiskerBounds,
    rect: &LayoutRect,
    style: &LayoutStyle,
) -> DrawPrimitives {
    let geometry = match style.scale {
        HorizontalScale::Schematic => Geometry::schematic(rect, style),
        HorizontalScale::Proportional => Geometry::proportional(summary, whiskers, rect)
            .unwrap_or_else(|| Geometry::schematic(rect, style)),
    };
    geometry.primitives(summary, style)
}

/// Horizontal positions of the plot features and the vertical center line.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    center_y: f64,
    box_left: f64,
    box_right: f64,
    median_x: f64,
    lower_end: f64,
    upper_end: f64,
}

impl Geometry {
    fn schematic(rect: &LayoutRect, style: &LayoutStyle) -> Self {
        let box_width = rect.width / 3.0;
        let box_left = rect.x + rect.width / 3.0;
        let box_right = box_left + box_width;
        Self {
            center_y: rect.y + rect.height / 2.0,
            box_left,
            box_right,
            median_x: box_left + box_width / 2.0,
            lower_end: box_left - style.whisker_offset,
            upper_end: box_right + style.whisker_offset,
        }
    }

    fn proportional(
        summary: &FiveNumberSummary,
        whiskers: &WhiskerBounds,
        rect: &LayoutRect,
    ) -> Option<Self> {
        let span = whiskers.upper - whiskers.lower;
        if !span.is_finite() || span <= 0.0 {
            return None;
        }
        let inner_left = rect.x + rect.width * 0.1;
        let inner_width = rect.width * 0.8;
        let to_x = |value: f64| inner_left + (value - whiskers.lower) * inner_width / span;
        Some(Self {
            center_y: rect.y + rect.height / 2.0,
            box_left: to_x(summary.q1),
            box_right: to_x(summary.q3),
            median_x: to_x(summary.median),
            lower_end: to_x(whiskers.lower),
            upper_end: to_x(whiskers.upper),
        })
    }

    fn primitives(&self, summary: &FiveNumberSummary, style: &LayoutStyle) -> DrawPrimitives {
        let Self {
            center_y,
            box_left,
            box_right,
            median_x,
            lower_end,
            upper_end,
        } = *self;
        let half_box = style.box_height / 2.0;
        let cap = style.cap_half_height;
        let label_y = center_y + style.label_offset;
        let label = |kind, x, align, value: f64| DrawPrimitive::Label {
            kind,
            anchor: Point::new(x, label_y),
            align,
            text: format!("{value:.prec$}", prec = style.precision),
        };
        let segment = |kind, from, to| DrawPrimitive::Segment { kind, from, to };

        [
            DrawPrimitive::FilledBox {
                x: box_left,
                y: center_y - half_box,
                width: box_right - box_left,
                height: style.box_height,
            },
            segment(
                SegmentKind::Median,
                Point::new(median_x, center_y - half_box),
                Point::new(median_x, center_y + half_box),
            ),
            segment(
                SegmentKind::LowerWhisker,
                Point::new(box_left, center_y),
                Point::new(lower_end, center_y),
            ),
            segment(
                SegmentKind::UpperWhisker,
                Point::new(box_right, center_y),
                Point::new(upper_end, center_y),
            ),
            segment(
                SegmentKind::LowerCap,
                Point::new(lower_end, center_y - cap),
                Point::new(lower_end, center_y + cap),
            ),
            segment(
                SegmentKind::UpperCap,
                Point::new(upper_end, center_y - cap),
                Point::new(upper_end, center_y + cap),
            ),
            label(LabelKind::Q1, box_left, TextAlign::Start, summary.q1),
            label(LabelKind::Median, median_x, TextAlign::Middle, summary.median),
            label(LabelKind::Q3, box_right, TextAlign::End, summary.q3),
        ]
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: LayoutRect = LayoutRect::new(0.0, 0.0, 900.0, 300.0);

    fn eight_values() -> (FiveNumberSummary, WhiskerBounds) {
        let summary = FiveNumberSummary {
            q1: 3.0,
            median: 5.0,
            q3: 7.0,
        };
        let whiskers = WhiskerBounds {
            lower: 1.0,
            upper: 8.0,
        };
        (summary, whiskers)
    }

    fn segment_kinds(primitives: &DrawPrimitives) -> Vec<SegmentKind> {
        primitives
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Segment { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    fn labels(primitives: &DrawPrimitives) -> Vec<(LabelKind, Point, TextAlign, &str)> {
        primitives
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Label {
                    kind,
                    anchor,
                    align,
                    text,
                } => Some((*kind, *anchor, *align, text.as_str())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_primitive_order() {
        let (summary, whiskers) = eight_values();
        let primitives = layout(&summary, &whiskers, &RECT);

        assert_eq!(primitives.len(), PRIMITIVE_COUNT);
        assert!(matches!(primitives[0], DrawPrimitive::FilledBox { .. }));
        assert_eq!(
            segment_kinds(&primitives),
            [
                SegmentKind::Median,
                SegmentKind::LowerWhisker,
                SegmentKind::UpperWhisker,
                SegmentKind::LowerCap,
                SegmentKind::UpperCap,
            ]
        );
        assert!(primitives[1..6].iter().all(|p| matches!(p, DrawPrimitive::Segment { .. })));
        let label_kinds = labels(&primitives)
            .into_iter()
            .map(|(kind, ..)| kind)
            .collect::<Vec<_>>();
        assert_eq!(label_kinds, [LabelKind::Q1, LabelKind::Median, LabelKind::Q3]);
        assert!(primitives[6..].iter().all(|p| matches!(p, DrawPrimitive::Label { .. })));
    }

    #[test]
    fn test_schematic_geometry() {
        let (summary, whiskers) = eight_values();
        let primitives = layout(&summary, &whiskers, &RECT);

        assert_eq!(
            primitives[0],
            DrawPrimitive::FilledBox {
                x: 300.0,
                y: 140.0,
                width: 300.0,
                height: 20.0,
            }
        );
        assert_eq!(
            primitives[1],
            DrawPrimitive::Segment {
                kind: SegmentKind::Median,
                from: Point::new(450.0, 140.0),
                to: Point::new(450.0, 160.0),
            }
        );
        assert_eq!(
            primitives[2],
            DrawPrimitive::Segment {
                kind: SegmentKind::LowerWhisker,
                from: Point::new(300.0, 150.0),
                to: Point::new(270.0, 150.0),
            }
        );
        assert_eq!(
            primitives[3],
            DrawPrimitive::Segment {
                kind: SegmentKind::UpperWhisker,
                from: Point::new(600.0, 150.0),
                to: Point::new(630.0, 150.0),
            }
        );
        assert_eq!(
            primitives[4],
            DrawPrimitive::Segment {
                kind: SegmentKind::LowerCap,
                from: Point::new(270.0, 145.0),
                to: Point::new(270.0, 155.0),
            }
        );
        assert_eq!(
            primitives[5],
            DrawPrimitive::Segment {
                kind: SegmentKind::UpperCap,
                from: Point::new(630.0, 145.0),
                to: Point::new(630.0, 155.0),
            }
        );
    }

    #[test]
    fn test_labels_are_below_the_box() {
        let (summary, whiskers) = eight_values();
        let primitives = layout(&summary, &whiskers, &RECT);

        assert_eq!(
            labels(&primitives),
            [
                (LabelKind::Q1, Point::new(300.0, 185.0), TextAlign::Start, "3.00"),
                (LabelKind::Median, Point::new(450.0, 185.0), TextAlign::Middle, "5.00"),
                (LabelKind::Q3, Point::new(600.0, 185.0), TextAlign::End, "7.00"),
            ]
        );
    }

    #[test]
    fn test_label_precision() {
        let summary = FiveNumberSummary {
            q1: 1.0 / 3.0,
            median: 0.5,
            q3: 2.0 / 3.0,
        };
        let whiskers = WhiskerBounds {
            lower: 0.0,
            upper: 1.0,
        };
        let style = LayoutStyle {
            precision: 6,
            ..LayoutStyle::default()
        };
        let primitives = layout_with_style(&summary, &whiskers, &RECT, &style);
        let texts = labels(&primitives)
            .into_iter()
            .map(|(.., text)| text)
            .collect::<Vec<_>>();
        assert_eq!(texts, ["0.333333", "0.500000", "0.666667"]);
    }

    #[test]
    fn test_rect_offset_is_applied() {
        let (summary, whiskers) = eight_values();
        let rect = LayoutRect::new(50.0, 200.0, 900.0, 300.0);
        let primitives = layout(&summary, &whiskers, &rect);
        assert_eq!(
            primitives[0],
            DrawPrimitive::FilledBox {
                x: 350.0,
                y: 340.0,
                width: 300.0,
                height: 20.0,
            }
        );
    }

    #[test]
    fn test_layout_is_deterministic() {
        let (summary, whiskers) = eight_values();
        let style = LayoutStyle {
            scale: HorizontalScale::Proportional,
            ..LayoutStyle::default()
        };
        assert_eq!(layout(&summary, &whiskers, &RECT), layout(&summary, &whiskers, &RECT));
        assert_eq!(
            layout_with_style(&summary, &whiskers, &RECT, &style),
            layout_with_style(&summary, &whiskers, &RECT, &style)
        );
    }

    #[test]
    fn test_proportional_geometry() {
        let (summary, whiskers) = eight_values();
        let rect = LayoutRect::new(0.0, 0.0, 700.0, 100.0);
        let style = LayoutStyle {
            scale: HorizontalScale::Proportional,
            ..LayoutStyle::default()
        };
        let primitives = layout_with_style(&summary, &whiskers, &rect, &style);

        // Whiskers 1..8 span x = 70..630, so each unit is 80 wide.
        assert_eq!(
            primitives[0],
            DrawPrimitive::FilledBox {
                x: 230.0,
                y: 40.0,
                width: 320.0,
                height: 20.0,
            }
        );
        assert_eq!(
            primitives[1],
            DrawPrimitive::Segment {
                kind: SegmentKind::Median,
                from: Point::new(390.0, 40.0),
                to: Point::new(390.0, 60.0),
            }
        );
        assert_eq!(
            primitives[2],
            DrawPrimitive::Segment {
                kind: SegmentKind::LowerWhisker,
                from: Point::new(230.0, 50.0),
                to: Point::new(70.0, 50.0),
            }
        );
        assert_eq!(
            primitives[3],
            DrawPrimitive::Segment {
                kind: SegmentKind::UpperWhisker,
                from: Point::new(550.0, 50.0),
                to: Point::new(630.0, 50.0),
            }
        );
    }

    #[test]
    fn test_proportional_falls_back_to_schematic_for_zero_span() {
        let summary = FiveNumberSummary {
            q1: 5.0,
            median: 5.0,
            q3: 5.0,
        };
        let whiskers = WhiskerBounds {
            lower: 5.0,
            upper: 5.0,
        };
        let proportional = LayoutStyle {
            scale: HorizontalScale::Proportional,
            ..LayoutStyle::default()
        };
        let primitives = layout_with_style(&summary, &whiskers, &RECT, &proportional);
        assert_eq!(primitives, layout(&summary, &whiskers, &RECT));
        assert!(matches!(
            primitives[0],
            DrawPrimitive::FilledBox { width, .. } if width > 0.0
        ));
    }

    #[test]
    fn test_serializes_with_type_tags() {
        let (summary, whiskers) = eight_values();
        let primitives = layout(&summary, &whiskers, &RECT);
        let json = serde_json::to_value(&primitives).unwrap();

        assert_eq!(json.as_array().map(Vec::len), Some(PRIMITIVE_COUNT));
        assert_eq!(json[0]["type"], "filled_box");
        assert_eq!(json[1]["type"], "segment");
        assert_eq!(json[1]["kind"], "median");
        assert_eq!(json[8]["type"], "label");
        assert_eq!(json[8]["kind"], "q3");
        assert_eq!(json[8]["align"], "end");
        assert_eq!(json[8]["text"], "7.00");
    }
}
