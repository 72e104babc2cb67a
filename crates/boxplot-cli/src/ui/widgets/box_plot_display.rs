use boxplot_stats::{
    box_plot,
    layout::{DrawPrimitive, LayoutRect, LayoutStyle, Point, SegmentKind, TextAlign},
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize as _},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, BlockExt as _, Paragraph, Widget,
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
    },
};

/// Virtual drawing surface the plot is laid out on before scaling to the terminal.
pub const PLOT_RECT: LayoutRect = LayoutRect::new(0.0, 0.0, 700.0, 300.0);

const BOX_COLOR: Color = Color::Gray;
const MEDIAN_COLOR: Color = Color::Red;
const WHISKER_COLOR: Color = Color::White;

/// Draws the box plot of a sample on a braille canvas.
///
/// `None` means no file has been loaded yet.
pub struct BoxPlotDisplay<'a> {
    sample: Option<&'a [f64]>,
    style: LayoutStyle,
    block: Option<Block<'a>>,
}

impl<'a> BoxPlotDisplay<'a> {
    pub fn new(sample: Option<&'a [f64]>, style: LayoutStyle) -> Self {
        Self {
            sample,
            style,
            block: None,
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for BoxPlotDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        if area.is_empty() {
            return;
        }

        let sample = self.sample.unwrap_or_default();
        let primitives = box_plot::primitives(sample, &PLOT_RECT, &self.style);
        if primitives.is_empty() {
            let message = match self.sample {
                None => "No data loaded. Press 'o' to open a CSV file.",
                Some(_) => "Sample is empty. Press 'o' to open another CSV file.",
            };
            let [_, message_area, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(area);
            Paragraph::new(message)
                .dark_gray()
                .centered()
                .render(message_area, buf);
            return;
        }

        let projection = Projection::new(PLOT_RECT, area);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([PLOT_RECT.x, PLOT_RECT.x + PLOT_RECT.width])
            .y_bounds([PLOT_RECT.y, PLOT_RECT.y + PLOT_RECT.height])
            .paint(|ctx| {
                // Box first, so lines drawn on the next layer stay visible over the fill.
                for primitive in &primitives {
                    if let DrawPrimitive::FilledBox {
                        x,
                        y,
                        width,
                        height,
                    } = *primitive
                    {
                        projection.fill_box(ctx, x, y, width, height);
                    }
                }
                ctx.layer();
                for primitive in &primitives {
                    match primitive {
                        DrawPrimitive::FilledBox { .. } => {}
                        DrawPrimitive::Segment { kind, from, to } => {
                            projection.segment(ctx, *kind, *from, *to);
                        }
                        DrawPrimitive::Label {
                            anchor,
                            align,
                            text,
                            ..
                        } => projection.label(ctx, *anchor, *align, text),
                    }
                }
            })
            .render(area, buf);
    }
}

/// Converts layout coordinates (y down) to canvas coordinates (y up).
#[derive(Debug, Clone, Copy)]
struct Projection {
    rect: LayoutRect,
    /// Layout units covered by one terminal column.
    cell_width: f64,
    /// Layout units covered by one braille dot row.
    dot_height: f64,
}

impl Projection {
    fn new(rect: LayoutRect, area: Rect) -> Self {
        Self {
            rect,
            cell_width: rect.width / f64::from(area.width),
            dot_height: rect.height / (f64::from(area.height) * 4.0),
        }
    }

    fn flip(&self, y: f64) -> f64 {
        self.rect.y + self.rect.height - (y - self.rect.y)
    }

    fn fill_box(&self, ctx: &mut Context, x: f64, y: f64, width: f64, height: f64) {
        let bottom = self.flip(y + height);
        let top = self.flip(y);
        ctx.draw(&Rectangle {
            x,
            y: bottom,
            width,
            height,
            color: BOX_COLOR,
        });
        let mut row = bottom;
        while row <= top {
            ctx.draw(&CanvasLine::new(x, row, x + width, row, BOX_COLOR));
            row += self.dot_height;
        }
    }

    fn segment(&self, ctx: &mut Context, kind: SegmentKind, from: Point, to: Point) {
        let color = match kind {
            SegmentKind::Median => MEDIAN_COLOR,
            SegmentKind::LowerWhisker
            | SegmentKind::UpperWhisker
            | SegmentKind::LowerCap
            | SegmentKind::UpperCap => WHISKER_COLOR,
        };
        ctx.draw(&CanvasLine::new(
            from.x,
            self.flip(from.y),
            to.x,
            self.flip(to.y),
            color,
        ));
    }

    fn label(&self, ctx: &mut Context, anchor: Point, align: TextAlign, text: &str) {
        let x = self.label_x(anchor.x, align, text);
        ctx.print(
            x,
            self.flip(anchor.y),
            Line::styled(text.to_owned(), Style::new().bold()),
        );
    }

    /// Left edge of a label so that it lines up with its anchor.
    #[expect(clippy::cast_precision_loss)]
    fn label_x(&self, anchor_x: f64, align: TextAlign, text: &str) -> f64 {
        let text_width = text.chars().count() as f64 * self.cell_width;
        let x = match align {
            TextAlign::Start => anchor_x,
            TextAlign::Middle => anchor_x - text_width / 2.0,
            TextAlign::End => anchor_x - text_width,
        };
        let max_x = (self.rect.x + self.rect.width - text_width).max(self.rect.x);
        x.clamp(self.rect.x, max_x)
    }
}
