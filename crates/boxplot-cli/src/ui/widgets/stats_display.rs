use boxplot_stats::box_plot::BoxPlotStats;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, BlockExt as _, Paragraph, Widget},
};

/// Numeric summary shown beside the plot.
pub struct StatsDisplay<'a> {
    stats: Option<&'a BoxPlotStats>,
    precision: usize,
    block: Option<Block<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(stats: Option<&'a BoxPlotStats>, precision: usize) -> Self {
        Self {
            stats,
            precision,
            block: None,
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let Some(stats) = self.stats else {
            return vec![Line::styled("  (no data)", Style::default().fg(Color::DarkGray))];
        };
        let prec = self.precision;
        let row = |label: &str, value: f64| Line::raw(format!("  {label:<9}{value:>12.prec$}"));
        vec![
            Line::raw(format!("  {:<9}{:>12}", "Count:", stats.count)),
            row("Min:", stats.min),
            row("Q1:", stats.summary.q1),
            row("Median:", stats.summary.median),
            row("Q3:", stats.summary.q3),
            row("Max:", stats.max),
            Line::raw(""),
            row("IQR:", stats.iqr),
            row("Fence lo:", stats.fences.lower),
            row("Fence hi:", stats.fences.upper),
            row("Whisk lo:", stats.whiskers.lower),
            row("Whisk hi:", stats.whiskers.upper),
            Line::raw(format!("  {:<9}{:>12}", "Outliers:", stats.outliers.len())),
        ]
    }
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let inner = self.block.inner_if_some(area);
        Paragraph::new(self.lines()).render(inner, buf);
    }
}
