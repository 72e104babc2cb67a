use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, BlockExt as _, Paragraph, Widget},
};

use crate::model::app_state::{LogLevel, StatusLog};

/// Tail of the status log, newest entry at the bottom.
pub struct StatusLogDisplay<'a> {
    log: &'a StatusLog,
    block: Option<Block<'a>>,
}

impl<'a> StatusLogDisplay<'a> {
    pub fn new(log: &'a StatusLog) -> Self {
        Self { log, block: None }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

fn level_style(level: LogLevel) -> Style {
    match level {
        LogLevel::Info => Style::default(),
        LogLevel::Warn => Style::default().fg(Color::Yellow),
        LogLevel::Error => Style::default().fg(Color::Red),
    }
}

impl Widget for StatusLogDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let inner = self.block.inner_if_some(area);

        let entries = self.log.entries();
        let visible = usize::from(inner.height).min(entries.len());
        let lines = entries[entries.len() - visible..]
            .iter()
            .map(|entry| Line::styled(entry.message.as_str(), level_style(entry.level)))
            .collect::<Vec<_>>();
        Paragraph::new(lines).render(inner, buf);
    }
}
