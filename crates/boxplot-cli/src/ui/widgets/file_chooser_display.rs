use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::model::file_chooser::{EntryKind, FileChooser};

/// Popup listing directories and CSV files.
pub struct FileChooserDisplay<'a> {
    chooser: &'a FileChooser,
}

impl<'a> FileChooserDisplay<'a> {
    pub fn new(chooser: &'a FileChooser) -> Self {
        Self { chooser }
    }
}

impl Widget for FileChooserDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" Select CSV file ")
            .title_bottom(Line::from(self.chooser.dir().display().to_string()).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let [list_area, error_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

        let items = self
            .chooser
            .entries()
            .iter()
            .map(|entry| {
                let (label, style) = match entry.kind {
                    EntryKind::Parent => ("../".to_owned(), Style::default().fg(Color::Blue)),
                    EntryKind::Directory => {
                        (format!("{}/", entry.name), Style::default().fg(Color::Blue))
                    }
                    EntryKind::CsvFile => (entry.name.clone(), Style::default()),
                };
                ListItem::new(label).style(style)
            })
            .collect::<Vec<_>>();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let mut list_state = ListState::default();
        list_state.select(self.chooser.selected());
        StatefulWidget::render(list, list_area, buf, &mut list_state);

        if let Some(error) = self.chooser.error() {
            Line::styled(error, Style::default().fg(Color::Red)).render(error_area, buf);
        }
    }
}
