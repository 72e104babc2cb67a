use std::path::{Path, PathBuf};

use boxplot_stats::{
    box_plot::BoxPlotStats,
    layout::{HorizontalScale, LayoutStyle},
};
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize as _},
    text::Text,
    widgets::Block,
};

use crate::{
    model::{
        app_state::{AppState, LogLevel},
        file_chooser::{ChooserOutcome, FileChooser},
    },
    tui::{App, RenderMode, Tui},
    ui::widgets::{BoxPlotDisplay, FileChooserDisplay, StatsDisplay, StatusLogDisplay},
};

#[derive(Debug, derive_more::IsVariant)]
enum Mode {
    Plot,
    ChoosingFile(FileChooser),
}

/// Interactive box-plot viewer.
#[derive(Debug)]
pub struct ViewerApp {
    state: AppState,
    mode: Mode,
    style: LayoutStyle,
    start_dir: PathBuf,
    should_exit: bool,
}

impl ViewerApp {
    pub fn new(start_dir: PathBuf, style: LayoutStyle) -> Self {
        Self {
            state: AppState::default(),
            mode: Mode::Plot,
            style,
            start_dir,
            should_exit: false,
        }
    }

    pub fn load_initial(&mut self, path: &Path) {
        self.state.begin_load();
        self.state.load_file(path);
    }

    /// Directory the chooser starts in: the current file's directory, if any.
    fn chooser_dir(&self) -> PathBuf {
        self.state
            .sample()
            .and_then(|s| s.path.parent())
            .filter(|dir| dir.is_dir())
            .map_or_else(|| self.start_dir.clone(), Path::to_path_buf)
    }

    fn open_chooser(&mut self) {
        self.state.begin_load();
        let dir = self.chooser_dir();
        match FileChooser::open(&dir) {
            Ok(chooser) => self.mode = Mode::ChoosingFile(chooser),
            Err(e) => self.state.report(
                LogLevel::Error,
                format!("Cannot open directory {}: {e}", dir.display()),
            ),
        }
    }

    fn toggle_scale(&mut self) {
        self.style.scale = match self.style.scale {
            HorizontalScale::Schematic => HorizontalScale::Proportional,
            HorizontalScale::Proportional => HorizontalScale::Schematic,
        };
    }

    fn handle_plot_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('o') => self.open_chooser(),
            KeyCode::Char('r') => {
                self.state.reload();
            }
            KeyCode::Char('s') => self.toggle_scale(),
            _ => {}
        }
    }

    fn help_text(&self) -> String {
        match &self.mode {
            Mode::Plot => {
                let scale = match self.style.scale {
                    HorizontalScale::Schematic => "Schematic",
                    HorizontalScale::Proportional => "Proportional",
                };
                format!("o: Open CSV | r: Reload | s: Scale ({scale}) | q/Esc: Quit")
            }
            Mode::ChoosingFile(_) => {
                "↑/↓: Select | Enter: Open | Backspace: Parent | Esc: Cancel".to_owned()
            }
        }
    }

    fn header(&self) -> String {
        match self.state.sample() {
            Some(sample) => format!("Box plot viewer | {}", sample.path.display()),
            None => "Box plot viewer".to_owned(),
        }
    }

    fn title(&self) -> String {
        match self.state.sample() {
            Some(sample) => format!(
                " {} ({} values) ",
                sample.path.display(),
                sample.values.len()
            ),
            None => " Box plot ".to_owned(),
        }
    }
}

impl App for ViewerApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_render_mode(RenderMode::throttled_from_rate(30.0));
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    // Every terminal event already schedules a render.
    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        let Some(key) = event.as_key_press_event() else {
            return;
        };
        if self.mode.is_plot() {
            self.handle_plot_key(key);
            return;
        }
        let Mode::ChoosingFile(chooser) = &mut self.mode else {
            return;
        };
        match chooser.handle_key(key) {
            ChooserOutcome::Pending => {}
            ChooserOutcome::Cancelled => {
                self.mode = Mode::Plot;
                self.state.cancel_load();
            }
            ChooserOutcome::Selected(path) => {
                self.mode = Mode::Plot;
                self.state.load_file(&path);
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [header_area, main_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [log_area, plot_row] =
            Layout::vertical([Constraint::Length(7), Constraint::Fill(1)]).areas(main_area);
        let [plot_area, stats_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(27)]).areas(plot_row);

        // Statistics are recomputed from the current sample on every draw.
        let values = self.state.sample().map(|s| s.values.as_slice());
        let stats = values.and_then(BoxPlotStats::new);

        frame.render_widget(Text::from(self.header()).bold().centered(), header_area);
        frame.render_widget(
            StatusLogDisplay::new(self.state.log()).block(Block::bordered().title(" Status ")),
            log_area,
        );
        frame.render_widget(
            BoxPlotDisplay::new(values, self.style).block(Block::bordered().title(self.title())),
            plot_area,
        );
        frame.render_widget(
            StatsDisplay::new(stats.as_ref(), self.style.precision)
                .block(Block::bordered().title(" Summary ")),
            stats_area,
        );

        if let Mode::ChoosingFile(chooser) = &self.mode {
            frame.render_widget(FileChooserDisplay::new(chooser), popup_area(main_area));
        }

        let help_text = Text::from(self.help_text())
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, help_area);
    }
}

fn popup_area(area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Percentage(70),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, popup, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Percentage(60),
        Constraint::Fill(1),
    ])
    .areas(middle);
    popup
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::KeyModifiers;
    use tempfile::tempdir;

    use super::*;

    fn press(app: &mut ViewerApp, tui: &mut Tui, code: KeyCode) {
        app.handle_event(tui, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = ViewerApp::new(PathBuf::from("/"), LayoutStyle::default());
            let mut tui = Tui::new();
            press(&mut app, &mut tui, code);
            assert!(app.should_exit());
        }
    }

    #[test]
    fn test_scale_toggle() {
        let mut app = ViewerApp::new(PathBuf::from("/"), LayoutStyle::default());
        let mut tui = Tui::new();
        press(&mut app, &mut tui, KeyCode::Char('s'));
        assert_eq!(app.style.scale, HorizontalScale::Proportional);
        assert!(app.help_text().contains("Proportional"));
        press(&mut app, &mut tui, KeyCode::Char('s'));
        assert_eq!(app.style.scale, HorizontalScale::Schematic);
    }

    #[test]
    fn test_choose_and_load_file() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().to_path_buf();
        fs::write(dir.join("sample.csv"), "1,2,3,4,5,6,7,8\n").unwrap();

        let mut app = ViewerApp::new(dir.clone(), LayoutStyle::default());
        let mut tui = Tui::new();

        press(&mut app, &mut tui, KeyCode::Char('o'));
        assert!(app.mode.is_choosing_file());
        press(&mut app, &mut tui, KeyCode::Enter);

        assert!(app.mode.is_plot());
        assert_eq!(app.state.values().len(), 8);
        assert!(app.title().contains("sample.csv"));
        assert!(app.header().ends_with("sample.csv"));
        let last = app.state.log().entries().last().unwrap();
        assert_eq!(last.message, "Data loaded successfully (8 values).");
    }

    #[test]
    fn test_cancel_chooser_keeps_sample() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().to_path_buf();
        let path = dir.join("kept.csv");
        fs::write(&path, "4\n2\n").unwrap();

        let mut app = ViewerApp::new(dir.clone(), LayoutStyle::default());
        let mut tui = Tui::new();
        app.load_initial(&path);

        press(&mut app, &mut tui, KeyCode::Char('o'));
        press(&mut app, &mut tui, KeyCode::Esc);

        assert!(app.mode.is_plot());
        assert!(!app.should_exit());
        assert_eq!(app.state.values(), [4.0, 2.0]);
        let messages = app
            .state
            .log()
            .entries()
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>();
        assert_eq!(messages, ["Starting data load...", "No file selected."]);
    }
}
