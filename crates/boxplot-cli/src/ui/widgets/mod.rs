pub use self::{
    box_plot_display::BoxPlotDisplay, file_chooser_display::FileChooserDisplay,
    stats_display::StatsDisplay, status_log_display::StatusLogDisplay,
};

mod box_plot_display;
mod file_chooser_display;
mod stats_display;
mod status_log_display;

#[cfg(test)]
fn collect_symbols(buf: &ratatui::buffer::Buffer) -> String {
    buf.content().iter().map(|cell| cell.symbol()).collect()
}
