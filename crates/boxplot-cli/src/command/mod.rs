use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::{self, LogSink};

use self::{layout::LayoutArg, summary::SummaryArg, view::ViewArg};

mod layout;
mod summary;
mod view;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Write log records to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand, derive_more::IsVariant)]
enum Mode {
    /// Show the box plot of a CSV file in the terminal
    View(#[clap(flatten)] ViewArg),
    /// Print the box-plot statistics of a CSV file
    Summary(#[clap(flatten)] SummaryArg),
    /// Print the drawing primitives of a CSV file as JSON
    Layout(#[clap(flatten)] LayoutArg),
}

pub fn run() -> anyhow::Result<()> {
    let CommandArgs {
        log_file,
        verbose,
        mode,
    } = CommandArgs::parse();
    let mode = mode.unwrap_or_else(|| Mode::View(ViewArg::default()));

    logging::init(LogSink::select(log_file.as_deref(), mode.is_view()), verbose)?;

    match mode {
        Mode::View(arg) => view::run(&arg)?,
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Layout(arg) => layout::run(&arg)?,
    }
    Ok(())
}
