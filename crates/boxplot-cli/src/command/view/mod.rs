use std::{env, path::PathBuf};

use anyhow::Context as _;
use boxplot_stats::layout::{HorizontalScale, LayoutStyle};

use crate::{command::view::app::ViewerApp, tui::Tui};

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ViewArg {
    /// CSV file to load on startup
    sample_file: Option<PathBuf>,
    /// Place the box and whiskers at their true values instead of the schematic layout
    #[arg(long)]
    proportional: bool,
    /// Number of decimals printed in the plot labels
    #[arg(long, default_value_t = 2)]
    precision: usize,
}

impl Default for ViewArg {
    fn default() -> Self {
        Self {
            sample_file: None,
            proportional: false,
            precision: 2,
        }
    }
}

pub fn run(arg: &ViewArg) -> anyhow::Result<()> {
    let ViewArg {
        sample_file,
        proportional,
        precision,
    } = arg;

    let start_dir = env::current_dir().context("Failed to get current directory")?;
    let style = LayoutStyle {
        precision: *precision,
        scale: if *proportional {
            HorizontalScale::Proportional
        } else {
            HorizontalScale::Schematic
        },
        ..LayoutStyle::default()
    };

    let mut app = ViewerApp::new(start_dir, style);
    if let Some(path) = sample_file {
        app.load_initial(path);
    }
    Tui::new().run(&mut app)?;

    Ok(())
}
