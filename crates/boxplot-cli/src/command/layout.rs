use std::path::PathBuf;

use boxplot_stats::{
    box_plot,
    layout::{DrawPrimitive, HorizontalScale, LayoutRect, LayoutStyle},
};
use serde::Serialize;

use crate::{data, util::Output};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ScaleArg {
    /// Box at the middle third, whiskers at fixed offsets
    Schematic,
    /// Positions proportional to the values
    Proportional,
}

impl From<ScaleArg> for HorizontalScale {
    fn from(scale: ScaleArg) -> Self {
        match scale {
            ScaleArg::Schematic => Self::Schematic,
            ScaleArg::Proportional => Self::Proportional,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LayoutArg {
    /// CSV file to lay out
    sample_file: PathBuf,
    /// Width of the drawing rectangle
    #[arg(long, default_value_t = 700.0)]
    width: f64,
    /// Height of the drawing rectangle
    #[arg(long, default_value_t = 300.0)]
    height: f64,
    /// Horizontal placement of the box and whiskers
    #[arg(long, value_enum, default_value_t = ScaleArg::Schematic)]
    scale: ScaleArg,
    /// Number of decimals in the labels
    #[arg(long, default_value_t = 2)]
    precision: usize,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct LayoutReport<'a> {
    rect: LayoutRect,
    style: &'a LayoutStyle,
    primitives: &'a [DrawPrimitive],
}

pub fn run(arg: &LayoutArg) -> anyhow::Result<()> {
    let LayoutArg {
        sample_file,
        width,
        height,
        scale,
        precision,
        output,
    } = arg;

    anyhow::ensure!(
        width.is_finite() && height.is_finite() && *width >= 0.0 && *height >= 0.0,
        "Invalid drawing rectangle: {width} x {height}"
    );

    let sample = data::load_sample(sample_file)?;
    for skipped in &sample.skipped {
        tracing::warn!("Ignored rest of {skipped}");
    }

    let rect = LayoutRect::new(0.0, 0.0, *width, *height);
    let style = LayoutStyle {
        precision: *precision,
        scale: (*scale).into(),
        ..LayoutStyle::default()
    };
    let primitives = box_plot::primitives(&sample.values, &rect, &style);
    tracing::debug!(count = primitives.len(), "layout computed");

    let mut output = Output::from_output_path(output.clone())?;
    output.write_json(&LayoutReport {
        rect,
        style: &style,
        primitives: &primitives,
    })?;
    Ok(())
}
