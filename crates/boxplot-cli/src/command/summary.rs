use std::{fmt::Write as _, path::PathBuf};

use boxplot_stats::box_plot::BoxPlotStats;

use crate::{data, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    /// CSV file to summarize
    sample_file: PathBuf,
    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let SummaryArg {
        sample_file,
        json,
        output,
    } = arg;

    let sample = data::load_sample(sample_file)?;
    for skipped in &sample.skipped {
        tracing::warn!("Ignored rest of {skipped}");
    }
    tracing::info!(
        path = %sample_file.display(),
        values = sample.values.len(),
        "sample loaded"
    );

    let stats = BoxPlotStats::new(&sample.values);
    let mut output = Output::from_output_path(output.clone())?;
    if *json {
        output.write_json(&stats)?;
    } else {
        output.write_text(&format_report(stats.as_ref()))?;
    }
    Ok(())
}

/// Human-readable report of the statistics.
fn format_report(stats: Option<&BoxPlotStats>) -> String {
    let Some(stats) = stats else {
        return "count: 0 (empty sample)\n".to_owned();
    };
    let BoxPlotStats {
        count,
        min,
        max,
        summary,
        iqr,
        fences,
        whiskers,
        outliers,
    } = stats;

    let mut report = String::new();
    let rows = [
        ("min", *min),
        ("lower whisker", whiskers.lower),
        ("q1", summary.q1),
        ("median", summary.median),
        ("q3", summary.q3),
        ("upper whisker", whiskers.upper),
        ("max", *max),
        ("iqr", *iqr),
        ("lower fence", fences.lower),
        ("upper fence", fences.upper),
    ];
    writeln!(report, "{:<15}{count}", "count:").ok();
    for (label, value) in rows {
        writeln!(report, "{:<15}{value}", format!("{label}:")).ok();
    }
    let outliers = outliers
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(report, "{:<15}[{outliers}]", "outliers:").ok();
    report
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn run_on(contents: &str, json: bool) -> String {
        let dir = tempdir().unwrap();
        let sample_file = dir.path().join("sample.csv");
        let output = dir.path().join("summary.out");
        fs::write(&sample_file, contents).unwrap();

        run(&SummaryArg {
            sample_file,
            json,
            output: Some(output.clone()),
        })
        .unwrap();
        fs::read_to_string(output).unwrap()
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(format_report(None), "count: 0 (empty sample)\n");
    }

    #[test]
    fn test_report() {
        let stats = BoxPlotStats::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0]).unwrap();
        let report = format_report(Some(&stats));
        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "count:         9");
        assert_eq!(lines[3], "q1:            3");
        assert_eq!(lines[4], "median:        5");
        assert_eq!(lines[6], "upper whisker: 8");
        assert_eq!(lines.last(), Some(&"outliers:      [100]"));
    }

    #[test]
    fn test_json_of_empty_sample_is_null() {
        let stats = BoxPlotStats::new(&[]);
        assert_eq!(serde_json::to_string(&stats).unwrap(), "null");
    }

    #[test]
    fn test_run_writes_text_report() {
        let report = run_on("1,2,3,4\n5 6 7 8\n100\n", false);
        let stats = BoxPlotStats::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0]);
        assert_eq!(report, format_report(stats.as_ref()));
        assert!(report.contains("outliers:      [100]"));
    }

    #[test]
    fn test_run_writes_json() {
        let json: serde_json::Value =
            serde_json::from_str(&run_on("8\n7\n6\n5\n4\n3\n2\n1\n", true)).unwrap();
        assert_eq!(json["count"], 8);
        assert_eq!(json["summary"]["median"], 5.0);
        assert_eq!(json["fences"]["lower"], -3.0);
        assert_eq!(json["whiskers"]["upper"], 8.0);
        assert_eq!(json["outliers"], serde_json::json!([]));
    }

    #[test]
    fn test_run_on_empty_file() {
        assert_eq!(run_on("", true), "null\n");
        assert_eq!(run_on("header\n", false), "count: 0 (empty sample)\n");
    }

    #[test]
    fn test_run_on_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = run(&SummaryArg {
            sample_file: dir.path().join("missing.csv"),
            json: false,
            output: None,
        })
        .unwrap_err();
        assert!(format!("{err}").contains("missing.csv"));
    }
}
