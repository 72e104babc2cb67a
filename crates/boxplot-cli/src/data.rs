//! Loading numeric samples from CSV-like text.
//!
//! Each line holds real numbers separated by commas and/or whitespace. Parsing of
//! a line stops at the first token that is not a finite number; the values before
//! it are kept and the line is reported in [`ParsedSample::skipped`].

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::Context as _;

/// Sample read from a file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSample {
    pub path: PathBuf,
    pub values: Vec<f64>,
    pub skipped: Vec<SkippedLine>,
}

/// Values parsed from a reader, plus the lines whose tail was dropped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedSample {
    pub values: Vec<f64>,
    pub skipped: Vec<SkippedLine>,
}

/// A line whose parsing stopped at an unreadable token.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
#[display("line {line}: {error}")]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    pub error: ParseValueError,
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParseValueError {
    #[display("{token:?} is not a number")]
    Invalid { token: String },
    #[display("{token:?} is not a finite number")]
    NonFinite { token: String },
}

/// Reads a sample file.
pub fn load_sample(path: &Path) -> anyhow::Result<LoadedSample> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open sample file: {}", path.display()))?;
    let ParsedSample { values, skipped } = parse_sample(BufReader::new(file))
        .with_context(|| format!("Failed to read sample file: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        values = values.len(),
        skipped = skipped.len(),
        "sample file parsed"
    );
    Ok(LoadedSample {
        path: path.to_path_buf(),
        values,
        skipped,
    })
}

/// Parses a sample from CSV-like text.
pub fn parse_sample<R>(reader: R) -> io::Result<ParsedSample>
where
    R: BufRead,
{
    let mut sample = ParsedSample::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = if idx == 0 {
            line.trim_start_matches('\u{feff}')
        } else {
            &line
        };
        if let Err(error) = parse_line(line, &mut sample.values) {
            sample.skipped.push(SkippedLine {
                line: idx + 1,
                error,
            });
        }
    }
    Ok(sample)
}

/// Appends the values of `line` to `values`, stopping at the first bad token.
fn parse_line(line: &str, values: &mut Vec<f64>) -> Result<(), ParseValueError> {
    let tokens = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());
    for token in tokens {
        values.push(parse_value(token)?);
    }
    Ok(())
}

fn parse_value(token: &str) -> Result<f64, ParseValueError> {
    let value = token
        .parse::<f64>()
        .map_err(|_| ParseValueError::Invalid {
            token: token.to_owned(),
        })?;
    if !value.is_finite() {
        return Err(ParseValueError::NonFinite {
            token: token.to_owned(),
        });
    }
    Ok(value)
}
