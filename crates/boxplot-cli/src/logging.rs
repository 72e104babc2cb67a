use std::{fs::File, io, path::Path, sync::Mutex};

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    File(&'a Path),
    Stderr,
    /// Logging is disabled, e.g. while the terminal UI owns the screen.
    Disabled,
}

impl<'a> LogSink<'a> {
    /// Picks the sink for a command.
    ///
    /// An explicit log file always wins. Otherwise interactive commands stay silent
    /// so log lines never corrupt the terminal UI.
    #[must_use]
    pub fn select(log_file: Option<&'a Path>, interactive: bool) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => Self::File(path),
            (None, false) => Self::Stderr,
            (None, true) => Self::Disabled,
        }
    }
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "boxplot=debug" } else { "boxplot=info" }
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init(sink: LogSink<'_>, verbose: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    match sink {
        LogSink::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        LogSink::Stderr => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .init();
        }
        LogSink::Disabled => {}
    }
    Ok(())
}
