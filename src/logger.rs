//! Logging system using tracing
//!
//! Logs go to stderr (and optionally a rolling file) so stdout carries
//! nothing but the checksum.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

/// Log file name prefix inside `--log-dir`
const LOG_FILE_PREFIX: &str = "jsonmark.log";

/// Level implied by the CLI flags
pub fn level_for(cli: &Cli) -> Level {
    if cli.debug {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    }
}

/// Setup logging based on CLI options
///
/// The returned guard flushes the file appender on drop and must be held
/// for the lifetime of the process.
pub fn setup_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = level_for(cli);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    match &cli.log_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)
                .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

            let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            subscriber
                .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            subscriber.try_init()?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_level_for_flags() {
        let cli = Cli::try_parse_from(["jsonmark", "list"]).unwrap();
        assert_eq!(level_for(&cli), Level::INFO);

        let cli = Cli::try_parse_from(["jsonmark", "-q", "list"]).unwrap();
        assert_eq!(level_for(&cli), Level::ERROR);

        let cli = Cli::try_parse_from(["jsonmark", "-q", "-d", "list"]).unwrap();
        assert_eq!(level_for(&cli), Level::DEBUG);
    }
}
