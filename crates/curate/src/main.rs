//! curate - user-facing changelogs from raw commit logs

mod cli;
mod exit_codes;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::{output, Cli};

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(console_level(cli.verbose, cli.quiet));

    if let Err(err) = cli.execute() {
        tracing::error!(error = %format!("{err:#}"), "run failed");
        output::error(&format!("{err:#}"));
        std::process::exit(exit_codes::for_error(&err));
    }
}

/// Default console level: `--quiet` wins over `--verbose`
fn console_level(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (_, true) => "error",
        (true, false) => "debug",
        (false, false) => "warn",
    }
}

/// Set up tracing with two layers:
/// - Console: controlled by RUST_LOG, falling back to `console_level`
/// - File: always debug-level JSON to ~/.curate/logs/
fn init_tracing(default_level: &str) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Some(log_dir) = log_directory() {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "curate.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_filter(console_filter),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .init();

        return Some(guard);
    }

    // Fallback: console only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .init();

    None
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<std::path::PathBuf> {
    let log_dir = dirs::home_dir()?.join(".curate").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_level() {
        assert_eq!(console_level(false, false), "warn");
        assert_eq!(console_level(true, false), "debug");
        assert_eq!(console_level(false, true), "error");
        assert_eq!(console_level(true, true), "error");
    }
}
