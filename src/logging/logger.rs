// file: src/logging/logger.rs
// version: 1.0.0
// guid: a0d35c7e-9f14-4b2a-b6e8-3d71c5f0e924

//! Logger initialization and per-command spans

use crate::error::TcatError;
use crate::Result;
use tracing::Instrument;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn level_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Initialize compact human readable logging on stderr
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(level_filter(verbose, quiet))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| TcatError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Initialize structured JSON logging on stderr
pub fn init_json_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(verbose, quiet));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).json())
        .try_init()
        .map_err(|e| TcatError::config(format!("Failed to initialize JSON logger: {}", e)))?;

    Ok(())
}

/// Run an async operation inside a named span
pub async fn with_async_operation_span<Fut, R>(operation: &str, fut: Fut) -> R
where
    Fut: std::future::Future<Output = R>,
{
    let span = tracing::info_span!("command", name = operation);
    fut.instrument(span).await
}
