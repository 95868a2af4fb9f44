// file: src/main.rs
// version: 1.0.0
// guid: 1c9e3a7d-4f62-4b08-8d15-e0a6b2f9c354

//! TCAT TLV client - main entry point

use clap::Parser;
use tcat_tlv_client::{
    cli::{
        args::{Cli, Commands},
        commands::{connect, disconnect, shell_command, tlv_command},
    },
    config::{ConfigLoader, LogFormat},
    logging::logger,
    Result,
};
use tokio::io::BufReader;
use tokio::signal;
use tracing::{error, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::new().load_or_default(cli.config.as_deref())?;
    config.apply_overrides(cli.device.clone(), cli.timeout_ms);
    config.validate()?;

    if cli.json_logs || config.logging.format == LogFormat::Json {
        logger::init_json_logger(cli.verbose, cli.quiet)?;
    } else {
        logger::init_logger(cli.verbose, cli.quiet)?;
    }

    let shutdown_signal = async {
        if signal::ctrl_c().await.is_err() {
            // No signal handler available, never resolve
            std::future::pending::<()>().await;
        }
        warn!("Received Ctrl+C, aborting");
    };

    let command_future = async {
        let mut context = connect(&config).await?;
        let outcome = match &cli.command {
            Commands::Tlv { action } => tlv_command(action, &mut context).await,
            Commands::Shell => {
                shell_command(BufReader::new(tokio::io::stdin()), &mut context).await
            }
        };
        disconnect(&mut context).await;
        outcome
    };

    tokio::select! {
        result = command_future => result,
        _ = shutdown_signal => {
            warn!("Application interrupted by user");
            std::process::exit(130);
        }
    }
}
