//! FxLookup Console Binary

use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxlookup_console::{run_session, Args};
use fxlookup_fx::SharedConverter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries prompts and results
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = args.converter_config();
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(anyhow::anyhow!("Configuration error: {}", e));
    }

    info!(
        load_delay_ms = config.load_delay.as_millis() as u64,
        "Starting FxLookup console"
    );

    let converter = SharedConverter::from_config(&config);

    if args.list {
        for pair in converter.get().await.table().pairs() {
            println!("{pair}");
        }
        return Ok(());
    }

    let summary = run_session(
        &converter,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        args.output_format(),
    )
    .await?;

    info!(
        converted = summary.converted,
        failed = summary.failed,
        "Session ended"
    );

    Ok(())
}
