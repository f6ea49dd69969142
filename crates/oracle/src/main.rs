//! One-shot oracle run: prints the encoded step count on stdout.

use std::process::ExitCode;

use oracle::{HttpHealthSource, OracleConfig, StepsOracle};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> ExitCode {
    let config = OracleConfig::from_env();

    // Logs go to stderr so stdout carries only the encoded word.
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        url = %config.url,
        timeout_ms = config.timeout.as_millis() as u64,
        "running steps oracle"
    );

    let outcome = match HttpHealthSource::from_config(&config) {
        Ok(source) => StepsOracle::new(source).run().await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(word) => {
            println!("{word}");
            ExitCode::SUCCESS
        }
        // Reported even when the log filter silences the pipeline.
        Err(err) => {
            eprintln!("oracle: {err}");
            ExitCode::FAILURE
        }
    }
}
