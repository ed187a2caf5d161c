//! Contact Assistant - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout until the user types
//! `close` or `exit`.

use anyhow::Result;
use contact_assistant::{repl, Assistant, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so stdout only carries the conversation
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        window_days = config.birthday_window_days,
        fixed_today = ?config.today,
        "Starting contact assistant"
    );

    let mut assistant = Assistant::from_config(&config);

    if let Err(e) = repl::run_stdio(&mut assistant, &config.prompt).await {
        error!("Session failed: {}", e);
        return Err(e);
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}
