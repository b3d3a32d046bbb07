//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use chrono::Local;
use contact_book::session::run_session;
use contact_book::{Assistant, Config};
use tokio::io::{stdin, stdout, BufReader};
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

    // Initialize logging (stderr only to keep the prompt clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Birthday window: {} days, suggestions: {} (threshold {})",
        config.birthday_window_days, config.max_suggestions, config.suggestion_threshold
    );

    let mut assistant = Assistant::new(config);
    let input = BufReader::new(stdin());

    if let Err(e) = run_session(&mut assistant, input, stdout(), || Local::now().date_naive()).await {
        error!("Session failed: {}", e);
        return Err(e.into());
    }

    info!("Session finished with {} contacts", assistant.book().len());
    Ok(())
}
