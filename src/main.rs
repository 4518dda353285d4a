//! Vitrine - a terminal product gallery
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;

/// Vitrine - a terminal product gallery
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Browse, activate, and reorder a product catalog in your terminal", long_about = None)]
struct Args {
    /// Product endpoint override (defaults to the configured URL)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    vitrine_core::logging::init()?;

    let mut settings = vitrine_app::config::load_settings();
    if let Some(url) = args.url {
        settings.api.url = url;
    }
    if let Some(timeout) = args.timeout {
        settings.api.timeout_secs = timeout;
    }

    vitrine_tui::run(settings).await?;

    Ok(())
}
