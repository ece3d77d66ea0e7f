//! netscope - A terminal dashboard for SDN network state
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;

use netscope_app::{init_config_dir, load_settings, run_headless};
use netscope_client::HttpSource;
use netscope_core::prelude::*;

/// netscope - A terminal dashboard for SDN network state
#[derive(Parser, Debug)]
#[command(name = "netscope")]
#[command(about = "A terminal dashboard for SDN network state", long_about = None)]
struct Args {
    /// Base URL of the orchestrator state API (overrides config)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Fetch every category once, print the snapshot store as JSON, and exit
    #[arg(long)]
    headless: bool,

    /// Seconds between refreshes, 0 to disable periodic refresh (overrides config)
    #[arg(long, value_name = "SECS")]
    interval: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    netscope_core::logging::init()?;
    let args = Args::parse();

    if let Err(e) = init_config_dir() {
        warn!("Could not create default config: {e}");
    }

    let mut settings = load_settings();
    if let Some(url) = args.url {
        settings.base_url = url;
    }
    if let Some(interval) = args.interval {
        settings.poll_interval_secs = interval;
    }
    info!("Dashboard target: {}", settings.base_url);

    let source = HttpSource::new();
    if args.headless {
        let state = run_headless(&source, &settings).await?;
        println!("{}", serde_json::to_string_pretty(&state.store.to_json())?);
        Ok(())
    } else {
        netscope_tui::run(source, settings).await
    }
}
