//! Dweetctl - terminal status card for dweet feeds
//!
//! Fetches the latest dweet under a topic and renders one content key as a
//! small card. Every run produces a renderable result: failures become
//! error cards, not crashes.

use std::io::IsTerminal;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use dweet_common::{build_view, FeedClient, WidgetParams};
use dweetctl::card;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "dweetctl")]
#[command(about = "Show the latest value of a dweet topic key", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Widget parameter: "topic, key". Missing segments fall back to the
    /// coded defaults.
    parameter: Option<String>,

    /// Print the view model as JSON instead of the card
    #[arg(long)]
    json: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = WidgetParams::resolve(cli.parameter.as_deref());
    debug!("Widget parameter resolved: topic={}, key={}", params.topic, params.key);

    let client = FeedClient::new()?;
    let fetched = client.fetch_latest(&params.topic).await;
    let view = build_view(&params, fetched);

    if cli.json {
        println!("{}", serde_json::to_string(&view)?);
    } else {
        let color = !cli.no_color && std::io::stdout().is_terminal();
        print!("{}", card::render_card(&params, &view, Local::now(), color));
    }

    Ok(())
}
