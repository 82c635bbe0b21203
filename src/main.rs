//! Localcoin live price board
//!
//! Polls CoinGecko on the configured interval and redraws the coin table in
//! the terminal after every refresh. Press Ctrl-C to exit.

use clap::Parser;
use localcoin::config::Config;
use localcoin::logging::init_tracing;
use localcoin::market::{CoinGeckoClient, CoinQuery, SortOption};
use localcoin::poller::{FeedState, FeedStatus, PricePoller};
use localcoin::render::coin_table;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "localcoin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Live cryptocurrency price board")]
struct Args {
    /// Filter coins by name or symbol
    #[arg(short, long, default_value = "")]
    search: String,

    /// Sort order: name-asc, name-desc, price-asc, price-desc, change-asc, change-desc
    #[arg(long, default_value = "name-asc")]
    sort: SortOption,

    /// Config file (default: standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Refresh interval in seconds (overrides config)
    #[arg(short, long)]
    interval: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(secs) = args.interval {
        config.market.poll_interval_secs = secs;
    }

    init_tracing(&config.logging);
    tracing::info!("Localcoin price board v{}", env!("CARGO_PKG_VERSION"));

    let client = CoinGeckoClient::new(config.market.client_config())?;
    let poller = Arc::new(PricePoller::new(
        Arc::new(client),
        config.market.poll_interval(),
    ));
    let query = CoinQuery::new().search(args.search).sort(args.sort);

    let mut updates = poller.subscribe();
    Arc::clone(&poller).start_background_poll().await;

    draw(&poller.snapshot().await, &query);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                draw(&poller.snapshot().await, &query);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down...");
                break;
            }
        }
    }

    poller.stop().await;
    Ok(())
}

fn draw(state: &FeedState, query: &CoinQuery) {
    // Clear screen and home the cursor
    print!("\x1b[2J\x1b[H");
    println!("Crypto Dashboard - live prices (sorted {})", query.sort.label());
    if query.has_search() {
        println!("Search: {:?}", query.search);
    }
    println!();

    match &state.status {
        FeedStatus::Loading => println!("Loading crypto data..."),
        FeedStatus::Failed(message) => println!("Error: {}", message),
        FeedStatus::Ready => {
            let shown = query.apply(&state.coins);
            print!("{}", coin_table(&shown, state.coins.len()));
        }
    }

    println!();
    match state.last_updated {
        Some(ts) => println!("Last update: {}", ts.format("%H:%M:%S UTC")),
        None => println!("Not updated yet"),
    }
}
