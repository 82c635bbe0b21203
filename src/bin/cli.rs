//! Localcoin CLI
//!
//! One-shot commands for the dashboard data:
//! - Fetch, search and sort coin prices
//! - List ATMs, optionally online only
//! - Show the map focus for one ATM
//! - Generate a config file

use clap::{Parser, Subcommand, ValueEnum};
use localcoin::atm::{filter_atms, find_atm, sample_atms, AtmSelection, MapFocus};
use localcoin::config::{generate_default_config, Config};
use localcoin::logging::init_tracing;
use localcoin::market::{CoinGeckoClient, CoinQuery, SortOption};
use localcoin::render::{atm_table, coin_table, map_panel};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "localcoin-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Cryptocurrency prices and ATM locator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch current coin prices
    Coins {
        /// Filter by name or symbol (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,
        /// Sort order: name-asc, name-desc, price-asc, price-desc, change-asc, change-desc
        #[arg(long, default_value = "name-asc")]
        sort: SortOption,
    },

    /// List ATM locations
    Atms {
        /// Only show ATMs that are online
        #[arg(long)]
        online_only: bool,
        /// Highlight an ATM and show its map focus
        #[arg(long)]
        select: Option<u32>,
    },

    /// Show the map focus for an ATM
    Map {
        /// ATM id
        id: u32,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_tracing(&config.logging);

    match cli.command {
        Commands::Coins { search, sort } => {
            let client = CoinGeckoClient::new(config.market.client_config())?;

            let coins = match client.fetch_markets().await {
                Ok(coins) => coins,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            let shown = CoinQuery::new().search(search).sort(sort).apply(&coins);

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&shown)?),
                OutputFormat::Csv => write_csv(&shown)?,
                OutputFormat::Table => print!("{}", coin_table(&shown, coins.len())),
            }
        }

        Commands::Atms {
            online_only,
            select,
        } => {
            let all = sample_atms();
            let shown = filter_atms(&all, online_only);

            let mut selection = AtmSelection::new(config.map.zoom);
            if let Some(id) = select {
                match find_atm(&all, id) {
                    Some(atm) => {
                        selection.select(atm.clone());
                    }
                    None => {
                        eprintln!("No ATM with id {}", id);
                        std::process::exit(1);
                    }
                }
            }

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&shown)?),
                OutputFormat::Csv => write_csv(&shown)?,
                OutputFormat::Table => {
                    print!("{}", atm_table(&shown, &selection));
                    if select.is_some() {
                        println!();
                        print!("{}", map_panel(&selection, &config.map.tile_url));
                    }
                }
            }
        }

        Commands::Map { id } => {
            let all = sample_atms();
            let Some(atm) = find_atm(&all, id) else {
                eprintln!("No ATM with id {}", id);
                std::process::exit(1);
            };

            let mut selection = AtmSelection::new(config.map.zoom);
            let focus = selection.select(atm.clone());

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&focus)?),
                OutputFormat::Csv => {
                    println!("id,latitude,longitude,zoom");
                    if let MapFocus::Focused(view) = focus {
                        println!(
                            "{},{},{},{}",
                            view.key, view.center.latitude, view.center.longitude, view.zoom
                        );
                    }
                }
                OutputFormat::Table => print!("{}", map_panel(&selection, &config.map.tile_url)),
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn write_csv<T: serde::Serialize>(rows: &[T]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
