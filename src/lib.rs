//! # Localcoin
//!
//! Live cryptocurrency prices and an ATM locator.
//!
//! ## Modules
//!
//! - [`market`]: Coin records, search and sort, CoinGecko client
//! - [`atm`]: ATM catalog, online-only filter, map focus
//! - [`format`]: Price and change formatting
//! - [`render`]: Plain-text tables for the terminal binaries
//! - `poller`: Background price refresh (requires the `native` feature)
//! - `config`: TOML + environment configuration (requires the `native` feature)
//!
//! The pure modules build for `wasm32` with default features disabled; the
//! `localcoin-ui` dashboard reuses them unchanged.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use localcoin::market::{CoinGeckoClient, CoinQuery, MarketClientConfig, SortDirection, SortField};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGeckoClient::new(MarketClientConfig::default())?;
//!     let coins = client.fetch_markets().await?;
//!
//!     let top = CoinQuery::new()
//!         .search("coin")
//!         .sort_by(SortField::Price, SortDirection::Descending)
//!         .apply(&coins);
//!
//!     for coin in top {
//!         println!("{} {}", coin.name, localcoin::format::format_price(coin.current_price));
//!     }
//!     Ok(())
//! }
//! ```

pub mod atm;
pub mod format;
pub mod market;
pub mod render;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod poller;

// Re-export top-level types for convenience
pub use atm::{filter_atms, sample_atms, Atm, AtmSelection, AtmStatus, Coordinates, MapFocus, MapView};

pub use market::{Coin, CoinQuery, SortDirection, SortField, SortOption};

#[cfg(feature = "native")]
pub use market::{CoinGeckoClient, MarketClientConfig, MarketError, PriceSource};

#[cfg(feature = "native")]
pub use poller::{FeedState, FeedStatus, PricePoller};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig, MapConfig, MarketConfig};
