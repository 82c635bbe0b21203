//! Cryptocurrency market data
//!
//! - [`Coin`]: a market entry as delivered by CoinGecko
//! - [`CoinQuery`]: search + sort applied to the coin table
//! - [`CoinGeckoClient`]: HTTP client for the markets endpoint (native only)

mod query;
mod types;

#[cfg(feature = "native")]
mod client;

pub use query::{compare_names, CoinQuery, ParseSortError, SortDirection, SortField, SortOption};
pub use types::{Coin, API_KEY_HEADER, DEFAULT_BASE_URL};

#[cfg(feature = "native")]
pub use client::{CoinGeckoClient, MarketClientConfig, MarketError, PriceSource};
