//! Market data types
//!
//! The coin record as delivered by the CoinGecko `/coins/markets` endpoint,
//! trimmed to the fields the dashboard displays.

use serde::{Deserialize, Deserializer, Serialize};

/// Default public API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Header carrying the CoinGecko demo API key
pub const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// A single cryptocurrency market entry
///
/// Coin lists are replaced wholesale on every refresh, so a `Coin` is never
/// mutated after it has been decoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coin {
    /// CoinGecko identifier (e.g. "bitcoin"), unique within a list
    pub id: String,
    /// Display name (e.g. "Bitcoin")
    pub name: String,
    /// Ticker symbol, lowercase as delivered (e.g. "btc")
    pub symbol: String,
    /// Current price in the quote currency
    #[serde(deserialize_with = "null_as_default")]
    pub current_price: f64,
    /// Signed 24-hour change in percent
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_change_percentage_24h: f64,
    /// Icon URL
    #[serde(default)]
    pub image: String,
    /// Rank by market capitalisation
    #[serde(default, deserialize_with = "null_as_default")]
    pub market_cap_rank: u32,
}

impl Coin {
    /// Create a coin with the required display fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        current_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            current_price,
            price_change_percentage_24h: 0.0,
            image: String::new(),
            market_cap_rank: 0,
        }
    }

    /// Builder method: set 24h change
    pub fn change(mut self, percent: f64) -> Self {
        self.price_change_percentage_24h = percent;
        self
    }

    /// Builder method: set market cap rank
    pub fn rank(mut self, rank: u32) -> Self {
        self.market_cap_rank = rank;
        self
    }

    /// Builder method: set icon URL
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into();
        self
    }

    /// Whether the price went up (or stayed flat) over 24h
    pub fn is_gaining(&self) -> bool {
        self.price_change_percentage_24h >= 0.0
    }

    /// Case-insensitive substring match against name or symbol.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}

// CoinGecko sends `null` for numeric fields on freshly listed coins.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_coingecko_entry() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 67123.5,
            "market_cap": 1320000000000,
            "market_cap_rank": 1,
            "price_change_percentage_24h": -1.25,
            "last_updated": "2024-05-01T12:00:00.000Z"
        }"#;

        let coin: Coin = serde_json::from_str(json).unwrap();
        assert_eq!(coin.id, "bitcoin");
        assert_eq!(coin.symbol, "btc");
        assert_eq!(coin.market_cap_rank, 1);
        assert_eq!(coin.current_price, 67123.5);
        assert!(!coin.is_gaining());
    }

    #[test]
    fn test_decode_null_numbers() {
        let json = r#"{
            "id": "newcoin",
            "symbol": "new",
            "name": "New Coin",
            "image": "",
            "current_price": 0.5,
            "market_cap_rank": null,
            "price_change_percentage_24h": null
        }"#;

        let coin: Coin = serde_json::from_str(json).unwrap();
        assert_eq!(coin.market_cap_rank, 0);
        assert_eq!(coin.price_change_percentage_24h, 0.0);
    }

    #[test]
    fn test_matches_name_or_symbol() {
        let coin = Coin::new("ethereum", "Ethereum", "eth", 3000.0);
        assert!(coin.matches("ether"));
        assert!(coin.matches("eth"));
        assert!(!coin.matches("btc"));
    }
}
