//! HTTP API Client
//!
//! Fetches market data from CoinGecko directly from the browser.

use gloo_net::http::Request;
use localcoin::market::{Coin, API_KEY_HEADER, DEFAULT_BASE_URL};

const API_URL_KEY: &str = "localcoin_api_url";
const API_KEY_KEY: &str = "localcoin_api_key";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = local_storage()
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Optional API key from local storage
pub fn get_api_key() -> Option<String> {
    local_storage()
        .and_then(|s| s.get_item(API_KEY_KEY).ok().flatten())
        .filter(|k| !k.is_empty())
}

/// Markets endpoint URL for the top `per_page` coins
pub fn markets_url(api_base: &str, per_page: u32) -> String {
    format!(
        "{}/coins/markets?vs_currency=usd&order=market_cap_desc&per_page={}&page=1&sparkline=false",
        api_base, per_page
    )
}

/// Fetch the top 10 coins by market cap
pub async fn fetch_coins() -> Result<Vec<Coin>, String> {
    let url = markets_url(&get_api_base(), 10);

    let mut request = Request::get(&url).header("Content-Type", "application/json");
    if let Some(key) = get_api_key() {
        request = request.header(API_KEY_HEADER, &key);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to fetch crypto data: {}", e))?;

    if !response.ok() {
        return Err("Failed to fetch crypto data".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to fetch crypto data: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markets_url() {
        assert_eq!(
            markets_url(DEFAULT_BASE_URL, 10),
            "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=10&page=1&sparkline=false"
        );
    }

    #[test]
    fn test_response_shape_decodes() {
        let body = r#"[{"id":"bitcoin","symbol":"btc","name":"Bitcoin","image":"x","current_price":1.5,"market_cap_rank":1,"price_change_percentage_24h":0.2}]"#;
        let coins: Vec<Coin> = serde_json::from_str(body).unwrap();
        assert_eq!(coins[0].symbol, "btc");
    }
}
