//! Plain-text tables for the terminal dashboards

use std::fmt::Write;

use crate::atm::{Atm, AtmSelection, MapFocus, PLACEHOLDER_TEXT};
use crate::format::{
    format_change, format_price, pluralize_count, showing_summary, NO_ATMS_MESSAGE,
    NO_COINS_MESSAGE,
};
use crate::market::Coin;

/// Coin table with a "Showing X of Y" summary line
pub fn coin_table(coins: &[Coin], total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", showing_summary(coins.len(), total));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<6} {:<20} {:<8} {:>16} {:>10}",
        "Rank", "Coin", "Symbol", "Price (USD)", "24h"
    );
    let _ = writeln!(out, "{}", "-".repeat(64));

    if coins.is_empty() {
        let _ = writeln!(out, "{}", NO_COINS_MESSAGE);
        return out;
    }

    for coin in coins {
        let arrow = if coin.is_gaining() { "▲" } else { "▼" };
        let _ = writeln!(
            out,
            "{:<6} {:<20} {:<8} {:>16} {:>9}{}",
            format!("#{}", coin.market_cap_rank),
            truncate(&coin.name, 20),
            coin.symbol.to_uppercase(),
            format_price(coin.current_price),
            format_change(coin.price_change_percentage_24h),
            arrow
        );
    }
    out
}

/// ATM table; the selected row is marked with `*`
pub fn atm_table(atms: &[Atm], selection: &AtmSelection) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", pluralize_count(atms.len(), "ATM"));
    let _ = writeln!(out);
    let _ = writeln!(out, "  {:<4} {:<16} {:<8} {}", "ID", "Location", "Status", "Coordinates");
    let _ = writeln!(out, "{}", "-".repeat(52));

    if atms.is_empty() {
        let _ = writeln!(out, "{}", NO_ATMS_MESSAGE);
        return out;
    }

    for atm in atms {
        let marker = if selection.is_selected(atm.id) { "*" } else { " " };
        let coords = atm
            .coordinates()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{} {:<4} {:<16} {:<8} {}",
            marker, atm.id, atm.location, atm.status, coords
        );
    }
    out
}

/// Text description of the map card
pub fn map_panel(selection: &AtmSelection, tile_template: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", selection.caption());

    match selection.focus() {
        MapFocus::Placeholder => {
            if selection.selected().is_some() {
                let _ = writeln!(out, "  (no coordinates) {}", PLACEHOLDER_TEXT);
            }
        }
        MapFocus::Focused(view) => {
            if let Some(atm) = selection.selected() {
                let _ = writeln!(out, "  Status:  {}", atm.status);
            }
            let _ = writeln!(out, "  Center:  {}", view.center);
            let _ = writeln!(out, "  Zoom:    {}", view.zoom);
            let _ = writeln!(out, "  Map:     {}", view.link_url());
            let _ = writeln!(out, "  Embed:   {}", view.embed_url());
            let _ = writeln!(out, "  Tile:    {}", view.tile_url(tile_template));
        }
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(max - 1).collect();
        cut.push('…');
        cut
    }
}
