//! ATM Locator
//!
//! Static ATM locations, the online-only filter, and the map focus that
//! follows the selected ATM.

mod catalog;
mod map;
mod types;

pub use catalog::{filter_atms, find_atm, sample_atms};
pub use map::{
    AtmSelection, MapFocus, MapView, TileCoord, DEFAULT_ZOOM, OSM_ATTRIBUTION, OSM_TILE_URL,
    PLACEHOLDER_TEXT,
};
pub use types::{Atm, AtmStatus, Coordinates};
