//! Map focus for the ATM locator
//!
//! The map widget shows at most one ATM. Its state is fully determined by the
//! current selection: a selected ATM with both coordinates gives a focused
//! [`MapView`], anything else gives the placeholder. A view is keyed by the
//! ATM id, and a key change means the widget is rebuilt from scratch rather
//! than panned, so no zoom or scroll state leaks from one ATM to the next.

use serde::{Deserialize, Serialize};

use super::types::{Atm, Coordinates};

/// Zoom level used when focusing an ATM
pub const DEFAULT_ZOOM: u8 = 13;

/// OpenStreetMap tile pattern (`{s}` subdomain, `{z}/{x}/{y}` tile)
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution required by the OSM tile usage policy
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Text shown instead of a map when nothing mappable is selected
pub const PLACEHOLDER_TEXT: &str = "Select an ATM to view on map";

/// A rendered map centred on one ATM
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// Widget identity: the ATM id
    pub key: u32,
    pub center: Coordinates,
    pub zoom: u8,
}

/// A slippy-map tile address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
}

impl MapView {
    /// Whether moving from `previous` to this view requires a fresh widget
    pub fn resets_from(&self, previous: &MapFocus) -> bool {
        previous.key() != Some(self.key)
    }

    /// Half-extent of the visible area in degrees (longitude, latitude)
    fn half_span(&self) -> (f64, f64) {
        let lon = 360.0 / 2f64.powi(self.zoom as i32);
        (lon, lon / 2.0)
    }

    /// OpenStreetMap embed URL with a marker on the centre
    pub fn embed_url(&self) -> String {
        let (half_lon, half_lat) = self.half_span();
        let Coordinates {
            latitude,
            longitude,
        } = self.center;

        format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={:.5},{:.5},{:.5},{:.5}&layer=mapnik&marker={},{}",
            longitude - half_lon,
            latitude - half_lat,
            longitude + half_lon,
            latitude + half_lat,
            latitude,
            longitude
        )
    }

    /// Link to the full map at this position
    pub fn link_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={z}/{lat}/{lon}",
            lat = self.center.latitude,
            lon = self.center.longitude,
            z = self.zoom
        )
    }

    /// Tile containing the centre (Web Mercator)
    pub fn center_tile(&self) -> TileCoord {
        let n = 2f64.powi(self.zoom as i32);
        let lat_rad = self.center.latitude.to_radians();

        let x = ((self.center.longitude + 180.0) / 360.0 * n).floor();
        let y = ((1.0 - lat_rad.tan().asinh() / std::f64::consts::PI) / 2.0 * n).floor();

        let max = n - 1.0;
        TileCoord {
            x: x.clamp(0.0, max) as u32,
            y: y.clamp(0.0, max) as u32,
            zoom: self.zoom,
        }
    }

    /// Fill a `{s}/{z}/{x}/{y}` tile template for the centre tile
    pub fn tile_url(&self, template: &str) -> String {
        let tile = self.center_tile();
        template
            .replace("{s}", "a")
            .replace("{z}", &tile.zoom.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }
}

/// What the map area shows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MapFocus {
    /// Nothing mappable selected; no map is rendered
    #[default]
    Placeholder,
    Focused(MapView),
}

impl MapFocus {
    /// Derive the map state for a selection
    pub fn for_selection(atm: Option<&Atm>, zoom: u8) -> Self {
        match atm.and_then(|a| a.coordinates().map(|c| (a.id, c))) {
            Some((key, center)) => MapFocus::Focused(MapView { key, center, zoom }),
            None => MapFocus::Placeholder,
        }
    }

    pub fn key(&self) -> Option<u32> {
        self.view().map(|v| v.key)
    }

    pub fn view(&self) -> Option<&MapView> {
        match self {
            MapFocus::Focused(view) => Some(view),
            MapFocus::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, MapFocus::Placeholder)
    }
}

/// The ATM currently picked in the locator
#[derive(Debug, Clone, PartialEq)]
pub struct AtmSelection {
    selected: Option<Atm>,
    zoom: u8,
}

impl Default for AtmSelection {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM)
    }
}

impl AtmSelection {
    pub fn new(zoom: u8) -> Self {
        Self {
            selected: None,
            zoom,
        }
    }

    /// Select an ATM, returning the new map focus.
    ///
    /// The selection survives list filtering; the caller decides whether to
    /// clear it.
    pub fn select(&mut self, atm: Atm) -> MapFocus {
        self.selected = Some(atm);
        self.focus()
    }

    pub fn deselect(&mut self) -> MapFocus {
        self.selected = None;
        MapFocus::Placeholder
    }

    pub fn selected(&self) -> Option<&Atm> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.as_ref().map(|a| a.id == id).unwrap_or(false)
    }

    pub fn focus(&self) -> MapFocus {
        MapFocus::for_selection(self.selected.as_ref(), self.zoom)
    }

    /// Caption for the map card
    pub fn caption(&self) -> String {
        match &self.selected {
            Some(atm) => format!("Viewing {} ATM", atm.location),
            None => PLACEHOLDER_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atm::{sample_atms, AtmStatus};

    #[test]
    fn test_no_selection_is_placeholder() {
        assert!(MapFocus::for_selection(None, DEFAULT_ZOOM).is_placeholder());
        assert!(AtmSelection::default().focus().is_placeholder());
        assert_eq!(AtmSelection::default().caption(), PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_missing_coordinates_is_placeholder() {
        let mut selection = AtmSelection::default();
        let focus = selection.select(Atm::new(42, "Unmapped", AtmStatus::Online));

        assert!(focus.is_placeholder());
        assert!(focus.view().is_none());
        assert!(selection.is_selected(42));
    }

    #[test]
    fn test_select_focuses_at_fixed_zoom() {
        let atms = sample_atms();
        let mut selection = AtmSelection::default();

        let focus = selection.select(atms[0].clone());
        let view = focus.view().unwrap();

        assert_eq!(view.key, 1);
        assert_eq!(view.zoom, 13);
        assert_eq!(view.center, Coordinates::new(43.6532, -79.3832));
        assert_eq!(selection.caption(), "Viewing Toronto ATM");
    }

    #[test]
    fn test_second_selection_recenters_and_resets() {
        let atms = sample_atms();
        let mut selection = AtmSelection::default();

        let first = selection.select(atms[0].clone());
        let second = selection.select(atms[2].clone());

        let view = second.view().unwrap();
        assert_eq!(view.center.latitude, 49.2827);
        assert_eq!(view.center.longitude, -123.1207);
        assert!(view.resets_from(&first));

        // Re-selecting the same ATM keeps the widget
        let again = selection.select(atms[2].clone());
        assert!(!again.view().unwrap().resets_from(&second));
    }

    #[test]
    fn test_deselect() {
        let mut selection = AtmSelection::default();
        selection.select(sample_atms()[1].clone());

        assert!(selection.deselect().is_placeholder());
        assert!(selection.selected().is_none());
    }

    #[test]
    fn test_embed_url_centres_marker() {
        let view = MapView {
            key: 1,
            center: Coordinates::new(43.6532, -79.3832),
            zoom: 13,
        };

        let url = view.embed_url();
        assert!(url.starts_with("https://www.openstreetmap.org/export/embed.html?bbox="));
        assert!(url.ends_with("&marker=43.6532,-79.3832"));
    }

    #[test]
    fn test_center_tile() {
        // Toronto at zoom 13
        let view = MapView {
            key: 1,
            center: Coordinates::new(43.6532, -79.3832),
            zoom: 13,
        };

        let tile = view.center_tile();
        assert_eq!(tile, TileCoord { x: 2289, y: 2989, zoom: 13 });
        assert_eq!(
            view.tile_url(OSM_TILE_URL),
            "https://a.tile.openstreetmap.org/13/2289/2989.png"
        );
    }
}
