//! ATM location records

use serde::{Deserialize, Serialize};

/// Operational status of an ATM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtmStatus {
    Online,
    Offline,
}

impl AtmStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, AtmStatus::Online)
    }
}

impl std::fmt::Display for AtmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtmStatus::Online => write!(f, "Online"),
            AtmStatus::Offline => write!(f, "Offline"),
        }
    }
}

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A cash terminal location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atm {
    /// Unique identifier
    pub id: u32,
    /// Display name (city or venue)
    pub location: String,
    pub status: AtmStatus,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Atm {
    /// Create an ATM without coordinates
    pub fn new(id: u32, location: impl Into<String>, status: AtmStatus) -> Self {
        Self {
            id,
            location: location.into(),
            status,
            latitude: None,
            longitude: None,
        }
    }

    /// Builder method: set coordinates
    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Map position, only when both coordinates are known
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    pub fn is_online(&self) -> bool {
        self.status.is_online()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_need_both_parts() {
        let atm = Atm::new(1, "Toronto", AtmStatus::Online).at(43.6532, -79.3832);
        assert_eq!(atm.coordinates(), Some(Coordinates::new(43.6532, -79.3832)));

        let mut half = atm.clone();
        half.longitude = None;
        assert_eq!(half.coordinates(), None);

        assert_eq!(Atm::new(2, "Nowhere", AtmStatus::Offline).coordinates(), None);
    }

    #[test]
    fn test_status_serializes_capitalized() {
        let atm = Atm::new(3, "Calgary", AtmStatus::Offline);
        let json = serde_json::to_string(&atm).unwrap();
        assert_eq!(json, r#"{"id":3,"location":"Calgary","status":"Offline","latitude":null,"longitude":null}"#);
        assert_eq!(AtmStatus::Online.to_string(), "Online");
    }
}
