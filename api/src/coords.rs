use std::fmt;

use serde::{Deserialize, Serialize};

// A WGS84 coordinate pair.
//
// This is the unit of exchange between the geographic services and the form:
// every acquisition path (device geolocation, IP lookup, forward search, map
// gestures) produces one of these, and the update routine consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinates { lat, lng }
    }

    /// The display string used whenever reverse geocoding cannot produce an
    /// address for this position.
    pub fn fallback_label(&self) -> String {
        format!("Lat: {:.4}, Lon: {:.4}", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fallback_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_label_uses_four_decimal_places() {
        let coords = Coordinates::new(51.5237, -0.1585);
        assert_eq!(coords.fallback_label(), "Lat: 51.5237, Lon: -0.1585");
    }

    #[test]
    fn fallback_label_rounds_excess_precision() {
        let coords = Coordinates::new(48.858370123, 2.294481456);
        assert_eq!(coords.fallback_label(), "Lat: 48.8584, Lon: 2.2945");
    }

    #[test]
    fn fallback_label_pads_short_fractions() {
        let coords = Coordinates::new(-33.9, 18.4);
        assert_eq!(coords.fallback_label(), "Lat: -33.9000, Lon: 18.4000");
    }

    #[test]
    fn display_matches_fallback_label() {
        let coords = Coordinates::new(0.0, 0.0);
        assert_eq!(format!("{coords}"), "Lat: 0.0000, Lon: 0.0000");
    }
}
