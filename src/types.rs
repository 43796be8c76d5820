use serde::{Deserialize, Serialize};

/// A WGS84 position in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Midpoint between two positions, used to center the map.
    pub fn midpoint(a: Coordinate, b: Coordinate) -> Coordinate {
        Coordinate {
            lat: (a.lat + b.lat) / 2.0,
            lng: (a.lng + b.lng) / 2.0,
        }
    }
}

/// A driving route as returned by the router, normalized to internal units.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Path in (lat, lng) order.
    pub path: Vec<Coordinate>,
    pub distance_km: f64,
    pub duration_min: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let a = Coordinate::new(-4.0, 15.0);
        let b = Coordinate::new(-5.0, 16.0);
        let mid = Coordinate::midpoint(a, b);
        assert_eq!(mid, Coordinate::new(-4.5, 15.5));
    }
}
