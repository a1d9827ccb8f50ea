//! Geospatial helpers.

use serde::{Deserialize, Serialize};

/// Radius of earth at the equator in meters (GRS80).
pub const EQUATORIAL_RADIUS: f64 = 6378137.0;
/// First eccentricity (GRS80).
pub const ECCENTRICITY: f64 = 0.081819191042815790;

/// A Japanese postal address split into its standard parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JapaneseAddress {
    pub pref: String,
    pub city: String,
    pub area: String,
    pub block: String,
}

impl std::fmt::Display for JapaneseAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}{}", self.pref, self.city, self.area, self.block)
    }
}

/// Whether the given value is a correct latitude.
pub fn is_valid_latitude(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

/// Whether the given value is a correct longitude.
pub fn is_valid_longitude(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon)
}

/// Distance in meters between two points, using the Hubeny approximation
/// over the GRS80 ellipsoid with mean-latitude-weighted meridional and
/// transverse radii.
pub fn hubeny_distance(src_lat: f64, src_lon: f64, dst_lat: f64, dst_lon: f64) -> f64 {
    let dx = (dst_lon - src_lon).to_radians();
    let dy = (dst_lat - src_lat).to_radians();
    let mean_lat = ((src_lat + dst_lat) / 2.0).to_radians();

    let w = (1.0 - ECCENTRICITY.powi(2) * mean_lat.sin().powi(2)).sqrt();
    let meridional = EQUATORIAL_RADIUS * (1.0 - ECCENTRICITY.powi(2)) / w.powi(3);
    let transverse = EQUATORIAL_RADIUS / w;

    ((dy * meridional).powi(2) + (dx * transverse * mean_lat.cos()).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_japanese_address_display() {
        let address = JapaneseAddress {
            pref: "東京都".to_string(),
            city: "千代田区".to_string(),
            area: "千代田".to_string(),
            block: "1-1-1".to_string(),
        };
        assert_eq!(address.to_string(), "東京都千代田区千代田1-1-1");
    }

    #[test]
    fn test_is_valid_latitude() {
        let data = [
            (90.001, false),
            (-90.001, false),
            (90.0, true),
            (-90.0, true),
            (89.999, true),
            (-89.999, true),
        ];
        for (input, expect) in data {
            assert_eq!(is_valid_latitude(input), expect, "{input}");
        }
    }

    #[test]
    fn test_is_valid_longitude() {
        let data = [
            (180.001, false),
            (-180.001, false),
            (180.0, true),
            (-180.0, true),
            (179.999, true),
            (-179.999, true),
        ];
        for (input, expect) in data {
            assert_eq!(is_valid_longitude(input), expect, "{input}");
        }
    }

    #[test]
    fn test_hubeny_distance_identical_points() {
        let data = [
            (35.123456, 135.123456),
            (-35.12345, 135.98765),
            (35.1234, -135.9876),
            (-35.12, -135.98),
        ];
        for (lat, lon) in data {
            assert_eq!(hubeny_distance(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_hubeny_distance_sanity() {
        // Tokyo station to Osaka station is roughly 400km.
        let distance = hubeny_distance(35.681236, 139.767125, 34.702485, 135.495951);
        assert!(
            (300_000.0..500_000.0).contains(&distance),
            "unexpected distance: {distance}"
        );
        // Symmetric in its endpoints.
        let reverse = hubeny_distance(34.702485, 135.495951, 35.681236, 139.767125);
        assert!((distance - reverse).abs() < 1e-6);
    }
}
