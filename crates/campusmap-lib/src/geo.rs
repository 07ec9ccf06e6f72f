//! Great-circle distance math and distance formatting.
//!
//! Distances are computed with the haversine formula on a spherical Earth.
//! At campus scale (tens of meters to a few kilometers) the spherical
//! approximation is well inside double-precision error.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance to another point, in meters.
    ///
    /// Symmetric, non-negative, and zero for identical points.
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c * 1000.0
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// Render a distance for display: `742m` under a kilometer, `1.5km` above.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round() as i64)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let points = [
            LatLng::new(0.0, 0.0),
            LatLng::new(12.8230, 80.0408),
            LatLng::new(-45.0, 170.0),
            LatLng::new(89.9, -179.9),
        ];
        for p in points {
            assert_eq!(p.distance_to(&p), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = LatLng::new(12.8230, 80.0408);
        let b = LatLng::new(12.8312, 80.0455);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
    }

    #[test]
    fn latitude_delta_of_a_millidegree_is_about_111m() {
        let user = LatLng::new(12.8230, 80.0408);
        let poi = LatLng::new(12.8240, 80.0408);
        let d = user.distance_to(&poi);
        assert!((d - 111.0).abs() < 2.0, "got {d}");
        assert_eq!(format_distance(d), "111m");
    }

    #[test]
    fn distance_is_non_negative() {
        let a = LatLng::new(-12.0, -80.0);
        let b = LatLng::new(12.0, 80.0);
        assert!(a.distance_to(&b) >= 0.0);
    }

    #[test]
    fn format_switches_to_kilometers_at_1000() {
        assert_eq!(format_distance(999.0), "999m");
        assert_eq!(format_distance(1000.0), "1.0km");
        assert_eq!(format_distance(1500.0), "1.5km");
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(42.4), "42m");
    }
}
