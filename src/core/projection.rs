//! Spherical Web Mercator (EPSG:3857) in world-pixel space.
//!
//! The world is `256 * 2^zoom` pixels square; x grows east from -180°, y grows
//! south from the northern clamp latitude. Out-of-range input is clamped,
//! never rejected.

use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE, TILE_SIZE};
use crate::core::geo::{LatLng, Point};
use std::f64::consts::PI;

/// Width (and height) of the world in pixels at `zoom`
pub fn world_size(zoom: u8) -> f64 {
    f64::from(TILE_SIZE) * 2_f64.powi(i32::from(zoom))
}

/// Converts longitude to world pixel X at a given zoom level
pub fn lng_to_pixel_x(lng: f64, zoom: u8) -> f64 {
    let lng = LatLng::clamp_lng(lng);
    (lng + 180.0) / 360.0 * world_size(zoom)
}

/// Converts latitude to world pixel Y at a given zoom level.
/// Latitude is clamped to Mercator limits to avoid infinity.
pub fn lat_to_pixel_y(lat: f64, zoom: u8) -> f64 {
    let sin = LatLng::clamp_lat(lat).to_radians().sin();
    let y = 0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI);
    y * world_size(zoom)
}

/// Converts world pixel X back to longitude
pub fn pixel_x_to_lng(x: f64, zoom: u8) -> f64 {
    let lng = (x / world_size(zoom)) * 360.0 - 180.0;
    lng.clamp(-MAX_LONGITUDE, MAX_LONGITUDE)
}

/// Converts world pixel Y back to latitude (inverse Mercator)
pub fn pixel_y_to_lat(y: f64, zoom: u8) -> f64 {
    let yy = 0.5 - y / world_size(zoom);
    let lat_rad = 2.0 * (yy * 2.0 * PI).exp().atan() - PI / 2.0;
    lat_rad.to_degrees().clamp(-MAX_LATITUDE, MAX_LATITUDE)
}

/// Projects a LatLng to world pixel coordinates at the given zoom level
pub fn project(lat_lng: &LatLng, zoom: u8) -> Point {
    Point::new(
        lng_to_pixel_x(lat_lng.lng, zoom),
        lat_to_pixel_y(lat_lng.lat, zoom),
    )
}

/// Unprojects world pixel coordinates back to LatLng at the given zoom level
pub fn unproject(point: &Point, zoom: u8) -> LatLng {
    LatLng::new(pixel_y_to_lat(point.y, zoom), pixel_x_to_lng(point.x, zoom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_meridian_is_world_center() {
        assert_eq!(lng_to_pixel_x(0.0, 0), 128.0);
        assert_eq!(lng_to_pixel_x(0.0, 1), 256.0);
    }

    #[test]
    fn test_equator_is_world_center() {
        assert!((lat_to_pixel_y(0.0, 0) - 128.0).abs() < 1e-9);
    }

    #[test]
    fn test_world_edges() {
        assert_eq!(lng_to_pixel_x(-180.0, 3), 0.0);
        assert_eq!(lng_to_pixel_x(180.0, 3), world_size(3));
        assert!(lat_to_pixel_y(MAX_LATITUDE, 0).abs() < 1e-6);
        assert!((lat_to_pixel_y(-MAX_LATITUDE, 0) - 256.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(lng_to_pixel_x(540.0, 2), lng_to_pixel_x(180.0, 2));
        assert_eq!(lat_to_pixel_y(90.0, 2), lat_to_pixel_y(MAX_LATITUDE, 2));
        assert!(lat_to_pixel_y(-90.0, 2).is_finite());
        assert_eq!(pixel_x_to_lng(-10.0, 0), -180.0);
        assert_eq!(pixel_y_to_lat(-1e6, 0), MAX_LATITUDE);
        assert_eq!(pixel_y_to_lat(1e6, 0), -MAX_LATITUDE);
    }

    #[test]
    fn test_round_trip() {
        for zoom in [0u8, 5, 12, 20] {
            for &(lat, lng) in &[(0.0, 0.0), (51.5074, -0.1278), (-33.8688, 151.2093)] {
                let back = unproject(&project(&LatLng::new(lat, lng), zoom), zoom);
                assert!((back.lat - lat).abs() < 1e-9, "lat {} at z{}", lat, zoom);
                assert!((back.lng - lng).abs() < 1e-9, "lng {} at z{}", lng, zoom);
            }
        }
    }

    #[test]
    fn test_y_grows_southward() {
        assert!(lat_to_pixel_y(10.0, 4) < lat_to_pixel_y(-10.0, 4));
    }
}
