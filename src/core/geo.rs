use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE};
use crate::MapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Clamps latitude to the Mercator range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Clamps longitude to [-180, 180]
    pub fn clamp_lng(lng: f64) -> f64 {
        lng.clamp(-MAX_LONGITUDE, MAX_LONGITUDE)
    }

    /// Returns a copy clamped to the projectable range
    pub fn clamped(&self) -> Self {
        Self::new(Self::clamp_lat(self.lat), Self::clamp_lng(self.lng))
    }

    /// Rounds both axes to the 1e-5 grid used by the polyline format
    pub fn rounded(&self) -> Self {
        let round = |v: f64| (v * 1e5).round() / 1e5;
        Self::new(round(self.lat), round(self.lng))
    }

    /// True when both axes differ by no more than `epsilon`
    pub fn approx_eq(&self, other: &LatLng, epsilon: f64) -> bool {
        (self.lat - other.lat).abs() <= epsilon && (self.lng - other.lng).abs() <= epsilon
    }

    /// Formats as `"lat, lng"` with a fixed number of decimals
    pub fn display_fixed(&self, decimals: usize) -> String {
        format!("{:.*}, {:.*}", decimals, self.lat, decimals, self.lng)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parses `"lat,lng"`. Values must be finite; range is not checked here.
impl FromStr for LatLng {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MapError::InvalidCoordinates(format!("expected 'lat,lng', got '{}'", s));
        let (lat, lng) = s.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
        if !lat.is_finite() || !lng.is_finite() {
            return Err(invalid());
        }
        Ok(Self::new(lat, lng))
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}

// geo-types uses x = longitude, y = latitude.
impl From<geo_types::Coord<f64>> for LatLng {
    fn from(coord: geo_types::Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<LatLng> for geo_types::Coord<f64> {
    fn from(lat_lng: LatLng) -> Self {
        geo_types::coord! { x: lat_lng.lng, y: lat_lng.lat }
    }
}

impl From<geo_types::Point<f64>> for LatLng {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<LatLng> for geo_types::Point<f64> {
    fn from(lat_lng: LatLng) -> Self {
        geo_types::Point::new(lat_lng.lng, lat_lng.lat)
    }
}

/// A point in world-pixel space. Only meaningful together with the zoom it was
/// projected at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
///
/// There is no antimeridian handling: a shape crossing ±180° yields a box
/// spanning (almost) the whole world, which [`LatLngBounds::is_zoom_fittable`]
/// rejects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Inverted sentinel bounds `(90, 180, -90, -180)` that any point extends.
    pub fn empty() -> Self {
        Self::from_coords(90.0, 180.0, -90.0, -180.0)
    }

    /// Computes the bounding box of `points` in a single pass.
    ///
    /// An empty slice returns [`LatLngBounds::empty`]; callers must check the
    /// point count before trusting the result.
    pub fn from_points(points: &[LatLng]) -> Self {
        points.iter().fold(Self::empty(), |mut bounds, point| {
            bounds.extend(point);
            bounds
        })
    }

    pub fn south(&self) -> f64 {
        self.south_west.lat
    }

    pub fn west(&self) -> f64 {
        self.south_west.lng
    }

    pub fn north(&self) -> f64 {
        self.north_east.lat
    }

    pub fn east(&self) -> f64 {
        self.north_east.lng
    }

    /// `[south, west, north, east]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.south(), self.west(), self.north(), self.east()]
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// False for the empty sentinel and any other inverted box
    pub fn is_valid(&self) -> bool {
        self.south() <= self.north() && self.west() <= self.east()
    }

    /// Gets the span of the bounds
    pub fn span(&self) -> LatLng {
        LatLng::new(
            self.north_east.lat - self.south_west.lat,
            self.north_east.lng - self.south_west.lng,
        )
    }

    /// Whether zoom fitting should be attempted: the longitude span must lie
    /// strictly between 0 and 180 degrees.
    pub fn is_zoom_fittable(&self) -> bool {
        let lng_span = self.span().lng;
        lng_span > 0.0 && lng_span < 180.0
    }

    /// Naive lat/lng midpoint. Use [`crate::core::viewport::center_for_bounds`]
    /// for the visual center of a rendered image.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

impl From<LatLngBounds> for geo_types::Rect<f64> {
    fn from(bounds: LatLngBounds) -> Self {
        geo_types::Rect::new(
            geo_types::Coord::from(bounds.south_west),
            geo_types::Coord::from(bounds.north_east),
        )
    }
}

/// Reduces a path to its bounding box. See [`LatLngBounds::from_points`].
pub fn bounds_from_points(points: &[LatLng]) -> LatLngBounds {
    LatLngBounds::from_points(points)
}
