//! # mapbound
//!
//! Geometry and codec helpers for turning a drawn polygon boundary into a
//! static map image request that matches the interactive view.
//!
//! The pieces, leaf first:
//! - [`crate::core::projection`]: Web Mercator world-pixel math
//! - [`data::polyline`]: the compact encoded-polyline format
//! - [`LatLngBounds::from_points`]: bounding boxes
//! - [`crate::core::viewport`]: best-fit zoom and pixel-space centering
//! - [`static_map`]: request planning on top of the above
//!
//! Every geometry operation is a pure function. Out-of-range input is clamped,
//! short or empty input gives degenerate results, and malformed encodings
//! decode as far as they are well formed. Nothing panics or errors on bad
//! geometry; [`MapError`] only covers configuration and URL building.

pub mod core;
pub mod data;
pub mod prelude;
pub mod static_map;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{ImageFormat, ImageSize, MapType, PathStyle, StaticMapOptions, StaticMapProfile},
    geo::{bounds_from_points, LatLng, LatLngBounds, Point},
    projection::{lat_to_pixel_y, lng_to_pixel_x, pixel_x_to_lng, pixel_y_to_lat},
    viewport::{center_for_bounds, compute_zoom_for_bounds, ViewFit, Viewport},
};

pub use crate::data::polyline::{close_ring, decode_polyline, encode_polyline, Polyline};

pub use crate::static_map::{maps_link, GoogleStaticMaps, StaticMapRequest, StaticMapSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = MapError;
