//! Prelude module for common mapbound types and functions
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapbound::prelude::*;`

pub use crate::core::{
    config::{ImageFormat, ImageSize, MapType, PathStyle, StaticMapOptions, StaticMapProfile},
    constants::{MAX_LATITUDE, MAX_ZOOM, TILE_SIZE},
    geo::{bounds_from_points, LatLng, LatLngBounds, Point},
    projection::{
        lat_to_pixel_y, lng_to_pixel_x, pixel_x_to_lng, pixel_y_to_lat, project, unproject,
        world_size,
    },
    viewport::{center_for_bounds, compute_zoom_for_bounds, ViewFit, Viewport},
};

pub use crate::data::polyline::{close_ring, decode_polyline, encode_polyline, Polyline};

pub use crate::static_map::{maps_link, GoogleStaticMaps, StaticMapRequest, StaticMapSource};

pub use crate::{Error as MapError, Result};
