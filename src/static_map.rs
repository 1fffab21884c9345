//! Static map request planning
//!
//! Turns an encoded boundary into the parameters of a static map image whose
//! framing matches the interactive view: a closed overlay ring, the fitted
//! zoom and the pixel-space center. Nothing here performs network I/O; the
//! caller fetches the URL if it wants the image.

use crate::core::config::{ImageFormat, ImageSize, MapType, StaticMapOptions};
use crate::core::geo::{LatLng, LatLngBounds};
use crate::core::viewport::ViewFit;
use crate::data::polyline::{close_ring, decode_polyline, encode_polyline};
use crate::{MapError, Result};
use reqwest::Url;
use serde::Serialize;

/// Anything that can turn a planned request into a fetchable URL.
pub trait StaticMapSource: Send + Sync {
    /// Endpoint the query string is appended to
    fn base_url(&self) -> &str;

    /// Build a URL for `request`. `key` follows `path`, ahead of the
    /// optional `center` and `zoom`.
    fn url(&self, request: &StaticMapRequest, api_key: &str) -> Result<Url> {
        if api_key.trim().is_empty() {
            return Err(MapError::Config("static map API key is empty".into()));
        }

        let mut pairs = request.query_pairs();
        let at = pairs
            .iter()
            .position(|(name, _)| *name == "path")
            .map_or(pairs.len(), |i| i + 1);
        pairs.insert(at, ("key", api_key.trim().to_string()));
        Url::parse_with_params(self.base_url(), &pairs)
            .map_err(|e| MapError::InvalidUrl(format!("{}: {}", self.base_url(), e)))
    }
}

/// The Google Static Maps endpoint.
pub struct GoogleStaticMaps {
    base_url: String,
}

impl GoogleStaticMaps {
    pub const DEFAULT_BASE_URL: &'static str = "https://maps.googleapis.com/maps/api/staticmap";

    pub fn new() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points at a proxy or test server instead of the public endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for GoogleStaticMaps {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticMapSource for GoogleStaticMaps {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Everything needed to request a static image of a drawn boundary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticMapRequest {
    pub size: ImageSize,
    pub scale: u8,
    pub map_type: MapType,
    pub format: ImageFormat,
    /// Styled overlay path parameter
    pub path: String,
    /// Encoded ring used in `path`; closed when the input had 3+ points
    pub encoded_path: String,
    /// Number of points decoded from the input
    pub point_count: usize,
    /// Bounds of the decoded points, when there were any
    pub bounds: Option<LatLngBounds>,
    /// Fitted framing; `None` leaves framing to the map service
    pub view: Option<ViewFit>,
}

impl StaticMapRequest {
    /// Plans a request for `encoded`. Returns `None` for an empty input.
    ///
    /// Inputs with fewer than three points keep their original encoding for
    /// the overlay. Zoom and center are only fitted for two or more points
    /// whose longitude span lies strictly inside (0, 180) degrees.
    pub fn plan(encoded: &str, options: &StaticMapOptions) -> Option<Self> {
        let encoded = encoded.trim();
        if encoded.is_empty() {
            return None;
        }

        let mut points = decode_polyline(encoded);
        let point_count = points.len();

        let encoded_path = if points.len() >= 3 {
            close_ring(&mut points, options.ring_epsilon);
            encode_polyline(&points)
        } else {
            encoded.to_string()
        };

        let bounds = (!points.is_empty()).then(|| LatLngBounds::from_points(&points));
        let view = match bounds {
            Some(bounds) if points.len() >= 2 => options.viewport().fit(&bounds, options.max_zoom),
            _ => None,
        };

        if let Some(fit) = &view {
            log::debug!(
                "planned static map for {} points: zoom {} center {}",
                point_count,
                fit.zoom,
                fit.center
            );
        } else {
            log::debug!("planned static map for {} points without framing", point_count);
        }

        Some(Self {
            size: options.size,
            scale: options.scale,
            map_type: options.map_type,
            format: options.format,
            path: options.path_style.overlay(&encoded_path),
            encoded_path,
            point_count,
            bounds,
            view,
        })
    }

    pub fn center(&self) -> Option<LatLng> {
        self.view.map(|fit| fit.center)
    }

    pub fn zoom(&self) -> Option<u8> {
        self.view.map(|fit| fit.zoom)
    }

    /// Query parameters in request order. `center` and `zoom` are only
    /// present when the view was fitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("size", self.size.to_string()),
            ("scale", self.scale.to_string()),
            ("maptype", self.map_type.as_str().to_string()),
            ("format", self.format.as_str().to_string()),
            ("path", self.path.clone()),
        ];
        if let Some(fit) = &self.view {
            pairs.push(("center", fit.center.to_string()));
            pairs.push(("zoom", fit.zoom.to_string()));
        }
        pairs
    }

    /// Builds the URL against `source`
    pub fn to_url(&self, source: &dyn StaticMapSource, api_key: &str) -> Result<Url> {
        source.url(self, api_key)
    }

    /// Link to the interactive map at the fitted view
    pub fn maps_link(&self, default_zoom: u8) -> Option<String> {
        self.view
            .map(|fit| maps_link(fit.center, Some(fit.zoom), default_zoom))
    }

    /// `Center: <lat>,<lng> (z<zoom>)`, or empty when no view was fitted
    pub fn summary(&self) -> String {
        match &self.view {
            Some(fit) => format!("Center: {} (z{})", fit.center, fit.zoom),
            None => String::new(),
        }
    }
}

/// Link to an interactive map at `center`, falling back to `default_zoom`.
pub fn maps_link(center: LatLng, zoom: Option<u8>, default_zoom: u8) -> String {
    format!(
        "https://www.google.com/maps/@{},{},{}z",
        center.lat,
        center.lng,
        zoom.unwrap_or(default_zoom)
    )
}
