//! Configuration for static map image requests
//!
//! Options can be built from a preset profile, deserialized from JSON, or
//! assembled by hand. Every field has a default so partial JSON documents are
//! accepted.

use crate::core::constants::{DEFAULT_LINK_ZOOM, DEFAULT_RING_EPSILON, MAX_ZOOM};
use crate::core::viewport::Viewport;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum StaticMapProfile {
    /// 640x640 at scale 2 with 100px padding, hybrid imagery
    Standard,
    /// Small single-density thumbnail
    Preview,
    Custom(StaticMapOptions),
}

impl StaticMapProfile {
    pub fn resolve(&self) -> StaticMapOptions {
        match self {
            Self::Standard => StaticMapOptions::default(),
            Self::Preview => StaticMapOptions {
                size: ImageSize::new(320, 320),
                scale: 1,
                padding: 24,
                map_type: MapType::Roadmap,
                ..StaticMapOptions::default()
            },
            Self::Custom(options) => options.clone(),
        }
    }
}

impl Default for StaticMapProfile {
    fn default() -> Self {
        Self::Standard
    }
}

impl FromStr for StaticMapProfile {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "preview" => Ok(Self::Preview),
            other => Err(MapError::ParseError(format!(
                "unknown profile '{}', expected 'standard' or 'preview'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticMapOptions {
    /// Requested image size before scaling
    pub size: ImageSize,
    /// Pixel density multiplier (1, 2 or 4)
    pub scale: u8,
    /// Padding in output pixels kept clear around the shape
    pub padding: u32,
    pub map_type: MapType,
    pub format: ImageFormat,
    pub path_style: PathStyle,
    /// Tolerance in degrees when deciding whether a ring is already closed
    pub ring_epsilon: f64,
    /// Upper bound on the fitted zoom
    pub max_zoom: u8,
    /// Zoom used for interactive links when none was fitted
    pub default_link_zoom: u8,
}

impl Default for StaticMapOptions {
    fn default() -> Self {
        Self {
            size: ImageSize::new(640, 640),
            scale: 2,
            padding: 100,
            map_type: MapType::Hybrid,
            format: ImageFormat::Png,
            path_style: PathStyle::default(),
            ring_epsilon: DEFAULT_RING_EPSILON,
            max_zoom: MAX_ZOOM,
            default_link_zoom: DEFAULT_LINK_ZOOM,
        }
    }
}

impl StaticMapOptions {
    /// Parses and validates options from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(MapError::Config(format!("image size {} is empty", self.size)));
        }
        if !matches!(self.scale, 1 | 2 | 4) {
            return Err(MapError::Config(format!(
                "scale must be 1, 2 or 4, got {}",
                self.scale
            )));
        }
        if self.max_zoom > MAX_ZOOM || self.default_link_zoom > MAX_ZOOM {
            return Err(MapError::Config(format!("zoom levels must not exceed {}", MAX_ZOOM)));
        }
        if !self.ring_epsilon.is_finite() || self.ring_epsilon < 0.0 {
            return Err(MapError::Config(format!(
                "ring_epsilon must be a non-negative number, got {}",
                self.ring_epsilon
            )));
        }
        Ok(())
    }

    /// The pixel canvas the zoom is fitted against: size times scale, padded.
    pub fn viewport(&self) -> Viewport {
        let scale = u32::from(self.scale.max(1));
        Viewport::new(
            self.size.width.max(1).saturating_mul(scale),
            self.size.height.max(1).saturating_mul(scale),
            self.padding,
        )
    }
}

/// Image dimensions written as `WIDTHxHEIGHT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for ImageSize {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || MapError::ParseError(format!("invalid image size '{}', expected WxH", s));
        let (width, height) = s
            .trim()
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(invalid)?;
        let width = width.trim().parse().map_err(|_| invalid())?;
        let height = height.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(width, height))
    }
}

impl TryFrom<String> for ImageSize {
    type Error = MapError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ImageSize> for String {
    fn from(size: ImageSize) -> Self {
        size.to_string()
    }
}

/// Base imagery of the static map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    Roadmap,
    Satellite,
    Terrain,
    Hybrid,
}

impl MapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roadmap => "roadmap",
            Self::Satellite => "satellite",
            Self::Terrain => "terrain",
            Self::Hybrid => "hybrid",
        }
    }
}

impl FromStr for MapType {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "roadmap" => Ok(Self::Roadmap),
            "satellite" => Ok(Self::Satellite),
            "terrain" => Ok(Self::Terrain),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(MapError::ParseError(format!("unknown map type '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Png32,
    Gif,
    Jpg,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Png32 => "png32",
            Self::Gif => "gif",
            Self::Jpg => "jpg",
        }
    }
}

/// Styling of the overlay path drawn over the imagery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathStyle {
    /// Fill color as `0xRRGGBBAA` or `0xRRGGBB`
    pub fill_color: String,
    /// Stroke color
    pub color: String,
    /// Stroke weight in pixels
    pub weight: u32,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            fill_color: "0x44FF0000".to_string(),
            color: "0xFF0000".to_string(),
            weight: 2,
        }
    }
}

impl PathStyle {
    /// `fillcolor:..|color:..|weight:..|enc:<encoded>`
    pub fn overlay(&self, encoded: &str) -> String {
        format!(
            "fillcolor:{}|color:{}|weight:{}|enc:{}",
            self.fill_color, self.color, self.weight, encoded
        )
    }
}
