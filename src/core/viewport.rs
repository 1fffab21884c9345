use crate::core::constants::MAX_ZOOM;
use crate::core::geo::{LatLng, LatLngBounds, Point};
use crate::core::projection::{lat_to_pixel_y, lng_to_pixel_x, project, unproject};
use serde::{Deserialize, Serialize};

/// A fixed pixel canvas with uniform padding on every side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Total width in pixels
    pub width: u32,
    /// Total height in pixels
    pub height: u32,
    /// Padding applied to both sides of each axis
    pub padding: u32,
}

/// Zoom and center chosen for a bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewFit {
    pub zoom: u8,
    pub center: LatLng,
}

impl Viewport {
    pub fn new(width: u32, height: u32, padding: u32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Width left after padding, never below one pixel
    pub fn usable_width(&self) -> f64 {
        usable(self.width, self.padding)
    }

    /// Height left after padding, never below one pixel
    pub fn usable_height(&self) -> f64 {
        usable(self.height, self.padding)
    }

    /// Checks whether `bounds` projected at `zoom` fits inside the usable area
    pub fn fits(&self, bounds: &LatLngBounds, zoom: u8) -> bool {
        let span = projected_span(bounds, zoom);
        span.x <= self.usable_width() && span.y <= self.usable_height()
    }

    /// Highest zoom in `[0, max_zoom]` at which `bounds` fits; 0 when none does.
    pub fn fit_zoom(&self, bounds: &LatLngBounds, max_zoom: u8) -> u8 {
        match (0..=max_zoom).rev().find(|&zoom| self.fits(bounds, zoom)) {
            Some(zoom) => zoom,
            None => {
                log::debug!(
                    "bounds {:?} overflow {}x{} even at zoom 0",
                    bounds.to_array(),
                    self.width,
                    self.height
                );
                0
            }
        }
    }

    /// Fits the viewport to `bounds`, returning `None` when the longitude span
    /// is not strictly inside (0, 180) degrees. Callers keep their default
    /// view in that case.
    pub fn fit(&self, bounds: &LatLngBounds, max_zoom: u8) -> Option<ViewFit> {
        if !bounds.is_zoom_fittable() {
            log::debug!(
                "skipping zoom fit, longitude span {} outside (0, 180)",
                bounds.span().lng
            );
            return None;
        }

        let zoom = self.fit_zoom(bounds, max_zoom.min(MAX_ZOOM));
        Some(ViewFit {
            zoom,
            center: center_for_bounds(bounds, zoom),
        })
    }
}

fn usable(dimension: u32, padding: u32) -> f64 {
    let usable = i64::from(dimension) - 2 * i64::from(padding);
    usable.max(1) as f64
}

/// Absolute pixel extent of `bounds` at `zoom`
fn projected_span(bounds: &LatLngBounds, zoom: u8) -> Point {
    let x1 = lng_to_pixel_x(bounds.west(), zoom);
    let x2 = lng_to_pixel_x(bounds.east(), zoom);
    let y1 = lat_to_pixel_y(bounds.north(), zoom);
    let y2 = lat_to_pixel_y(bounds.south(), zoom);
    Point::new((x2 - x1).abs(), (y2 - y1).abs())
}

/// Greatest zoom in `[0, 20]` at which `bounds` fits inside
/// `(width - 2*pad) x (height - 2*pad)` pixels. Falls back to 0.
///
/// Does not apply the longitude-span guard; see [`Viewport::fit`].
pub fn compute_zoom_for_bounds(
    bounds: &LatLngBounds,
    width_px: u32,
    height_px: u32,
    pad_px: u32,
) -> u8 {
    Viewport::new(width_px, height_px, pad_px).fit_zoom(bounds, MAX_ZOOM)
}

/// Visual center of `bounds` at `zoom`.
///
/// Averaging happens in pixel space so the box is centered in the rendered
/// image; a lat/lng midpoint drifts toward the equator under Mercator.
pub fn center_for_bounds(bounds: &LatLngBounds, zoom: u8) -> LatLng {
    let north_west = project(&LatLng::new(bounds.north(), bounds.west()), zoom);
    let south_east = project(&LatLng::new(bounds.south(), bounds.east()), zoom);
    unproject(&north_west.midpoint(&south_east), zoom)
}
