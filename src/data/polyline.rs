//! Encoded polyline format (the compact path encoding used by common web
//! mapping platforms).
//!
//! Each coordinate is scaled by 1e5, delta-encoded against the previous point,
//! zig-zag folded so the sign lives in the low bit, and split into 5-bit groups
//! least significant first. Every group except the last carries the 0x20
//! continuation bit; all groups are offset by 63 into printable ASCII.
//! Latitude is written before longitude for every point.

use crate::core::constants::{
    DEFAULT_RING_EPSILON, POLYLINE_ASCII_OFFSET, POLYLINE_CHUNK_MASK, POLYLINE_CONTINUATION_BIT,
    POLYLINE_PRECISION,
};
use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

/// Highest printable byte a group can map to (63 + 63)
const MAX_GROUP_BYTE: u8 = POLYLINE_ASCII_OFFSET + 63;

/// A 13th group would shift past the 64-bit accumulator
const MAX_SHIFT: u32 = 60;

/// Encodes a path into a polyline string.
///
/// Precision beyond five decimal places is lost; values round half away from
/// zero.
pub fn encode_polyline(points: &[LatLng]) -> String {
    let (_, _, encoded) = points.iter().fold(
        (0_i64, 0_i64, String::with_capacity(points.len() * 8)),
        |(last_lat, last_lng, mut out), point| {
            let lat = to_fixed(point.lat);
            let lng = to_fixed(point.lng);
            write_value(&mut out, lat.wrapping_sub(last_lat));
            write_value(&mut out, lng.wrapping_sub(last_lng));
            (lat, lng, out)
        },
    );
    encoded
}

/// Decodes a polyline string into its points.
///
/// Decoding stops at the first byte outside the format's alphabet or at a
/// truncated group; the points decoded up to that position are returned.
pub fn decode_polyline(encoded: &str) -> Vec<LatLng> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat = 0_i64;
    let mut lng = 0_i64;
    let mut points = Vec::with_capacity(bytes.len() / 8);

    while index < bytes.len() {
        let delta = read_value(bytes, &mut index)
            .and_then(|dlat| read_value(bytes, &mut index).map(|dlng| (dlat, dlng)));

        let Some((dlat, dlng)) = delta else {
            log::debug!(
                "polyline decode stopped at byte {} of {}, kept {} points",
                index,
                bytes.len(),
                points.len()
            );
            break;
        };

        lat = lat.wrapping_add(dlat);
        lng = lng.wrapping_add(dlng);
        points.push(LatLng::new(from_fixed(lat), from_fixed(lng)));
    }

    points
}

fn to_fixed(value: f64) -> i64 {
    (value * POLYLINE_PRECISION).round() as i64
}

fn from_fixed(value: i64) -> f64 {
    value as f64 / POLYLINE_PRECISION
}

fn write_value(out: &mut String, value: i64) {
    let folded = if value < 0 { !(value << 1) } else { value << 1 };
    // Non-negative after folding; u64 keeps the loop finite at the extremes.
    let mut v = folded as u64;
    let continuation = POLYLINE_CONTINUATION_BIT as u64;
    let mask = POLYLINE_CHUNK_MASK as u64;

    while v >= continuation {
        out.push(char::from(((continuation | (v & mask)) as u8) + POLYLINE_ASCII_OFFSET));
        v >>= 5;
    }
    out.push(char::from(v as u8 + POLYLINE_ASCII_OFFSET));
}

fn read_value(bytes: &[u8], index: &mut usize) -> Option<i64> {
    let mut result = 0_i64;
    let mut shift = 0_u32;

    loop {
        let byte = *bytes.get(*index)?;
        if !(POLYLINE_ASCII_OFFSET..=MAX_GROUP_BYTE).contains(&byte) || shift > MAX_SHIFT {
            return None;
        }
        *index += 1;

        let group = i64::from(byte - POLYLINE_ASCII_OFFSET);
        result |= (group & POLYLINE_CHUNK_MASK) << shift;
        shift += 5;

        if group < POLYLINE_CONTINUATION_BIT {
            break;
        }
    }

    // Arithmetic shift on i64, so `!` restores negative deltas.
    Some(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

/// Appends the first point when `points` has at least three vertices and its
/// ends differ by more than `epsilon` on either axis. Returns whether a point
/// was appended.
pub fn close_ring(points: &mut Vec<LatLng>, epsilon: f64) -> bool {
    if points.len() < 3 {
        return false;
    }

    let first = points[0];
    let last = points[points.len() - 1];
    if first.approx_eq(&last, epsilon) {
        return false;
    }

    points.push(first);
    true
}

/// An owned coordinate path, in vertex order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<LatLng>,
}

impl Polyline {
    pub fn new(points: Vec<LatLng>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline; see [`decode_polyline`]
    pub fn decode(encoded: &str) -> Self {
        Self::new(decode_polyline(encoded))
    }

    pub fn encode(&self) -> String {
        encode_polyline(&self.points)
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn into_points(self) -> Vec<LatLng> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Three or more vertices
    pub fn is_polygon(&self) -> bool {
        self.points.len() >= 3
    }

    pub fn bounds(&self) -> LatLngBounds {
        LatLngBounds::from_points(&self.points)
    }

    /// Closes the ring with the default 1e-6 degree tolerance
    pub fn close(&mut self) -> bool {
        close_ring(&mut self.points, DEFAULT_RING_EPSILON)
    }

    pub fn close_with_epsilon(&mut self, epsilon: f64) -> bool {
        close_ring(&mut self.points, epsilon)
    }
}

impl From<Vec<LatLng>> for Polyline {
    fn from(points: Vec<LatLng>) -> Self {
        Self::new(points)
    }
}

impl From<Polyline> for geo_types::LineString<f64> {
    fn from(polyline: Polyline) -> Self {
        polyline
            .points
            .into_iter()
            .map(geo_types::Coord::from)
            .collect()
    }
}

impl From<geo_types::LineString<f64>> for Polyline {
    fn from(line: geo_types::LineString<f64>) -> Self {
        Self::new(line.into_iter().map(LatLng::from).collect())
    }
}
