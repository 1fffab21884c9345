//! Core constants shared by the projection, codec and zoom-fitting code.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default square tile size in pixels. The whole world is one tile at zoom 0.
pub const TILE_SIZE: u32 = 256;

/// Latitude limit of the square Web Mercator world.
pub const MAX_LATITUDE: f64 = 85.05112878;

/// Longitude limit; projection clamps rather than wraps.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Highest zoom the fitter will pick. Kept below the theoretical maximum
/// because imagery at the deepest levels is often missing or degraded.
pub const MAX_ZOOM: u8 = 20;

/// Fixed-point factor of the polyline format (1e-5 degree resolution).
pub const POLYLINE_PRECISION: f64 = 1e5;

/// Offset that maps each 5-bit group into printable ASCII.
pub const POLYLINE_ASCII_OFFSET: u8 = 63;

/// Continuation flag set on every 5-bit group except the last.
pub const POLYLINE_CONTINUATION_BIT: i64 = 0x20;

/// Mask selecting the payload bits of a group.
pub const POLYLINE_CHUNK_MASK: i64 = 0x1f;

/// Ring closure tolerance in degrees.
pub const DEFAULT_RING_EPSILON: f64 = 1e-6;

/// Zoom used for interactive links when no fitted zoom is known.
pub const DEFAULT_LINK_ZOOM: u8 = 15;
