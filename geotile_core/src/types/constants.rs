//! Spherical Mercator pyramid constants shared by [`Point`](crate::Point) and [`Tile`](crate::Tile).

use std::f64::consts::PI;

/// Edge length of a tile in pixels.
pub const TILE_SIZE: u32 = 256;

/// WGS84 semi-major axis (equatorial radius) in meters, used as the Web Mercator sphere radius.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the projected world width in meters (`PI * EARTH_RADIUS`).
///
/// Mercator meters are centered on zero and span `[-ORIGIN_SHIFT, ORIGIN_SHIFT]` on both axes.
pub const ORIGIN_SHIFT: f64 = 2.0 * PI * EARTH_RADIUS / 2.0;

/// Meters per pixel at zoom level 0, measured at the equator.
pub const INITIAL_RESOLUTION: f64 = 2.0 * PI * EARTH_RADIUS / TILE_SIZE as f64;

/// Latitude in degrees where the Mercator square ends (`atan(sinh(PI))`).
pub const MAX_LAT: f64 = 85.051_128_779_806_59;

/// Highest zoom level whose tile indices still fit into `u32`.
pub const MAX_ZOOM: u8 = 31;

/// Resolution (meters/pixel) at the given zoom level, measured at the equator.
///
/// ```
/// use geotile_core::{INITIAL_RESOLUTION, resolution};
///
/// assert_eq!(resolution(0), INITIAL_RESOLUTION);
/// assert_eq!(resolution(3), INITIAL_RESOLUTION / 8.0);
/// ```
#[must_use]
pub fn resolution(zoom: u8) -> f64 {
	INITIAL_RESOLUTION / 2f64.powi(i32::from(zoom))
}

/// Width and height of the whole pixel pyramid at `zoom` (`TILE_SIZE * 2^zoom`).
#[must_use]
pub fn pyramid_size(zoom: u8) -> f64 {
	f64::from(TILE_SIZE) * 2f64.powi(i32::from(zoom))
}

/// Largest valid tile index on either axis at `zoom` (`2^zoom - 1`).
///
/// `zoom` must not exceed [`MAX_ZOOM`].
#[must_use]
pub fn max_tile_index(zoom: u8) -> u32 {
	debug_assert!(zoom <= MAX_ZOOM);
	(1u32 << zoom) - 1
}
