//! Checked constructors for [`Tile`].
//!
//! `from_*` constructors take tile addresses and validate them. `for_*` constructors locate the
//! tile that contains a pixel, a Mercator position or a geographic location.

use super::Tile;
use crate::{MAX_LAT, MAX_ZOOM, Point, TILE_SIZE, max_tile_index};
use anyhow::{Context, Result, ensure};

impl Tile {
	/// Creates a tile from TMS indices (origin at the bottom-left).
	///
	/// # Errors
	/// Returns an error if `zoom` > 31 or an index exceeds `2^zoom - 1`.
	///
	/// # Examples
	/// ```
	/// # use geotile_core::Tile;
	/// assert!(Tile::from_tms(3, 0, 2).is_ok());
	/// assert!(Tile::from_tms(4, 0, 2).is_err());
	/// ```
	pub fn from_tms(tms_x: u32, tms_y: u32, zoom: u8) -> Result<Tile> {
		check_indices(tms_x, tms_y, zoom)?;
		Ok(Tile { tms_x, tms_y, zoom })
	}

	/// Creates a tile from Google/XYZ indices (origin at the top-left).
	///
	/// # Errors
	/// Returns an error if `zoom` > 31 or an index exceeds `2^zoom - 1`.
	///
	/// # Examples
	/// ```
	/// # use geotile_core::Tile;
	/// let tile = Tile::from_google(67, 44, 7).unwrap();
	/// assert_eq!(tile.tms(), (67, 83));
	/// ```
	pub fn from_google(google_x: u32, google_y: u32, zoom: u8) -> Result<Tile> {
		check_indices(google_x, google_y, zoom)?;
		Ok(Tile {
			tms_x: google_x,
			tms_y: max_tile_index(zoom) - google_y,
			zoom,
		})
	}

	/// Finds the tile containing the pyramid pixel `(pixel_x, pixel_y)` at `zoom`.
	///
	/// Pixel `(0, 0)` is the north-west corner. A pixel lying exactly on a tile edge belongs to
	/// the tile to its left (or above it); pixel 0 belongs to the first tile.
	///
	/// # Errors
	/// Returns an error if `zoom` > 31 or a pixel lies outside `[0, 256 * 2^zoom]`.
	pub fn for_pixels(pixel_x: u64, pixel_y: u64, zoom: u8) -> Result<Tile> {
		ensure!(zoom <= MAX_ZOOM, "zoom ({zoom}) must be <= {MAX_ZOOM}");
		let size = u64::from(TILE_SIZE) << zoom;
		ensure!(pixel_x <= size, "pixel x ({pixel_x}) must be between 0 and {size} at zoom {zoom}");
		ensure!(pixel_y <= size, "pixel y ({pixel_y}) must be between 0 and {size} at zoom {zoom}");

		let google_x = u32::try_from(tile_index(pixel_x))?;
		let google_y = u32::try_from(tile_index(pixel_y))?;
		log::trace!("pixel ({pixel_x}, {pixel_y}) at zoom {zoom} is in google tile ({google_x}, {google_y})");

		// Pixel rows grow southwards like Google rows.
		Tile::from_google(google_x, google_y, zoom)
	}

	/// Finds the tile containing the Spherical Mercator position `(meter_x, meter_y)` at `zoom`.
	pub fn for_meters(meter_x: f64, meter_y: f64, zoom: u8) -> Result<Tile> {
		let (pixel_x, pixel_y) = Point::from_meters(meter_x, meter_y)?.pixels(zoom);
		Tile::for_pixels(pixel_x, pixel_y, zoom)
			.with_context(|| format!("Failed to find tile for meters ({meter_x}, {meter_y}) at zoom {zoom}"))
	}

	/// Finds the tile containing the geographic location at `zoom`.
	///
	/// # Errors
	/// Returns an error for invalid coordinates and for latitudes beyond the Mercator limit
	/// (about ±85.0511°), which fall outside the pixel pyramid.
	pub fn for_latitude_longitude(latitude: f64, longitude: f64, zoom: u8) -> Result<Tile> {
		let point = Point::from_latitude_longitude(latitude, longitude)?;
		// Pixel projection mirrors latitudes beyond the Mercator square back into the pyramid.
		ensure!(
			latitude.abs() <= MAX_LAT,
			"latitude ({latitude}) must be between -{MAX_LAT} and {MAX_LAT} to locate a tile"
		);
		let (pixel_x, pixel_y) = point.pixels(zoom);
		Tile::for_pixels(pixel_x, pixel_y, zoom)
			.with_context(|| format!("Failed to find tile for location ({latitude}, {longitude}) at zoom {zoom}"))
	}

	/// Finds the tile containing `point` at `zoom`.
	pub fn for_point(point: &Point, zoom: u8) -> Result<Tile> {
		let (latitude, longitude) = point.latitude_longitude();
		Tile::for_latitude_longitude(latitude, longitude, zoom)
	}
}

impl TryFrom<(u32, u32, u8)> for Tile {
	type Error = anyhow::Error;

	/// Builds a tile from a TMS `(x, y, zoom)` triple.
	fn try_from((tms_x, tms_y, zoom): (u32, u32, u8)) -> Result<Self> {
		Tile::from_tms(tms_x, tms_y, zoom)
	}
}

fn check_indices(x: u32, y: u32, zoom: u8) -> Result<()> {
	ensure!(zoom <= MAX_ZOOM, "zoom ({zoom}) must be <= {MAX_ZOOM}");
	let max = max_tile_index(zoom);
	ensure!(x <= max, "x ({x}) must be between 0 and {max} at zoom {zoom}");
	ensure!(y <= max, "y ({y}) must be between 0 and {max} at zoom {zoom}");
	Ok(())
}

/// Zero-based tile index along one axis: `ceil(pixel / TILE_SIZE) - 1`, with pixel 0 in tile 0.
fn tile_index(pixel: u64) -> u64 {
	pixel.div_ceil(u64::from(TILE_SIZE)).saturating_sub(1)
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
pub(super) struct RawTile {
	tms_x: u32,
	tms_y: u32,
	zoom: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTile> for Tile {
	type Error = anyhow::Error;

	fn try_from(raw: RawTile) -> Result<Self> {
		Tile::from_tms(raw.tms_x, raw.tms_y, raw.zoom)
	}
}
