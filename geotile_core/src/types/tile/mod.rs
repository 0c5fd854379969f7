//! A single tile of the Spherical Mercator pyramid and its three addressing schemes.
//!
//! Tiles are stored in **TMS** order (origin at the bottom-left). The other schemes are derived:
//! - **Google/XYZ** flips the y axis (origin at the top-left): `y_google = 2^zoom - 1 - y_tms`.
//! - **QuadTree** (Microsoft quadkey) interleaves the Google x/y bits into one base-4 digit per zoom level.
//!
//! ## Conventions
//! - Zoom level is in the range `0..=31`.
//! - Tile indices per axis are in `0..=(2^zoom - 1)`.
//!
//! ## Examples
//! ```
//! # use geotile_core::Tile;
//! let tile = Tile::from_tms(134494, 329369, 19).unwrap();
//! assert_eq!(tile.google(), (134494, 194918));
//! assert_eq!(tile.quad_tree(), "0302222310303211330");
//! ```
//! Find the tile that contains a geographic location:
//! ```
//! # use geotile_core::Tile;
//! let tile = Tile::for_latitude_longitude(41.85, -87.65, 19).unwrap();
//! assert_eq!(tile.tms(), (134494, 329369));
//! ```

mod constructors;
mod convert;
mod fmt;
mod quad_tree;

use crate::max_tile_index;

/// A tile at a specific zoom level, addressed by its TMS indices.
///
/// Values are immutable; every constructor validates or derives indices that lie inside the
/// pyramid of its zoom level.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "constructors::RawTile"))]
pub struct Tile {
	tms_x: u32,
	tms_y: u32,
	zoom: u8,
}

impl Tile {
	/// Returns the TMS indices `(x, y)`, origin at the bottom-left.
	pub fn tms(&self) -> (u32, u32) {
		(self.tms_x, self.tms_y)
	}

	/// Returns the Google/XYZ indices `(x, y)`, origin at the top-left.
	pub fn google(&self) -> (u32, u32) {
		(self.tms_x, self.flipped_y())
	}

	/// Returns the zoom level, `0..=31`.
	pub fn zoom(&self) -> u8 {
		self.zoom
	}

	/// The y index mirrored across the pyramid, turning TMS into Google and back.
	fn flipped_y(&self) -> u32 {
		max_tile_index(self.zoom) - self.tms_y
	}
}
