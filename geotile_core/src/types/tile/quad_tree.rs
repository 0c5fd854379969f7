//! Microsoft QuadTree (quadkey) encoding.
//!
//! Every zoom level contributes one base-4 digit, coarsest first. Within a digit, bit 0 selects
//! the eastern half and bit 1 the southern half of the parent tile, using Google/XYZ orientation:
//!
//! ```text
//! +---+---+
//! | 0 | 1 |
//! +---+---+
//! | 2 | 3 |
//! +---+---+
//! ```

use super::Tile;
use crate::MAX_ZOOM;
use anyhow::{Result, ensure};
use std::str::FromStr;

impl Tile {
	/// Decodes a quadtree code. The zoom level equals the number of digits.
	///
	/// # Errors
	/// Returns an error if the code contains anything besides `0`-`3` or is longer than 31 digits.
	///
	/// # Examples
	/// ```
	/// # use geotile_core::Tile;
	/// let tile = Tile::from_quad_tree("1202211").unwrap();
	/// assert_eq!(tile.zoom(), 7);
	/// assert_eq!(tile.google(), (67, 44));
	/// ```
	pub fn from_quad_tree(code: &str) -> Result<Tile> {
		ensure!(
			code.bytes().all(|digit| matches!(digit, b'0'..=b'3')),
			"quad tree ({code:?}) must only contain the digits 0, 1, 2 and 3"
		);
		ensure!(
			code.len() <= usize::from(MAX_ZOOM),
			"quad tree ({code:?}) must not be longer than {MAX_ZOOM} digits"
		);

		let zoom = code.len() as u8;
		let mut google_x = 0u32;
		let mut google_y = 0u32;
		for (i, digit) in code.bytes().enumerate() {
			let mask = 1u32 << (code.len() - 1 - i);
			let quadrant = digit - b'0';
			if quadrant & 1 != 0 {
				google_x |= mask;
			}
			if quadrant & 2 != 0 {
				google_y |= mask;
			}
		}

		log::trace!("quad tree {code:?} decodes to google tile ({google_x}, {google_y}) at zoom {zoom}");
		Tile::from_google(google_x, google_y, zoom)
	}

	/// Encodes this tile as a quadtree code with one digit per zoom level.
	///
	/// Zoom level 0 yields the empty string.
	pub fn quad_tree(&self) -> String {
		let google_y = self.flipped_y();
		(1..=self.zoom)
			.rev()
			.map(|i| {
				let mask = 1u32 << (i - 1);
				let mut digit = b'0';
				if self.tms_x & mask != 0 {
					digit += 1;
				}
				if google_y & mask != 0 {
					digit += 2;
				}
				char::from(digit)
			})
			.collect()
	}
}

impl FromStr for Tile {
	type Err = anyhow::Error;

	/// Parses a quadtree code, see [`Tile::from_quad_tree`].
	fn from_str(code: &str) -> Result<Self> {
		Tile::from_quad_tree(code)
	}
}

impl TryFrom<&str> for Tile {
	type Error = anyhow::Error;

	fn try_from(code: &str) -> Result<Self> {
		Tile::from_quad_tree(code)
	}
}
