use super::Tile;
use std::fmt;

/// Implements `Debug` for [`Tile`] as `Tile(zoom, [tms_x, tms_y])`.
///
/// ```
/// # use geotile_core::Tile;
/// let tile = Tile::from_tms(67, 83, 7).unwrap();
/// assert_eq!(format!("{tile:?}"), "Tile(7, [67, 83])");
/// ```
impl fmt::Debug for Tile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Tile({}, [{}, {}])", self.zoom, self.tms_x, self.tms_y)
	}
}

/// Implements `Display` for [`Tile`] as the TMS path `zoom/x/y`.
impl fmt::Display for Tile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.zoom, self.tms_x, self.tms_y)
	}
}
