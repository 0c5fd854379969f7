use super::Tile;
use crate::{Point, TILE_SIZE};

impl Tile {
	/// Returns the geographic extent of this tile as `(south_west, north_east)` corner points.
	///
	/// The corners come from the tile's pixel rectangle in the pyramid. Pixel rows grow
	/// southwards, so the south-west corner uses the larger pixel y.
	///
	/// # Examples
	/// ```
	/// # use geotile_core::Tile;
	/// let (south_west, north_east) = Tile::from_google(1, 1, 1).unwrap().bounds();
	/// assert_eq!(south_west.longitude(), 0.0);
	/// assert_eq!(north_east.longitude(), 180.0);
	/// assert!(south_west.latitude() < -85.0);
	/// ```
	pub fn bounds(&self) -> (Point, Point) {
		let (google_x, google_y) = self.google();
		let size = f64::from(TILE_SIZE);
		let (x, y) = (f64::from(google_x), f64::from(google_y));

		let south_west = Point::unproject_pixel(x * size, (y + 1.0) * size, self.zoom);
		let north_east = Point::unproject_pixel((x + 1.0) * size, y * size, self.zoom);
		log::trace!("bounds of {:?}: {:?} .. {:?}", self, south_west, north_east);

		(south_west, north_east)
	}
}
