//! Conversions between the coordinate systems of a Spherical Mercator tile pyramid:
//! WGS84 latitude/longitude, Mercator meters, pyramid pixels and TMS, Google/XYZ and
//! QuadTree tile addresses.
//!
//! ```
//! use geotile_core::{Point, Tile};
//!
//! let point = Point::from_latitude_longitude(41.85, -87.65).unwrap();
//! let tile = Tile::for_point(&point, 19).unwrap();
//! assert_eq!(tile.google(), (134494, 194918));
//! assert_eq!(tile.quad_tree(), "0302222310303211330");
//! ```

pub mod types;

pub use types::*;
