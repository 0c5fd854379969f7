//! Point and tile value types plus the pyramid constants they share.

mod constants;
pub use constants::*;

mod point;
pub use point::*;

mod tile;
pub use tile::*;
