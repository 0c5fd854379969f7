//! Geographic points and their projections into Spherical Mercator meters and pyramid pixels.
//!
//! A [`Point`] stores WGS84 latitude and longitude only. Meters and pixels are derived on demand,
//! and the zoom level is passed explicitly to every pixel conversion.
//!
//! # Examples
//!
//! ```
//! use geotile_core::Point;
//!
//! let point = Point::from_latitude_longitude(41.85, -87.65).unwrap();
//! let (meter_x, meter_y) = point.meters();
//! assert_eq!(meter_x.round(), -9757153.0);
//! assert_eq!(meter_y.round(), 5138537.0);
//!
//! let back = Point::from_meters(meter_x, meter_y).unwrap();
//! assert!((back.latitude() - 41.85).abs() < 1e-9);
//! ```

use crate::{ORIGIN_SHIFT, pyramid_size, resolution};
use anyhow::{Result, ensure};
use std::{f64::consts::PI, fmt};

/// A location on the WGS84 ellipsoid, given as latitude and longitude in degrees.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPoint"))]
pub struct Point {
	latitude: f64,
	longitude: f64,
}

impl Point {
	/// Creates a point from latitude `[-90, 90]` and longitude `[-180, 180]`, both inclusive.
	///
	/// # Errors
	/// Returns an error if either value lies outside its range.
	pub fn from_latitude_longitude(latitude: f64, longitude: f64) -> Result<Point> {
		ensure!(
			(-90.0..=90.0).contains(&latitude),
			"latitude ({latitude}) must be between -90 and 90"
		);
		ensure!(
			(-180.0..=180.0).contains(&longitude),
			"longitude ({longitude}) must be between -180 and 180"
		);
		Ok(Point { latitude, longitude })
	}

	/// Creates a point from Spherical Mercator (EPSG:3857) meters.
	///
	/// Both values must lie in `[-ORIGIN_SHIFT, ORIGIN_SHIFT]`.
	pub fn from_meters(meter_x: f64, meter_y: f64) -> Result<Point> {
		ensure!(
			(-ORIGIN_SHIFT..=ORIGIN_SHIFT).contains(&meter_x),
			"meter x ({meter_x}) must be between {} and {ORIGIN_SHIFT}",
			-ORIGIN_SHIFT
		);
		ensure!(
			(-ORIGIN_SHIFT..=ORIGIN_SHIFT).contains(&meter_y),
			"meter y ({meter_y}) must be between {} and {ORIGIN_SHIFT}",
			-ORIGIN_SHIFT
		);

		Ok(Point::unproject_meters(meter_x, meter_y))
	}

	/// Creates a point from pixel coordinates of the pyramid at `zoom`.
	///
	/// Pixel `(0, 0)` is the north-west corner; both axes span `[0, TILE_SIZE * 2^zoom]`.
	pub fn from_pixel(pixel_x: f64, pixel_y: f64, zoom: u8) -> Result<Point> {
		let size = pyramid_size(zoom);
		ensure!(
			(0.0..=size).contains(&pixel_x),
			"pixel x ({pixel_x}) must be between 0 and {size} at zoom {zoom}"
		);
		ensure!(
			(0.0..=size).contains(&pixel_y),
			"pixel y ({pixel_y}) must be between 0 and {size} at zoom {zoom}"
		);

		Ok(Point::unproject_pixel(pixel_x, pixel_y, zoom))
	}

	/// Inverse of [`from_pixel`](Self::from_pixel) without range checks.
	///
	/// Callers guarantee that both pixels lie inside the pyramid at `zoom`.
	pub(crate) fn unproject_pixel(pixel_x: f64, pixel_y: f64, zoom: u8) -> Point {
		let res = resolution(zoom);
		let mut meter_x = (pixel_x * res - ORIGIN_SHIFT).abs();
		let mut meter_y = (pixel_y * res - ORIGIN_SHIFT).abs();

		// Pixel y grows southwards while Mercator y grows northwards.
		let half_size = pyramid_size(zoom) / 2.0;
		if pixel_x < half_size {
			meter_x = -meter_x;
		}
		if pixel_y > half_size {
			meter_y = -meter_y;
		}

		Point::unproject_meters(meter_x, meter_y)
	}

	/// Inverse Spherical Mercator (Gudermannian) without range checks.
	fn unproject_meters(meter_x: f64, meter_y: f64) -> Point {
		let longitude = (meter_x / ORIGIN_SHIFT) * 180.0;
		let latitude = (meter_y / ORIGIN_SHIFT) * 180.0;
		let latitude = 180.0 / PI * (2.0 * (latitude * PI / 180.0).exp().atan() - PI / 2.0);
		Point { latitude, longitude }
	}

	/// Returns `(latitude, longitude)` in degrees.
	pub fn latitude_longitude(&self) -> (f64, f64) {
		(self.latitude, self.longitude)
	}

	/// Latitude in degrees, `[-90, 90]`.
	pub fn latitude(&self) -> f64 {
		self.latitude
	}

	/// Longitude in degrees, `[-180, 180]`.
	pub fn longitude(&self) -> f64 {
		self.longitude
	}

	/// Projects the point to Spherical Mercator meters `(x, y)`.
	///
	/// At latitude -90 the y value is negative infinity.
	pub fn meters(&self) -> (f64, f64) {
		let meter_x = self.longitude * ORIGIN_SHIFT / 180.0;
		let meter_y = ((90.0 + self.latitude) * PI / 360.0).tan().ln() / (PI / 180.0);
		let meter_y = meter_y * ORIGIN_SHIFT / 180.0;
		(meter_x, meter_y)
	}

	/// Returns the pixel `(x, y)` of the pyramid at `zoom` that contains this point.
	///
	/// Both coordinates are absolute values rounded half away from zero. Points beyond the
	/// Mercator latitude limit are mirrored back into unsigned pixel space.
	pub fn pixels(&self, zoom: u8) -> (u64, u64) {
		let (meter_x, meter_y) = self.meters();
		let res = resolution(zoom);
		let pixel_x = ((meter_x + ORIGIN_SHIFT) / res).abs().round();
		let pixel_y = ((meter_y - ORIGIN_SHIFT) / res).abs().round();
		// `as` saturates, which keeps the infinite y of the south pole representable.
		(pixel_x as u64, pixel_y as u64)
	}
}

/// Custom `Debug` format as `Point(latitude, longitude)`.
impl fmt::Debug for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Point({}, {})", self.latitude, self.longitude)
	}
}

/// Formats as `latitude,longitude`.
impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{},{}", self.latitude, self.longitude)
	}
}

impl TryFrom<(f64, f64)> for Point {
	type Error = anyhow::Error;

	/// Builds a point from a `(latitude, longitude)` pair.
	fn try_from((latitude, longitude): (f64, f64)) -> Result<Self> {
		Point::from_latitude_longitude(latitude, longitude)
	}
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPoint {
	latitude: f64,
	longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoint> for Point {
	type Error = anyhow::Error;

	fn try_from(raw: RawPoint) -> Result<Self> {
		Point::from_latitude_longitude(raw.latitude, raw.longitude)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;

	const CHICAGO: (f64, f64) = (41.85, -87.65);
	const CHICAGO_METERS: (f64, f64) = (-9_757_153.368_030_43, 5_138_536.587_247_468);
	const CHICAGO_PIXEL: (u64, u64) = (34_430_575, 49_899_071);

	fn assert_pair_eq(actual: (f64, f64), expected: (f64, f64), epsilon: f64) {
		assert_abs_diff_eq!(actual.0, expected.0, epsilon = epsilon);
		assert_abs_diff_eq!(actual.1, expected.1, epsilon = epsilon);
	}

	#[test]
	fn from_latitude_longitude_keeps_values() {
		let point = Point::from_latitude_longitude(47.0, 8.0).unwrap();
		assert_eq!(point.latitude_longitude(), (47.0, 8.0));
		assert_eq!(point.latitude(), 47.0);
		assert_eq!(point.longitude(), 8.0);
	}

	#[rstest]
	#[case(-180.1)]
	#[case(-200.0)]
	#[case(-181.0)]
	#[case(181.0)]
	#[case(180.01)]
	#[case(200.0)]
	fn rejects_longitude(#[case] longitude: f64) {
		let err = Point::from_latitude_longitude(0.0, longitude).unwrap_err();
		assert!(err.to_string().contains("longitude"), "unexpected error: {err}");
	}

	#[rstest]
	#[case(180.0)]
	#[case(-180.0)]
	#[case(0.0)]
	#[case(90.0)]
	fn accepts_longitude(#[case] longitude: f64) {
		assert!(Point::from_latitude_longitude(10.0, longitude).is_ok());
	}

	#[rstest]
	#[case(-90.1)]
	#[case(-91.0)]
	#[case(90.1)]
	#[case(91.0)]
	#[case(200.0)]
	#[case(-200.0)]
	fn rejects_latitude(#[case] latitude: f64) {
		let err = Point::from_latitude_longitude(latitude, 0.0).unwrap_err();
		assert!(err.to_string().contains("latitude"), "unexpected error: {err}");
	}

	#[rstest]
	#[case(90.0)]
	#[case(-90.0)]
	#[case(0.0)]
	fn accepts_latitude(#[case] latitude: f64) {
		assert!(Point::from_latitude_longitude(latitude, 10.0).is_ok());
	}

	#[test]
	fn rejects_nan() {
		assert!(Point::from_latitude_longitude(f64::NAN, 0.0).is_err());
		assert!(Point::from_meters(0.0, f64::NAN).is_err());
		assert!(Point::from_pixel(f64::NAN, 0.0, 1).is_err());
	}

	#[test]
	fn from_meters_chicago() {
		let point = Point::from_meters(CHICAGO_METERS.0, CHICAGO_METERS.1).unwrap();
		assert_pair_eq(point.meters(), CHICAGO_METERS, 0.1);
		assert_pair_eq(point.latitude_longitude(), CHICAGO, 1e-9);
	}

	#[test]
	fn from_meters_documented_example() {
		let point = Point::from_meters(-9_757_148.442_088_6, 5_138_517.444_985_11).unwrap();
		assert_pair_eq(point.latitude_longitude(), (41.849_871_909_477_54, -87.649_955_749_511_66), 1e-9);
		assert_eq!(point.pixels(19), (34_430_592, 49_899_136));
	}

	#[rstest]
	#[case(ORIGIN_SHIFT + 1.0, 0.0)]
	#[case(0.0, -ORIGIN_SHIFT - 1.0)]
	#[case(-30_000_000.0, 30_000_000.0)]
	fn from_meters_rejects(#[case] meter_x: f64, #[case] meter_y: f64) {
		assert!(Point::from_meters(meter_x, meter_y).is_err());
	}

	#[test]
	fn from_pixel_chicago() {
		let point = Point::from_pixel(CHICAGO_PIXEL.0 as f64, CHICAGO_PIXEL.1 as f64, 19).unwrap();
		assert_eq!(point.pixels(19), CHICAGO_PIXEL);
		assert_pair_eq(point.latitude_longitude(), CHICAGO, 0.2);
	}

	#[test]
	fn pixels_of_chicago() {
		let point = Point::from_latitude_longitude(CHICAGO.0, CHICAGO.1).unwrap();
		let (pixel_x, pixel_y) = point.pixels(19);
		assert!(pixel_x.abs_diff(CHICAGO_PIXEL.0) <= 1, "pixel x {pixel_x}");
		assert!(pixel_y.abs_diff(CHICAGO_PIXEL.1) <= 1, "pixel y {pixel_y}");
	}

	#[rstest]
	#[case(0.0, 0.0, (-ORIGIN_SHIFT, ORIGIN_SHIFT))]
	#[case(256.0, 0.0, (0.0, ORIGIN_SHIFT))]
	#[case(512.0, 0.0, (ORIGIN_SHIFT, ORIGIN_SHIFT))]
	#[case(0.0, 256.0, (-ORIGIN_SHIFT, 0.0))]
	#[case(256.0, 256.0, (0.0, 0.0))]
	#[case(512.0, 256.0, (ORIGIN_SHIFT, 0.0))]
	#[case(0.0, 512.0, (-ORIGIN_SHIFT, -ORIGIN_SHIFT))]
	#[case(256.0, 512.0, (0.0, -ORIGIN_SHIFT))]
	#[case(512.0, 512.0, (ORIGIN_SHIFT, -ORIGIN_SHIFT))]
	fn pixels_to_meters(#[case] pixel_x: f64, #[case] pixel_y: f64, #[case] expected: (f64, f64)) {
		let point = Point::from_pixel(pixel_x, pixel_y, 1).unwrap();
		assert_pair_eq(point.meters(), expected, 0.1);
		assert_eq!(point.pixels(1), (pixel_x as u64, pixel_y as u64));
	}

	#[rstest]
	#[case(0.0, 0.0, (85.05, -180.0))]
	#[case(256.0, 0.0, (85.05, 0.0))]
	#[case(512.0, 0.0, (85.05, 180.0))]
	#[case(0.0, 256.0, (0.0, -180.0))]
	#[case(256.0, 256.0, (0.0, 0.0))]
	#[case(512.0, 256.0, (0.0, 180.0))]
	#[case(0.0, 512.0, (-85.05, -180.0))]
	#[case(256.0, 512.0, (-85.05, 0.0))]
	#[case(512.0, 512.0, (-85.05, 180.0))]
	fn pixels_to_latitude_longitude(#[case] pixel_x: f64, #[case] pixel_y: f64, #[case] expected: (f64, f64)) {
		let point = Point::from_pixel(pixel_x, pixel_y, 1).unwrap();
		assert_pair_eq(point.latitude_longitude(), expected, 0.1);
		assert_eq!(point.pixels(1), (pixel_x as u64, pixel_y as u64));
	}

	#[rstest]
	#[case(-ORIGIN_SHIFT, ORIGIN_SHIFT, (85.05, -180.0))]
	#[case(0.0, ORIGIN_SHIFT, (85.05, 0.0))]
	#[case(ORIGIN_SHIFT, ORIGIN_SHIFT, (85.05, 180.0))]
	#[case(-ORIGIN_SHIFT, 0.0, (0.0, -180.0))]
	#[case(0.0, 0.0, (0.0, 0.0))]
	#[case(ORIGIN_SHIFT, 0.0, (0.0, 180.0))]
	#[case(-ORIGIN_SHIFT, -ORIGIN_SHIFT, (-85.05, -180.0))]
	#[case(0.0, -ORIGIN_SHIFT, (-85.05, 0.0))]
	#[case(ORIGIN_SHIFT, -ORIGIN_SHIFT, (-85.05, 180.0))]
	fn meters_to_latitude_longitude(#[case] meter_x: f64, #[case] meter_y: f64, #[case] expected: (f64, f64)) {
		let point = Point::from_meters(meter_x, meter_y).unwrap();
		assert_pair_eq(point.latitude_longitude(), expected, 0.1);
		assert_pair_eq(point.meters(), (meter_x, meter_y), 0.1);
	}

	#[test]
	fn mercator_limit_is_reached_at_the_edge() {
		let point = Point::from_meters(0.0, ORIGIN_SHIFT).unwrap();
		assert_abs_diff_eq!(point.latitude(), crate::MAX_LAT, epsilon = 1e-9);
	}

	#[rstest]
	#[case(-10.0, 1)]
	#[case(-0.1, 1)]
	#[case(512.1, 1)]
	#[case(1024.1, 2)]
	fn from_pixel_rejects_x(#[case] pixel_x: f64, #[case] zoom: u8) {
		let err = Point::from_pixel(pixel_x, 1.0, zoom).unwrap_err();
		assert!(err.to_string().contains("pixel x"), "unexpected error: {err}");
	}

	#[rstest]
	#[case(10.0, 1)]
	#[case(0.1, 1)]
	#[case(512.0, 1)]
	#[case(1024.0, 2)]
	fn from_pixel_accepts_x(#[case] pixel_x: f64, #[case] zoom: u8) {
		assert!(Point::from_pixel(pixel_x, 10.0, zoom).is_ok());
	}

	#[rstest]
	#[case(-10.0, 1)]
	#[case(-0.1, 1)]
	#[case(512.1, 1)]
	#[case(1024.1, 2)]
	fn from_pixel_rejects_y(#[case] pixel_y: f64, #[case] zoom: u8) {
		let err = Point::from_pixel(1.0, pixel_y, zoom).unwrap_err();
		assert!(err.to_string().contains("pixel y"), "unexpected error: {err}");
	}

	#[test]
	fn south_pole_pixels_saturate() {
		let point = Point::from_latitude_longitude(-90.0, 0.0).unwrap();
		assert_eq!(point.meters().1, f64::NEG_INFINITY);
		assert_eq!(point.pixels(0), (128, u64::MAX));
	}

	#[test]
	fn debug_and_display() {
		let point = Point::from_latitude_longitude(47.5, 8.25).unwrap();
		assert_eq!(format!("{point:?}"), "Point(47.5, 8.25)");
		assert_eq!(point.to_string(), "47.5,8.25");
	}

	#[test]
	fn try_from_tuple() {
		assert_eq!(
			Point::try_from((47.0, 8.0)).unwrap(),
			Point::from_latitude_longitude(47.0, 8.0).unwrap()
		);
		assert!(Point::try_from((95.0, 8.0)).is_err());
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_revalidates() {
		let point = Point::from_latitude_longitude(47.0, 8.0).unwrap();
		let json = serde_json::to_string(&point).unwrap();
		assert_eq!(json, r#"{"latitude":47.0,"longitude":8.0}"#);
		assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), point);
		assert!(serde_json::from_str::<Point>(r#"{"latitude":91.0,"longitude":8.0}"#).is_err());
	}
}
