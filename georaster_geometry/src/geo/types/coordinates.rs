use serde::de::{Deserialize, Deserializer, Error};
use std::fmt::Debug;

/// A single position: longitude (x) and latitude (y).
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}
}

/// GeoJSON positions are arrays of at least two numbers; any further
/// ordinates (usually altitude) are dropped.
impl<'de> Deserialize<'de> for Coordinates {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let values = Vec::<f64>::deserialize(deserializer)?;
		if values.len() < 2 {
			return Err(D::Error::custom(format!(
				"a position needs at least 2 numbers, got {}",
				values.len()
			)));
		}
		Ok(Coordinates([values[0], values[1]]))
	}
}

impl<T: Copy + Into<f64>> From<[T; 2]> for Coordinates {
	fn from(value: [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
