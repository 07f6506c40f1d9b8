use super::Coordinates;
use georaster_core::GeoExtent;
use serde::Deserialize;
use std::fmt::Debug;

/// One ring of a polygon: a closed series of positions. The first ring of a
/// polygon is its outer boundary, all further rings are holes.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Ring(pub Vec<Coordinates>);

impl Ring {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Even-odd ray cast. A point lying exactly on a ring segment counts as
	/// contained, so a polygon covers its own boundary.
	#[must_use]
	pub fn contains_point(&self, x: f64, y: f64) -> bool {
		let coords = &self.0;
		if coords.len() < 3 {
			return false;
		}

		let mut inside = false;
		let mut j = coords.len() - 1;

		for i in 0..coords.len() {
			let (xi, yi) = (coords[i].x(), coords[i].y());
			let (xj, yj) = (coords[j].x(), coords[j].y());

			if on_segment(x, y, xi, yi, xj, yj) {
				return true;
			}

			if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
				inside = !inside;
			}
			j = i;
		}

		inside
	}

	/// Folds every position of the ring into the extent.
	pub fn update_extent(&self, extent: &mut GeoExtent) {
		for coord in &self.0 {
			extent.include(coord.x(), coord.y());
		}
	}
}

/// True if (x, y) lies on the segment from (xi, yi) to (xj, yj).
fn on_segment(x: f64, y: f64, xi: f64, yi: f64, xj: f64, yj: f64) -> bool {
	let cross = (xj - xi) * (y - yi) - (yj - yi) * (x - xi);
	if cross != 0.0 {
		return false;
	}
	x >= xi.min(xj) && x <= xi.max(xj) && y >= yi.min(yj) && y <= yi.max(yj)
}

impl Default for Ring {
	fn default() -> Self {
		Ring::new()
	}
}

impl<T: Copy + Into<f64>, const N: usize> From<&[[T; 2]; N]> for Ring {
	fn from(value: &[[T; 2]; N]) -> Self {
		Ring(value.iter().map(|c| Coordinates::from(*c)).collect())
	}
}

impl Debug for Ring {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> Ring {
		Ring::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]])
	}

	#[test]
	fn contains_point_inside() {
		let ring = square();
		assert!(ring.contains_point(5.0, 5.0));
		assert!(ring.contains_point(1.0, 1.0));
		assert!(ring.contains_point(9.0, 9.0));
	}

	#[test]
	fn contains_point_outside() {
		let ring = square();
		assert!(!ring.contains_point(-1.0, 5.0));
		assert!(!ring.contains_point(11.0, 5.0));
		assert!(!ring.contains_point(5.0, -1.0));
		assert!(!ring.contains_point(5.0, 11.0));
	}

	#[test]
	fn contains_point_on_boundary() {
		let ring = square();
		// corners
		assert!(ring.contains_point(0.0, 0.0));
		assert!(ring.contains_point(10.0, 10.0));
		// edge midpoints, including the top edge the ray cast alone misses
		assert!(ring.contains_point(5.0, 0.0));
		assert!(ring.contains_point(5.0, 10.0));
		assert!(ring.contains_point(0.0, 5.0));
		assert!(ring.contains_point(10.0, 5.0));
	}

	#[test]
	fn contains_point_concave() {
		// an L shape: the notch at the upper right is outside
		let ring = Ring::from(&[[0, 0], [10, 0], [10, 5], [5, 5], [5, 10], [0, 10], [0, 0]]);
		assert!(ring.contains_point(2.0, 8.0));
		assert!(ring.contains_point(8.0, 2.0));
		assert!(!ring.contains_point(8.0, 8.0));
	}

	#[test]
	fn contains_point_empty_and_degenerate() {
		assert!(!Ring::new().contains_point(0.0, 0.0));
		let pair = Ring::from(&[[0, 0], [1, 1]]);
		assert!(!pair.contains_point(0.5, 0.5));
	}

	#[test]
	fn update_extent_visits_every_point() {
		let mut extent = GeoExtent::new();
		square().update_extent(&mut extent);
		assert_eq!(extent.as_tuple(), (0.0, 0.0, 10.0, 10.0));
		// the closing point is counted too
		assert_eq!(extent.count(), 5);
	}

	#[test]
	fn deserialize_ring() {
		let ring: Ring = serde_json::from_str("[[0,0],[4,0],[4,4],[0,0]]").unwrap();
		assert_eq!(ring.len(), 4);
		assert_eq!(ring.0[2], Coordinates::new(4.0, 4.0));
	}
}
