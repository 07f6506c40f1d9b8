use super::Ring;
use serde::Deserialize;
use std::fmt::Debug;

/// A polygon: an outer ring followed by zero or more hole rings.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Polygon(pub Vec<Ring>);

impl Polygon {
	/// The exterior boundary, if the polygon has any ring at all.
	#[must_use]
	pub fn outer_ring(&self) -> Option<&Ring> {
		self.0.first()
	}

	/// Hole rings, in input order.
	pub fn holes(&self) -> impl Iterator<Item = &Ring> {
		self.0.iter().skip(1)
	}

	/// True if the point lies within the outer ring and not within any
	/// hole. Boundary points of the outer ring count as inside, boundary
	/// points of a hole count as outside.
	#[must_use]
	pub fn contains_point(&self, x: f64, y: f64) -> bool {
		let Some(outer) = self.outer_ring() else {
			return false;
		};
		if !outer.contains_point(x, y) {
			return false;
		}
		!self.holes().any(|hole| hole.contains_point(x, y))
	}
}

impl<T: Copy + Into<f64>, const N: usize, const M: usize> From<&[[[T; 2]; N]; M]> for Polygon {
	fn from(value: &[[[T; 2]; N]; M]) -> Self {
		Polygon(value.iter().map(Ring::from).collect())
	}
}

impl Debug for Polygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}
