use super::{Coordinates, Polygon};
use georaster_core::GeoExtent;
use std::fmt::Debug;

/// The closed set of geometry kinds this tool consumes. Every consumer
/// matches on all variants, so a new kind cannot be added without touching
/// each handler.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	LineString(Vec<Coordinates>),
	MultiLineString(Vec<Vec<Coordinates>>),
	Polygon(Polygon),
	MultiPolygon(Vec<Polygon>),
}

impl Geometry {
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::LineString(_) => "LineString",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	/// Folds this geometry's coordinates into the extent.
	///
	/// Line strings contribute every point. A polygon contributes only its
	/// outer ring, and a multi-polygon only the outer ring of its first
	/// polygon — holes and further polygons never widen the bounds (they
	/// cannot reach outside the outer ring anyway, except in the
	/// multi-polygon case, where this mirrors the reference behavior).
	pub fn update_extent(&self, extent: &mut GeoExtent) {
		match self {
			Geometry::LineString(line) => {
				for coord in line {
					extent.include(coord.x(), coord.y());
				}
			}
			Geometry::MultiLineString(lines) => {
				for line in lines {
					for coord in line {
						extent.include(coord.x(), coord.y());
					}
				}
			}
			Geometry::Polygon(polygon) => {
				if let Some(outer) = polygon.outer_ring() {
					outer.update_extent(extent);
				}
			}
			Geometry::MultiPolygon(polygons) => {
				if let Some(outer) = polygons.first().and_then(Polygon::outer_ring) {
					outer.update_extent(extent);
				}
			}
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
