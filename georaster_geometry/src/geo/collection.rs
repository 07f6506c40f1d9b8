use super::GeoFeature;
use crate::geojson::parse_geojson;
use anyhow::Result;
use georaster_core::GeoExtent;

/// A parsed GeoJSON feature collection.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	pub fn from_json_str(json_str: &str) -> Result<Self> {
		parse_geojson(json_str)
	}

	/// Scans all features and returns the extent covering every supported
	/// coordinate. An empty collection yields the degenerate sentinel
	/// extent with `count == 0`.
	#[must_use]
	pub fn extent(&self) -> GeoExtent {
		let mut extent = GeoExtent::new();
		for feature in &self.features {
			if let Some(geometry) = &feature.geometry {
				geometry.update_extent(&mut extent);
			}
		}
		extent
	}
}
