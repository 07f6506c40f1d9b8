use super::Geometry;
use serde_json::{Map, Value};

/// One record of a feature collection. Features whose geometry kind is not
/// supported by this tool (or is `null`) carry `geometry: None` and are
/// skipped by every consumer.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub geometry: Option<Geometry>,
	pub properties: Map<String, Value>,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry: Some(geometry),
			properties: Map::new(),
		}
	}
}
