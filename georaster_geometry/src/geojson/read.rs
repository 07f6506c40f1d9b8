use crate::{GeoCollection, GeoFeature, Geometry, Polygon, Ring};
use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parses a GeoJSON `FeatureCollection` from a string.
///
/// Geometry kinds outside the supported set (Point, MultiPoint,
/// GeometryCollection, ...) and `null` geometries are kept as features
/// without a geometry; they are not an error.
pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	let raw: RawCollection = serde_json::from_str(json).context("failed to parse GeoJSON")?;
	ensure!(
		raw.object_type == "FeatureCollection",
		"root object must be a 'FeatureCollection', got '{}'",
		raw.object_type
	);

	let features = raw
		.features
		.into_iter()
		.enumerate()
		.map(|(index, feature)| convert_feature(feature).with_context(|| format!("in feature {index}")))
		.collect::<Result<Vec<_>>>()?;

	Ok(GeoCollection { features })
}

/// Reads a GeoJSON feature collection from any reader.
pub fn read_geojson(mut reader: impl Read) -> Result<GeoCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_geojson(&buffer)
}

/// Reads a GeoJSON feature collection from a file.
pub fn read_geojson_file(path: impl AsRef<Path>) -> Result<GeoCollection> {
	let path = path.as_ref();
	let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
	read_geojson(BufReader::new(file)).with_context(|| format!("failed to read {}", path.display()))
}

#[derive(Deserialize)]
struct RawCollection {
	#[serde(rename = "type")]
	object_type: String,
	#[serde(default)]
	features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
	#[serde(rename = "type")]
	object_type: String,
	geometry: Option<RawGeometry>,
	#[serde(default)]
	properties: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
struct RawGeometry {
	#[serde(rename = "type")]
	geometry_type: String,
	#[serde(default)]
	coordinates: Value,
}

fn convert_feature(raw: RawFeature) -> Result<GeoFeature> {
	ensure!(
		raw.object_type == "Feature",
		"features must have type 'Feature', got '{}'",
		raw.object_type
	);
	let geometry = match raw.geometry {
		Some(geometry) => convert_geometry(geometry)?,
		None => None,
	};
	Ok(GeoFeature {
		geometry,
		properties: raw.properties.unwrap_or_default(),
	})
}

fn convert_geometry(raw: RawGeometry) -> Result<Option<Geometry>> {
	let geometry = match raw.geometry_type.as_str() {
		"LineString" => Geometry::LineString(coordinates(raw.coordinates)?),
		"MultiLineString" => Geometry::MultiLineString(coordinates(raw.coordinates)?),
		"Polygon" => Geometry::Polygon(Polygon(coordinates(raw.coordinates)?)),
		"MultiPolygon" => {
			let rings: Vec<Vec<Ring>> = coordinates(raw.coordinates)?;
			Geometry::MultiPolygon(rings.into_iter().map(Polygon).collect())
		}
		other => {
			log::debug!("skipping unsupported geometry type '{other}'");
			return Ok(None);
		}
	};
	Ok(Some(geometry))
}

fn coordinates<T: for<'de> Deserialize<'de>>(value: Value) -> Result<T> {
	if value.is_null() {
		bail!("geometry is missing 'coordinates'");
	}
	serde_json::from_value(value).context("malformed 'coordinates'")
}
