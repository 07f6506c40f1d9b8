use anyhow::{Context, Result};
use georaster_core::GeoExtent;
use georaster_image::RasterParams;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The flat summary object written to JSON and YAML.
///
/// Field names are part of the output contract and serialize verbatim:
/// MinLon, MinLat, MaxLon, MaxLat, DLon, DLat, Count, Scale, PGMFile,
/// PGMWidth, PGMHeight. A run without input (or without rasterization)
/// leaves the untouched fields at their zero defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Summary {
	pub min_lon: f64,
	pub min_lat: f64,
	pub max_lon: f64,
	pub max_lat: f64,
	pub d_lon: f64,
	pub d_lat: f64,
	pub count: u64,
	pub scale: f64,
	#[serde(rename = "PGMFile")]
	pub pgm_file: String,
	#[serde(rename = "PGMWidth")]
	pub pgm_width: u32,
	#[serde(rename = "PGMHeight")]
	pub pgm_height: u32,
}

impl Summary {
	/// Copies the scanned bounds, deltas and point count from an extent.
	pub fn set_extent(&mut self, extent: &GeoExtent) {
		self.min_lon = extent.x_min();
		self.min_lat = extent.y_min();
		self.max_lon = extent.x_max();
		self.max_lat = extent.y_max();
		self.d_lon = extent.d_lon();
		self.d_lat = extent.d_lat();
		self.count = extent.count();
	}

	/// Records the raster parameters and the PGM output path.
	pub fn set_raster(&mut self, params: &RasterParams, pgm_file: &str) {
		self.scale = params.scale;
		self.pgm_file = pgm_file.to_string();
		self.pgm_width = params.width;
		self.pgm_height = params.height;
	}

	pub fn write_json(&self, writer: impl Write) -> Result<()> {
		serde_json::to_writer_pretty(writer, self)?;
		Ok(())
	}

	pub fn write_yaml(&self, writer: impl Write) -> Result<()> {
		serde_yaml_ng::to_writer(writer, self)?;
		Ok(())
	}

	pub fn write_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let file = File::create(path).with_context(|| format!("failed to open {}", path.display()))?;
		self.write_json(file)
	}

	pub fn write_yaml_file(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let file = File::create(path).with_context(|| format!("failed to open {}", path.display()))?;
		self.write_yaml(file)
	}
}
