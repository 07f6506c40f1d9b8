use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

const SQUARE_GEOJSON: &str = r#"
{
	"type": "FeatureCollection",
	"features": [
		{
			"type": "Feature",
			"geometry": {
				"type": "Polygon",
				"coordinates": [[[0,0],[10,0],[10,10],[0,10],[0,0]]]
			},
			"properties": { "name": "square" }
		}
	]
}
"#;

fn georaster(temp: &TempDir) -> Command {
	let mut cmd = Command::cargo_bin("georaster").unwrap();
	cmd.current_dir(temp.path());
	cmd
}

#[test]
fn square_end_to_end() {
	let temp = TempDir::new().unwrap();
	temp.child("square.geojson").write_str(SQUARE_GEOJSON).unwrap();

	georaster(&temp)
		.args([
			"--file",
			"square.geojson",
			"--json",
			"out.json",
			"--yaml",
			"out.yaml",
			"--pgm",
			"out.pgm",
			"--png",
			"out.png",
			"--width",
			"10",
		])
		.assert()
		.success();

	// JSON summary carries the contract fields with the scanned values
	let json = std::fs::read_to_string(temp.child("out.json").path()).unwrap();
	let value: serde_json::Value = serde_json::from_str(&json).unwrap();
	assert_eq!(value["MinLon"], serde_json::json!(0.0));
	assert_eq!(value["MinLat"], serde_json::json!(0.0));
	assert_eq!(value["MaxLon"], serde_json::json!(10.0));
	assert_eq!(value["MaxLat"], serde_json::json!(10.0));
	assert_eq!(value["DLon"], serde_json::json!(10.0));
	assert_eq!(value["DLat"], serde_json::json!(10.0));
	// the closed ring contributes its closing point too
	assert_eq!(value["Count"], serde_json::json!(5));
	assert_eq!(value["Scale"], serde_json::json!(1.0));
	assert_eq!(value["PGMFile"], serde_json::json!("out.pgm"));
	assert_eq!(value["PGMWidth"], serde_json::json!(10));
	assert_eq!(value["PGMHeight"], serde_json::json!(10));

	// YAML summary holds the same values
	let yaml = std::fs::read_to_string(temp.child("out.yaml").path()).unwrap();
	assert!(yaml.contains("MinLon:"));
	assert!(yaml.contains("Count: 5"));
	assert!(yaml.contains("PGMFile: out.pgm"));

	// the square covers the whole extent, so every pixel is foreground
	let pgm = std::fs::read(temp.child("out.pgm").path()).unwrap();
	assert!(pgm.starts_with(b"P5"));
	assert!(pgm.len() >= 100);
	assert!(pgm[pgm.len() - 100..].iter().all(|&b| b == 255));

	// the PNG encodes the same grid
	let png = image::open(temp.child("out.png").path()).unwrap().into_luma8();
	assert_eq!(png.dimensions(), (10, 10));
	assert!(png.pixels().all(|p| p.0[0] == 255));
}

#[test]
fn rasterization_is_idempotent() {
	let temp = TempDir::new().unwrap();
	temp.child("square.geojson").write_str(SQUARE_GEOJSON).unwrap();

	for out in ["a.pgm", "b.pgm"] {
		georaster(&temp)
			.args([
				"--file",
				"square.geojson",
				"--json",
				"",
				"--yaml",
				"",
				"--pgm",
				out,
				"--width",
				"64",
			])
			.assert()
			.success();
	}

	let a = std::fs::read(temp.child("a.pgm").path()).unwrap();
	let b = std::fs::read(temp.child("b.pgm").path()).unwrap();
	assert_eq!(a, b);
}

#[test]
fn zero_width_extent_aborts_before_writing() {
	let temp = TempDir::new().unwrap();
	// all points share the same longitude
	temp.child("line.geojson")
		.write_str(
			r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"LineString","coordinates":[[4,0],[4,5],[4,10]]},"properties":{}}]}"#,
		)
		.unwrap();

	georaster(&temp)
		.args(["--file", "line.geojson", "--pgm", "out.pgm"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("zero width"));

	temp.child("out.pgm").assert(predicate::path::missing());
	temp.child("out.json").assert(predicate::path::missing());
	temp.child("out.yaml").assert(predicate::path::missing());
}

#[test]
fn missing_input_file_fails() {
	let temp = TempDir::new().unwrap();
	georaster(&temp)
		.args(["--file", "absent.geojson"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("absent.geojson"));
}

#[test]
fn empty_flags_disable_outputs() {
	let temp = TempDir::new().unwrap();
	temp.child("square.geojson").write_str(SQUARE_GEOJSON).unwrap();

	georaster(&temp)
		.args([
			"--file",
			"square.geojson",
			"--json",
			"out.json",
			"--yaml",
			"",
			"--pgm",
			"",
			"--width",
			"10",
		])
		.assert()
		.success();

	temp.child("out.json").assert(predicate::path::exists());
	temp.child("out.yaml").assert(predicate::path::missing());
	temp.child("out.pgm").assert(predicate::path::missing());

	// without rasterization the raster fields stay at their defaults
	let json = std::fs::read_to_string(temp.child("out.json").path()).unwrap();
	let value: serde_json::Value = serde_json::from_str(&json).unwrap();
	assert_eq!(value["Scale"], serde_json::json!(0.0));
	assert_eq!(value["PGMFile"], serde_json::json!(""));
	assert_eq!(value["Count"], serde_json::json!(5));
}

#[test]
fn unsupported_geometries_are_skipped() {
	let temp = TempDir::new().unwrap();
	temp.child("mixed.geojson")
		.write_str(
			r#"{"type":"FeatureCollection","features":[
				{"type":"Feature","geometry":{"type":"Point","coordinates":[999,999]},"properties":{}},
				{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0],[2,3]]},"properties":{}}
			]}"#,
		)
		.unwrap();

	georaster(&temp)
		.args(["--file", "mixed.geojson", "--json", "out.json", "--yaml", "", "--pgm", ""])
		.assert()
		.success();

	// the Point is ignored, only the LineString is scanned
	let json = std::fs::read_to_string(temp.child("out.json").path()).unwrap();
	let value: serde_json::Value = serde_json::from_str(&json).unwrap();
	assert_eq!(value["MaxLon"], serde_json::json!(2.0));
	assert_eq!(value["MaxLat"], serde_json::json!(3.0));
	assert_eq!(value["Count"], serde_json::json!(2));
}
