mod summary;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use georaster_geometry::read_geojson_file;
use georaster_image::{RasterParams, pgm, png, rasterize};
use summary::Summary;

/// Summarize the bounding box of a GeoJSON feature collection and
/// rasterize its polygons to PGM/PNG.
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	disable_help_subcommand = true,
)]
struct Cli {
	/// input GeoJSON file; an empty value skips loading entirely
	#[arg(long, value_name = "file", default_value = "input.geojson")]
	file: String,

	/// output path for the YAML summary; an empty value disables it
	#[arg(long, value_name = "file", default_value = "out.yaml")]
	yaml: String,

	/// output path for the JSON summary; an empty value disables it
	#[arg(long, value_name = "file", default_value = "out.json")]
	json: String,

	/// output path for the grayscale PGM raster; an empty value disables rasterization
	#[arg(long, value_name = "file", default_value = "out.pgm")]
	pgm: String,

	/// additional PNG encoding of the same raster; an empty value disables it
	#[arg(long, value_name = "file", default_value = "")]
	png: String,

	/// requested pixel width of the raster; the height is derived from the extent
	#[arg(long, value_name = "int", default_value_t = 1280)]
	width: u32,

	#[command(flatten)]
	verbose: Verbosity<InfoLevel>,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	let mut summary = Summary::default();
	let mut loaded = None;

	if !cli.file.is_empty() {
		log::info!("loading GeoJSON file {}", cli.file);
		let collection = read_geojson_file(&cli.file)?;
		let extent = collection.extent();
		summary.set_extent(&extent);
		log::info!("scanned {} features, {} coordinates", collection.features.len(), extent.count());
		log::info!("min {}, {}", summary.min_lon, summary.min_lat);
		log::info!("max {}, {}", summary.max_lon, summary.max_lat);
		log::info!("delta {}, {}", summary.d_lon, summary.d_lat);
		loaded = Some((collection, extent));
	}

	if !cli.pgm.is_empty() {
		// parameter derivation fails on a degenerate extent before any
		// output file is created
		let extent = loaded.as_ref().map_or_else(Default::default, |(_, e)| *e);
		let params = RasterParams::new(&extent, cli.width)?;

		let features = loaded.as_ref().map_or(&[][..], |(c, _)| c.features.as_slice());
		let image = rasterize(features, &extent, &params);

		log::info!("writing PGM image file {}", cli.pgm);
		let blob = pgm::image2blob(&image)?;
		std::fs::write(&cli.pgm, blob).with_context(|| format!("failed to open {}", cli.pgm))?;

		if !cli.png.is_empty() {
			log::info!("writing PNG image file {}", cli.png);
			let blob = png::image2blob(&image)?;
			std::fs::write(&cli.png, blob).with_context(|| format!("failed to open {}", cli.png))?;
		}

		summary.set_raster(&params, &cli.pgm);
	}

	if !cli.json.is_empty() {
		log::info!("writing JSON summary {}", cli.json);
		summary.write_json_file(&cli.json)?;
	}

	if !cli.yaml.is_empty() {
		log::info!("writing YAML summary {}", cli.yaml);
		summary.write_yaml_file(&cli.yaml)?;
	}

	Ok(())
}
