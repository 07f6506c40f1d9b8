use anyhow::{Result, ensure};
use georaster_core::{GeoExtent, progress::get_progress_bar};
use georaster_geometry::{GeoFeature, Geometry};
use image::{GrayImage, Luma};

/// Intensity written for pixels whose center lies inside a polygon.
pub const FOREGROUND: u8 = 255;

/// The derived grid parameters of one rasterization.
///
/// `scale` is world units per pixel, derived from the horizontal delta and
/// the requested width. The same scalar is reused for vertical spacing, so
/// grid cells are square in world units and the image aspect ratio follows
/// the extent, not the requested width/height pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterParams {
	pub scale: f64,
	pub width: u32,
	pub height: u32,
}

impl RasterParams {
	/// Derives scale and grid dimensions from an extent and a requested
	/// pixel width.
	///
	/// Fails on a degenerate extent (zero or negative horizontal delta) or
	/// a requested width of zero; rasterization must not start in either
	/// case.
	pub fn new(extent: &GeoExtent, requested_width: u32) -> Result<RasterParams> {
		ensure!(requested_width > 0, "requested width must be at least 1");
		let d_lon = extent.d_lon();
		let d_lat = extent.d_lat();
		ensure!(d_lon > 0.0, "extent has zero width, nothing to rasterize");

		let scale = d_lon / f64::from(requested_width);
		Ok(RasterParams {
			scale,
			width: (d_lon / scale).ceil() as u32,
			height: (d_lat / scale).ceil().max(0.0) as u32,
		})
	}
}

/// Renders the polygon features of a collection onto a grayscale grid.
///
/// Pixel (x, y) is sampled at the world point
/// `(x_min + x * scale, y_max - y * scale)` — row 0 sits at the maximum
/// latitude, the usual north-up convention. A pixel becomes [`FOREGROUND`]
/// iff some feature with a `Polygon` geometry contains the sample point;
/// evaluation stops at the first containing polygon. The other geometry
/// kinds are recognized but contribute no pixels.
pub fn rasterize(features: &[GeoFeature], extent: &GeoExtent, params: &RasterParams) -> GrayImage {
	log::info!(
		"rasterizing {}x{} pixels at {} world units per pixel",
		params.width,
		params.height,
		params.scale
	);

	let mut image = GrayImage::new(params.width, params.height);
	let progress = get_progress_bar("rasterizing", u64::from(params.width));

	for x in 0..params.width {
		progress.set_position(u64::from(x));
		let lon = extent.x_min() + f64::from(x) * params.scale;

		for y in 0..params.height {
			let lat = extent.y_max() - f64::from(y) * params.scale;

			let hit = features.iter().any(|feature| match &feature.geometry {
				Some(Geometry::Polygon(polygon)) => polygon.contains_point(lon, lat),
				Some(Geometry::LineString(_) | Geometry::MultiLineString(_) | Geometry::MultiPolygon(_)) | None => false,
			});

			if hit {
				image.put_pixel(x, y, Luma([FOREGROUND]));
			}
		}
	}

	progress.finish();
	image
}
