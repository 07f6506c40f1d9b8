use anyhow::{Result, anyhow};
use image::{
	ExtendedColorType, GrayImage, ImageEncoder, ImageFormat,
	codecs::png::{CompressionType, FilterType, PngEncoder},
	load_from_memory_with_format,
};

/// Encodes a grayscale image as a PNG blob.
pub fn image2blob(image: &GrayImage) -> Result<Vec<u8>> {
	let mut buffer: Vec<u8> = Vec::new();
	PngEncoder::new_with_quality(&mut buffer, CompressionType::Default, FilterType::Adaptive).write_image(
		image.as_raw(),
		image.width(),
		image.height(),
		ExtendedColorType::L8,
	)?;
	Ok(buffer)
}

/// Decodes a PNG blob into a grayscale image.
pub fn blob2image(blob: &[u8]) -> Result<GrayImage> {
	let image = load_from_memory_with_format(blob, ImageFormat::Png)
		.map_err(|e| anyhow!("failed to decode PNG image: {e}"))?;
	Ok(image.into_luma8())
}
