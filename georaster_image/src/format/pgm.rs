use anyhow::{Result, anyhow};
use image::{
	ExtendedColorType, GrayImage, ImageEncoder, ImageFormat,
	codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding},
	load_from_memory_with_format,
};

/// Encodes a grayscale image as a binary ("P5") PGM blob.
pub fn image2blob(image: &GrayImage) -> Result<Vec<u8>> {
	let mut buffer: Vec<u8> = Vec::new();
	PnmEncoder::new(&mut buffer)
		.with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
		.write_image(
			image.as_raw(),
			image.width(),
			image.height(),
			ExtendedColorType::L8,
		)?;
	Ok(buffer)
}

/// Decodes a PGM blob into a grayscale image.
pub fn blob2image(blob: &[u8]) -> Result<GrayImage> {
	let image = load_from_memory_with_format(blob, ImageFormat::Pnm)
		.map_err(|e| anyhow!("failed to decode PGM image: {e}"))?;
	Ok(image.into_luma8())
}
