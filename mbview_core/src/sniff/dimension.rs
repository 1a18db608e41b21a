use super::{read_bytes, webp};
use crate::{MBTilesError, TileFormat};
use image::{ImageDecoder, codecs::jpeg::JpegDecoder};
use std::io::Cursor;

/// Nominal edge length of vector tiles; they carry no pixel size of their own.
pub const VECTOR_TILE_SIZE: u32 = 512;

/// Returns the edge length in pixels of a tile payload of the given format.
///
/// Tiles are assumed to be square, so only the width is read:
/// - `Gzip`/`PBF`: always [`VECTOR_TILE_SIZE`], the payload is not inspected.
/// - `PNG`: big-endian `u32` at offset 16, the IHDR width (IHDR is mandated as first chunk).
/// - `JPG`: the frame header has no fixed offset, so the header is decoded.
/// - `WEBP`: resolved per codec variant, `0` for an unrecognised variant.
/// - anything else: `0`.
///
/// # Errors
/// Returns [`MBTilesError::MalformedHeader`] if the header is too short or cannot be decoded.
pub fn detect_dimension(format: TileFormat, data: &[u8]) -> Result<u32, MBTilesError> {
	match format {
		TileFormat::Gzip | TileFormat::PBF => Ok(VECTOR_TILE_SIZE),
		TileFormat::PNG => png_width(data),
		TileFormat::JPG => jpeg_width(data),
		TileFormat::WEBP => webp::width(data),
		TileFormat::Unknown | TileFormat::Zlib => Ok(0),
	}
}

fn png_width(data: &[u8]) -> Result<u32, MBTilesError> {
	let width = read_bytes::<4>(data, 16, TileFormat::PNG)?;
	Ok(u32::from_be_bytes(width))
}

fn jpeg_width(data: &[u8]) -> Result<u32, MBTilesError> {
	let decoder =
		JpegDecoder::new(Cursor::new(data)).map_err(|err| MBTilesError::malformed(TileFormat::JPG, err.to_string()))?;
	let (width, height) = decoder.dimensions();
	log::trace!("jpeg header reports {width}x{height}");
	Ok(width)
}
