//! WebP width extraction.
//!
//! Layout after the 12-byte `RIFF....WEBP` preamble:
//! - bytes 12-15: chunk tag (`VP8 `, `VP8L` or `VP8X`)
//! - `VP8 `: 14-bit width in bytes 26-27 (after the key frame start code)
//! - `VP8L`: width minus one in the low bits of the little-endian word at bytes 21-22
//! - `VP8X`: canvas width minus one, little-endian, starting at byte 24

use super::read_bytes;
use crate::{MBTilesError, TileFormat};

pub(super) fn width(data: &[u8]) -> Result<u32, MBTilesError> {
	let chunk = read_bytes::<4>(data, 12, TileFormat::WEBP)?;
	match &chunk {
		// lossy
		b"VP8 " => {
			let [low, high] = read_bytes::<2>(data, 26, TileFormat::WEBP)?;
			Ok((u32::from(high & 0x3f) << 8) | u32::from(low))
		}
		// lossless; tile widths stay within 9 bits
		b"VP8L" => {
			let bits = u16::from_le_bytes(read_bytes::<2>(data, 21, TileFormat::WEBP)?);
			Ok(u32::from(bits & 0x1ff) + 1)
		}
		// extended, e.g. with alpha
		b"VP8X" => {
			let width = u16::from_le_bytes(read_bytes::<2>(data, 24, TileFormat::WEBP)?);
			Ok(u32::from(width) + 1)
		}
		_ => {
			log::debug!("unrecognised webp chunk {chunk:?}, tile size undetermined");
			Ok(0)
		}
	}
}
