//! Header-only classification of tile payloads.
//!
//! [`detect_format`] matches a fixed table of magic prefixes; [`detect_dimension`] reads the
//! tile edge length from fixed-offset header fields (PNG, WebP) or, for JPEG, from a header
//! decode. Tiles are assumed to be square: only the width is ever read.

mod dimension;
mod format;
mod webp;

pub use dimension::{VECTOR_TILE_SIZE, detect_dimension};
pub use format::detect_format;

use crate::{MBTilesError, TileFormat};

/// Reads `N` bytes starting at `offset`, failing with [`MBTilesError::MalformedHeader`] when
/// `data` is too short.
fn read_bytes<const N: usize>(data: &[u8], offset: usize, format: TileFormat) -> Result<[u8; N], MBTilesError> {
	data
		.get(offset..offset + N)
		.and_then(|slice| <[u8; N]>::try_from(slice).ok())
		.ok_or_else(|| {
			MBTilesError::malformed(
				format,
				format!("need {} bytes to read the image size, got {}", offset + N, data.len()),
			)
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn read_bytes_is_bounds_checked() {
		let data = [1u8, 2, 3, 4, 5];
		assert_eq!(read_bytes::<2>(&data, 3, TileFormat::PNG).unwrap(), [4, 5]);

		let err = read_bytes::<2>(&data, 4, TileFormat::PNG).unwrap_err();
		assert_eq!(
			err.to_string(),
			"malformed png header: need 6 bytes to read the image size, got 5"
		);
	}
}
