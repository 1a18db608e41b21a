use crate::{MBTilesError, TileFormat};

/// Magic prefixes of every payload format that can be recognised.
///
/// The WebP entry only matches the RIFF wrapper; the codec variant is resolved while reading
/// the dimension. No two prefixes overlap.
const SIGNATURES: [(TileFormat, &[u8]); 5] = [
	(TileFormat::Gzip, b"\x1f\x8b"),
	(TileFormat::Zlib, b"\x78\x9c"),
	(TileFormat::PNG, b"\x89PNG\r\n\x1a\n"),
	(TileFormat::JPG, b"\xff\xd8\xff"),
	(TileFormat::WEBP, b"RIFF"),
];

/// Classifies a payload by its leading bytes.
///
/// Vector tiles carry no signature of their own and are reported as [`TileFormat::Gzip`];
/// see [`TileFormat::promote_vector`].
///
/// # Errors
/// Returns [`MBTilesError::UndetectableFormat`] if no signature matches, which includes any
/// buffer shorter than the shortest signature.
pub fn detect_format(data: &[u8]) -> Result<TileFormat, MBTilesError> {
	SIGNATURES
		.iter()
		.find(|(_, magic)| data.starts_with(magic))
		.map(|(format, _)| *format)
		.ok_or(MBTilesError::UndetectableFormat)
}
