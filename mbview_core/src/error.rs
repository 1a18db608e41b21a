//! Failure taxonomy shared by the sniffer and the container reader.
//!
//! Errors are returned to the immediate caller and never retried. Container operations wrap
//! them in `anyhow::Error` with context; use `downcast_ref::<MBTilesError>()` to classify.

use crate::TileFormat;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MBTilesError {
	/// The container file is absent at open time.
	#[error("path does not exist: {0:?}")]
	PathNotFound(PathBuf),

	/// A sibling `-journal` file exists, so a write transaction is still pending.
	#[error("refusing to open mbtiles file with associated -journal file (incomplete tileset): {0:?}")]
	IncompleteContainer(PathBuf),

	/// The `tiles` or `metadata` table (or view) is missing.
	#[error("missing one or more required tables: tiles, metadata ({0:?})")]
	MissingRequiredStructure(PathBuf),

	#[error("'tiles' table must be non-empty ({0:?})")]
	EmptyTileSet(PathBuf),

	/// The payload matches none of the known magic sequences.
	#[error("could not detect tile format")]
	UndetectableFormat,

	/// A recognised format whose header is too short or inconsistent to read a dimension from.
	#[error("malformed {format} header: {reason}")]
	MalformedHeader { format: TileFormat, reason: String },

	#[error("cannot read from closed mbtiles database")]
	HandleClosed,

	/// A metadata value that cannot be coerced to the type its key requires.
	#[error("cannot read metadata item '{key}': {reason}")]
	MetadataParseError { key: String, reason: String },
}

impl MBTilesError {
	pub(crate) fn malformed(format: TileFormat, reason: impl Into<String>) -> Self {
		MBTilesError::MalformedHeader {
			format,
			reason: reason.into(),
		}
	}

	pub fn metadata(key: &str, reason: impl ToString) -> Self {
		MBTilesError::MetadataParseError {
			key: key.to_string(),
			reason: reason.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_offending_input() {
		let err = MBTilesError::IncompleteContainer(PathBuf::from("/data/world.mbtiles"));
		assert_eq!(
			err.to_string(),
			"refusing to open mbtiles file with associated -journal file (incomplete tileset): \"/data/world.mbtiles\""
		);

		let err = MBTilesError::malformed(TileFormat::PNG, "need 20 bytes, got 8");
		assert_eq!(err.to_string(), "malformed png header: need 20 bytes, got 8");

		let err = MBTilesError::metadata("bounds", "invalid float literal");
		assert_eq!(
			err.to_string(),
			"cannot read metadata item 'bounds': invalid float literal"
		);
	}
}
