//! `SQLite` file `*.mbtiles` as tile container
//!
//! - `MBTilesReader`: the open handle; validates the file, detects format and tile size, and
//!   serves pooled tile and metadata reads.
//! - `Metadata`: the normalised contents of the `metadata` table.

mod metadata;
mod reader;

pub use metadata::{Metadata, MetadataValue};
pub use reader::{MBTilesReader, POOL_SIZE};

use std::{
	ffi::OsString,
	path::{Path, PathBuf},
};

/// File extension of MBTiles containers, without the dot.
pub const MBTILES_EXTENSION: &str = "mbtiles";

/// Path of the rollback journal SQLite keeps next to a database while a write is pending.
pub(crate) fn journal_path(path: &Path) -> PathBuf {
	let mut name = OsString::from(path.as_os_str());
	name.push("-journal");
	PathBuf::from(name)
}
