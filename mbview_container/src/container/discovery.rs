//! Recursive discovery of MBTiles files below a directory.

use super::mbtiles::{MBTILES_EXTENSION, journal_path};
use anyhow::{Context, Result};
use std::{
	fs, io,
	path::{Path, PathBuf},
};

/// Recursively lists all `*.mbtiles` files below `path`, sorted.
///
/// Files with a sibling `-journal` are still being written and are skipped. Symbolic links to
/// directories are not followed. `path` may also name a single file.
///
/// # Errors
/// Returns an error if `path` does not exist or a directory cannot be read.
pub fn find_mbtiles(path: &Path) -> Result<Vec<PathBuf>> {
	log::debug!("find mbtiles in {path:?}");

	let mut found = Vec::new();
	walk(path, &mut found).with_context(|| format!("searching for mbtiles files in {path:?}"))?;
	found.sort();

	log::debug!("found {} mbtiles files", found.len());
	Ok(found)
}

fn walk(path: &Path, found: &mut Vec<PathBuf>) -> io::Result<()> {
	if fs::symlink_metadata(path)?.is_dir() {
		for entry in fs::read_dir(path)? {
			walk(&entry?.path(), found)?;
		}
	} else if is_mbtiles(path) {
		if journal_path(path).exists() {
			log::debug!("skipping incomplete {path:?}");
		} else {
			found.push(path.to_path_buf());
		}
	}
	Ok(())
}

fn is_mbtiles(path: &Path) -> bool {
	path.extension().is_some_and(|ext| ext == MBTILES_EXTENSION)
}
