#![allow(unused)]

use assert_cmd::{Command, cargo};
use assert_fs::TempDir;
use mbview_container::testing::*;
use std::path::PathBuf;

#[cfg(windows)]
pub const BINARY_NAME: &str = "mbview.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "mbview";

/// Helper to create a Command for the mbview binary.
pub fn mbview_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Writes the raster fixture container into a fresh temp dir.
pub fn raster_fixture() -> (TempDir, PathBuf) {
	let dir = TempDir::new().expect("failed to create temp dir");
	let path = dir.path().join("geography-class-png.mbtiles");
	geography_class().write(&path).expect("failed to write fixture");
	(dir, path)
}

/// Writes a vector tile container without zoom metadata into a fresh temp dir.
pub fn vector_fixture() -> (TempDir, PathBuf) {
	let dir = TempDir::new().expect("failed to create temp dir");
	let path = dir.path().join("world_cities.mbtiles");
	MBTilesBuilder::new()
		.metadata("name", "World Cities")
		.metadata("json", r#"{"vector_layers":[{"id":"cities"}]}"#)
		.tile(0, 0, 0, PBF_TILE.to_vec())
		.tile(6, 10, 40, PBF_TILE.to_vec())
		.write(&path)
		.expect("failed to write fixture");
	(dir, path)
}
