//! Fixture containers for tests.
//!
//! [`MBTilesBuilder`] writes a small MBTiles file with the standard schema; the tile helpers
//! produce payloads of every format the reader distinguishes. Compiled for this crate's tests
//! and, with the `test` feature, for downstream test suites.

use anyhow::Result;
use image::{ExtendedColorType, ImageEncoder, codecs::jpeg::JpegEncoder, codecs::png::PngEncoder};
use r2d2_sqlite::rusqlite::{Connection, params};
use std::{fs, path::Path};

/// Start of a gzip-wrapped vector tile.
pub const PBF_TILE: &[u8] = b"\x1f\x8b\x08\x00\x00\x00\x00\x00\x02\x03\xe3\x62\x00\x00";

/// First 28 bytes of a 320px lossy WebP.
pub const LOSSY_WEBP_TILE: &[u8] = b"RIFF\xe2\x28\x00\x00WEBPVP8 \xd6\x28\x00\x00\x92\xb3\x00\x9d\x01\x2a\x40\x01";

/// Builder for MBTiles fixture files.
///
/// ```rust,ignore
/// MBTilesBuilder::new()
/// 	.tile(0, 0, 0, png_tile(256))
/// 	.metadata("name", "fixture")
/// 	.write(&path)?;
/// ```
#[derive(Clone, Debug)]
pub struct MBTilesBuilder {
	tiles_table: bool,
	metadata_table: bool,
	tiles: Vec<(u32, u32, u32, Vec<u8>)>,
	metadata: Vec<(String, String)>,
	sql: Vec<String>,
}

impl MBTilesBuilder {
	pub fn new() -> Self {
		MBTilesBuilder {
			tiles_table: true,
			metadata_table: true,
			tiles: Vec::new(),
			metadata: Vec::new(),
			sql: Vec::new(),
		}
	}

	/// A valid SQLite database without any table.
	pub fn empty_database() -> Self {
		MBTilesBuilder::new().without_tiles_table().without_metadata_table()
	}

	pub fn without_tiles_table(mut self) -> Self {
		self.tiles_table = false;
		self
	}

	pub fn without_metadata_table(mut self) -> Self {
		self.metadata_table = false;
		self
	}

	/// Adds a tile; `y` is the stored TMS `tile_row`.
	pub fn tile(mut self, z: u32, x: u32, y: u32, data: Vec<u8>) -> Self {
		self.tiles.push((z, x, y, data));
		self
	}

	pub fn metadata(mut self, name: &str, value: &str) -> Self {
		self.metadata.push((name.to_string(), value.to_string()));
		self
	}

	/// Runs a raw statement after the tables have been filled.
	pub fn sql(mut self, statement: &str) -> Self {
		self.sql.push(statement.to_string());
		self
	}

	/// Writes the database to `path`, replacing an existing file.
	pub fn write(&self, path: &Path) -> Result<()> {
		if path.exists() {
			fs::remove_file(path)?;
		}

		let mut conn = Connection::open(path)?;
		let transaction = conn.transaction()?;

		if self.metadata_table {
			transaction.execute_batch("CREATE TABLE metadata (name TEXT, value TEXT, UNIQUE (name));")?;
			for (name, value) in &self.metadata {
				transaction.execute(
					"INSERT INTO metadata (name, value) VALUES (?1, ?2)",
					params![name, value],
				)?;
			}
		}

		if self.tiles_table {
			transaction.execute_batch(
				"CREATE TABLE tiles (zoom_level INTEGER, tile_column INTEGER, tile_row INTEGER, tile_data BLOB);
				CREATE UNIQUE INDEX tile_index ON tiles (zoom_level, tile_column, tile_row);",
			)?;
			for (z, x, y, data) in &self.tiles {
				transaction.execute(
					"INSERT INTO tiles (zoom_level, tile_column, tile_row, tile_data) VALUES (?1, ?2, ?3, ?4)",
					params![z, x, y, data],
				)?;
			}
		}

		for statement in &self.sql {
			transaction.execute_batch(statement)?;
		}

		transaction.commit()?;
		conn.close().map_err(|(_, err)| err)?;
		Ok(())
	}
}

impl Default for MBTilesBuilder {
	fn default() -> Self {
		MBTilesBuilder::new()
	}
}

/// A two-level 256px PNG container with typical raster metadata and one empty value.
pub fn geography_class() -> MBTilesBuilder {
	let mut builder = MBTilesBuilder::new()
		.metadata("name", "Geography Class")
		.metadata("description", "One of the example maps that comes with TileMill. ")
		.metadata("format", "png")
		.metadata("minzoom", "0")
		.metadata("maxzoom", "1")
		.metadata("bounds", "-180,-85.0511,180,85.0511")
		.metadata("center", "0,20,0")
		.metadata("legend", "")
		.tile(0, 0, 0, png_tile(256));
	for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
		builder = builder.tile(1, x, y, png_tile(256));
	}
	builder
}

fn pixels(size: u32) -> Vec<u8> {
	(0..size * size * 3).map(|i| (i % 7 * 36) as u8).collect()
}

/// An RGB PNG of `size`×`size` pixels.
pub fn png_tile(size: u32) -> Vec<u8> {
	let mut buffer = Vec::new();
	PngEncoder::new(&mut buffer)
		.write_image(&pixels(size), size, size, ExtendedColorType::Rgb8)
		.expect("encoding png fixture");
	buffer
}

/// An RGB JPEG of `size`×`size` pixels.
pub fn jpeg_tile(size: u32) -> Vec<u8> {
	let mut buffer = Vec::new();
	JpegEncoder::new_with_quality(&mut buffer, 80)
		.write_image(&pixels(size), size, size, ExtendedColorType::Rgb8)
		.expect("encoding jpeg fixture");
	buffer
}
