//! Read-only access to MBTiles containers.
//!
//! An MBTiles file is a SQLite database with a `tiles(zoom_level, tile_column, tile_row,
//! tile_data)` table and a `metadata(name, value)` table. This crate opens such a file,
//! validates its structure, detects the tile format and size once from a sample tile, and
//! then serves tile and metadata reads from a pool of read-only connections.
//!
//! # Quick start
//! ```rust,no_run
//! use mbview_container::*;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     for path in find_mbtiles(Path::new("/srv/tiles"))? {
//!         let reader = MBTilesReader::open_path(&path)?;
//!         println!("{path:?}: {} tiles of {}px", reader.tile_format(), reader.tile_size());
//!
//!         let metadata = reader.read_metadata()?;
//!         println!("zoom {:?}..{:?}", metadata.get_integer("minzoom"), metadata.get_integer("maxzoom"));
//!
//!         if let Some(tile) = reader.read_tile(0, 0, 0)? {
//!             println!("0/0/0 has {} bytes", tile.len());
//!         }
//!         reader.close();
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Features
//! - `test`: exposes the [`testing`] module to build fixture containers in downstream tests.

mod container;
pub use container::*;

#[cfg(any(test, feature = "test"))]
pub mod testing;

pub use mbview_core::{MBTilesError, TileFormat};
