//! Read tiles and metadata from an MBTiles (SQLite) database.
//!
//! Opening a file runs these checks in order, the first failure wins:
//! 1. the file exists ([`MBTilesError::PathNotFound`])
//! 2. there is no `<file>-journal` next to it ([`MBTilesError::IncompleteContainer`])
//! 3. `tiles` and `metadata` exist ([`MBTilesError::MissingRequiredStructure`])
//! 4. `tiles` has at least one row ([`MBTilesError::EmptyTileSet`])
//! 5. the first tile has a known signature ([`MBTilesError::UndetectableFormat`])
//! 6. its tile size can be read ([`MBTilesError::MalformedHeader`])
//!
//! Format and tile size are detected **once**, from that first tile, and then trusted for the
//! whole container: every tile in one file is assumed to share format and size. Gzip payloads
//! are reported as [`TileFormat::PBF`].
//!
//! Validation uses a single read-only connection; only a valid file gets a pool of
//! [`POOL_SIZE`] read-only connections. All reads are synchronous: each one takes a
//! connection from the pool and returns it before the call returns.
//!
//! ## Usage
//! ```rust,no_run
//! use mbview_container::*;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let reader = MBTilesReader::open_path(Path::new("/srv/tiles/world.mbtiles"))?;
//!     assert_eq!(reader.tile_format(), TileFormat::PBF);
//!
//!     // tile_row is addressed in TMS order, as stored
//!     let _tile = reader.read_tile(2, 1, 1)?;
//!     reader.close();
//!     Ok(())
//! }
//! ```

use super::{Metadata, MetadataValue, journal_path};
use anyhow::{Context, Result, ensure};
use mbview_core::{MBTilesError, TileFormat, detect_dimension, detect_format};
use parking_lot::RwLock;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::{
	SqliteConnectionManager,
	rusqlite::{Connection, OpenFlags, OptionalExtension, params, types::ValueRef},
};
use std::{
	fs,
	io::ErrorKind,
	path::{Path, PathBuf},
	time::{Duration, SystemTime},
};
use time::OffsetDateTime;

/// Number of pooled read-only connections per open container.
pub const POOL_SIZE: u32 = 10;

/// How long a read waits for a free pooled connection. Effectively forever; `Duration::MAX`
/// would overflow the pool's deadline.
const CONNECTION_WAIT: Duration = Duration::from_secs(u32::MAX as u64);

/// An open MBTiles container.
///
/// States: a [`Default`] reader is never opened, [`open_path`](Self::open_path) returns an
/// open one, and [`close`](Self::close) moves it to closed for good. Reads on a reader that is
/// not open fail with [`MBTilesError::HandleClosed`].
///
/// The reader is `Send + Sync`; concurrent callers only contend for pool capacity.
pub struct MBTilesReader {
	filename: PathBuf,
	pool: RwLock<Option<Pool<SqliteConnectionManager>>>,
	tile_format: TileFormat,
	tile_size: u32,
	timestamp: OffsetDateTime,
}

impl MBTilesReader {
	/// Opens an MBTiles file for reading and validates its structure.
	///
	/// # Errors
	/// Returns the first failing check listed in the module docs, or an engine error if the
	/// file cannot be read as SQLite. No handle is returned on failure.
	pub fn open_path(path: &Path) -> Result<MBTilesReader> {
		log::debug!("open {path:?}");

		let stat = match fs::metadata(path) {
			Ok(stat) => stat,
			Err(err) if err.kind() == ErrorKind::NotFound => {
				return Err(MBTilesError::PathNotFound(path.to_path_buf()).into());
			}
			Err(err) => return Err(err).with_context(|| format!("reading file status of {path:?}")),
		};

		ensure!(
			!journal_path(path).exists(),
			MBTilesError::IncompleteContainer(path.to_path_buf())
		);

		let timestamp = round_to_second(stat.modified()?)?;

		// a single connection while verifying, the pool is only built for valid files
		let (tile_format, tile_size) = {
			let conn = Connection::open_with_flags(path, read_only_flags())
				.with_context(|| format!("opening SQLite database {path:?}"))?;
			validate_required_tables(&conn, path)?;
			detect_format_and_size(&conn, path)?
		};

		log::debug!("{path:?} holds {tile_format:?} tiles of {tile_size}px");

		let manager = SqliteConnectionManager::file(path).with_flags(read_only_flags());
		let pool = Pool::builder()
			.max_size(POOL_SIZE)
			.connection_timeout(CONNECTION_WAIT)
			.build(manager)
			.with_context(|| format!("creating connection pool for {path:?}"))?;

		Ok(MBTilesReader {
			filename: path.to_path_buf(),
			pool: RwLock::new(Some(pool)),
			tile_format,
			tile_size,
			timestamp,
		})
	}

	/// Releases all pooled connections. Safe to call repeatedly and on a never-opened reader.
	pub fn close(&self) {
		if self.pool.write().take().is_some() {
			log::debug!("closed {:?}", self.filename);
		}
	}

	pub fn is_open(&self) -> bool {
		self.pool.read().is_some()
	}

	/// Reads the raw bytes of one tile.
	///
	/// `y` is the stored `tile_row` (TMS order, not flipped). Returns `Ok(None)` if no tile is
	/// stored at these coordinates.
	///
	/// # Errors
	/// Returns [`MBTilesError::HandleClosed`] if the reader is not open, or the engine error if
	/// the query fails.
	pub fn read_tile(&self, z: u32, x: u32, y: u32) -> Result<Option<Vec<u8>>> {
		log::trace!("read tile {z}/{x}/{y}");

		let conn = self.connection()?;
		let mut stmt = conn.prepare_cached(
			"SELECT tile_data FROM tiles WHERE zoom_level = ?1 AND tile_column = ?2 AND tile_row = ?3",
		)?;

		let data = stmt
			.query_row(params![z, x, y], |row| row.get::<_, Option<Vec<u8>>>(0))
			.optional()
			.with_context(|| format!("reading tile {z}/{x}/{y} from {:?}", self.filename))?;

		// a NULL blob is a stored, empty tile
		Ok(data.map(Option::unwrap_or_default))
	}

	/// Reads and normalises the `metadata` table.
	///
	/// Rows with an empty value are skipped. If `minzoom` or `maxzoom` is missing or not an
	/// integer afterwards, both are set from the zoom levels present in `tiles` (`0` if there
	/// are none).
	///
	/// # Errors
	/// Returns [`MBTilesError::HandleClosed`] if the reader is not open, and
	/// [`MBTilesError::MetadataParseError`] if any value cannot be coerced; no partial map is
	/// returned.
	pub fn read_metadata(&self) -> Result<Metadata> {
		log::trace!("read metadata of {:?}", self.filename);

		let conn = self.connection()?;
		let mut metadata = Metadata::default();

		{
			let mut stmt =
				conn.prepare_cached("SELECT name, value FROM metadata WHERE name IS NOT NULL AND value IS NOT ''")?;
			let mut rows = stmt.query([])?;
			while let Some(row) = rows.next()? {
				let name: String = row.get(0)?;
				let Some(value) = value_as_text(row.get_ref(1)?) else {
					continue;
				};
				metadata
					.insert_row(&name, &value)
					.with_context(|| format!("reading metadata of {:?}", self.filename))?;
			}
		}

		if metadata.get_integer("minzoom").is_none() || metadata.get_integer("maxzoom").is_none() {
			log::debug!("inferring zoom range of {:?} from tiles", self.filename);

			let (min, max) = conn.query_row("SELECT min(zoom_level), max(zoom_level) FROM tiles", [], |row| {
				Ok((row.get::<_, Option<i64>>(0)?, row.get::<_, Option<i64>>(1)?))
			})?;
			metadata.insert("minzoom", MetadataValue::Integer(min.unwrap_or(0)));
			metadata.insert("maxzoom", MetadataValue::Integer(max.unwrap_or(0)));
		}

		Ok(metadata)
	}

	pub fn filename(&self) -> &Path {
		&self.filename
	}

	/// Format detected from the first tile when the container was opened.
	pub fn tile_format(&self) -> TileFormat {
		self.tile_format
	}

	/// Tile edge length in pixels detected when the container was opened, `0` if unknown.
	pub fn tile_size(&self) -> u32 {
		self.tile_size
	}

	/// Modification time of the file at open time, rounded to the nearest second.
	pub fn timestamp(&self) -> OffsetDateTime {
		self.timestamp
	}

	fn connection(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
		let pool = self.pool.read().clone().ok_or(MBTilesError::HandleClosed)?;
		pool
			.get()
			.with_context(|| format!("getting connection to {:?}", self.filename))
	}
}

impl Default for MBTilesReader {
	fn default() -> Self {
		MBTilesReader {
			filename: PathBuf::new(),
			pool: RwLock::new(None),
			tile_format: TileFormat::Unknown,
			tile_size: 0,
			timestamp: OffsetDateTime::UNIX_EPOCH,
		}
	}
}

impl std::fmt::Debug for MBTilesReader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MBTilesReader")
			.field("filename", &self.filename)
			.field("tile_format", &self.tile_format)
			.field("tile_size", &self.tile_size)
			.field("open", &self.is_open())
			.finish()
	}
}

fn read_only_flags() -> OpenFlags {
	OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
}

/// Checks that both `tiles` and `metadata` are present; views count too.
fn validate_required_tables(conn: &Connection, path: &Path) -> Result<()> {
	let count: i64 = conn
		.query_row(
			"SELECT count(*) FROM sqlite_master WHERE name IN ('tiles', 'metadata')",
			[],
			|row| row.get(0),
		)
		.with_context(|| format!("reading schema of {path:?}"))?;

	ensure!(count >= 2, MBTilesError::MissingRequiredStructure(path.to_path_buf()));
	Ok(())
}

/// Reads the first tile and detects the container's tile format and size from it.
fn detect_format_and_size(conn: &Connection, path: &Path) -> Result<(TileFormat, u32)> {
	let sample = conn
		.query_row("SELECT tile_data FROM tiles LIMIT 1", [], |row| {
			row.get::<_, Option<Vec<u8>>>(0)
		})
		.optional()
		.with_context(|| format!("reading sample tile of {path:?}"))?
		.ok_or_else(|| MBTilesError::EmptyTileSet(path.to_path_buf()))?
		.unwrap_or_default();

	let format = detect_format(&sample)
		.with_context(|| format!("detecting tile format of {path:?}"))?
		.promote_vector();

	let size = detect_dimension(format, &sample).with_context(|| format!("detecting tile size of {path:?}"))?;

	Ok((format, size))
}

/// SQLite converts any stored type to text on request; mirror that for non-text values.
fn value_as_text(value: ValueRef<'_>) -> Option<String> {
	match value {
		ValueRef::Null => None,
		ValueRef::Integer(value) => Some(value.to_string()),
		ValueRef::Real(value) => Some(value.to_string()),
		ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
	}
}

fn round_to_second(time: SystemTime) -> Result<OffsetDateTime> {
	let time = OffsetDateTime::from(time);
	let mut seconds = time.unix_timestamp();
	if time.nanosecond() >= 500_000_000 {
		seconds += 1;
	}
	Ok(OffsetDateTime::from_unix_timestamp(seconds)?)
}
