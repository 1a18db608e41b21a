//! Leaf types for reading MBTiles containers.
//!
//! - [`TileFormat`]: the closed set of tile payload formats a container may hold.
//! - [`MBTilesError`]: the typed failures surfaced by sniffing and container access.
//! - [`sniff`]: header-only classification of tile payloads and tile size detection.
//!
//! Nothing in this crate touches the filesystem or a database; every function is pure
//! and operates on byte slices.

mod error;
pub use error::*;

pub mod sniff;
pub use sniff::{detect_dimension, detect_format};

pub mod types;
pub use types::*;
