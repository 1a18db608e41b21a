mod tile_format;
pub use tile_format::*;
