mod discovery;
pub use discovery::find_mbtiles;

mod mbtiles;
pub use mbtiles::*;
