pub mod find;
pub mod metadata;
pub mod probe;
pub mod tile;
