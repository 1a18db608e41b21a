//! Normalised view of the MBTiles `metadata` table.
//!
//! Rows are coerced by key, following the MBTiles 1.3 conventions:
//! - `minzoom`, `maxzoom` → integer
//! - `bounds`, `center` → comma-separated list of floats
//! - `json` → a JSON object whose top-level fields are merged into the map
//! - everything else → string

use mbview_core::MBTilesError;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, btree_map};

/// A single coerced metadata value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
	Integer(i64),
	Floats(Vec<f64>),
	String(String),
	/// A field merged from the embedded `json` entry.
	Json(Value),
}

/// Metadata of one container, keyed by name.
///
/// Built fresh on every [`MBTilesReader::read_metadata`](crate::MBTilesReader::read_metadata)
/// call. A successful read always contains `minzoom` and `maxzoom`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Metadata(BTreeMap<String, MetadataValue>);

impl Metadata {
	/// Coerces one `metadata` row according to its key and stores it.
	///
	/// # Errors
	/// Returns [`MBTilesError::MetadataParseError`] for a non-integer zoom, a non-numeric
	/// `bounds`/`center` token, or a `json` value that is not a JSON object.
	pub fn insert_row(&mut self, key: &str, value: &str) -> Result<(), MBTilesError> {
		match key {
			"minzoom" | "maxzoom" => {
				let zoom = value.parse::<i64>().map_err(|err| MBTilesError::metadata(key, err))?;
				self.insert(key, MetadataValue::Integer(zoom));
			}
			"bounds" | "center" => {
				let floats = parse_floats(value).map_err(|reason| MBTilesError::metadata(key, reason))?;
				self.insert(key, MetadataValue::Floats(floats));
			}
			"json" => {
				let json: Value = serde_json::from_str(value).map_err(|err| MBTilesError::metadata(key, err))?;
				let Value::Object(object) = json else {
					return Err(MBTilesError::metadata(key, "expected a JSON object"));
				};
				for (name, value) in object {
					self.0.insert(name, MetadataValue::Json(value));
				}
			}
			_ => self.insert(key, MetadataValue::String(value.to_string())),
		}
		Ok(())
	}

	pub fn insert(&mut self, key: &str, value: MetadataValue) {
		self.0.insert(key.to_string(), value);
	}

	pub fn get(&self, key: &str) -> Option<&MetadataValue> {
		self.0.get(key)
	}

	pub fn get_integer(&self, key: &str) -> Option<i64> {
		match self.0.get(key)? {
			MetadataValue::Integer(value) => Some(*value),
			MetadataValue::Json(value) => value.as_i64(),
			_ => None,
		}
	}

	pub fn get_floats(&self, key: &str) -> Option<&[f64]> {
		match self.0.get(key)? {
			MetadataValue::Floats(values) => Some(values),
			_ => None,
		}
	}

	pub fn get_str(&self, key: &str) -> Option<&str> {
		match self.0.get(key)? {
			MetadataValue::String(value) => Some(value),
			MetadataValue::Json(value) => value.as_str(),
			_ => None,
		}
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, MetadataValue> {
		self.0.iter()
	}

	pub fn as_map(&self) -> &BTreeMap<String, MetadataValue> {
		&self.0
	}
}

impl<'a> IntoIterator for &'a Metadata {
	type Item = (&'a String, &'a MetadataValue);
	type IntoIter = btree_map::Iter<'a, String, MetadataValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Parses `"1.5, 2.1"` into `[1.5, 2.1]`. Stops at the first token that is not a float.
fn parse_floats(value: &str) -> Result<Vec<f64>, String> {
	value
		.split(',')
		.map(|token| {
			token
				.trim()
				.parse::<f64>()
				.map_err(|err| format!("could not parse {value:?} to floats: {err}"))
		})
		.collect()
}
