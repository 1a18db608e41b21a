//! This module defines the `TileFormat` enum, the closed set of payload formats an MBTiles
//! container may store, and their string and MIME representations.
//!
//! `Gzip` is only ever a raw sniffing result: vector tiles are stored gzip-wrapped, so a
//! container reader promotes `Gzip` to [`TileFormat::PBF`] before exposing it.
//!
//! # Examples
//!
//! ```rust
//! use mbview_core::TileFormat;
//!
//! assert_eq!(TileFormat::PNG.as_str(), "png");
//! assert_eq!(TileFormat::JPG.as_mime_str(), Some("image/jpeg"));
//! assert_eq!(TileFormat::Gzip.promote_vector(), TileFormat::PBF);
//! ```

use std::fmt::{Display, Formatter};

/// Enum representing the tile formats that can be sniffed from a payload.
///
/// # Variants
/// - `Unknown` - no signature matched (or nothing has been detected yet)
/// - `Gzip` - gzip-compressed payload, provisionally a vector tile
/// - `Zlib` - zlib/deflate-compressed payload
/// - `PNG` - PNG image
/// - `JPG` - JPEG image
/// - `PBF` - Mapbox Vector Tile in gzip-wrapped Protocol Buffer format
/// - `WEBP` - WebP image (lossy, lossless or extended)
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileFormat {
	#[default]
	Unknown,
	Gzip,
	Zlib,
	PNG,
	JPG,
	PBF,
	WEBP,
}

impl TileFormat {
	/// Returns a lowercase string identifier, or `""` for [`TileFormat::Unknown`].
	pub fn as_str(&self) -> &'static str {
		match self {
			TileFormat::Unknown => "",
			TileFormat::Gzip => "gzip",
			TileFormat::Zlib => "zlib",
			TileFormat::PNG => "png",
			TileFormat::JPG => "jpg",
			TileFormat::PBF => "pbf",
			TileFormat::WEBP => "webp",
		}
	}

	/// Returns the MIME content type used when serving tiles of this format.
	///
	/// `PBF` tiles are stored gzip-wrapped, so they must be served with
	/// `Content-Encoding: gzip`. Transport encodings and `Unknown` have no MIME type.
	pub fn as_mime_str(&self) -> Option<&'static str> {
		match self {
			TileFormat::PNG => Some("image/png"),
			TileFormat::JPG => Some("image/jpeg"),
			TileFormat::PBF => Some("application/x-protobuf"),
			TileFormat::WEBP => Some("image/webp"),
			TileFormat::Unknown | TileFormat::Gzip | TileFormat::Zlib => None,
		}
	}

	pub fn is_image(&self) -> bool {
		matches!(self, TileFormat::PNG | TileFormat::JPG | TileFormat::WEBP)
	}

	/// Promotes a raw `Gzip` sniffing result to `PBF`.
	///
	/// Vector tiles are the only gzip-wrapped payload expected in an MBTiles container, so
	/// the content inside the gzip stream is not inspected. Every other format is returned
	/// unchanged.
	pub fn promote_vector(self) -> TileFormat {
		match self {
			TileFormat::Gzip => TileFormat::PBF,
			other => other,
		}
	}
}

impl Display for TileFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(TileFormat::Unknown, "", None)]
	#[case(TileFormat::Gzip, "gzip", None)]
	#[case(TileFormat::Zlib, "zlib", None)]
	#[case(TileFormat::PNG, "png", Some("image/png"))]
	#[case(TileFormat::JPG, "jpg", Some("image/jpeg"))]
	#[case(TileFormat::PBF, "pbf", Some("application/x-protobuf"))]
	#[case(TileFormat::WEBP, "webp", Some("image/webp"))]
	fn names_and_mime_types(#[case] format: TileFormat, #[case] name: &str, #[case] mime: Option<&str>) {
		assert_eq!(format.as_str(), name);
		assert_eq!(format.to_string(), name);
		assert_eq!(format.as_mime_str(), mime);
	}

	#[test]
	fn only_gzip_is_promoted() {
		assert_eq!(TileFormat::Gzip.promote_vector(), TileFormat::PBF);
		for format in [
			TileFormat::Unknown,
			TileFormat::Zlib,
			TileFormat::PNG,
			TileFormat::JPG,
			TileFormat::PBF,
			TileFormat::WEBP,
		] {
			assert_eq!(format.promote_vector(), format);
		}
	}

	#[test]
	fn image_formats() {
		assert!(TileFormat::PNG.is_image());
		assert!(TileFormat::WEBP.is_image());
		assert!(!TileFormat::PBF.is_image());
		assert!(!TileFormat::Gzip.is_image());
		assert_eq!(TileFormat::default(), TileFormat::Unknown);
	}
}
