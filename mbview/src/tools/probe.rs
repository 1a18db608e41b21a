use anyhow::Result;
use clap::Args;
use mbview_container::MBTilesReader;
use std::path::PathBuf;
use time::format_description::well_known::Rfc3339;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// MBTiles file you want to probe
	#[arg(required = true)]
	filename: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!("probe {:?}", arguments.filename);

	let reader = MBTilesReader::open_path(&arguments.filename)?;
	println!("{}", describe(&reader)?);
	reader.close();

	Ok(())
}

fn describe(reader: &MBTilesReader) -> Result<String> {
	let format = reader.tile_format();
	let tile_size = match reader.tile_size() {
		0 => String::from("unknown"),
		size => format!("{size}px"),
	};

	Ok([
		format!("filename:  {}", reader.filename().display()),
		format!("format:    {format}"),
		format!("mime type: {}", format.as_mime_str().unwrap_or("-")),
		format!("tile size: {tile_size}"),
		format!("timestamp: {}", reader.timestamp().format(&Rfc3339)?),
	]
	.join("\n"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::TempDir;
	use mbview_container::testing::*;

	#[test]
	fn describes_raster_container() -> Result<()> {
		let dir = TempDir::new()?;
		let path = dir.path().join("geography-class-png.mbtiles");
		geography_class().write(&path)?;

		let reader = MBTilesReader::open_path(&path)?;
		let text = describe(&reader)?;
		assert!(text.contains("format:    png\n"));
		assert!(text.contains("mime type: image/png\n"));
		assert!(text.contains("tile size: 256px\n"));
		assert!(text.contains("timestamp: "));
		Ok(())
	}

	#[test]
	fn describes_never_opened_reader() -> Result<()> {
		let text = describe(&MBTilesReader::default())?;
		assert!(text.contains("mime type: -\n"));
		assert!(text.contains("tile size: unknown\n"));
		assert!(text.ends_with("timestamp: 1970-01-01T00:00:00Z"));
		Ok(())
	}
}
