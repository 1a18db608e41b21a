use anyhow::{Context, Result, bail};
use clap::Args;
use mbview_container::MBTilesReader;
use std::{
	fs,
	io::{Write, stdout},
	path::PathBuf,
};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// MBTiles file to read from
	#[arg(required = true)]
	filename: PathBuf,

	/// zoom level
	z: u32,

	/// tile column
	x: u32,

	/// tile row, in TMS order as stored in the file
	y: u32,

	/// write the tile to this file instead of stdout
	#[arg(long, short)]
	output: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let Subcommand { z, x, y, .. } = *arguments;

	let reader = MBTilesReader::open_path(&arguments.filename)?;
	let tile = reader.read_tile(z, x, y)?;
	reader.close();

	let Some(data) = tile else {
		bail!("tile {z}/{x}/{y} not found in {:?}", arguments.filename);
	};
	log::info!("tile {z}/{x}/{y}: {} bytes of {}", data.len(), reader.tile_format());

	match &arguments.output {
		Some(path) => fs::write(path, &data).with_context(|| format!("writing tile to {path:?}"))?,
		None => stdout().lock().write_all(&data)?,
	}

	Ok(())
}
