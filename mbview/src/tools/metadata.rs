use anyhow::Result;
use clap::Args;
use mbview_container::MBTilesReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// MBTiles file to read the metadata from
	#[arg(required = true)]
	filename: PathBuf,

	/// print compact JSON on a single line
	#[arg(long, short)]
	compact: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let reader = MBTilesReader::open_path(&arguments.filename)?;
	let metadata = reader.read_metadata()?;
	reader.close();

	let json = if arguments.compact {
		serde_json::to_string(&metadata)?
	} else {
		serde_json::to_string_pretty(&metadata)?
	};
	println!("{json}");

	Ok(())
}
