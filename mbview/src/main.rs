mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Recursively list MBTiles files in a directory
	Find(tools::find::Subcommand),

	/// Show tile format, tile size and timestamp of an MBTiles file
	Probe(tools::probe::Subcommand),

	#[clap(alias = "meta")]
	/// Print the metadata of an MBTiles file as JSON
	Metadata(tools::metadata::Subcommand),

	/// Extract a single tile from an MBTiles file
	Tile(tools::tile::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Find(arguments) => tools::find::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
		Commands::Metadata(arguments) => tools::metadata::run(arguments),
		Commands::Tile(arguments) => tools::tile::run(arguments),
	}
}
