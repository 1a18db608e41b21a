use anyhow::Result;
use clap::Args;
use mbview_container::find_mbtiles;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// directory to search recursively
	/// files with an associated *-journal file are skipped
	#[arg(required = true, verbatim_doc_comment)]
	directory: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	for path in find_mbtiles(&arguments.directory)? {
		println!("{}", path.display());
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn missing_directory() {
		let err = run_command(vec!["mbview", "find", "./does-not-exist"]).unwrap_err();
		assert!(err.to_string().contains("does-not-exist"));
	}
}
