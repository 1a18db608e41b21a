mod test_utilities;
use assert_cmd::{Command, cargo};
use predicates::str;
use rstest::rstest;
use test_utilities::BINARY_NAME;

#[test]
fn command() -> Result<(), Box<dyn std::error::Error>> {
	let mut cmd = Command::new(cargo::cargo_bin!());
	cmd.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
	Ok(())
}

#[rstest]
#[case("find", "[OPTIONS] <DIRECTORY>")]
#[case("probe", "[OPTIONS] <FILENAME>")]
#[case("metadata", "[OPTIONS] <FILENAME>")]
#[case("tile", "[OPTIONS] <FILENAME> <Z> <X> <Y>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) -> Result<(), Box<dyn std::error::Error>> {
	Command::new(cargo::cargo_bin!())
		.args(sub_command.split(" "))
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
	Ok(())
}
