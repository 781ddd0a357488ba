//! Command line parsing.
//! `maze_carve ROWS COLUMNS [SEED]`, plus `--storage`, `--config`, `--output` and `--no-path`

use crate::config::Storage;
use clap::{error::ErrorKind, value_parser, Arg, ArgAction, Command};
use std::{ffi::OsString, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
	/// `--help` or `--version` was requested; not a failure
	#[error("{0}")]
	Info(clap::Error),
	#[error("Invalid number of arguments.\n{0}")]
	Usage(clap::Error),
	/// right number of arguments, but a seed or option value that does not parse
	#[error("Invalid argument value.\n{0}")]
	InvalidValue(clap::Error),
	#[error("Invalid size argument(s).")]
	InvalidSize,
}

impl CliError {
	/// the process exit status for this error
	pub fn exit_code(&self) -> u8 {
		match self {
			CliError::Info(_) => 0,
			CliError::Usage(_) | CliError::InvalidValue(_) => 1,
			CliError::InvalidSize => 2,
		}
	}
}

fn make_options_parser() -> Command {
	Command::new("maze_carve")
		.version(env!("CARGO_PKG_VERSION"))
		.about("Carves a random perfect maze and marks the path from its top-left to its bottom-right cell")
		.arg(Arg::new("rows").required(true).help("Number of rows, a positive integer"))
		.arg(Arg::new("columns").required(true).help("Number of columns, a positive integer"))
		.arg(
			Arg::new("seed")
				.value_parser(value_parser!(u64))
				.help("Random seed; a fresh one is drawn and logged when omitted"),
		)
		.arg(
			Arg::new("storage")
				.short('s')
				.long("storage")
				.help("Storage for the maze's cell and wall flags")
				.value_parser(Storage::NAMES),
		)
		.arg(
			Arg::new("config")
				.short('c')
				.long("config")
				.value_name("FILE")
				.value_parser(value_parser!(PathBuf))
				.help("YAML file with default settings"),
		)
		.arg(
			Arg::new("output")
				.short('o')
				.long("output")
				.value_name("FILE")
				.value_parser(value_parser!(PathBuf))
				.help("Write the maze to FILE instead of stdout"),
		)
		.arg(
			Arg::new("no-path")
				.long("no-path")
				.action(ArgAction::SetTrue)
				.help("Skip solving; render the bare maze"),
		)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
	pub rows: usize,
	pub columns: usize,
	pub seed: Option<u64>,
	pub storage: Option<Storage>,
	pub config: Option<PathBuf>,
	pub output: Option<PathBuf>,
	pub no_path: bool,
}

/// a dimension must be a positive decimal integer
fn parse_dimension(s: &str) -> Option<usize> {
	match s.trim().parse::<usize>() {
		Ok(n) if n > 0 => Some(n),
		_ => None,
	}
}

impl Options {
	/// parses the full argument list, program name first
	pub fn parse_from_args<I, T>(args: I) -> Result<Self, CliError>
	where
		I: IntoIterator<Item = T>,
		T: Into<OsString> + Clone,
	{
		let matches = make_options_parser().try_get_matches_from(args).map_err(|err| match err.kind() {
			ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliError::Info(err),
			ErrorKind::ValueValidation | ErrorKind::InvalidValue => CliError::InvalidValue(err),
			_ => CliError::Usage(err),
		})?;

		let dimension = |name: &str| {
			matches
				.get_one::<String>(name)
				.and_then(|s| parse_dimension(s))
				.ok_or(CliError::InvalidSize)
		};
		let rows = dimension("rows")?;
		let columns = dimension("columns")?;

		Ok(Options {
			rows,
			columns,
			seed: matches.get_one::<u64>("seed").copied(),
			// already restricted to Storage::NAMES by the parser
			storage: matches.get_one::<String>("storage").and_then(|name| name.parse().ok()),
			config: matches.get_one::<PathBuf>("config").cloned(),
			output: matches.get_one::<PathBuf>("output").cloned(),
			no_path: matches.get_flag("no-path"),
		})
	}
}
