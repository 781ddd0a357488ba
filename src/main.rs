use log::debug;
use maze_carve::{
	app,
	cli::{CliError, Options},
};
use std::process::ExitCode;

/// exit status for failures after the arguments were accepted
const RUN_FAILURE: u8 = 3;

enum Failure {
	Cli(CliError),
	Run(anyhow::Error),
}

/// what the process prints and the status it exits with
#[derive(Debug, PartialEq)]
struct Exit {
	code: u8,
	stdout: Option<String>,
	stderr: Option<String>,
}

fn exit_status(result: &Result<(), Failure>) -> Exit {
	match result {
		Ok(()) => Exit { code: 0, stdout: None, stderr: None },
		// help and version text are regular output
		Err(Failure::Cli(err @ CliError::Info(_))) => Exit {
			code: err.exit_code(),
			stdout: Some(err.to_string()),
			stderr: None,
		},
		Err(Failure::Cli(err)) => Exit {
			code: err.exit_code(),
			stdout: None,
			stderr: Some(err.to_string()),
		},
		Err(Failure::Run(err)) => Exit {
			code: RUN_FAILURE,
			stdout: None,
			stderr: Some(format!("{:#}", err)),
		},
	}
}

fn init_logging() {
	let env = env_logger::Env::new()
		.filter_or("MAZE_LOG", "warn")
		.write_style("MAZE_LOG_STYLE");
	env_logger::init_from_env(env);
}

pub fn main() -> ExitCode {
	init_logging();

	let result = Options::parse_from_args(std::env::args_os())
		.map_err(Failure::Cli)
		.and_then(|options| {
			debug!("options: {:?}", options);
			app::run(&options).map_err(Failure::Run)
		});

	let exit = exit_status(&result);
	if let Some(out) = &exit.stdout {
		print!("{}", out);
	}
	if let Some(err) = &exit.stderr {
		eprintln!("{}", err);
	}
	ExitCode::from(exit.code)
}
