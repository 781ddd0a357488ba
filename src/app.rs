use crate::{
	cli::Options,
	config::{MazeConfig, Storage},
	maze_gen::{find_path, generate, BitStore, GridMaze, PackedBits, PlainBits},
};
use anyhow::{Context, Result};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
	fs::File,
	io::{self, BufWriter, Write},
};

/// Fully resolved parameters of one run: command line over config file over defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
	pub rows: usize,
	pub columns: usize,
	pub seed: u64,
	pub storage: Storage,
	pub show_path: bool,
}

impl Settings {
	pub fn resolve(options: &Options, config: &MazeConfig) -> Self {
		let seed = options
			.seed
			.or(config.seed)
			.unwrap_or_else(|| rand::thread_rng().gen());
		Self {
			rows: options.rows,
			columns: options.columns,
			seed,
			storage: options.storage.unwrap_or(config.storage),
			show_path: config.show_path && !options.no_path,
		}
	}
}

/// builds, carves and optionally solves a maze, returning its rendering
pub fn build_maze(settings: &Settings) -> Result<String> {
	match settings.storage {
		Storage::Packed => build_with::<PackedBits>(settings),
		Storage::Plain => build_with::<PlainBits>(settings),
	}
}

fn build_with<B: BitStore>(settings: &Settings) -> Result<String> {
	let mut maze = GridMaze::<B>::new(settings.rows, settings.columns)?;
	let mut rng = StdRng::seed_from_u64(settings.seed);

	generate(&mut maze, &mut rng);
	if settings.show_path {
		let path = find_path(&mut maze)?;
		info!("path from {} to {} spans {} cells", maze.entry(), maze.exit(), path.len());
	}
	Ok(maze.render())
}

pub fn run(options: &Options) -> Result<()> {
	let config = match &options.config {
		Some(path) => MazeConfig::load(path)?,
		None => MazeConfig::default(),
	};
	let settings = Settings::resolve(options, &config);
	info!(
		"generating {}x{} maze with seed {} ({} storage)",
		settings.rows, settings.columns, settings.seed, settings.storage
	);

	let rendered = build_maze(&settings)?;

	match &options.output {
		Some(path) => {
			let file = File::create(path)
				.with_context(|| format!("could not create output file {}", path.display()))?;
			let mut out = BufWriter::new(file);
			out.write_all(rendered.as_bytes())?;
			out.flush()?;
			info!("maze written to {}", path.display());
		}
		None => {
			let stdout = io::stdout();
			let mut out = stdout.lock();
			out.write_all(rendered.as_bytes())?;
			out.flush()?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::{build_maze, run, Settings};
	use crate::{
		cli::Options,
		config::{MazeConfig, Storage},
	};
	use std::{env, fs};

	fn options(rows: usize, columns: usize) -> Options {
		Options {
			rows,
			columns,
			seed: None,
			storage: None,
			config: None,
			output: None,
			no_path: false,
		}
	}

	fn settings(rows: usize, columns: usize, seed: u64, storage: Storage) -> Settings {
		Settings {
			rows,
			columns,
			seed,
			storage,
			show_path: true,
		}
	}

	#[test]
	fn command_line_overrides_config() {
		let mut opts = options(3, 4);
		opts.seed = Some(5);
		opts.storage = Some(Storage::Plain);
		let config = MazeConfig {
			storage: Storage::Packed,
			seed: Some(77),
			show_path: true,
		};
		let resolved = Settings::resolve(&opts, &config);
		assert_eq!(resolved.seed, 5);
		assert_eq!(resolved.storage, Storage::Plain);
		assert!(resolved.show_path);
	}

	#[test]
	fn config_fills_in_missing_options() {
		let mut opts = options(3, 4);
		let config = MazeConfig {
			storage: Storage::Plain,
			seed: Some(77),
			show_path: false,
		};
		let resolved = Settings::resolve(&opts, &config);
		assert_eq!(resolved.seed, 77);
		assert_eq!(resolved.storage, Storage::Plain);
		assert!(!resolved.show_path);

		opts.no_path = true;
		assert!(!Settings::resolve(&opts, &MazeConfig::default()).show_path);
	}

	#[test]
	fn single_cell_renders_closed_and_marked() {
		let rendered = build_maze(&settings(1, 1, 0, Storage::Packed)).unwrap();
		assert_eq!(rendered, "+---+\n| . |\n+---+\n");
	}

	#[test]
	fn both_storages_render_the_same_maze() {
		for seed in 0..10 {
			let packed = build_maze(&settings(9, 13, seed, Storage::Packed)).unwrap();
			let plain = build_maze(&settings(9, 13, seed, Storage::Plain)).unwrap();
			assert_eq!(packed, plain);
		}
	}

	#[test]
	fn rendering_has_expected_shape() {
		let rendered = build_maze(&settings(4, 6, 3, Storage::Packed)).unwrap();
		let lines: Vec<&str> = rendered.lines().collect();
		assert_eq!(lines.len(), 2 * 4 + 1);
		for line in lines.iter() {
			assert_eq!(line.len(), 4 * 6 + 1);
		}
		assert_eq!(lines[0], "+---".repeat(6) + "+");
		assert_eq!(lines[8], "+---".repeat(6) + "+");
		assert!(lines[1].starts_with("| . "));
		assert!(lines[7].ends_with(" . |"));
	}

	#[test]
	fn bare_maze_has_no_path_marks() {
		let mut bare = settings(5, 5, 1, Storage::Packed);
		bare.show_path = false;
		assert!(!build_maze(&bare).unwrap().contains('.'));
	}

	#[test]
	fn writes_to_output_file() {
		let path = env::temp_dir().join(format!("maze_carve_test_{}.txt", std::process::id()));
		let mut opts = options(3, 3);
		opts.seed = Some(11);
		opts.output = Some(path.clone());
		run(&opts).unwrap();

		let written = fs::read_to_string(&path).unwrap();
		fs::remove_file(&path).unwrap();
		assert_eq!(written, build_maze(&settings(3, 3, 11, Storage::Packed)).unwrap());
	}

	#[test]
	fn missing_config_file_fails_the_run() {
		let mut opts = options(3, 3);
		opts.config = Some("/nonexistent/maze.yaml".into());
		assert!(run(&opts).is_err());
	}
}
