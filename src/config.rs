use anyhow::{Context, Result};
use serde_derive::Deserialize;
use std::{fmt, fs, path::Path, str::FromStr};

/// Which boolean storage backs the maze's cell and wall arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Storage {
	Packed,
	Plain,
}

impl Storage {
	pub const NAMES: [&'static str; 2] = ["packed", "plain"];
}

impl fmt::Display for Storage {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(match self {
			Storage::Packed => "packed",
			Storage::Plain => "plain",
		})
	}
}

impl FromStr for Storage {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"packed" => Ok(Storage::Packed),
			"plain" => Ok(Storage::Plain),
			_ => Err(format!("unknown storage '{}', expected one of {:?}", s, Storage::NAMES)),
		}
	}
}

/// Settings read from an optional YAML file. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MazeConfig {
	pub storage: Storage,
	pub seed: Option<u64>,
	pub show_path: bool,
}

impl Default for MazeConfig {
	fn default() -> Self {
		Self {
			storage: Storage::Packed,
			seed: None,
			show_path: true,
		}
	}
}

impl MazeConfig {
	/// parses a config document. A document without any settings (empty, only comments, or `~`)
	/// yields the defaults
	pub fn from_yaml(source: &str) -> Result<Self> {
		let has_content = source.lines().map(str::trim).any(|line| {
			!line.is_empty() && !line.starts_with('#') && line != "---" && line != "..."
		});
		if !has_content {
			return Ok(Self::default());
		}
		let config: Option<Self> = serde_yaml::from_str(source).context("invalid maze config")?;
		Ok(config.unwrap_or_default())
	}

	pub fn load(path: &Path) -> Result<Self> {
		let source = fs::read_to_string(path)
			.with_context(|| format!("could not read config file {}", path.display()))?;
		Self::from_yaml(&source).with_context(|| format!("in config file {}", path.display()))
	}
}
