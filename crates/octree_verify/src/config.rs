//! Configuration for neighbor verification runs.

use anyhow::{Context, Result};
use loc_octree::TreeConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration for a verification run.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Tree depth and world mapping.
	pub tree: TreeConfig,
	/// Seed of the first random tree; later trees use seed + index.
	pub seed: u64,
	/// Chance that each cell below the root is split.
	pub split_probability: f64,
	/// Number of random trees to build and check.
	pub trees: u32,
	/// Write the last tree's records as JSON here.
	pub dump: Option<PathBuf>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			tree: TreeConfig::default(),
			seed: default_seed(),
			split_probability: default_split_probability(),
			trees: 1,
			dump: None,
		}
	}
}

fn default_seed() -> u64 {
	2010
}

fn default_split_probability() -> f64 {
	0.3
}

impl Config {
	/// Load configuration from a TOML file.
	///
	/// Not validated here; command-line overrides apply first.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		toml::from_str(&content).with_context(|| "Failed to parse config TOML")
	}

	/// Check values the tree itself does not check.
	pub fn validate(&self) -> Result<()> {
		self.tree
			.validate()
			.context("Invalid [tree] section")?;
		if !(0.0..=1.0).contains(&self.split_probability) {
			anyhow::bail!(
				"split_probability must be in [0, 1], got {}",
				self.split_probability
			);
		}
		if self.trees == 0 {
			anyhow::bail!("trees must be at least 1");
		}
		Ok(())
	}
}
