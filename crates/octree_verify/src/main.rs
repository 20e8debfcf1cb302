//! Octree neighbor verifier.
//!
//! Builds random non-uniform trees, checks every leaf's six face-neighbor
//! lists against the brute-force scan, and reports the tree shapes.
//!
//! Exit status is non-zero if any query disagrees.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use glam::DVec3;
use loc_octree::{subdivide_randomly, verify_neighbors, Face, Tree};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::Config;

/// Cross-check octree face-neighbor search against brute force.
#[derive(Parser, Debug)]
#[command(name = "verify_neighbors")]
#[command(about = "Cross-checks octree face-neighbor queries against a brute-force scan")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Number of tree levels (overrides config).
	#[arg(short, long)]
	levels: Option<u8>,

	/// Seed of the first tree (overrides config).
	#[arg(short, long)]
	seed: Option<u64>,

	/// Split probability below the root (overrides config).
	#[arg(short = 'p', long)]
	split_probability: Option<f64>,

	/// Number of trees to check (overrides config).
	#[arg(short, long)]
	trees: Option<u32>,

	/// Write the last tree's records as JSON (overrides config).
	#[arg(short, long)]
	dump: Option<PathBuf>,

	/// Print the neighbors of the leaf containing this point, as "x,y,z".
	#[arg(long, value_parser = parse_point)]
	probe: Option<[f64; 3]>,
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let args = Args::parse();

	let mut config = match &args.config {
		Some(path) => {
			tracing::info!("Loading config from: {}", path.display());
			Config::load(path)?
		}
		None => Config::default(),
	};
	if let Some(levels) = args.levels {
		config.tree.num_levels = levels;
	}
	if let Some(seed) = args.seed {
		config.seed = seed;
	}
	if let Some(p) = args.split_probability {
		config.split_probability = p;
	}
	if let Some(trees) = args.trees {
		config.trees = trees;
	}
	if args.dump.is_some() {
		config.dump = args.dump.clone();
	}
	config.validate()?;

	tracing::info!(
		levels = config.tree.num_levels,
		seed = config.seed,
		split_probability = config.split_probability,
		trees = config.trees,
		"Verifying neighbor search"
	);

	let mut failures = 0;
	let mut last_tree = None;
	for index in 0..config.trees {
		let seed = config.seed.wrapping_add(index as u64);
		let mut tree: Tree<()> =
			Tree::with_config(config.tree.clone()).context("Failed to create tree")?;
		let mut rng = StdRng::seed_from_u64(seed);
		subdivide_randomly(&mut tree, &mut rng, config.split_probability)
			.context("Random subdivision failed")?;

		let stats = tree.stats();
		let report = verify_neighbors(&tree);
		tracing::info!(
			seed,
			cells = stats.cell_count,
			leaves = stats.leaf_count,
			deepest = ?stats.deepest_leaf_level(),
			queries = report.queries,
			neighbors = report.neighbors,
			boundary = report.boundary_queries,
			mismatches = report.mismatches.len(),
			"Tree checked"
		);
		for mismatch in &report.mismatches {
			tracing::error!(
				cell = ?tree[mismatch.cell].code(),
				face = %mismatch.face,
				found = ?mismatch.found,
				expected = ?mismatch.expected,
				"Mismatch"
			);
		}
		if !report.is_consistent() {
			failures += 1;
		}
		last_tree = Some(tree);
	}

	if let Some(tree) = &last_tree {
		if let Some([x, y, z]) = args.probe {
			probe(tree, DVec3::new(x, y, z))?;
		}
		if let Some(path) = &config.dump {
			let json = serde_json::to_string_pretty(&tree.to_records())
				.context("Failed to serialize tree records")?;
			std::fs::write(path, json)
				.with_context(|| format!("Failed to write: {}", path.display()))?;
			tracing::info!("Records written to: {}", path.display());
		}
	}

	if failures > 0 {
		anyhow::bail!("{} of {} trees had neighbor mismatches", failures, config.trees);
	}
	tracing::info!("All {} trees consistent", config.trees);
	Ok(())
}

/// Print the leaf containing `point` and its neighbors on every face.
fn probe(tree: &Tree<()>, point: DVec3) -> Result<()> {
	let id = tree
		.locate_point(point)
		.with_context(|| format!("Cannot probe {}", point))?;
	let cell = &tree[id];
	println!(
		"Leaf at level {} code {:?} contains {}",
		cell.level(),
		cell.code(),
		point
	);
	for face in Face::ALL {
		let neighbors = tree.find_neighbors(id, face);
		let listed: Vec<_> = neighbors
			.iter()
			.map(|&n| format!("L{} {:?}", tree[n].level(), tree[n].code()))
			.collect();
		if listed.is_empty() {
			println!("  {:>6}: (domain boundary)", face);
		} else {
			println!("  {:>6}: {}", face, listed.join(", "));
		}
	}
	Ok(())
}

/// Parse "x,y,z" into three coordinates.
fn parse_point(text: &str) -> Result<[f64; 3], String> {
	let parts: Vec<&str> = text.split(',').map(str::trim).collect();
	if parts.len() != 3 {
		return Err(format!("expected x,y,z, got {:?}", text));
	}
	let mut point = [0.0; 3];
	for (slot, part) in point.iter_mut().zip(parts) {
		*slot = part
			.parse()
			.map_err(|e| format!("bad coordinate {:?}: {}", part, e))?;
	}
	Ok(point)
}
