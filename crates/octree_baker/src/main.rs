//! Voxel octree baker.
//!
//! Samples a configured solid or point cloud into an octree, culls it and
//! writes the linearized leaves as GPU instance records.
//!
//! Outputs, named after `name` in the config:
//! - <name>.instances.bin: packed `GpuInstance` records (RGB f32, location code u32, depth u32)
//! - <name>.summary.json: node counts before/after culling and instance count

mod bake;
mod config;

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use voxel_octree::linearize_debug;

use config::Config;

/// Voxel octree baker.
#[derive(Parser, Debug)]
#[command(name = "bake_octree")]
#[command(about = "Bakes a voxel octree into GPU instance buffers")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Output directory (default: next to the config file).
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Print every leaf as `RGB::r,g,b OCT::i,j,...` to stdout.
	#[arg(long)]
	dump_debug: bool,

	/// Skip culling and emit one instance per sampled leaf.
	#[arg(long)]
	no_cull: bool,
}

fn main() -> Result<()> {
	env_logger::init();
	let args = Args::parse();

	// Relative paths in the config resolve against its directory
	let base_dir = args
		.config
		.parent()
		.unwrap_or(Path::new("."))
		.to_path_buf();
	let output_dir = args.output.clone().unwrap_or_else(|| base_dir.clone());

	log::info!("Loading config from: {}", args.config.display());
	let config = Config::load(&args.config)?;

	let bake = bake::run(&config, &base_dir, !args.no_cull)?;

	if args.dump_debug {
		for voxel in linearize_debug(&bake.tree) {
			println!("{}", voxel);
		}
	}

	let (instances_path, summary_path) = bake::write_outputs(&bake, &output_dir)?;
	log::info!(
		"Wrote {} instances to {}",
		bake.summary.instances,
		instances_path.display()
	);
	log::info!("Wrote summary to {}", summary_path.display());

	Ok(())
}
