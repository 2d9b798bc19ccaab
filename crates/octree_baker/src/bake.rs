//! Sampling, culling and writing a baked octree.

use anyhow::{Context, Result};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use voxel_octree::{
	linearize, load_point_cloud, random_point_cloud,
	shapes::{Heart, Sphere},
	GpuInstance, InstanceBuffers, PointCloudSampler, TreeStats, VolumeSampler, VoxelNode,
};

use crate::config::{Config, SourceConfig};

/// Node counts of one tree snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeCounts {
	pub total: usize,
	pub internal: usize,
	pub leaves: usize,
	pub empties: usize,
}

impl From<TreeStats> for NodeCounts {
	fn from(stats: TreeStats) -> Self {
		Self {
			total: stats.total(),
			internal: stats.internal,
			leaves: stats.leaves,
			empties: stats.empties,
		}
	}
}

/// Written next to the instance buffer as `<name>.summary.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
	pub name: String,
	pub center: [f32; 3],
	pub half_extent: f32,
	pub max_depth: u32,
	pub culled: bool,
	pub before_cull: NodeCounts,
	pub after_cull: NodeCounts,
	pub instances: usize,
	/// Size of one record in `<name>.instances.bin`.
	pub instance_stride: usize,
}

/// A sampled (and optionally culled) tree with its summary.
pub struct Bake {
	pub tree: VoxelNode,
	pub instances: Vec<GpuInstance>,
	pub summary: Summary,
}

/// Sample the configured source, cull if requested and linearize.
///
/// Relative PCD paths resolve against `base_dir`.
pub fn run(config: &Config, base_dir: &Path, cull: bool) -> Result<Bake> {
	let mut tree = sample(config, base_dir)?;

	let before_cull = NodeCounts::from(tree.stats());
	log::info!(
		"Sampled {} nodes ({} leaves) at depth {}",
		before_cull.total,
		before_cull.leaves,
		config.max_depth
	);

	if cull {
		tree.cull();
	}
	let after_cull = NodeCounts::from(tree.stats());
	if cull {
		log::info!(
			"Culled to {} nodes ({} leaves)",
			after_cull.total,
			after_cull.leaves
		);
	}

	let voxels = linearize(&tree);
	let instances = InstanceBuffers::from_voxels(&voxels).interleaved();

	let summary = Summary {
		name: config.name.clone(),
		center: config.center,
		half_extent: config.half_extent,
		max_depth: config.max_depth,
		culled: cull,
		before_cull,
		after_cull,
		instances: instances.len(),
		instance_stride: std::mem::size_of::<GpuInstance>(),
	};

	Ok(Bake {
		tree,
		instances,
		summary,
	})
}

fn sample(config: &Config, base_dir: &Path) -> Result<VoxelNode> {
	let center = config.center();
	let tree = match &config.source {
		SourceConfig::Sphere { radius, color } => VolumeSampler::build(
			Sphere::new(center, *radius),
			center,
			config.half_extent,
			config.max_depth,
			Vec3::from_array(*color),
		),
		SourceConfig::Heart { color } => VolumeSampler::build(
			Heart,
			center,
			config.half_extent,
			config.max_depth,
			Vec3::from_array(*color),
		),
		SourceConfig::RandomCloud { count, seed } => {
			let mut rng = StdRng::seed_from_u64(*seed);
			let cloud = random_point_cloud(&mut rng, *count);
			PointCloudSampler::build(&cloud, center, config.half_extent, config.max_depth)
		}
		SourceConfig::Pcd { path, color, scale } => {
			let path = base_dir.join(path);
			let cloud = load_point_cloud(&path, Vec3::from_array(*color), *scale)
				.with_context(|| format!("Failed to load point cloud: {}", path.display()))?;
			log::info!("Loaded {} points from {}", cloud.len(), path.display());
			PointCloudSampler::build(&cloud, center, config.half_extent, config.max_depth)
		}
	};
	Ok(tree)
}

/// Write `<name>.instances.bin` and `<name>.summary.json` into `output_dir`.
///
/// Returns the paths written, instance buffer first.
pub fn write_outputs(bake: &Bake, output_dir: &Path) -> Result<(PathBuf, PathBuf)> {
	std::fs::create_dir_all(output_dir)
		.with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;

	let name = &bake.summary.name;
	let instances_path = output_dir.join(format!("{}.instances.bin", name));
	std::fs::write(&instances_path, bytemuck::cast_slice::<GpuInstance, u8>(&bake.instances))
		.with_context(|| format!("Failed to write: {}", instances_path.display()))?;

	let summary_path = output_dir.join(format!("{}.summary.json", name));
	let json = serde_json::to_vec_pretty(&bake.summary).context("Failed to serialize summary")?;
	std::fs::write(&summary_path, json)
		.with_context(|| format!("Failed to write: {}", summary_path.display()))?;

	Ok((instances_path, summary_path))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(source: &str, max_depth: u32) -> Config {
		Config::parse(&format!(
			"name = \"test\"\nhalf_extent = 0.5\nmax_depth = {}\nsource = {}\n",
			max_depth, source
		))
		.expect("Test config should parse")
	}

	#[test]
	fn test_sphere_bake_counts() {
		let config = config("{ kind = \"sphere\", radius = 0.4, color = [1.0, 0.0, 0.0] }", 3);
		let bake = run(&config, Path::new("."), true).expect("Bake should succeed");

		let summary = &bake.summary;
		assert_eq!(summary.before_cull.total, 1 + 8 + 64 + 512);
		assert!(summary.after_cull.total <= summary.before_cull.total);
		assert_eq!(summary.instances, summary.after_cull.leaves);
		assert_eq!(bake.instances.len(), summary.instances);
		assert_eq!(summary.instance_stride, 20);
	}

	#[test]
	fn test_no_cull_keeps_full_tree() {
		let config = config("{ kind = \"heart\", color = [1.0, 0.0, 0.0] }", 2);
		let bake = run(&config, Path::new("."), false).expect("Bake should succeed");

		assert!(!bake.summary.culled);
		assert_eq!(bake.summary.before_cull, bake.summary.after_cull);
		assert_eq!(bake.summary.instances, bake.summary.before_cull.leaves);
	}

	#[test]
	fn test_random_cloud_is_seeded() {
		let config = config("{ kind = \"random_cloud\", count = 200, seed = 9 }", 2);
		let a = run(&config, Path::new("."), true).expect("Bake should succeed");
		let b = run(&config, Path::new("."), true).expect("Bake should succeed");
		assert_eq!(a.tree, b.tree);
		assert_eq!(a.instances, b.instances);
	}

	#[test]
	fn test_pcd_source_resolves_relative_path() {
		let dir = tempfile::tempdir().expect("tempdir");
		std::fs::write(
			dir.path().join("two.pcd"),
			"VERSION 0.7\nFIELDS x y z\nDATA ascii\n0.1 0.1 0.1\n-0.1 -0.1 -0.1\n",
		)
		.expect("write pcd");

		let config = config(
			"{ kind = \"pcd\", path = \"two.pcd\", color = [0.0, 1.0, 0.0] }",
			1,
		);
		let bake = run(&config, dir.path(), true).expect("Bake should succeed");

		// One sample in octant 0 and one in octant 6.
		assert_eq!(bake.instances.len(), 2);
		assert_eq!(bake.instances[0].location_code, 0);
		assert_eq!(bake.instances[1].location_code, 6);
		assert_eq!(bake.instances[1].color, [0.0, 1.0, 0.0]);
	}

	#[test]
	fn test_missing_pcd_reports_path() {
		let dir = tempfile::tempdir().expect("tempdir");
		let config = config(
			"{ kind = \"pcd\", path = \"missing.pcd\", color = [0.0, 1.0, 0.0] }",
			1,
		);
		let err = run(&config, dir.path(), true).err().expect("Missing file should fail");
		assert!(err.to_string().contains("missing.pcd"), "{}", err);
	}

	#[test]
	fn test_write_outputs() {
		let dir = tempfile::tempdir().expect("tempdir");
		let config = config("{ kind = \"sphere\", radius = 0.3, color = [0.2, 0.4, 0.6] }", 3);
		let bake = run(&config, Path::new("."), true).expect("Bake should succeed");

		let out = dir.path().join("out");
		let (instances_path, summary_path) = write_outputs(&bake, &out).expect("Write should succeed");

		let bytes = std::fs::read(&instances_path).expect("read instances");
		assert_eq!(bytes.len(), bake.instances.len() * 20);
		let decoded: Vec<GpuInstance> = bytes
			.chunks_exact(bake.summary.instance_stride)
			.map(bytemuck::pod_read_unaligned)
			.collect();
		assert_eq!(decoded, bake.instances);

		let json: serde_json::Value =
			serde_json::from_slice(&std::fs::read(&summary_path).expect("read summary"))
				.expect("summary is JSON");
		assert_eq!(json["name"], "test");
		assert_eq!(json["instances"], bake.instances.len());
		assert_eq!(json["before_cull"]["total"], 585);
	}
}
