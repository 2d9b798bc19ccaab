//! Configuration parsing for octree baking.

use anyhow::{Context, Result};
use glam::Vec3;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use voxel_octree::MAX_DEPTH;

/// Root configuration for one baked octree.
#[derive(Debug, Deserialize)]
pub struct Config {
	/// Base name of the output files.
	pub name: String,
	/// Center of the root cube.
	#[serde(default)]
	pub center: [f32; 3],
	/// Half of the root cube's edge length.
	pub half_extent: f32,
	/// Subdivision depth of the sampled tree.
	pub max_depth: u32,
	/// What to voxelize.
	pub source: SourceConfig,
}

/// Geometry or samples to voxelize.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
	/// Solid ball around the root center.
	Sphere { radius: f32, color: [f32; 3] },
	/// Heart-shaped sextic surface around the origin.
	Heart { color: [f32; 3] },
	/// Seeded random pastel point cloud in `[-0.5, 0.5)³`.
	RandomCloud { count: usize, seed: u64 },
	/// ASCII PCD file, path relative to the config file.
	Pcd {
		path: PathBuf,
		color: [f32; 3],
		#[serde(default = "default_scale")]
		scale: f32,
	},
}

fn default_scale() -> f32 {
	1.0
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate configuration from TOML text.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config = toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		if config.name.trim().is_empty() {
			anyhow::bail!("name must not be empty");
		}
		if config.max_depth > MAX_DEPTH {
			anyhow::bail!(
				"max_depth must be at most {}, got {}",
				MAX_DEPTH,
				config.max_depth
			);
		}
		if !(config.half_extent > 0.0) {
			anyhow::bail!("half_extent must be positive, got {}", config.half_extent);
		}
		match &config.source {
			SourceConfig::Sphere { radius, .. } if !(*radius > 0.0) => {
				anyhow::bail!("sphere radius must be positive, got {}", radius);
			}
			SourceConfig::Pcd { scale, .. } if !(*scale > 0.0) => {
				anyhow::bail!("pcd scale must be positive, got {}", scale);
			}
			_ => {}
		}

		Ok(config)
	}

	/// Root cube center.
	pub fn center(&self) -> Vec3 {
		Vec3::from_array(self.center)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const HEART: &str = r#"
name = "heart"
half_extent = 0.5
max_depth = 4

[source]
kind = "heart"
color = [1.0, 0.2, 0.3]
"#;

	#[test]
	fn test_parse_heart() {
		let config = Config::parse(HEART).expect("Heart config should parse");
		assert_eq!(config.name, "heart");
		assert_eq!(config.center(), Vec3::ZERO);
		assert_eq!(config.max_depth, 4);
		assert_eq!(
			config.source,
			SourceConfig::Heart {
				color: [1.0, 0.2, 0.3]
			}
		);
	}

	#[test]
	fn test_parse_each_source_kind() {
		let sphere = Config::parse(
			r#"
name = "ball"
center = [1.0, 2.0, 3.0]
half_extent = 2.0
max_depth = 3
source = { kind = "sphere", radius = 1.5, color = [0.0, 0.0, 1.0] }
"#,
		)
		.expect("Sphere config should parse");
		assert_eq!(sphere.center(), Vec3::new(1.0, 2.0, 3.0));
		assert!(matches!(sphere.source, SourceConfig::Sphere { radius, .. } if radius == 1.5));

		let cloud = Config::parse(
			r#"
name = "cloud"
half_extent = 0.5
max_depth = 2
source = { kind = "random_cloud", count = 300, seed = 42 }
"#,
		)
		.expect("Random cloud config should parse");
		assert_eq!(cloud.source, SourceConfig::RandomCloud { count: 300, seed: 42 });

		let pcd = Config::parse(
			r#"
name = "scan"
half_extent = 1.0
max_depth = 5
source = { kind = "pcd", path = "scan.pcd", color = [0.5, 0.5, 0.5] }
"#,
		)
		.expect("PCD config should parse");
		assert_eq!(
			pcd.source,
			SourceConfig::Pcd {
				path: PathBuf::from("scan.pcd"),
				color: [0.5, 0.5, 0.5],
				scale: 1.0,
			}
		);
	}

	#[test]
	fn test_rejects_depth_beyond_max() {
		let text = HEART.replace("max_depth = 4", &format!("max_depth = {}", MAX_DEPTH + 1));
		let err = Config::parse(&text).unwrap_err();
		assert!(err.to_string().contains("max_depth"), "{}", err);
	}

	#[test]
	fn test_rejects_non_positive_extent() {
		let text = HEART.replace("half_extent = 0.5", "half_extent = 0.0");
		let err = Config::parse(&text).unwrap_err();
		assert!(err.to_string().contains("half_extent"), "{}", err);
	}

	#[test]
	fn test_rejects_non_positive_scale() {
		let err = Config::parse(
			r#"
name = "scan"
half_extent = 1.0
max_depth = 2
source = { kind = "pcd", path = "scan.pcd", color = [1.0, 1.0, 1.0], scale = -2.0 }
"#,
		)
		.unwrap_err();
		assert!(err.to_string().contains("scale"), "{}", err);
	}

	#[test]
	fn test_rejects_unknown_source() {
		let text = HEART.replace("kind = \"heart\"", "kind = \"torus\"");
		assert!(Config::parse(&text).is_err());
	}

	#[test]
	fn test_load_missing_file() {
		let err = Config::load(Path::new("/nonexistent/bake.toml")).unwrap_err();
		assert!(err.to_string().contains("Failed to read config file"), "{}", err);
	}
}
