//! voxel_octree - Framework/engine independent voxel octrees for instanced
//! rendering
//!
//! This crate turns an implicit solid or a colored point cloud into a compact
//! octree and flattens it into per-instance arrays that a pointer-free
//! consumer (typically a GPU instancing stage) can draw directly.
//!
//! # Features
//!
//! - **Volume sampling**: Full-depth subdivision of a cube, testing an
//!   enclosure predicate at every finest cell center
//! - **Point-cloud sampling**: Mean-color bucketing of samples into finest
//!   cells by strict Chebyshev distance
//! - **Culling**: Single-pass bottom-up merge of uniform subtrees
//! - **Linearization**: Depth-first leaf records with base-8 location codes
//!   (packed) or explicit octant paths (debug)
//! - **PCD import**: ASCII point-cloud files
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use voxel_octree::{linearize, shapes::Sphere, VolumeSampler};
//!
//! let mut tree = VolumeSampler::build(Sphere::at_origin(1.0), Vec3::ZERO, 1.0, 3, Vec3::X);
//! let before = tree.count();
//! tree.cull();
//! assert!(tree.count() <= before);
//!
//! let instances = linearize(&tree);
//! assert_eq!(instances.len(), tree.stats().leaves);
//! ```

pub mod constants;
pub mod instances;
pub mod linearize;
pub mod pcd;
pub mod samples;
pub mod shapes;

// Re-export commonly used items
pub use constants::{CHILD_COUNT, MAX_DEPTH};
pub use instances::{GpuInstance, InstanceBuffers};
pub use linearize::{linearize, linearize_debug, DebugVoxel, LinearVoxel, LocationCode, OctantPath};
pub use pcd::{load_point_cloud, read_point_cloud, PcdError};
pub use samples::{random_point_cloud, PointCloud, Sample};

// Octree module for the owned voxel tree
pub mod octree;
pub use octree::{Cell, TreeStats, VoxelNode, OCTANT_DIRECTIONS};

// Tree construction from predicates and point clouds
pub mod sampling;
pub use sampling::{Enclosure, PointCloudSampler, VolumeSampler};
