//! Octree module - owned voxel trees with implicit cell geometry.
//!
//! Nodes store only a color or eight children. A node's cell is derived from
//! the root cell and the octant path taken to reach it: the center moves by
//! half the child extent along the octant direction and the half-extent
//! halves at each level.
//!
//! # Module Structure
//!
//! - [`octant`]: canonical child order shared by every traversal
//! - [`cell`]: `Cell` - center/half-extent cube math
//! - [`node`]: `VoxelNode` - the tree, plus in-place culling
//! - [`stats`]: `TreeStats` - per-variant node counts

pub mod cell;
pub mod node;
pub mod octant;
pub mod stats;

// Re-exports
pub use cell::Cell;
pub use node::VoxelNode;
pub use octant::{child_center, direction, OCTANT_DIRECTIONS};
pub use stats::TreeStats;
