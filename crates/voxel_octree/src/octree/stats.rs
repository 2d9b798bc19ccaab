//! Node statistics for octree trees.

/// Per-variant node counts of a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
	/// Number of internal nodes.
	pub internal: usize,
	/// Number of solid leaves.
	pub leaves: usize,
	/// Number of empty nodes.
	pub empties: usize,
	/// Deepest level reached (root = 0).
	pub depth: u32,
}

impl TreeStats {
	/// Total number of nodes. Matches [`super::VoxelNode::count`].
	#[inline]
	pub fn total(&self) -> usize {
		self.internal + self.leaves + self.empties
	}

	/// Number of terminal nodes (leaves and empties).
	#[inline]
	pub fn terminals(&self) -> usize {
		self.leaves + self.empties
	}
}
