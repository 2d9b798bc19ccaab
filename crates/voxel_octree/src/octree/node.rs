//! VoxelNode - owned recursive octree node.
//!
//! A tree is built wholesale by a sampler, compacted once by [`VoxelNode::cull`],
//! and read-only afterwards. Each internal node exclusively owns its eight
//! children; geometry is implicit in the path from the root.

use std::mem;

use glam::Vec3;

use super::stats::TreeStats;
use crate::constants::CHILD_COUNT;

/// Octree node - empty space, a solid colored cell, or eight children.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum VoxelNode {
  /// No voxel in this cell.
  #[default]
  Empty,
  /// Solid cell with an RGB color in `[0, 1]³`.
  Leaf(Vec3),
  /// Subdivided cell. Children are stored in canonical octant order
  /// (see [`super::octant::OCTANT_DIRECTIONS`]).
  Internal(Box<[VoxelNode; CHILD_COUNT]>),
}

impl VoxelNode {
  /// Create a solid leaf.
  #[inline]
  pub fn leaf(color: Vec3) -> Self {
    VoxelNode::Leaf(color)
  }

  /// Create an empty node.
  #[inline]
  pub fn empty() -> Self {
    VoxelNode::Empty
  }

  /// Create an internal node, taking ownership of all eight subtrees.
  #[inline]
  pub fn internal(children: [VoxelNode; CHILD_COUNT]) -> Self {
    VoxelNode::Internal(Box::new(children))
  }

  #[inline]
  pub fn is_leaf(&self) -> bool {
    matches!(self, VoxelNode::Leaf(_))
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    matches!(self, VoxelNode::Empty)
  }

  #[inline]
  pub fn is_internal(&self) -> bool {
    matches!(self, VoxelNode::Internal(_))
  }

  /// Children of an internal node.
  ///
  /// # Panics
  /// If the node is a leaf or empty. Use [`Self::try_children`] when the
  /// variant is not known.
  pub fn children(&self) -> &[VoxelNode; CHILD_COUNT] {
    match self {
      VoxelNode::Internal(children) => &**children,
      other => panic!("children() called on non-internal node ({})", other.kind_name()),
    }
  }

  /// Children of an internal node, or `None` for terminal nodes.
  #[inline]
  pub fn try_children(&self) -> Option<&[VoxelNode; CHILD_COUNT]> {
    match self {
      VoxelNode::Internal(children) => Some(&**children),
      _ => None,
    }
  }

  /// Stored color. Only leaves carry one.
  #[inline]
  pub fn color(&self) -> Option<Vec3> {
    match self {
      VoxelNode::Leaf(color) => Some(*color),
      _ => None,
    }
  }

  /// Number of node objects in the current representation, this one included.
  pub fn count(&self) -> usize {
    match self {
      VoxelNode::Internal(children) => 1 + children.iter().map(VoxelNode::count).sum::<usize>(),
      _ => 1,
    }
  }

  /// Per-variant node counts and height of the tree.
  pub fn stats(&self) -> TreeStats {
    let mut stats = TreeStats::default();
    self.accumulate_stats(0, &mut stats);
    stats
  }

  fn accumulate_stats(&self, depth: u32, stats: &mut TreeStats) {
    stats.depth = stats.depth.max(depth);
    match self {
      VoxelNode::Empty => stats.empties += 1,
      VoxelNode::Leaf(_) => stats.leaves += 1,
      VoxelNode::Internal(children) => {
        stats.internal += 1;
        for child in children.iter() {
          child.accumulate_stats(depth + 1, stats);
        }
      }
    }
  }

  /// Compact the subtree in place.
  ///
  /// Children are culled first, then an internal node whose eight children
  /// are all empty becomes empty, and one whose eight children are leaves of
  /// exactly equal color becomes that leaf. Anything else stays internal.
  /// One call reaches the fixed point; calling again changes nothing.
  #[cfg_attr(feature = "instrument", tracing::instrument(skip_all, name = "octree::cull"))]
  pub fn cull(&mut self) {
    let VoxelNode::Internal(children) = self else {
      return;
    };

    for child in children.iter_mut() {
      child.cull();
    }

    if let Some(merged) = uniform_terminal(children) {
      *self = merged;
    }
  }

  fn kind_name(&self) -> &'static str {
    match self {
      VoxelNode::Empty => "empty",
      VoxelNode::Leaf(_) => "leaf",
      VoxelNode::Internal(_) => "internal",
    }
  }
}

/// Terminal node equivalent to `children`, if they are uniform.
///
/// Colors compare with exact component-wise equality.
fn uniform_terminal(children: &[VoxelNode; CHILD_COUNT]) -> Option<VoxelNode> {
  match &children[0] {
    VoxelNode::Empty => children
      .iter()
      .all(VoxelNode::is_empty)
      .then_some(VoxelNode::Empty),
    VoxelNode::Leaf(color) => children
      .iter()
      .all(|child| child.color() == Some(*color))
      .then(|| VoxelNode::Leaf(*color)),
    VoxelNode::Internal(_) => None,
  }
}

impl Drop for VoxelNode {
  // Tears the tree down through a heap work-list so native stack usage does
  // not grow with tree depth.
  fn drop(&mut self) {
    let VoxelNode::Internal(children) = self else {
      return;
    };

    let mut pending = Vec::new();
    detach_internal_children(children, &mut pending);

    while let Some(mut node) = pending.pop() {
      if let VoxelNode::Internal(children) = &mut node {
        detach_internal_children(children, &mut pending);
      }
      // `node` now only owns terminal children and drops without recursing.
    }
  }
}

fn detach_internal_children(children: &mut [VoxelNode; CHILD_COUNT], pending: &mut Vec<VoxelNode>) {
  for child in children.iter_mut() {
    if child.is_internal() {
      pending.push(mem::take(child));
    }
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
