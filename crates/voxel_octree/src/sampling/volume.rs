//! Volume sampling from an enclosure predicate.

use std::array;

use glam::Vec3;

use super::assert_depth;
use crate::octree::{Cell, VoxelNode};

/// Inside/outside test for a point in space.
///
/// Implemented for every `Fn(Vec3) -> bool`, so closures can be passed
/// directly to [`VolumeSampler::build`].
pub trait Enclosure {
  /// Whether `point` is inside the solid.
  fn encloses(&self, point: Vec3) -> bool;
}

impl<F> Enclosure for F
where
  F: Fn(Vec3) -> bool,
{
  #[inline]
  fn encloses(&self, point: Vec3) -> bool {
    self(point)
  }
}

/// Builds a tree by testing the center of every finest-level cell.
pub struct VolumeSampler;

impl VolumeSampler {
  /// Sample `enclosed` over the cube at `center` with `half_extent`.
  ///
  /// At depth 0 the cell center decides between `Leaf(color)` and `Empty`;
  /// above that every cell subdivides into 8 octants. Exactly
  /// `8^max_depth` predicate evaluations are made.
  ///
  /// # Panics
  /// If `max_depth` exceeds [`crate::constants::MAX_DEPTH`].
  #[cfg_attr(feature = "instrument", tracing::instrument(skip_all, name = "sampling::volume"))]
  pub fn build<E: Enclosure>(
    enclosed: E,
    center: Vec3,
    half_extent: f32,
    max_depth: u32,
    color: Vec3,
  ) -> VoxelNode {
    assert_depth(max_depth);
    let root = build_cell(&enclosed, Cell::new(center, half_extent), max_depth, color);
    tracing::debug!(max_depth, nodes = root.count(), "volume sampled");
    root
  }
}

fn build_cell<E: Enclosure + ?Sized>(enclosed: &E, cell: Cell, depth: u32, color: Vec3) -> VoxelNode {
  if depth == 0 {
    return if enclosed.encloses(cell.center) {
      VoxelNode::leaf(color)
    } else {
      VoxelNode::empty()
    };
  }

  VoxelNode::internal(array::from_fn(|octant| {
    build_cell(enclosed, cell.child(octant), depth - 1, color)
  }))
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
