//! Point-cloud bucketing into octree leaves.

use std::array;

use glam::Vec3;

use super::assert_depth;
use crate::octree::{Cell, VoxelNode};
use crate::samples::Sample;

/// Builds a tree whose leaves carry the mean color of the samples they hold.
///
/// Every finest-level cell scans the full sample list, so cost is
/// `O(samples × 8^max_depth)`. There is no spatial index.
pub struct PointCloudSampler;

impl PointCloudSampler {
  /// Bucket `samples` into the cube at `center` with `half_extent`.
  ///
  /// A finest-level cell takes every sample whose Chebyshev distance to its
  /// center is strictly below its half-extent. Samples on a cell face belong
  /// to no cell. A cell with no samples is `Empty`.
  ///
  /// # Panics
  /// If `max_depth` exceeds [`crate::constants::MAX_DEPTH`].
  #[cfg_attr(feature = "instrument", tracing::instrument(skip_all, name = "sampling::point_cloud"))]
  pub fn build(samples: &[Sample], center: Vec3, half_extent: f32, max_depth: u32) -> VoxelNode {
    assert_depth(max_depth);
    let root = build_cell(samples, Cell::new(center, half_extent), max_depth);
    tracing::debug!(
      samples = samples.len(),
      max_depth,
      nodes = root.count(),
      "point cloud sampled"
    );
    root
  }
}

fn build_cell(samples: &[Sample], cell: Cell, depth: u32) -> VoxelNode {
  if depth == 0 {
    return match mean_color_within(samples, &cell) {
      Some(color) => VoxelNode::leaf(color),
      None => VoxelNode::empty(),
    };
  }

  VoxelNode::internal(array::from_fn(|octant| {
    build_cell(samples, cell.child(octant), depth - 1)
  }))
}

/// Mean color of the samples strictly inside `cell`, if any.
fn mean_color_within(samples: &[Sample], cell: &Cell) -> Option<Vec3> {
  let (count, sum) = samples
    .iter()
    .filter(|sample| cell.contains_strict(sample.position))
    .fold((0usize, Vec3::ZERO), |(count, sum), sample| {
      (count + 1, sum + sample.color)
    });

  (count > 0).then(|| sum * (1.0 / count as f32))
}

#[cfg(test)]
#[path = "point_cloud_test.rs"]
mod point_cloud_test;
