//! Depth-first flattening of a tree into per-instance records.
//!
//! Only leaves produce output. Each leaf is identified by the octant path
//! from the root, emitted either packed into a [`LocationCode`] (for GPU
//! instancing) or spelled out as an [`OctantPath`] (for debug dumps). Both
//! forms come from the same traversal, so record order is identical.
//!
//! Linearizing before culling is valid but yields one record per
//! pre-merge leaf.

use std::fmt;

use glam::Vec3;
use smallvec::SmallVec;

use crate::constants::{CODE_RADIX, MAX_DEPTH, OCTANT_BITS};
use crate::octree::{Cell, VoxelNode};

/// Octant indices from the root down to a node.
pub type OctantPath = SmallVec<[u8; MAX_DEPTH as usize]>;

/// Base-8 packed octant path.
///
/// Digit `i` (counting from the least significant) is the octant chosen at
/// level `i + 1`, so the first subdivision below the root is the lowest
/// digit. `depth` is the number of digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocationCode {
  pub code: u32,
  pub depth: u32,
}

impl LocationCode {
  /// The root: no subdivisions taken.
  pub const ROOT: Self = Self { code: 0, depth: 0 };

  /// Code of child `octant` of this node.
  ///
  /// # Panics
  /// If the child would be deeper than [`MAX_DEPTH`].
  #[inline]
  pub fn child(self, octant: u8) -> Self {
    assert!(
      self.depth < MAX_DEPTH,
      "location code cannot address depth {}",
      self.depth + 1
    );
    debug_assert!((octant as u32) < CODE_RADIX);
    Self {
      code: self.code + ((octant as u32) << (OCTANT_BITS * self.depth)),
      depth: self.depth + 1,
    }
  }

  /// Pack an explicit path.
  pub fn from_path(path: &[u8]) -> Self {
    path
      .iter()
      .fold(Self::ROOT, |location, &octant| location.child(octant))
  }

  /// Octant digits, shallowest first.
  pub fn octants(self) -> impl Iterator<Item = u8> {
    let mut code = self.code;
    (0..self.depth).map(move |_| {
      let octant = (code % CODE_RADIX) as u8;
      code /= CODE_RADIX;
      octant
    })
  }

  /// Unpack into an explicit path.
  pub fn to_path(self) -> OctantPath {
    self.octants().collect()
  }

  /// World-space cell addressed by this code inside `root`.
  ///
  /// This is the decode a GPU consumer performs per instance.
  pub fn decode(self, root: Cell) -> Cell {
    self
      .octants()
      .fold(root, |cell, octant| cell.child(octant as usize))
  }
}

/// One instance record: a leaf color and where the leaf sits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearVoxel {
  pub color: Vec3,
  pub location: LocationCode,
}

/// Debug record: a leaf color and its explicit octant path.
#[derive(Clone, Debug, PartialEq)]
pub struct DebugVoxel {
  pub color: Vec3,
  pub path: OctantPath,
}

impl fmt::Display for DebugVoxel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "RGB::{},{},{} OCT::", self.color.x, self.color.y, self.color.z)?;
    for (i, octant) in self.path.iter().enumerate() {
      if i > 0 {
        f.write_str(",")?;
      }
      write!(f, "{}", octant)?;
    }
    Ok(())
  }
}

/// Flatten every leaf of `root` into packed records, depth-first in canonical
/// octant order.
///
/// # Panics
/// If a leaf lies deeper than [`MAX_DEPTH`].
#[cfg_attr(feature = "instrument", tracing::instrument(skip_all, name = "linearize::packed"))]
pub fn linearize(root: &VoxelNode) -> Vec<LinearVoxel> {
  let mut voxels = Vec::new();
  for_each_leaf(root, &mut |color: Vec3, path: &[u8]| {
    voxels.push(LinearVoxel {
      color,
      location: LocationCode::from_path(path),
    });
  });
  tracing::debug!(instances = voxels.len(), "tree linearized");
  voxels
}

/// Flatten every leaf of `root` into records with explicit octant paths.
pub fn linearize_debug(root: &VoxelNode) -> Vec<DebugVoxel> {
  let mut voxels = Vec::new();
  for_each_leaf(root, &mut |color: Vec3, path: &[u8]| {
    voxels.push(DebugVoxel {
      color,
      path: OctantPath::from_slice(path),
    });
  });
  voxels
}

/// Visit leaves depth-first, children in canonical order.
fn for_each_leaf<F: FnMut(Vec3, &[u8])>(root: &VoxelNode, emit: &mut F) {
  let mut path = OctantPath::new();
  visit(root, &mut path, emit);
}

fn visit<F: FnMut(Vec3, &[u8])>(node: &VoxelNode, path: &mut OctantPath, emit: &mut F) {
  match node {
    VoxelNode::Empty => {}
    VoxelNode::Leaf(color) => emit(*color, path.as_slice()),
    VoxelNode::Internal(children) => {
      for (octant, child) in children.iter().enumerate() {
        path.push(octant as u8);
        visit(child, path, emit);
        path.pop();
      }
    }
  }
}

#[cfg(test)]
#[path = "linearize_test.rs"]
mod linearize_test;
