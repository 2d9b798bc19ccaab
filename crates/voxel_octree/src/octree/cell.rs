//! Cubic cell geometry for implicit octree nodes.

use glam::Vec3;

use super::octant::child_center;

/// Axis-aligned cube described by its center and half-extent.
///
/// Nodes never store a cell. Traversals derive one per visited node from the
/// root cell and the octant path taken to reach it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
	/// Center of the cube.
	pub center: Vec3,
	/// Half of the edge length.
	pub half_extent: f32,
}

impl Cell {
	/// Create a new cell from center and half-extent.
	///
	/// # Panics
	/// Debug-asserts that the half-extent is non-negative.
	pub fn new(center: Vec3, half_extent: f32) -> Self {
		debug_assert!(half_extent >= 0.0, "Cell half-extent must be >= 0");
		Self {
			center,
			half_extent,
		}
	}

	/// Child cell in canonical octant order.
	#[inline]
	pub fn child(&self, octant: usize) -> Cell {
		Cell {
			center: child_center(self.center, self.half_extent, octant),
			half_extent: self.half_extent * 0.5,
		}
	}

	/// Chebyshev (L∞) distance from the center to `point`.
	#[inline]
	pub fn chebyshev_distance(&self, point: Vec3) -> f32 {
		(point - self.center).abs().max_element()
	}

	/// Check if `point` lies strictly inside the cell.
	///
	/// Points on a face are excluded, so a point on the shared face of two
	/// sibling cells belongs to neither.
	#[inline]
	pub fn contains_strict(&self, point: Vec3) -> bool {
		self.chebyshev_distance(point) < self.half_extent
	}

	/// Minimum corner.
	#[inline]
	pub fn min(&self) -> Vec3 {
		self.center - Vec3::splat(self.half_extent)
	}

	/// Maximum corner.
	#[inline]
	pub fn max(&self) -> Vec3 {
		self.center + Vec3::splat(self.half_extent)
	}
}
