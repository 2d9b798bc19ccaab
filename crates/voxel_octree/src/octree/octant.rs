//! Canonical octant order.
//!
//! Every internal node stores its children in this order, and every traversal
//! (construction, culling, linearization, decoding) indexes children by it.
//! Changing the table silently breaks location codes.
//!
//! ```text
//!        index   x  y  z
//!          0     +  +  +   ┐
//!          1     -  +  +   │ upper (+z) ring,
//!          2     -  -  +   │ counter-clockwise from (+,+)
//!          3     +  -  +   ┘
//!          4     +  +  -   ┐
//!          5     -  +  -   │ lower (-z) ring,
//!          6     -  -  -   │ same winding
//!          7     +  -  -   ┘
//! ```

use glam::Vec3;

use crate::constants::CHILD_COUNT;

/// Unit offset of each octant's center from its parent's center, in units of
/// the child half-extent.
pub const OCTANT_DIRECTIONS: [Vec3; CHILD_COUNT] = [
  Vec3::new(1.0, 1.0, 1.0),
  Vec3::new(-1.0, 1.0, 1.0),
  Vec3::new(-1.0, -1.0, 1.0),
  Vec3::new(1.0, -1.0, 1.0),
  Vec3::new(1.0, 1.0, -1.0),
  Vec3::new(-1.0, 1.0, -1.0),
  Vec3::new(-1.0, -1.0, -1.0),
  Vec3::new(1.0, -1.0, -1.0),
];

/// Direction vector of `octant`.
///
/// # Panics
/// If `octant >= 8`.
#[inline]
pub fn direction(octant: usize) -> Vec3 {
  OCTANT_DIRECTIONS[octant]
}

/// Center of child `octant` of a cell at `center` with `half_extent`.
#[inline]
pub fn child_center(center: Vec3, half_extent: f32, octant: usize) -> Vec3 {
  OCTANT_DIRECTIONS[octant] * half_extent * 0.5 + center
}
