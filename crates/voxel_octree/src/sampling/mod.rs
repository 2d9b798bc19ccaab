//! Top-down tree construction.
//!
//! ```text
//!   Enclosure (Fn(Vec3) -> bool)        &[Sample] (position, color)
//!              │                                  │
//!              ▼                                  ▼
//!   ┌──────────────────────┐          ┌──────────────────────────┐
//!   │ VolumeSampler::build │          │ PointCloudSampler::build │
//!   │ test cell center     │          │ mean color of samples    │
//!   │ at max depth         │          │ strictly inside the cell │
//!   └──────────┬───────────┘          └────────────┬─────────────┘
//!              └──────────────┬────────────────────┘
//!                             ▼
//!                  VoxelNode (full tree, every
//!                  octant visited to max depth)
//! ```
//!
//! Both samplers visit all `8^max_depth` cells. Neither prunes, so the output
//! depends only on the inputs and is culled afterwards.

pub mod point_cloud;
pub mod volume;

pub use point_cloud::PointCloudSampler;
pub use volume::{Enclosure, VolumeSampler};

use crate::constants::MAX_DEPTH;

/// Reject depths whose location codes would not fit.
///
/// # Panics
/// If `max_depth > MAX_DEPTH`.
#[inline]
pub(crate) fn assert_depth(max_depth: u32) {
  assert!(
    max_depth <= MAX_DEPTH,
    "max_depth {} exceeds MAX_DEPTH {}",
    max_depth,
    MAX_DEPTH
  );
}
