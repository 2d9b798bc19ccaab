//! Per-instance GPU buffers built from linearized voxels.
//!
//! Two layouts are offered: structure-of-arrays ([`InstanceBuffers`]) for
//! one vertex buffer per attribute, and interleaved ([`GpuInstance`]) for a
//! single instance-rate buffer.
//!
//! ```text
//! GpuInstance (20 bytes, 4-byte aligned)
//! ┌──────────┬──────────┬──────────┬───────────────┬─────────┐
//! │ color.r  │ color.g  │ color.b  │ location_code │ depth   │
//! │ f32      │ f32      │ f32      │ u32           │ u32     │
//! └──────────┴──────────┴──────────┴───────────────┴─────────┘
//! ```

use bytemuck::{Pod, Zeroable};

use crate::linearize::LinearVoxel;

/// Interleaved per-instance attributes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GpuInstance {
  /// Leaf color (RGB).
  pub color: [f32; 3],
  /// Packed octant path, shallowest level in the lowest base-8 digit.
  pub location_code: u32,
  /// Number of digits in `location_code`.
  pub depth: u32,
}

impl From<&LinearVoxel> for GpuInstance {
  fn from(voxel: &LinearVoxel) -> Self {
    Self {
      color: voxel.color.to_array(),
      location_code: voxel.location.code,
      depth: voxel.location.depth,
    }
  }
}

/// Parallel per-instance attribute arrays. Index `i` of every array
/// describes the same voxel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstanceBuffers {
  pub colors: Vec<[f32; 3]>,
  pub location_codes: Vec<u32>,
  pub depths: Vec<u32>,
}

impl InstanceBuffers {
  /// Split linearized voxels into parallel arrays.
  pub fn from_voxels(voxels: &[LinearVoxel]) -> Self {
    let mut buffers = Self {
      colors: Vec::with_capacity(voxels.len()),
      location_codes: Vec::with_capacity(voxels.len()),
      depths: Vec::with_capacity(voxels.len()),
    };
    for voxel in voxels {
      buffers.colors.push(voxel.color.to_array());
      buffers.location_codes.push(voxel.location.code);
      buffers.depths.push(voxel.location.depth);
    }
    buffers
  }

  /// Number of instances.
  #[inline]
  pub fn len(&self) -> usize {
    self.colors.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.colors.is_empty()
  }

  /// Raw bytes of the color array.
  pub fn color_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.colors)
  }

  /// Raw bytes of the location-code array.
  pub fn location_code_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.location_codes)
  }

  /// Raw bytes of the depth array.
  pub fn depth_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.depths)
  }

  /// Interleave into one record per instance.
  pub fn interleaved(&self) -> Vec<GpuInstance> {
    self
      .colors
      .iter()
      .zip(&self.location_codes)
      .zip(&self.depths)
      .map(|((color, &location_code), &depth)| GpuInstance {
        color: *color,
        location_code,
        depth,
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use glam::Vec3;

  use super::*;
  use crate::linearize::LocationCode;

  fn voxel(color: Vec3, path: &[u8]) -> LinearVoxel {
    LinearVoxel {
      color,
      location: LocationCode::from_path(path),
    }
  }

  #[test]
  fn test_gpu_instance_layout() {
    assert_eq!(std::mem::size_of::<GpuInstance>(), 20);
    assert_eq!(std::mem::align_of::<GpuInstance>(), 4);
  }

  #[test]
  fn test_from_voxels_keeps_order() {
    let voxels = [
      voxel(Vec3::X, &[1, 2]),
      voxel(Vec3::Y, &[7]),
      voxel(Vec3::Z, &[]),
    ];
    let buffers = InstanceBuffers::from_voxels(&voxels);

    assert_eq!(buffers.len(), 3);
    assert_eq!(buffers.colors, vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    assert_eq!(buffers.location_codes, vec![1 + 2 * 8, 7, 0]);
    assert_eq!(buffers.depths, vec![2, 1, 0]);
  }

  #[test]
  fn test_empty_buffers() {
    let buffers = InstanceBuffers::from_voxels(&[]);
    assert!(buffers.is_empty());
    assert!(buffers.color_bytes().is_empty());
    assert!(buffers.interleaved().is_empty());
  }

  #[test]
  fn test_byte_views() {
    let buffers = InstanceBuffers::from_voxels(&[voxel(Vec3::ONE, &[3, 3, 3])]);
    assert_eq!(buffers.color_bytes().len(), 12);
    assert_eq!(buffers.location_code_bytes(), &(3u32 + 24 + 192).to_ne_bytes());
    assert_eq!(buffers.depth_bytes(), &3u32.to_ne_bytes());
  }

  #[test]
  fn test_interleaved_matches_direct_conversion() {
    let voxels = [voxel(Vec3::new(0.1, 0.2, 0.3), &[4, 0, 6]), voxel(Vec3::ONE, &[5])];
    let buffers = InstanceBuffers::from_voxels(&voxels);

    let direct: Vec<GpuInstance> = voxels.iter().map(GpuInstance::from).collect();
    assert_eq!(buffers.interleaved(), direct);

    let bytes: &[u8] = bytemuck::cast_slice(&direct);
    assert_eq!(bytes.len(), 40);
  }
}
