//! Built-in implicit solids.

use glam::Vec3;

use crate::sampling::Enclosure;

/// Solid ball. Points on the surface are outside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
  pub center: Vec3,
  pub radius: f32,
}

impl Sphere {
  pub fn new(center: Vec3, radius: f32) -> Self {
    Self { center, radius }
  }

  /// Ball of `radius` around the origin.
  pub fn at_origin(radius: f32) -> Self {
    Self::new(Vec3::ZERO, radius)
  }
}

impl Enclosure for Sphere {
  #[inline]
  fn encloses(&self, point: Vec3) -> bool {
    (point - self.center).length_squared() < self.radius * self.radius
  }
}

/// Heart-shaped sextic surface, roughly filling `[-0.5, 0.5]³`.
///
/// `(6x² + 16z² + 7y² - 1)³ - 113x²y³ - 0.005z²y³ < 0`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Heart;

impl Enclosure for Heart {
  fn encloses(&self, p: Vec3) -> bool {
    let (x2, y3, z2) = (p.x * p.x, p.y * p.y * p.y, p.z * p.z);
    let shell = 6.0 * x2 + 16.0 * z2 + 7.0 * p.y * p.y - 1.0;
    shell * shell * shell - 113.0 * x2 * y3 - 0.005 * z2 * y3 < 0.0
  }
}
