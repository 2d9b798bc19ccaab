//! Colored point samples and the random point-cloud source.

use glam::Vec3;
use rand::Rng;

/// A colored point consumed by [`crate::sampling::PointCloudSampler`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
  /// World-space position.
  pub position: Vec3,
  /// RGB color in `[0, 1]³`.
  pub color: Vec3,
}

impl Sample {
  pub fn new(position: Vec3, color: Vec3) -> Self {
    Self { position, color }
  }
}

/// Owned list of samples.
pub type PointCloud = Vec<Sample>;

/// Random positions fall on a 1/1000 grid inside `[-0.5, 0.5)³`.
pub const RANDOM_POSITION_STEPS: i32 = 1000;

/// Lowest 8-bit channel value of a random pastel color.
pub const PASTEL_MIN: u8 = 35;

/// Highest 8-bit channel value of a random pastel color.
pub const PASTEL_MAX: u8 = 254;

/// Generate `count` samples uniformly inside `[-0.5, 0.5)³` with random
/// pastel colors.
///
/// The random source is supplied by the caller; seed a
/// [`rand::rngs::StdRng`] for reproducible clouds.
pub fn random_point_cloud<R: Rng + ?Sized>(rng: &mut R, count: usize) -> PointCloud {
  let half = RANDOM_POSITION_STEPS / 2;
  let coordinate = |rng: &mut R| rng.random_range(-half..half) as f32 / RANDOM_POSITION_STEPS as f32;

  (0..count)
    .map(|_| {
      let position = Vec3::new(coordinate(rng), coordinate(rng), coordinate(rng));
      let color = Vec3::new(pastel_channel(rng), pastel_channel(rng), pastel_channel(rng));
      Sample::new(position, color)
    })
    .collect()
}

fn pastel_channel<R: Rng + ?Sized>(rng: &mut R) -> f32 {
  rng.random_range(PASTEL_MIN..=PASTEL_MAX) as f32 / 255.0
}
