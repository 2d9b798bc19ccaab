//! ASCII point-cloud (PCD) import.
//!
//! Only the subset needed to feed [`crate::sampling::PointCloudSampler`] is
//! understood:
//!
//! ```text
//! # .PCD v0.7              ┐
//! VERSION 0.7              │ header: `key value [...]` per line,
//! FIELDS x y z             │ metadata ignored
//! POINTS 2                 │
//! DATA ascii               ┘ terminator, value must be `ascii`
//! 0.1 0.2 0.3              ┐ body: exactly `x y z` per line
//! -0.4 0.0 0.25            ┘
//! ```
//!
//! Every point receives the same caller-supplied color and is scaled by a
//! uniform factor.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use glam::Vec3;
use thiserror::Error;

use crate::samples::{PointCloud, Sample};

/// Header key that terminates the header.
const DATA_KEY: &str = "DATA";

/// The only supported body encoding.
const ASCII_FORMAT: &str = "ascii";

/// Point-cloud import failure. All variants abort the load.
#[derive(Debug, Error)]
pub enum PcdError {
  #[error("malformed header line {line}: expected `key value`, found {content:?}")]
  MalformedHeaderLine { line: usize, content: String },

  #[error("unsupported PCD data format {0:?} (only \"ascii\" is supported)")]
  UnsupportedDataFormat(String),

  #[error("PCD header ended without a DATA line")]
  MissingDataLine,

  #[error("malformed point on line {line}: expected `x y z`, found {content:?}")]
  MalformedPoint { line: usize, content: String },

  #[error("failed to read point cloud")]
  Io(#[from] io::Error),
}

/// Load a point cloud from the file at `path`.
pub fn load_point_cloud(path: &Path, color: Vec3, scale: f32) -> Result<PointCloud, PcdError> {
  let file = File::open(path)?;
  read_point_cloud(BufReader::new(file), color, scale)
}

/// Parse a point cloud from `reader`.
///
/// Positions are multiplied by `scale`; every sample gets `color`.
#[cfg_attr(feature = "instrument", tracing::instrument(skip_all, name = "pcd::read"))]
pub fn read_point_cloud<R: BufRead>(reader: R, color: Vec3, scale: f32) -> Result<PointCloud, PcdError> {
  let mut lines = reader.lines().enumerate().map(|(idx, line)| (idx + 1, line));

  let mut found_data = false;
  for (line_no, line) in lines.by_ref() {
    let line = line?;
    let mut tokens = line.split_whitespace();
    let (Some(key), Some(value)) = (tokens.next(), tokens.next()) else {
      return Err(PcdError::MalformedHeaderLine {
        line: line_no,
        content: line.clone(),
      });
    };

    if key == DATA_KEY {
      if value != ASCII_FORMAT {
        return Err(PcdError::UnsupportedDataFormat(value.to_string()));
      }
      found_data = true;
      break;
    }
    tracing::trace!(key, value, "pcd header");
  }

  if !found_data {
    return Err(PcdError::MissingDataLine);
  }

  let mut cloud = PointCloud::new();
  for (line_no, line) in lines {
    let line = line?;
    if line.trim().is_empty() {
      continue;
    }
    let position = parse_point(&line).ok_or_else(|| PcdError::MalformedPoint {
      line: line_no,
      content: line.clone(),
    })?;
    cloud.push(Sample::new(position * scale, color));
  }

  tracing::debug!(points = cloud.len(), "pcd loaded");
  Ok(cloud)
}

/// Parse exactly three whitespace-separated floats.
fn parse_point(line: &str) -> Option<Vec3> {
  let mut tokens = line.split_whitespace().map(str::parse::<f32>);
  let x = tokens.next()?.ok()?;
  let y = tokens.next()?.ok()?;
  let z = tokens.next()?.ok()?;
  if tokens.next().is_some() {
    return None;
  }
  Some(Vec3::new(x, y, z))
}

#[cfg(test)]
#[path = "pcd_test.rs"]
mod pcd_test;
