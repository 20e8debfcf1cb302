//! TreeConfig - level count and world coordinate mapping.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::code::{self, LocationCode, MAX_LEVELS};
use super::DAabb3;
use crate::error::{OctreeError, Result};

/// Configuration for tree depth and world coordinate mapping.
///
/// The root cell is the cube `[world_origin, world_origin + world_size]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
  /// Total number of levels, root included. Level 0 is the finest.
  pub num_levels: u8,

  /// World-space minimum corner of the root cell.
  pub world_origin: DVec3,

  /// World-space edge length of the root cell.
  pub world_size: f64,
}

impl TreeConfig {
  /// Unit-cube domain with the given level count.
  pub fn with_levels(num_levels: u8) -> Self {
    Self {
      num_levels,
      ..Default::default()
    }
  }

  /// Check level count and world size.
  pub fn validate(&self) -> Result<()> {
    if self.num_levels == 0 || self.num_levels > MAX_LEVELS {
      return Err(OctreeError::InvalidConfig(format!(
        "num_levels must be in 1..={}, got {}",
        MAX_LEVELS, self.num_levels
      )));
    }
    if !self.world_size.is_finite() || self.world_size <= 0.0 {
      return Err(OctreeError::InvalidConfig(format!(
        "world_size must be positive and finite, got {}",
        self.world_size
      )));
    }
    if !self.world_origin.is_finite() {
      return Err(OctreeError::InvalidConfig(
        "world_origin must be finite".to_string(),
      ));
    }
    Ok(())
  }

  /// Level of the root cell.
  #[inline]
  pub fn root_level(&self) -> u8 {
    code::root_level(self.num_levels)
  }

  /// World-space box of the root cell.
  #[inline]
  pub fn world_bounds(&self) -> DAabb3 {
    DAabb3::from_min_size(self.world_origin, self.world_size)
  }

  /// World-space edge length of a cell at `level`.
  #[inline]
  pub fn cell_world_size(&self, level: u8) -> f64 {
    self.world_size * code::cell_size(level, self.num_levels)
  }

  /// World-space minimum corner of a cell.
  #[inline]
  pub fn code_to_world(&self, code: &LocationCode) -> DVec3 {
    self.world_origin + code.to_point(self.num_levels) * self.world_size
  }

  /// World-space box of a cell.
  #[inline]
  pub fn cell_bounds(&self, code: &LocationCode, level: u8) -> DAabb3 {
    DAabb3::from_min_size(self.code_to_world(code), self.cell_world_size(level))
  }

  /// Finest-level code of the cell containing a world-space point.
  ///
  /// The domain is closed: points on the maximum faces map to the last
  /// finest cell. Returns None outside the domain (or for NaN).
  pub fn world_to_code(&self, point: DVec3) -> Option<LocationCode> {
    let unit = (point - self.world_origin) / self.world_size;
    let extent = code::extent(self.num_levels);
    let mut axes = [0u32; 3];
    for (slot, value) in axes.iter_mut().zip(unit.to_array()) {
      // Negated test so NaN is rejected too.
      if !(0.0..=1.0).contains(&value) {
        return None;
      }
      *slot = ((value * extent as f64) as u32).min(extent - 1);
    }
    Some(LocationCode::new(axes[0], axes[1], axes[2]))
  }
}

impl Default for TreeConfig {
  fn default() -> Self {
    Self {
      num_levels: 10,
      world_origin: DVec3::ZERO,
      world_size: 1.0,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
