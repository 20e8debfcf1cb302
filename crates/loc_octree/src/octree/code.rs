//! LocationCode - per-axis integer position of a cell at the finest
//! resolution.
//!
//! Level 0 = finest cells (one code unit wide), the root sits at
//! `num_levels - 1`. A cell at level L has its low L bits clear on every
//! axis, so the code is always the cell's minimum (anchor) corner.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::{Axis, Face};

/// Most levels a tree may have; the root extent `2^(levels - 1)` must fit
/// in a `u32` axis code.
pub const MAX_LEVELS: u8 = 31;

/// Location code - immutable value type.
///
/// Coordinates are at the finest resolution, not at the owning cell's level.
/// Only meaningful relative to the tree's level count.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub struct LocationCode {
  /// X code at finest resolution
  pub x: u32,
  /// Y code at finest resolution
  pub y: u32,
  /// Z code at finest resolution
  pub z: u32,
}

/// Level of the root cell for a tree with `num_levels` levels.
#[inline]
pub const fn root_level(num_levels: u8) -> u8 {
  num_levels - 1
}

/// Edge length of the root in code units.
#[inline]
pub const fn extent(num_levels: u8) -> u32 {
  1 << root_level(num_levels)
}

/// Edge length of a cell at `level` in code units.
#[inline]
pub const fn level_size(level: u8) -> u32 {
  1 << level
}

/// Edge length of a cell at `level` relative to the root.
///
/// cell_size = 2^level / 2^root_level
#[inline]
pub fn cell_size(level: u8, num_levels: u8) -> f64 {
  level_size(level) as f64 / extent(num_levels) as f64
}

/// Set (`bit` = true) or keep clear the bit owned by `level` in one axis code.
///
/// The bit owned by a cell at `level` is the one its children differ by,
/// i.e. position `level` for a code of a child at `level`.
#[inline]
pub const fn encode(axis_code: u32, bit: bool, level: u8) -> u32 {
  if bit {
    axis_code | (1 << level)
  } else {
    axis_code
  }
}

impl LocationCode {
  /// Root cell anchor.
  pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

  /// Create a code from raw axis values.
  pub fn new(x: u32, y: u32, z: u32) -> Self {
    Self { x, y, z }
  }

  /// Axis value by axis.
  #[inline]
  pub fn axis(&self, axis: Axis) -> u32 {
    match axis {
      Axis::X => self.x,
      Axis::Y => self.y,
      Axis::Z => self.z,
    }
  }

  /// Copy with one axis replaced.
  #[inline]
  pub fn with_axis(mut self, axis: Axis, value: u32) -> Self {
    match axis {
      Axis::X => self.x = value,
      Axis::Y => self.y = value,
      Axis::Z => self.z = value,
    }
    self
  }

  /// Code of the child in `octant` one level below, where `child_level` is
  /// the child's level.
  ///
  /// Octant: 0-7 where bits represent +X, +Y, +Z offsets:
  /// - bit 0: X offset (0 or 1)
  /// - bit 1: Y offset (0 or 1)
  /// - bit 2: Z offset (0 or 1)
  #[inline]
  pub fn child(&self, octant: u8, child_level: u8) -> Self {
    Self {
      x: encode(self.x, octant & 1 != 0, child_level),
      y: encode(self.y, (octant >> 1) & 1 != 0, child_level),
      z: encode(self.z, (octant >> 2) & 1 != 0, child_level),
    }
  }

  /// Octant of a cell at `level` that contains this code.
  ///
  /// Reads the bit at `level - 1` on each axis. `level` must be > 0.
  #[inline]
  pub fn octant_at(&self, level: u8) -> u8 {
    debug_assert!(level > 0, "level 0 cells have no octants");
    let bit = level - 1;
    let x = ((self.x >> bit) & 1) as u8;
    let y = ((self.y >> bit) & 1) as u8;
    let z = ((self.z >> bit) & 1) as u8;
    x | (y << 1) | (z << 2)
  }

  /// Code of the cell at `level` containing this code (low bits cleared).
  #[inline]
  pub fn ancestor_at(&self, level: u8) -> Self {
    let mask = !(level_size(level) - 1);
    Self {
      x: self.x & mask,
      y: self.y & mask,
      z: self.z & mask,
    }
  }

  /// True if this code is a valid anchor for a cell at `level`.
  #[inline]
  pub fn is_aligned(&self, level: u8) -> bool {
    self.ancestor_at(level) == *self
  }

  /// Same-level code of the region across `face` from a cell at `level`.
  ///
  /// Returns None when the cell touches the domain boundary on that face.
  /// For the low child of its parent on the face's axis, stepping to the high
  /// side is exactly setting bit `level` (and clearing it for the high child
  /// stepping low).
  pub fn step(&self, face: Face, level: u8, num_levels: u8) -> Option<Self> {
    let axis = face.axis();
    let value = self.axis(axis);
    let size = level_size(level);
    let stepped = if face.is_high() {
      let next = value + size;
      if next >= extent(num_levels) {
        return None;
      }
      next
    } else {
      value.checked_sub(size)?
    };
    Some(self.with_axis(axis, stepped))
  }

  /// Anchor corner in unit-cube coordinates.
  ///
  /// point = code / 2^root_level, exact for every supported level count.
  #[inline]
  pub fn to_point(&self, num_levels: u8) -> DVec3 {
    let scale = extent(num_levels) as f64;
    DVec3::new(
      self.x as f64 / scale,
      self.y as f64 / scale,
      self.z as f64 / scale,
    )
  }
}

#[cfg(test)]
#[path = "code_test.rs"]
mod code_test;
