//! World-space cell boxes.
//!
//! Boxes built from location codes have dyadic corners (multiples of a power
//! of two times the world size), so equality tests between them are exact.

use glam::DVec3;

use super::Axis;

/// Closed axis-aligned box in world space.
///
/// Both corners are inclusive. A box with `min == max` on some axis is a
/// face, edge or point and still counts as non-empty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DAabb3 {
	pub min: DVec3,
	pub max: DVec3,
}

impl DAabb3 {
	/// Box from its two corners.
	///
	/// Debug builds check `min <= max` per axis.
	pub fn new(min: DVec3, max: DVec3) -> Self {
		debug_assert!(min.cmple(max).all(), "box corners out of order: {min} > {max}");
		Self { min, max }
	}

	/// Cube anchored at `min` with edge `size`.
	pub fn from_min_size(min: DVec3, size: f64) -> Self {
		Self::new(min, min + DVec3::splat(size))
	}

	/// True if the boxes share at least one point; touching counts.
	#[inline]
	pub fn overlaps(&self, other: &DAabb3) -> bool {
		self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
	}

	/// Common part of both boxes. Empty when they do not touch.
	#[inline]
	pub fn intersection(&self, other: &DAabb3) -> DAabb3 {
		// Not through `new`: the result may be inverted.
		DAabb3 {
			min: self.min.max(other.min),
			max: self.max.min(other.max),
		}
	}

	/// True if the corners are inverted on any axis.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.min.cmpgt(self.max).any()
	}

	#[inline]
	pub fn contains_point(&self, point: DVec3) -> bool {
		self.min.cmple(point).all() && point.cmple(self.max).all()
	}

	#[inline]
	pub fn min_on(&self, axis: Axis) -> f64 {
		self.min[axis.index()]
	}

	#[inline]
	pub fn max_on(&self, axis: Axis) -> f64 {
		self.max[axis.index()]
	}

	/// Edge lengths per axis.
	#[inline]
	pub fn size(&self) -> DVec3 {
		self.max - self.min
	}

	#[inline]
	pub fn center(&self) -> DVec3 {
		(self.min + self.max) * 0.5
	}
}
