//! Face and axis identifiers for neighbor queries.
//!
//! Every face is an `(axis, side)` pair. Boundary checks, seed-code steps and
//! face-touching child selection all read from that pair instead of matching
//! on six cases.

/// Coordinate axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
  X,
  Y,
  Z,
}

impl Axis {
  /// All axes in index order.
  pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

  /// Index into `[x, y, z]` style arrays (0, 1, 2).
  ///
  /// Also the bit position of this axis inside an octant index.
  #[inline]
  pub const fn index(self) -> usize {
    self as usize
  }

  /// The two axes orthogonal to this one.
  #[inline]
  pub const fn others(self) -> [Axis; 2] {
    match self {
      Axis::X => [Axis::Y, Axis::Z],
      Axis::Y => [Axis::X, Axis::Z],
      Axis::Z => [Axis::X, Axis::Y],
    }
  }
}

/// One of the six faces of an axis-aligned cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Face {
  XLow,
  XHigh,
  YLow,
  YHigh,
  ZLow,
  ZHigh,
}

/// `(axis, is_high)` for each face, indexed by `Face as usize`.
const FACE_TABLE: [(Axis, bool); 6] = [
  (Axis::X, false), // -X
  (Axis::X, true),  // +X
  (Axis::Y, false), // -Y
  (Axis::Y, true),  // +Y
  (Axis::Z, false), // -Z
  (Axis::Z, true),  // +Z
];

impl Face {
  /// All six faces, in `-X, +X, -Y, +Y, -Z, +Z` order.
  pub const ALL: [Face; 6] = [
    Face::XLow,
    Face::XHigh,
    Face::YLow,
    Face::YHigh,
    Face::ZLow,
    Face::ZHigh,
  ];

  /// Build a face from its axis and side.
  #[inline]
  pub const fn new(axis: Axis, is_high: bool) -> Self {
    Self::ALL[axis.index() * 2 + is_high as usize]
  }

  /// Axis orthogonal to this face.
  #[inline]
  pub const fn axis(self) -> Axis {
    FACE_TABLE[self as usize].0
  }

  /// True for the `+` side faces.
  #[inline]
  pub const fn is_high(self) -> bool {
    FACE_TABLE[self as usize].1
  }

  /// The face on the other side of the same axis.
  #[inline]
  pub const fn opposite(self) -> Self {
    Self::new(self.axis(), !self.is_high())
  }

  /// Octants (0-7) of a cell's children that touch this face.
  pub fn octants(self) -> impl Iterator<Item = u8> {
    let bit = self.axis().index();
    let side = self.is_high() as u8;
    (0..8u8).filter(move |octant| (octant >> bit) & 1 == side)
  }
}

impl std::fmt::Display for Face {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let text = match self {
      Face::XLow => "X_LOW",
      Face::XHigh => "X_HIGH",
      Face::YLow => "Y_LOW",
      Face::YHigh => "Y_HIGH",
      Face::ZLow => "Z_LOW",
      Face::ZHigh => "Z_HIGH",
    };
    f.pad(text)
  }
}

#[cfg(test)]
#[path = "face_test.rs"]
mod face_test;
