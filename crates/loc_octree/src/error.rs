//! Error types for octree construction, queries and record replay.

use glam::DVec3;

use crate::octree::CellId;

/// Result type alias using OctreeError
pub type Result<T> = std::result::Result<T, OctreeError>;

/// Precondition a cell failed when a topology change was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
  /// `split` on a cell that already has children.
  AlreadySplit,
  /// `split` on a level 0 cell (finest resolution).
  AtFinestLevel,
  /// `collapse` on a cell without children.
  IsLeaf,
  /// Payload access on a cell with children.
  NotLeaf,
  /// `collapse` on a cell whose children are not all leaves.
  NotCollapsible,
}

impl std::fmt::Display for CellState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let text = match self {
      CellState::AlreadySplit => "cell is already split",
      CellState::AtFinestLevel => "cell is at the finest level",
      CellState::IsLeaf => "cell is a leaf",
      CellState::NotLeaf => "cell has children",
      CellState::NotCollapsible => "cell has non-leaf children",
    };
    f.write_str(text)
  }
}

/// Error types for the octree
#[derive(Debug, thiserror::Error)]
pub enum OctreeError {
  /// Point lies outside the root cell's extent
  #[error("Point {point} is outside the tree domain")]
  PointOutOfDomain { point: DVec3 },

  /// Topology change rejected by the cell's current state
  #[error("Invalid state for cell {cell:?}: {state}")]
  InvalidState { cell: CellId, state: CellState },

  /// Handle does not refer to a live cell
  #[error("Unknown cell {0:?}")]
  UnknownCell(CellId),

  /// Invalid configuration
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  /// Flattened records do not describe a valid tree
  #[error("Malformed records: {0}")]
  MalformedRecords(String),
}

impl OctreeError {
  /// Shorthand for an [`OctreeError::InvalidState`].
  pub(crate) fn invalid_state(cell: CellId, state: CellState) -> Self {
    OctreeError::InvalidState { cell, state }
  }
}
