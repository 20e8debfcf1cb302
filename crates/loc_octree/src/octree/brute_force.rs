//! Brute-force neighbor reference.
//!
//! Defines "neighbor across a face" geometrically, independent of location
//! code arithmetic: a leaf is a neighbor of C across F iff the intersection
//! of their world boxes
//!
//! - is non-empty,
//! - has zero thickness along F's axis,
//! - has non-zero extent along both other axes (a shared area, not an edge
//!   or a corner),
//! - lies on C's boundary plane for F.
//!
//! O(leaves) per query. Used to cross-check [`Tree::find_neighbors`].

use rayon::prelude::*;

use super::{CellId, Face, LocationCode, Tree};

/// Reference scan over all leaves.
pub fn brute_force_neighbors<T>(tree: &Tree<T>, id: CellId, face: Face) -> Vec<CellId> {
  brute_force_in(tree, &tree.leaf_cells(), id, face)
}

/// Reference scan over a precomputed leaf list.
pub fn brute_force_in<T>(tree: &Tree<T>, leaves: &[CellId], id: CellId, face: Face) -> Vec<CellId> {
  let cell_box = tree.cell_bounds(id);
  let axis = face.axis();
  let plane = if face.is_high() {
    cell_box.max_on(axis)
  } else {
    cell_box.min_on(axis)
  };

  leaves
    .iter()
    .copied()
    .filter(|&other| other != id)
    .filter(|&other| {
      let shared = cell_box.intersection(&tree.cell_bounds(other));
      if shared.is_empty() {
        return false;
      }
      let flat = shared.min_on(axis) == shared.max_on(axis);
      let on_plane = shared.min_on(axis) == plane;
      let has_area = axis
        .others()
        .iter()
        .all(|&other_axis| shared.min_on(other_axis) < shared.max_on(other_axis));
      flat && on_plane && has_area
    })
    .collect()
}

/// One query where the optimized search and the scan disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborMismatch {
  /// Query cell.
  pub cell: CellId,
  /// Query face.
  pub face: Face,
  /// `(level, code)` of optimized results, sorted.
  pub found: Vec<(u8, LocationCode)>,
  /// `(level, code)` of brute-force results, sorted.
  pub expected: Vec<(u8, LocationCode)>,
}

/// Result of cross-checking every leaf and face.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerificationReport {
  /// Leaf/face queries compared.
  pub queries: usize,
  /// Neighbors found over all queries.
  pub neighbors: usize,
  /// Queries with no neighbors (domain boundary).
  pub boundary_queries: usize,
  /// Disagreements.
  pub mismatches: Vec<NeighborMismatch>,
}

impl VerificationReport {
  /// True if every query agreed.
  #[inline]
  pub fn is_consistent(&self) -> bool {
    self.mismatches.is_empty()
  }

  fn merge(mut self, other: Self) -> Self {
    self.queries += other.queries;
    self.neighbors += other.neighbors;
    self.boundary_queries += other.boundary_queries;
    self.mismatches.extend(other.mismatches);
    self
  }
}

/// Identity of a cell set: sorted `(level, code)` pairs.
fn identities<T>(tree: &Tree<T>, ids: impl IntoIterator<Item = CellId>) -> Vec<(u8, LocationCode)> {
  let mut keys: Vec<_> = ids
    .into_iter()
    .map(|id| {
      let cell = &tree[id];
      (cell.level(), cell.code())
    })
    .collect();
  keys.sort_unstable();
  keys
}

/// Compare [`Tree::find_neighbors`] with the brute-force scan for every leaf
/// and every face.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::verify_neighbors"))]
pub fn verify_neighbors<T: Sync>(tree: &Tree<T>) -> VerificationReport {
  let leaves = tree.leaf_cells();

  let mut report = leaves
    .par_iter()
    .map(|&id| {
      let mut report = VerificationReport::default();
      for face in Face::ALL {
        let found = identities(tree, tree.find_neighbors(id, face));
        let expected = identities(tree, brute_force_in(tree, &leaves, id, face));

        report.queries += 1;
        report.neighbors += found.len();
        if found.is_empty() {
          report.boundary_queries += 1;
        }
        if found != expected {
          #[cfg(feature = "tracing")]
          tracing::warn!(?id, %face, ?found, ?expected, "neighbor mismatch");
          report.mismatches.push(NeighborMismatch {
            cell: id,
            face,
            found,
            expected,
          });
        }
      }
      report
    })
    .reduce(VerificationReport::default, VerificationReport::merge);

  report.mismatches.sort_by_key(|m| (m.cell, m.face as u8));
  report
}

#[cfg(test)]
#[path = "brute_force_test.rs"]
mod brute_force_test;
