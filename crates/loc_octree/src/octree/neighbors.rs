//! Face-neighbor search using location-code arithmetic.
//!
//! For a cell C at level L and a face F:
//!
//! 1. **Seed**: step C's code by one cell size across F on F's axis. No seed
//!    means C touches the domain boundary, so there are no neighbors.
//! 2. **Ascend**: follow parent links from C to the first ancestor whose
//!    region contains the seed (the common ancestor of C and the seed).
//! 3. **Descend**: walk toward the seed until a leaf or level L.
//!    - A leaf is the single neighbor, at C's level or coarser.
//!    - An internal cell at level L means the other side is finer. Its
//!      leaves touching the shared face are the neighbors.
//!
//! Only the four children on the shared face are visited in step 3, and
//! nothing outside the common ancestor's subtree is touched.

use rayon::prelude::*;
use smallvec::SmallVec;

use super::{CellId, Face, Tree};

/// Neighbor list. One entry except when the far side is subdivided more
/// finely than the query cell.
pub type Neighbors = SmallVec<[CellId; 4]>;

/// Neighbors of one leaf on all six faces, in [`Face::ALL`] order.
pub type FaceNeighbors = [Neighbors; 6];

impl<T> Tree<T> {
  /// Existing cells sharing a face area with `id` across `face`.
  ///
  /// Empty when the cell lies on the domain boundary on that face.
  pub fn find_neighbors(&self, id: CellId, face: Face) -> Neighbors {
    let cell = &self[id];
    let level = cell.level;

    let Some(seed) = cell.code.step(face, level, self.num_levels()) else {
      return Neighbors::new();
    };

    let mut ancestor = id;
    while !self[ancestor].covers(&seed) {
      match self[ancestor].parent {
        Some(parent) => ancestor = parent,
        // The root covers every in-domain code.
        None => break,
      }
    }

    let across = self.descend(ancestor, &seed, level);
    let mut neighbors = Neighbors::new();
    self.collect_face_leaves(across, face.opposite(), &mut neighbors);
    neighbors
  }

  /// Push every leaf of the subtree at `start` that touches `face` of it.
  fn collect_face_leaves(&self, start: CellId, face: Face, out: &mut Neighbors) {
    match self[start].children {
      None => out.push(start),
      Some(children) => {
        for octant in face.octants() {
          self.collect_face_leaves(children[octant as usize], face, out);
        }
      }
    }
  }

  /// Neighbors of every leaf on every face.
  ///
  /// Queries run in parallel; the tree is only read.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::neighbor_table"))]
  pub fn neighbor_table(&self) -> Vec<(CellId, FaceNeighbors)>
  where
    T: Sync,
  {
    self
      .leaf_cells()
      .into_par_iter()
      .map(|id| (id, Face::ALL.map(|face| self.find_neighbors(id, face))))
      .collect()
  }
}

#[cfg(test)]
#[path = "neighbors_test.rs"]
mod neighbors_test;
