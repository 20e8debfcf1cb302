//! Shape statistics for a tree.

use super::Tree;

/// Cell counts by kind and level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
  /// Live cells, internal and leaf.
  pub cell_count: usize,
  /// Leaf cells.
  pub leaf_count: usize,
  /// Leaf count per level, indexed by level (0 = finest).
  pub leaves_per_level: Vec<usize>,
}

impl TreeStats {
  /// Cells with children.
  #[inline]
  pub fn internal_count(&self) -> usize {
    self.cell_count - self.leaf_count
  }

  /// Finest level holding at least one leaf.
  pub fn deepest_leaf_level(&self) -> Option<u8> {
    self
      .leaves_per_level
      .iter()
      .position(|&count| count > 0)
      .map(|level| level as u8)
  }
}

impl<T> Tree<T> {
  /// Count cells and leaves per level.
  pub fn stats(&self) -> TreeStats {
    let mut stats = TreeStats {
      leaves_per_level: vec![0; self.num_levels() as usize],
      ..Default::default()
    };
    for id in self.pre_order() {
      let cell = &self[id];
      stats.cell_count += 1;
      if cell.is_leaf() {
        stats.leaf_count += 1;
        stats.leaves_per_level[cell.level() as usize] += 1;
      }
    }
    stats
  }
}
