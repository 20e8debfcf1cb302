//! Random non-uniform subdivision.
//!
//! Produces the irregular tree shapes the neighbor search has to handle:
//! coarse cells next to much finer ones, on every face and at every depth.

use rand::Rng;

use super::{CellId, Tree};
use crate::error::{OctreeError, Result};

/// Split the root, then split every new cell with `split_probability` until
/// the finest level. Only cells that are leaves when visited are split.
///
/// Returns the number of splits performed. A probability outside `[0, 1]`
/// (NaN included) is an [`OctreeError::InvalidConfig`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::subdivide_randomly"))]
pub fn subdivide_randomly<T, R: Rng>(
  tree: &mut Tree<T>,
  rng: &mut R,
  split_probability: f64,
) -> Result<usize> {
  if !(0.0..=1.0).contains(&split_probability) {
    return Err(OctreeError::InvalidConfig(format!(
      "split probability must be in [0, 1], got {}",
      split_probability
    )));
  }
  let root = tree.root();
  if tree[root].level() == 0 || !tree[root].is_leaf() {
    return Ok(0);
  }

  let mut splits = 0;
  let mut pending: Vec<CellId> = tree.split(root)?.to_vec();
  splits += 1;

  while let Some(id) = pending.pop() {
    let cell = &tree[id];
    if cell.level() == 0 || !cell.is_leaf() {
      continue;
    }
    if rng.random_bool(split_probability) {
      pending.extend(tree.split(id)?);
      splits += 1;
    }
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(splits, cells = tree.len(), "random subdivision done");

  Ok(splits)
}

#[cfg(test)]
mod tests {
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::*;

  #[test]
  fn test_probability_zero_splits_root_only() {
    let mut tree: Tree<()> = Tree::new(6).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let splits = subdivide_randomly(&mut tree, &mut rng, 0.0).unwrap();
    assert_eq!(splits, 1);
    assert_eq!(tree.leaf_cells().len(), 8);
  }

  #[test]
  fn test_rejects_probability_outside_unit_range() {
    for p in [f64::NAN, -0.1, 1.5, f64::INFINITY] {
      let mut tree: Tree<()> = Tree::new(6).unwrap();
      let mut rng = StdRng::seed_from_u64(7);
      let result = subdivide_randomly(&mut tree, &mut rng, p);
      assert!(
        matches!(result, Err(OctreeError::InvalidConfig(_))),
        "p = {}: {:?}",
        p,
        result
      );
      assert_eq!(tree.len(), 1, "p = {} must leave the tree untouched", p);
    }
  }

  #[test]
  fn test_probability_one_is_uniform() {
    let mut tree: Tree<()> = Tree::new(3).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    subdivide_randomly(&mut tree, &mut rng, 1.0).unwrap();
    assert_eq!(tree.leaf_cells().len(), 64);
    assert_eq!(tree.leaf_cells_at_level(0).len(), 64);
  }

  #[test]
  fn test_single_level_tree_is_untouched() {
    let mut tree: Tree<()> = Tree::new(1).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(subdivide_randomly(&mut tree, &mut rng, 1.0).unwrap(), 0);
    assert_eq!(tree.len(), 1);
  }

  #[test]
  fn test_same_seed_same_shape() {
    let build = |seed| {
      let mut tree: Tree<()> = Tree::new(6).unwrap();
      let mut rng = StdRng::seed_from_u64(seed);
      subdivide_randomly(&mut tree, &mut rng, 0.4).unwrap();
      tree.to_records()
    };
    assert_eq!(build(42), build(42));
  }
}
