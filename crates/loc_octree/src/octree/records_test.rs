use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::octree::subdivide_randomly;

fn sample_tree() -> Tree<String> {
  let mut tree = Tree::new(6).unwrap();
  let mut rng = StdRng::seed_from_u64(17);
  subdivide_randomly(&mut tree, &mut rng, 0.4).unwrap();
  for (i, id) in tree.leaf_cells().into_iter().enumerate() {
    if i % 3 == 0 {
      tree.set_contents(id, format!("leaf-{}", i)).unwrap();
    }
  }
  tree
}

// =========================================================================
// Batch 16: Records
// =========================================================================

/// First record is the root; internal records never carry contents.
#[test]
fn test_records_are_pre_order() {
  let tree = sample_tree();
  let records = tree.to_records();

  assert_eq!(records.cells.len(), tree.len());
  assert_eq!(records.cells[0].level, 5);
  assert_eq!(records.cells[0].code, LocationCode::ZERO);
  assert!(records.cells[0].has_children);
  assert!(records
    .cells
    .iter()
    .filter(|r| r.has_children)
    .all(|r| r.contents.is_none()));
}

/// Replaying records rebuilds the same shape and payloads.
#[test]
fn test_records_replay() {
  let tree = sample_tree();
  let records = tree.to_records();
  let rebuilt = Tree::from_records(records.clone()).unwrap();

  assert_eq!(rebuilt.to_records(), records);
  assert_eq!(rebuilt.stats(), tree.stats());
}

/// Records survive a JSON round trip.
#[test]
fn test_records_through_json() {
  let tree = sample_tree();
  let json = serde_json::to_string(&tree.to_records()).unwrap();
  let decoded: TreeRecords<String> = serde_json::from_str(&json).unwrap();
  let rebuilt = Tree::from_records(decoded).unwrap();

  for id in rebuilt.leaf_cells() {
    let point = rebuilt.cell_bounds(id).center();
    let original = tree.locate_point(point).unwrap();
    assert_eq!(tree[original].code(), rebuilt[id].code());
    assert_eq!(tree.contents(original), rebuilt.contents(id));
  }
}

#[test]
fn test_missing_records_rejected() {
  let mut records = sample_tree().to_records();
  records.cells.pop();
  assert!(matches!(
    Tree::from_records(records),
    Err(OctreeError::MalformedRecords(_))
  ));
}

#[test]
fn test_trailing_records_rejected() {
  let mut records = sample_tree().to_records();
  let extra = records.cells[1].clone();
  records.cells.push(extra);
  assert!(matches!(
    Tree::from_records(records),
    Err(OctreeError::MalformedRecords(_))
  ));
}

#[test]
fn test_out_of_order_records_rejected() {
  let mut records = sample_tree().to_records();
  records.cells.swap(1, 2);
  assert!(matches!(
    Tree::from_records(records),
    Err(OctreeError::MalformedRecords(_))
  ));
}

#[test]
fn test_split_at_finest_level_rejected() {
  let tree: Tree<()> = Tree::new(1).unwrap();
  let mut records = tree.to_records();
  records.cells[0].has_children = true;
  assert!(matches!(
    Tree::from_records(records),
    Err(OctreeError::MalformedRecords(_))
  ));
}

#[test]
fn test_invalid_config_rejected() {
  let mut records = sample_tree().to_records();
  records.config.num_levels = 0;
  assert!(matches!(
    Tree::from_records(records),
    Err(OctreeError::InvalidConfig(_))
  ));
}
