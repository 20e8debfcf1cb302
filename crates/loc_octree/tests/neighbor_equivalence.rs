//! Optimized neighbor search vs the brute-force scan on random trees.

use glam::DVec3;
use loc_octree::{brute_force_neighbors, subdivide_randomly, verify_neighbors, Face, Tree, TreeConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_tree(config: TreeConfig, seed: u64, split_probability: f64) -> Tree<u64> {
  let mut tree = Tree::with_config(config).unwrap();
  let mut rng = StdRng::seed_from_u64(seed);
  subdivide_randomly(&mut tree, &mut rng, split_probability).unwrap();
  tree
}

#[test]
fn every_leaf_and_face_matches_brute_force() {
  for seed in 0..12u64 {
    let split_probability = 0.15 + 0.025 * seed as f64;
    let tree = random_tree(TreeConfig::with_levels(6), seed, split_probability);

    let report = verify_neighbors(&tree);
    assert!(
      report.is_consistent(),
      "seed {} p {}: {:?}",
      seed,
      split_probability,
      report.mismatches
    );
    assert_eq!(report.queries, tree.leaf_cells().len() * 6);
  }
}

#[test]
fn offset_world_matches_brute_force() {
  let config = TreeConfig {
    num_levels: 7,
    world_origin: DVec3::new(-250.0, 40.0, 1000.0),
    world_size: 512.0,
  };
  let tree = random_tree(config, 77, 0.3);
  let report = verify_neighbors(&tree);
  assert!(report.is_consistent(), "{:?}", report.mismatches);
}

/// Point queries from many threads over a finished tree.
#[test]
fn concurrent_queries_agree_with_sequential() {
  let tree = random_tree(TreeConfig::with_levels(8), 4242, 0.35);
  let mut rng = StdRng::seed_from_u64(1);
  let points: Vec<DVec3> = (0..64)
    .map(|_| DVec3::new(rng.random(), rng.random(), rng.random()))
    .collect();

  let sequential: Vec<_> = points
    .iter()
    .map(|&p| {
      let id = tree.locate_point(p).unwrap();
      Face::ALL.map(|face| tree.find_neighbors(id, face))
    })
    .collect();

  std::thread::scope(|scope| {
    let handles: Vec<_> = points
      .chunks(16)
      .map(|chunk| {
        let tree = &tree;
        scope.spawn(move || {
          chunk
            .iter()
            .map(|&p| {
              let id = tree.locate_point(p).unwrap();
              Face::ALL.map(|face| tree.find_neighbors(id, face))
            })
            .collect::<Vec<_>>()
        })
      })
      .collect();

    let parallel: Vec<_> = handles
      .into_iter()
      .flat_map(|handle| handle.join().unwrap())
      .collect();
    assert_eq!(parallel, sequential);
  });
}

/// Brute force never reports a neighbor the optimized search missed, and
/// payloads do not affect either.
#[test]
fn payloads_do_not_change_neighbors() {
  let mut tree = random_tree(TreeConfig::with_levels(6), 9, 0.5);
  let before: Vec<_> = tree
    .leaf_cells()
    .into_iter()
    .map(|id| brute_force_neighbors(&tree, id, Face::YHigh).len())
    .collect();

  for (i, id) in tree.leaf_cells().into_iter().enumerate() {
    tree.set_contents(id, i as u64).unwrap();
  }

  let after: Vec<_> = tree
    .leaf_cells()
    .into_iter()
    .map(|id| tree.find_neighbors(id, Face::YHigh).len())
    .collect();
  assert_eq!(before, after);
}
