//! Neighbor search benchmarks.
//!
//! Compares the location-code search with the brute-force scan on the same
//! leaf sample and faces of random trees of increasing depth, and measures the
//! full optimized sweep and the parallel neighbor table.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use loc_octree::{brute_force_in, subdivide_randomly, Face, Tree};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_tree(num_levels: u8) -> Tree<()> {
  let mut tree = Tree::new(num_levels).unwrap();
  let mut rng = StdRng::seed_from_u64(12345);
  subdivide_randomly(&mut tree, &mut rng, 0.3).unwrap();
  tree
}

fn bench_find_neighbors(c: &mut Criterion) {
  let mut group = c.benchmark_group("find_neighbors");

  for num_levels in [6u8, 8, 10] {
    let tree = random_tree(num_levels);
    let leaves = tree.leaf_cells();

    // Brute force is O(leaves) per query; both arms use the same sample.
    let sample: Vec<_> = leaves.iter().copied().step_by(leaves.len() / 16 + 1).collect();

    group.bench_with_input(
      BenchmarkId::new("optimized_sample", num_levels),
      &sample,
      |b, sample| {
        b.iter(|| {
          let mut total = 0;
          for &id in sample {
            for face in Face::ALL {
              total += tree.find_neighbors(black_box(id), face).len();
            }
          }
          total
        })
      },
    );

    group.bench_with_input(
      BenchmarkId::new("brute_force_sample", num_levels),
      &sample,
      |b, sample| {
        b.iter(|| {
          let mut total = 0;
          for &id in sample {
            for face in Face::ALL {
              total += brute_force_in(&tree, &leaves, black_box(id), face).len();
            }
          }
          total
        })
      },
    );

    group.bench_with_input(
      BenchmarkId::new("optimized_all_leaves", num_levels),
      &leaves,
      |b, leaves| {
        b.iter(|| {
          let mut total = 0;
          for &id in leaves {
            for face in Face::ALL {
              total += tree.find_neighbors(black_box(id), face).len();
            }
          }
          total
        })
      },
    );
  }

  group.finish();
}

fn bench_neighbor_table(c: &mut Criterion) {
  let tree = random_tree(9);
  c.bench_function("neighbor_table_9_levels", |b| {
    b.iter(|| black_box(tree.neighbor_table()).len())
  });
}

criterion_group!(benches, bench_find_neighbors, bench_neighbor_table);
criterion_main!(benches);
