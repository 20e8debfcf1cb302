//! loc_octree - location-code octree with face-neighbor queries
//!
//! This crate partitions a cubic domain into recursively nested cells
//! addressed by integer location codes, and finds the cells across any face
//! of any cell without scanning the tree, even where neighboring regions are
//! subdivided to different depths.
//!
//! # Features
//!
//! - **Location codes**: exact integer cell anchors, no floating-point drift
//! - **Neighbor search**: seed-code jump, common-ancestor ascent, face-leaf
//!   descent
//! - **Brute-force reference**: geometric O(n) cross-check of every query
//! - **Generic payloads**: leaves carry any `T`, never inspected
//! - **Records**: pre-order flattening and split replay via serde
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use loc_octree::{Face, Tree};
//!
//! let mut tree: Tree<u32> = Tree::new(10)?;
//! tree.split(tree.root())?;
//!
//! let cell = tree.locate_point(DVec3::new(0.1, 0.1, 0.1))?;
//! let neighbors = tree.find_neighbors(cell, Face::XHigh);
//! assert_eq!(neighbors.len(), 1);
//! assert!(tree.find_neighbors(cell, Face::XLow).is_empty());
//! # Ok::<(), loc_octree::OctreeError>(())
//! ```

pub mod error;
pub use error::{CellState, OctreeError, Result};

// Octree module: codes, cells, tree, neighbor search
pub mod octree;
pub use octree::{
  brute_force_in, brute_force_neighbors, subdivide_randomly, verify_neighbors, Axis, Cell, CellId,
  CellRecord, CellRef, DAabb3, Face, LocationCode, Neighbors, Tree, TreeConfig, TreeRecords,
  TreeStats, VerificationReport,
};
