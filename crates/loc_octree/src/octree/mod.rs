//! Octree module: location codes, cells, and face-neighbor search.
//!
//! The tree is an explicit arena of cells. Each cell's position is a
//! [`LocationCode`] at the finest resolution plus its level, so neighbor
//! search can jump straight to the region across a face instead of scanning.
//!
//! # Level Convention
//!
//! Level 0 = finest detail (smallest cells), the root is at
//! `num_levels - 1`.
//!
//! ```text
//! Cell Size = world_size * 2^level / 2^(num_levels - 1)
//! ```
//!
//! # Module Structure
//!
//! - [`code`]: `LocationCode` - per-axis integer anchor codes
//! - [`face`]: `Face`, `Axis` - table-driven face identifiers
//! - [`cell`]: `Cell`, `CellId`, `CellRef` - arena nodes and handles
//! - [`tree`]: `Tree` - construction, split/collapse, point location
//! - [`neighbors`]: face-neighbor search
//! - [`brute_force`]: O(n) geometric reference for neighbor search
//! - [`records`]: pre-order flattening and replay
//! - [`random`]: random non-uniform subdivision
//! - [`stats`]: shape statistics

pub mod bounds;
pub mod brute_force;
pub mod cell;
pub mod code;
pub mod config;
pub mod face;
pub mod neighbors;
pub mod random;
pub mod records;
pub mod stats;
pub mod tree;

// Re-exports
pub use bounds::DAabb3;
pub use brute_force::{
  brute_force_in, brute_force_neighbors, verify_neighbors, NeighborMismatch, VerificationReport,
};
pub use cell::{Cell, CellId, CellRef};
pub use code::{LocationCode, MAX_LEVELS};
pub use config::TreeConfig;
pub use face::{Axis, Face};
pub use neighbors::{FaceNeighbors, Neighbors};
pub use random::subdivide_randomly;
pub use records::{CellRecord, TreeRecords};
pub use stats::TreeStats;
pub use tree::Tree;
