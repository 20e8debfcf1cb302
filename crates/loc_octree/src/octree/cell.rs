//! Cell - a node of the octree arena.
//!
//! Cells are owned by the tree's arena and addressed by [`CellId`]. A cell
//! either has eight children or is a leaf carrying an optional payload. The
//! parent link is a plain handle used for ascent during neighbor search.

use super::{DAabb3, Face, LocationCode, Neighbors, Tree};

/// Stable handle of a cell inside one [`Tree`].
///
/// Handles of collapsed cells may be reused by later splits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct CellId(pub(crate) u32);

impl CellId {
  /// Get the raw arena index.
  pub fn raw(&self) -> u32 {
    self.0
  }

  #[inline]
  pub(crate) fn index(self) -> usize {
    self.0 as usize
  }
}

/// Octree cell, generic over the leaf payload.
#[derive(Clone, Debug)]
pub struct Cell<T> {
  pub(crate) level: u8,
  pub(crate) code: LocationCode,
  pub(crate) parent: Option<CellId>,
  pub(crate) children: Option<[CellId; 8]>,
  pub(crate) contents: Option<T>,
}

impl<T> Cell<T> {
  pub(crate) fn new(level: u8, code: LocationCode, parent: Option<CellId>) -> Self {
    Self {
      level,
      code,
      parent,
      children: None,
      contents: None,
    }
  }

  /// Level of this cell (0 = finest, root = num_levels - 1).
  #[inline]
  pub fn level(&self) -> u8 {
    self.level
  }

  /// Anchor location code.
  #[inline]
  pub fn code(&self) -> LocationCode {
    self.code
  }

  /// Parent handle; None for the root.
  #[inline]
  pub fn parent(&self) -> Option<CellId> {
    self.parent
  }

  /// Children in octant order; None for leaves.
  #[inline]
  pub fn children(&self) -> Option<&[CellId; 8]> {
    self.children.as_ref()
  }

  /// Child in `octant` (0-7), if split.
  #[inline]
  pub fn child(&self, octant: u8) -> Option<CellId> {
    self.children.map(|children| children[octant as usize])
  }

  /// A cell is a leaf iff it has no children.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.children.is_none()
  }

  /// Payload; only leaves carry one.
  #[inline]
  pub fn contents(&self) -> Option<&T> {
    self.contents.as_ref()
  }

  /// True if a cell at this level and code covers the finest-level `code`.
  #[inline]
  pub(crate) fn covers(&self, code: &LocationCode) -> bool {
    code.ancestor_at(self.level) == self.code
  }
}

/// Borrowed view of one cell together with its tree.
///
/// Lets callers navigate and query without passing the tree around.
pub struct CellRef<'a, T> {
  tree: &'a Tree<T>,
  id: CellId,
}

impl<T> Clone for CellRef<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for CellRef<'_, T> {}

impl<'a, T> CellRef<'a, T> {
  pub(crate) fn new(tree: &'a Tree<T>, id: CellId) -> Self {
    Self { tree, id }
  }

  /// Handle of the viewed cell.
  pub fn id(&self) -> CellId {
    self.id
  }

  /// The underlying cell.
  pub fn cell(&self) -> &'a Cell<T> {
    &self.tree[self.id]
  }

  pub fn level(&self) -> u8 {
    self.cell().level
  }

  pub fn code(&self) -> LocationCode {
    self.cell().code
  }

  pub fn is_leaf(&self) -> bool {
    self.cell().is_leaf()
  }

  pub fn contents(&self) -> Option<&'a T> {
    self.cell().contents.as_ref()
  }

  /// Levels between this cell and the root (root = 0).
  pub fn depth(&self) -> u8 {
    self.tree.config().root_level() - self.level()
  }

  /// World-space box.
  pub fn bounds(&self) -> DAabb3 {
    self.tree.config().cell_bounds(&self.code(), self.level())
  }

  pub fn parent(&self) -> Option<CellRef<'a, T>> {
    self.cell().parent.map(|id| CellRef::new(self.tree, id))
  }

  /// Children in octant order; empty for leaves.
  pub fn children(&self) -> impl Iterator<Item = CellRef<'a, T>> + 'a {
    let tree = self.tree;
    self
      .cell()
      .children
      .into_iter()
      .flatten()
      .map(move |id| CellRef::new(tree, id))
  }

  /// Existing cells across `face`; see [`Tree::find_neighbors`].
  pub fn find_neighbors(&self, face: Face) -> Neighbors {
    self.tree.find_neighbors(self.id, face)
  }
}

impl<T> std::fmt::Debug for CellRef<'_, T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CellRef")
      .field("id", &self.id)
      .field("level", &self.level())
      .field("code", &self.code())
      .finish()
  }
}
