//! Tree - arena of cells rooted at a single cube.
//!
//! Cells live in a slot arena and refer to each other by [`CellId`].
//! Children are owned through their parent's slot list; the parent link is a
//! plain handle, so dropping the tree drops everything at once.
//!
//! Topology changes (`split`, `collapse`) need `&mut Tree`, queries need
//! `&Tree`. The borrow checker enforces the build-then-query discipline.

use glam::DVec3;

use super::code::LocationCode;
use super::{Cell, CellId, CellRef, DAabb3, TreeConfig};
use crate::error::{CellState, OctreeError, Result};

/// Location-code octree, generic over the leaf payload `T`.
#[derive(Clone, Debug)]
pub struct Tree<T> {
  config: TreeConfig,
  cells: Vec<Option<Cell<T>>>,
  /// Vacant arena slots, reused by later splits.
  free: Vec<CellId>,
  root: CellId,
}

impl<T> Tree<T> {
  /// Tree over the unit cube with `num_levels` levels and a single leaf root.
  pub fn new(num_levels: u8) -> Result<Self> {
    Self::with_config(TreeConfig::with_levels(num_levels))
  }

  /// Tree with a single leaf root spanning the configured world cube.
  pub fn with_config(config: TreeConfig) -> Result<Self> {
    config.validate()?;
    let root = Cell::new(config.root_level(), LocationCode::ZERO, None);
    Ok(Self {
      config,
      cells: vec![Some(root)],
      free: Vec::new(),
      root: CellId(0),
    })
  }

  /// Tree configuration.
  #[inline]
  pub fn config(&self) -> &TreeConfig {
    &self.config
  }

  /// Total number of levels, root included.
  #[inline]
  pub fn num_levels(&self) -> u8 {
    self.config.num_levels
  }

  /// Handle of the root cell.
  #[inline]
  pub fn root(&self) -> CellId {
    self.root
  }

  /// Number of live cells (internal and leaf).
  pub fn len(&self) -> usize {
    self.cells.len() - self.free.len()
  }

  /// Never true: the root always exists.
  pub fn is_empty(&self) -> bool {
    false
  }

  /// Cell by handle, None if the handle is stale.
  #[inline]
  pub fn get(&self, id: CellId) -> Option<&Cell<T>> {
    self.cells.get(id.index()).and_then(Option::as_ref)
  }

  #[inline]
  fn get_mut(&mut self, id: CellId) -> Result<&mut Cell<T>> {
    self
      .cells
      .get_mut(id.index())
      .and_then(Option::as_mut)
      .ok_or(OctreeError::UnknownCell(id))
  }

  /// Borrowed view of a cell.
  pub fn cell(&self, id: CellId) -> Option<CellRef<'_, T>> {
    self.get(id).map(|_| CellRef::new(self, id))
  }

  /// World-space box of a cell.
  pub fn cell_bounds(&self, id: CellId) -> DAabb3 {
    let cell = &self[id];
    self.config.cell_bounds(&cell.code, cell.level)
  }

  fn alloc(&mut self, cell: Cell<T>) -> CellId {
    match self.free.pop() {
      Some(id) => {
        self.cells[id.index()] = Some(cell);
        id
      }
      None => {
        let id = CellId(self.cells.len() as u32);
        self.cells.push(Some(cell));
        id
      }
    }
  }

  // ===========================================================================
  // Topology
  // ===========================================================================

  /// Subdivide a leaf into eight children one level finer.
  ///
  /// Children are returned in octant order (bit 0 = +X, bit 1 = +Y,
  /// bit 2 = +Z) and start without contents. The former leaf's contents are
  /// dropped since internal cells carry none.
  pub fn split(&mut self, id: CellId) -> Result<[CellId; 8]> {
    let (level, code) = {
      let cell = self.get_mut(id)?;
      if !cell.is_leaf() {
        return Err(OctreeError::invalid_state(id, CellState::AlreadySplit));
      }
      if cell.level == 0 {
        return Err(OctreeError::invalid_state(id, CellState::AtFinestLevel));
      }
      cell.contents = None;
      (cell.level, cell.code)
    };

    let child_level = level - 1;
    let mut children = [CellId(0); 8];
    for (octant, slot) in children.iter_mut().enumerate() {
      let child_code = code.child(octant as u8, child_level);
      *slot = self.alloc(Cell::new(child_level, child_code, Some(id)));
    }

    self.get_mut(id)?.children = Some(children);
    Ok(children)
  }

  /// Merge eight leaf children back into their parent.
  ///
  /// Children's contents are dropped; their handles become stale.
  pub fn collapse(&mut self, id: CellId) -> Result<()> {
    let children = match self.get(id) {
      None => return Err(OctreeError::UnknownCell(id)),
      Some(cell) => match cell.children {
        None => return Err(OctreeError::invalid_state(id, CellState::IsLeaf)),
        Some(children) => children,
      },
    };
    if !children.iter().all(|&child| self[child].is_leaf()) {
      return Err(OctreeError::invalid_state(id, CellState::NotCollapsible));
    }

    for child in children {
      self.cells[child.index()] = None;
      self.free.push(child);
    }
    self.get_mut(id)?.children = None;
    Ok(())
  }

  // ===========================================================================
  // Point location
  // ===========================================================================

  /// Leaf containing a world-space point.
  ///
  /// The domain is closed; points on a shared face go to the higher cell.
  pub fn locate_point(&self, point: DVec3) -> Result<CellId> {
    self.locate_point_at_level(point, 0)
  }

  /// Cell containing a point, stopping at `level` if the tree is deeper there.
  pub fn locate_point_at_level(&self, point: DVec3, level: u8) -> Result<CellId> {
    let code = self
      .config
      .world_to_code(point)
      .ok_or(OctreeError::PointOutOfDomain { point })?;
    Ok(self.traverse(&code, level))
  }

  /// Descend from the root toward `code`, stopping at a leaf or at `level`.
  pub fn traverse(&self, code: &LocationCode, level: u8) -> CellId {
    self.descend(self.root, code, level)
  }

  /// Descend from `start` toward `code`; `start` must cover `code`.
  pub(crate) fn descend(&self, start: CellId, code: &LocationCode, level: u8) -> CellId {
    let mut current = start;
    loop {
      let cell = &self[current];
      if cell.level <= level {
        return current;
      }
      match cell.children {
        Some(children) => current = children[code.octant_at(cell.level) as usize],
        None => return current,
      }
    }
  }

  // ===========================================================================
  // Enumeration
  // ===========================================================================

  /// Every live cell in pre-order (parent before children, octant order).
  pub fn pre_order(&self) -> impl Iterator<Item = CellId> + '_ {
    self.pre_order_from(self.root)
  }

  /// Pre-order walk of the subtree rooted at `start`.
  pub fn pre_order_from(&self, start: CellId) -> impl Iterator<Item = CellId> + '_ {
    let mut stack = vec![start];
    std::iter::from_fn(move || {
      let id = stack.pop()?;
      if let Some(children) = self[id].children {
        stack.extend(children.iter().rev());
      }
      Some(id)
    })
  }

  /// Every cell, pre-order.
  pub fn all_cells(&self) -> Vec<CellId> {
    self.pre_order().collect()
  }

  /// Every leaf, pre-order.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::leaf_cells"))]
  pub fn leaf_cells(&self) -> Vec<CellId> {
    self.pre_order().filter(|&id| self[id].is_leaf()).collect()
  }

  /// Leaves at exactly `level`.
  pub fn leaf_cells_at_level(&self, level: u8) -> Vec<CellId> {
    self
      .pre_order()
      .filter(|&id| {
        let cell = &self[id];
        cell.is_leaf() && cell.level == level
      })
      .collect()
  }

  /// Leaves whose world box overlaps `region` (touching counts).
  pub fn cells_in_region(&self, region: &DAabb3) -> Vec<CellId> {
    let mut found = Vec::new();
    let mut stack = vec![self.root];
    while let Some(id) = stack.pop() {
      if !self.cell_bounds(id).overlaps(region) {
        continue;
      }
      match self[id].children {
        Some(children) => stack.extend(children.iter().rev()),
        None => found.push(id),
      }
    }
    found
  }

  // ===========================================================================
  // Payload
  // ===========================================================================

  /// Leaf payload.
  pub fn contents(&self, id: CellId) -> Option<&T> {
    self.get(id).and_then(|cell| cell.contents.as_ref())
  }

  /// Mutable leaf payload.
  pub fn contents_mut(&mut self, id: CellId) -> Option<&mut T> {
    self
      .cells
      .get_mut(id.index())
      .and_then(Option::as_mut)
      .and_then(|cell| cell.contents.as_mut())
  }

  /// Attach a payload to a leaf, returning the previous one.
  pub fn set_contents(&mut self, id: CellId, contents: T) -> Result<Option<T>> {
    let cell = self.get_mut(id)?;
    if !cell.is_leaf() {
      return Err(OctreeError::invalid_state(id, CellState::NotLeaf));
    }
    Ok(cell.contents.replace(contents))
  }

  /// Detach a leaf's payload.
  pub fn take_contents(&mut self, id: CellId) -> Option<T> {
    self
      .cells
      .get_mut(id.index())
      .and_then(Option::as_mut)
      .and_then(|cell| cell.contents.take())
  }

  /// Set every leaf's payload to a clone of `value`.
  pub fn init_leaves(&mut self, value: T)
  where
    T: Clone,
  {
    for cell in self.cells.iter_mut().flatten() {
      if cell.is_leaf() {
        cell.contents = Some(value.clone());
      }
    }
  }
}

impl<T> std::ops::Index<CellId> for Tree<T> {
  type Output = Cell<T>;

  fn index(&self, id: CellId) -> &Self::Output {
    match self.get(id) {
      Some(cell) => cell,
      None => panic!("stale or foreign cell handle {:?}", id),
    }
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
