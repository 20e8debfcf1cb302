//! Flattened tree records for persistence.
//!
//! A tree is written as its level count plus one record per cell in
//! pre-order. Rebuilding replays the splits in the same order, checking
//! every record against the cell the replay expects next. The layout is
//! plain serde data; pick any serde format.

use serde::{Deserialize, Serialize};

use super::{LocationCode, Tree, TreeConfig};
use crate::error::{OctreeError, Result};

/// One cell in pre-order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellRecord<T> {
  pub level: u8,
  pub code: LocationCode,
  pub has_children: bool,
  /// Leaf payload; always None for internal cells.
  pub contents: Option<T>,
}

/// A whole tree: configuration plus pre-order cell records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeRecords<T> {
  pub config: TreeConfig,
  pub cells: Vec<CellRecord<T>>,
}

impl<T: Clone> Tree<T> {
  /// Flatten to pre-order records.
  pub fn to_records(&self) -> TreeRecords<T> {
    let cells = self
      .pre_order()
      .map(|id| {
        let cell = &self[id];
        CellRecord {
          level: cell.level(),
          code: cell.code(),
          has_children: !cell.is_leaf(),
          contents: cell.contents().cloned(),
        }
      })
      .collect();
    TreeRecords {
      config: self.config().clone(),
      cells,
    }
  }
}

impl<T> Tree<T> {
  /// Rebuild a tree by replaying the splits recorded in `records`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::from_records"))]
  pub fn from_records(records: TreeRecords<T>) -> Result<Self> {
    let mut tree = Tree::with_config(records.config)?;
    let mut pending = vec![tree.root()];
    let mut cells = records.cells.into_iter().enumerate();

    while let Some(id) = pending.pop() {
      let Some((index, record)) = cells.next() else {
        return Err(OctreeError::MalformedRecords(format!(
          "records end before cell {:?} at level {}",
          tree[id].code(),
          tree[id].level()
        )));
      };

      let cell = &tree[id];
      if record.level != cell.level() || record.code != cell.code() {
        return Err(OctreeError::MalformedRecords(format!(
          "record {} is level {} {:?}, expected level {} {:?}",
          index,
          record.level,
          record.code,
          cell.level(),
          cell.code()
        )));
      }

      if record.has_children {
        if record.contents.is_some() {
          return Err(OctreeError::MalformedRecords(format!(
            "record {} has children and contents",
            index
          )));
        }
        let children = tree
          .split(id)
          .map_err(|e| OctreeError::MalformedRecords(format!("record {}: {}", index, e)))?;
        pending.extend(children.iter().rev());
      } else if let Some(contents) = record.contents {
        tree.set_contents(id, contents)?;
      }
    }

    let trailing = cells.count();
    if trailing > 0 {
      return Err(OctreeError::MalformedRecords(format!(
        "{} trailing records after the last cell",
        trailing
      )));
    }

    Ok(tree)
  }
}

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;
