//! Columnar result table.

use crate::forest::ForestRow;
use crate::graph::NodeId;

use super::schema::{ColumnSchema, ColumnType, TableSchema};

pub const ROOT_NODE_ID: &str = "root_node_id";
pub const NODE_ID: &str = "node_id";
pub const PARENT_NODE_ID: &str = "parent_node_id";

/// Column-oriented `(root_node_id, node_id, parent_node_id)` table.
///
/// The three columns always have equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReachabilityTable {
    root_node_id: Vec<NodeId>,
    node_id: Vec<NodeId>,
    parent_node_id: Vec<Option<NodeId>>,
}

impl ReachabilityTable {
    pub fn schema() -> TableSchema {
        TableSchema {
            columns: vec![
                ColumnSchema {
                    name: ROOT_NODE_ID,
                    column_type: ColumnType::Uint32,
                    nullable: false,
                },
                ColumnSchema {
                    name: NODE_ID,
                    column_type: ColumnType::Uint32,
                    nullable: false,
                },
                ColumnSchema {
                    name: PARENT_NODE_ID,
                    column_type: ColumnType::Uint32,
                    nullable: true,
                },
            ],
        }
    }

    /// Materialize rows, preserving their order.
    pub fn from_rows(rows: &[ForestRow]) -> Self {
        let mut table = Self {
            root_node_id: Vec::with_capacity(rows.len()),
            node_id: Vec::with_capacity(rows.len()),
            parent_node_id: Vec::with_capacity(rows.len()),
        };
        for row in rows {
            table.root_node_id.push(row.root);
            table.node_id.push(row.node);
            table.parent_node_id.push(row.parent);
        }
        table
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.node_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.node_id.is_empty()
    }

    pub fn root_node_ids(&self) -> &[NodeId] {
        &self.root_node_id
    }

    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_id
    }

    pub fn parent_node_ids(&self) -> &[Option<NodeId>] {
        &self.parent_node_id
    }

    /// Row `i` as a `ForestRow`.
    pub fn row(&self, i: usize) -> Option<ForestRow> {
        Some(ForestRow {
            root: *self.root_node_id.get(i)?,
            node: *self.node_id.get(i)?,
            parent: *self.parent_node_id.get(i)?,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = ForestRow> + '_ {
        (0..self.row_count()).filter_map(move |i| self.row(i))
    }
}
