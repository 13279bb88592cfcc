//! Table-function boundary for the query engine.
//!
//! The engine hands over five positional arguments and receives a columnar
//! table of `(root_node_id, node_id, parent_node_id)` rows. Registration and
//! invocation from a query language live in the engine; this module only
//! fixes the name, schema, argument decoding and row estimate.

mod args;
mod function;
mod schema;
mod table;


pub use self::args::ArgValue;
pub use self::function::{DfsWeightBounded, ARGUMENT_NAMES, ESTIMATE_SAMPLE_SIZE, TABLE_NAME};
pub use self::schema::{ColumnSchema, ColumnType, TableSchema};
pub use self::table::ReachabilityTable;

use crate::error::GraphResult;

/// A table-valued function with a fixed schema.
pub trait StaticTableFunction {
    /// Stable name the engine registers the function under.
    fn table_name(&self) -> &'static str;

    /// Output schema; identical on every call.
    fn create_schema(&self) -> TableSchema;

    /// Cheap row-count hint for planning. Need not be exact.
    fn estimate_row_count(&self, arguments: &[ArgValue]) -> u32;

    /// Compute the full output table.
    fn compute_table(&self, arguments: &[ArgValue]) -> GraphResult<ReachabilityTable>;
}
