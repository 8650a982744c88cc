use serde::{Deserialize, Serialize};

use super::column::ColumnDef;

/// An explicit, named single-column index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDef {
    pub name: String,
    pub table: String,
    pub column: String,
}

/// Deterministic name for a derived index: `idx_<table>_<column>`.
pub fn index_name(table: &str, column: &str) -> String {
    format!("idx_{}_{}", table, column)
}

/// Walks the declared columns and turns every inline index request into an
/// explicit named index.
///
/// The inline flag is cleared on the way, so the table DDL does not also emit
/// its own default-named index for the same column. Runs once per table
/// definition, over the columns declared on that definition only.
pub fn derive_indices(table: &str, columns: &mut [ColumnDef]) -> Vec<IndexDef> {
    let mut indices = Vec::new();
    for column in columns.iter_mut() {
        if !column.index {
            continue;
        }
        column.index = false;
        indices.push(IndexDef {
            name: index_name(table, &column.name),
            table: table.to_owned(),
            column: column.name.clone(),
        });
    }
    indices
}
