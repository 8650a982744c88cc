use serde::{Deserialize, Serialize};

use crate::db_api::consts::{CVE_SCHEMA, CWE_SCHEMA, DATE_CREATED, DATE_MODIFIED, ID};

use super::{
    column::{ColumnDef, ColumnType},
    index::{derive_indices, IndexDef},
};

/// Database schema (namespace) a table is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schema {
    /// The default schema from the connection string. Left unqualified in
    /// DDL so migration tooling does not trip over an explicit name.
    Main,
    Cve,
    Cwe,
}

impl Schema {
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::Main => None,
            Self::Cve => Some(CVE_SCHEMA),
            Self::Cwe => Some(CWE_SCHEMA),
        }
    }

    /// Schema-qualified, quoted table reference.
    pub fn qualify(self, table: &str) -> String {
        match self.name() {
            Some(schema) => format!("\"{}\".\"{}\"", schema, table),
            None => format!("\"{}\"", table),
        }
    }
}

/// A fully resolved table definition.
///
/// Never built field by field; concrete tables go through one of the base
/// templates, which run once per definition:
///
///  - [`TableDef::main_base`]: default schema, `id` / `date_created` /
///    `date_modified` columns prepended.
///  - [`TableDef::nvd_base`]: `cve` schema, inline index requests turned
///    into explicit `idx_<table>_<column>` indices.
///  - [`TableDef::cwe_base`]: `cwe` schema, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
    pub name: String,
    pub schema: Schema,
    pub columns: Vec<ColumnDef>,
    pub indices: Vec<IndexDef>,
    /// Install the `BEFORE UPDATE` trigger keeping `date_modified` current.
    pub touch_date_modified: bool,
}

impl TableDef {
    /// Main base template.
    ///
    /// Prepends the shared columns: `id` (autoincrementing primary key),
    /// `date_created` (defaults to the insertion timestamp) and
    /// `date_modified` (same default, bumped on every row update by the
    /// trigger emitted with the table).
    pub fn main_base(name: &str, declared: Vec<ColumnDef>) -> Self {
        let mut columns = vec![
            ColumnDef::new(ID, ColumnType::Integer)
                .autoincrement()
                .primary_key(),
            ColumnDef::new(DATE_CREATED, ColumnType::Timestamp).default_current_timestamp(),
            ColumnDef::new(DATE_MODIFIED, ColumnType::Timestamp).default_current_timestamp(),
        ];
        columns.extend(declared);
        Self {
            name: name.to_owned(),
            schema: Schema::Main,
            columns,
            indices: Vec::new(),
            touch_date_modified: true,
        }
    }

    /// Nvd base template.
    ///
    /// Assigns the `cve` schema and derives one explicit named index per
    /// inline-flagged column. Derivation covers exactly the columns declared
    /// here; it is per-definition and non-cumulative.
    pub fn nvd_base(name: &str, mut declared: Vec<ColumnDef>) -> Self {
        let indices = derive_indices(name, &mut declared);
        Self {
            name: name.to_owned(),
            schema: Schema::Cve,
            columns: declared,
            indices,
            touch_date_modified: false,
        }
    }

    /// Cwe base template: the `cwe` schema assignment and nothing else.
    pub fn cwe_base(name: &str, declared: Vec<ColumnDef>) -> Self {
        Self {
            name: name.to_owned(),
            schema: Schema::Cwe,
            columns: declared,
            indices: Vec::new(),
            touch_date_modified: false,
        }
    }

    pub fn qualified_name(&self) -> String {
        self.schema.qualify(&self.name)
    }
}
