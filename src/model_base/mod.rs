//! # Base templates for the vulnerability tables
//!
//! Concrete tables are not written as free-form DDL; they are declared as
//! [`ColumnDef`] lists and resolved through one of three templates on
//! [`TableDef`], once, when the definition is constructed:
//!
//!  - `main_base`: default schema, shared `id` / `date_created` /
//!    `date_modified` columns.
//!  - `nvd_base`: `cve` schema, inline index requests rewritten into explicit
//!    `idx_<table>_<column>` indices.
//!  - `cwe_base`: `cwe` schema.
//!
//! [`ddl`] renders resolved definitions to SQL text.

pub mod column;
pub mod ddl;
pub mod index;
pub mod table;

pub use column::{ColumnDef, ColumnDefault, ColumnType};
pub use index::{derive_indices, index_name, IndexDef};
pub use table::{Schema, TableDef};
