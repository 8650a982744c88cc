//! Declarative base layer for the vulnerability database.
//!
//! This crate owns three things:
//!
//!  - the connection pool setup, with connection validation ("pre-ping")
//!    forced on before any pool is handed out,
//!  - the base templates concrete tables are declared through
//!    ([`model_base`]): shared `id` / `date_created` / `date_modified`
//!    columns, fixed `cve` / `cwe` schema assignments and automatic
//!    `idx_<table>_<column>` index derivation,
//!  - the process-wide [`registry`] binding the pool to the declared tables
//!    and applying their DDL.
//!
//! Concrete table sets live with their consumers; see `cve_models_bin` for
//! the tracker's own set.

pub mod config;
pub mod db_api;
mod default_config;
pub mod model_base;
pub mod registry;

pub use db_api::db_connection::{get_db_connection, PoolSettings};
pub use db_api::structs::BaseRow;
pub use model_base::{ColumnDef, ColumnDefault, ColumnType, IndexDef, Schema, TableDef};
pub use registry::{attach, registry, ModelRegistry, RegistryError};
