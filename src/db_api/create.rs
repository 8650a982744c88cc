use sqlx::{Executor, PgPool};

use crate::model_base::{ddl, TableDef};

/// Creates the schemas, tables, indices and triggers for the given
/// definitions.
///
/// Statements are emitted in dependency order (schemas, trigger function,
/// tables, indices, triggers) and are individually idempotent, so running
/// this against a database that already carries the layout is safe.
pub async fn execute_create_all(pool: &PgPool, tables: &[TableDef]) -> Result<(), sqlx::Error> {
    for statement in ddl::schema_statements(tables) {
        log::debug!("Executing DDL:\n{}", statement);
        pool.execute(sqlx::query(&statement)).await?;
    }
    Ok(())
}
