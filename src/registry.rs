use std::sync::OnceLock;

use sqlx::PgPool;

use crate::{
    db_api::{
        create,
        db_connection::{get_db_connection, PoolSettings},
    },
    model_base::TableDef,
};

static REGISTRY: OnceLock<ModelRegistry> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("model registry is already attached")]
    AlreadyAttached,
    #[error("model registry accessed before attachment")]
    NotAttached,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Process-wide binding of the connection pool to the declared tables.
///
/// Built once at startup with [`ModelRegistry::init`] and installed with
/// [`attach`]; everything after setup reaches it through [`registry`].
#[derive(Debug)]
pub struct ModelRegistry {
    pool: PgPool,
    tables: Vec<TableDef>,
}

impl ModelRegistry {
    /// Connects the pool (pre-ping forced on, see
    /// [`crate::db_api::db_connection::apply_pool_defaults`]) and takes
    /// ownership of the resolved table definitions.
    pub async fn init(
        settings: PoolSettings,
        tables: Vec<TableDef>,
    ) -> Result<Self, RegistryError> {
        let pool = get_db_connection(settings).await?;
        Ok(Self::from_pool(pool, tables))
    }

    /// Wraps an existing pool. Useful when the caller already owns one.
    pub fn from_pool(pool: PgPool, tables: Vec<TableDef>) -> Self {
        Self { pool, tables }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Creates schemas, tables, indices and triggers for every registered
    /// definition. Safe to re-run.
    pub async fn apply_schema(&self) -> Result<(), RegistryError> {
        log::info!(
            "Applying schema for {} table definition(s)",
            self.tables.len()
        );
        create::execute_create_all(&self.pool, &self.tables).await?;
        Ok(())
    }
}

/// Installs the registry as the process-wide singleton.
///
/// A second attachment is rejected; the first one wins for the lifetime of
/// the process.
pub fn attach(registry: ModelRegistry) -> Result<(), RegistryError> {
    REGISTRY
        .set(registry)
        .map_err(|_| RegistryError::AlreadyAttached)
}

/// The attached registry.
pub fn registry() -> Result<&'static ModelRegistry, RegistryError> {
    REGISTRY.get().ok_or(RegistryError::NotAttached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model_base::{ColumnDef, ColumnType, TableDef};

    // Single test for the whole singleton lifecycle; REGISTRY is shared
    // process state and the ordering matters.
    #[tokio::test]
    async fn attachment_is_first_one_wins() {
        let pool = PgPool::connect_lazy("postgres://postgres@localhost/cve_models_test").unwrap();
        let tables = vec![TableDef::cwe_base(
            "cwe_entries",
            vec![ColumnDef::new("cwe_id", ColumnType::VarChar(16)).primary_key()],
        )];

        assert!(matches!(registry(), Err(RegistryError::NotAttached)));

        attach(ModelRegistry::from_pool(pool.clone(), tables)).unwrap();
        let attached = registry().unwrap();
        assert!(attached.table("cwe_entries").is_some());
        assert!(attached.table("nvd_entries").is_none());

        let late = ModelRegistry::from_pool(pool, Vec::new());
        assert!(matches!(attach(late), Err(RegistryError::AlreadyAttached)));
    }
}
