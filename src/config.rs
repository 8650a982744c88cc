use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{db_api::db_connection::PoolSettings, default_config as defaults};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: ConfigDatabase,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: ConfigDatabase::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigDatabase {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Won't disable connection validation; pool construction forces it on.
    pub test_before_acquire: bool,
}

impl Default for ConfigDatabase {
    fn default() -> Self {
        Self {
            max_connections: defaults::MAX_CONNECTIONS,
            acquire_timeout_secs: defaults::ACQUIRE_TIMEOUT_SECS,
            test_before_acquire: defaults::TEST_BEFORE_ACQUIRE,
        }
    }
}

impl ConfigDatabase {
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
            test_before_acquire: self.test_before_acquire,
        }
    }
}
