use std::{env, time::Duration};

use dotenv::dotenv;
use log::error;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::default_config as defaults;

/// Tunable connection pool options.
///
/// Whatever `test_before_acquire` is set to here, [`apply_pool_defaults`]
/// forces it on before a pool is built. Validation costs one round trip per
/// checkout; it avoids handing a connection the server already closed to a
/// caller mid-request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Validate a pooled connection's liveness before handing it out
    /// ("pre-ping").
    pub test_before_acquire: bool,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: defaults::MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(defaults::ACQUIRE_TIMEOUT_SECS),
            test_before_acquire: defaults::TEST_BEFORE_ACQUIRE,
        }
    }
}

/// Forces the pre-ping policy on, leaving every other setting untouched.
///
/// This is an unconditional override; callers cannot opt out of connection
/// validation by flipping the flag in their settings.
pub fn apply_pool_defaults(mut settings: PoolSettings) -> PoolSettings {
    settings.test_before_acquire = true;
    settings
}

/// Builds [`PgPoolOptions`] from the given settings, after
/// [`apply_pool_defaults`] has run over them.
pub fn pool_options(settings: PoolSettings) -> PgPoolOptions {
    let settings = apply_pool_defaults(settings);
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .test_before_acquire(settings.test_before_acquire)
}

/// Retrieves the database connection string from environment variables.
///
/// This function uses the `dotenv` crate to load environment variables
/// from a `.env` file (if it exists) and then fetches the `DATABASE_URL`
/// environment variable. If the variable is not found, it logs an error
/// and panics.
///
/// # Panics
/// Panics if the `DATABASE_URL` environment variable is not set.
pub fn get_db() -> String {
    dotenv().ok();
    env::var("DATABASE_URL").unwrap_or_else(|error| {
        error!("error in retrieving db {}", error);
        panic!("db retrieval")
    })
}

/// Asynchronously creates a database connection pool.
///
/// This function initializes a connection pool to the database specified
/// by the connection string retrieved from [`get_db`], sized by `settings`
/// and always carrying the pre-ping policy.
///
/// # Errors
/// This function will return an error if:
/// - The connection string retrieved from [`get_db`] is invalid.
/// - The database is unreachable.
pub async fn get_db_connection(settings: PoolSettings) -> Result<Pool<Postgres>, sqlx::Error> {
    pool_options(settings).connect(&get_db()).await
}
