mod employee;
#[cfg(test)]
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

use crate::models::Employee;

/// Connects to a PostgreSQL database with the given `db_url`, returning a connection pool for accessing it
pub async fn connect_sqlx(db_url: &str) -> sqlx::Result<PgPool> {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(32)
        .min_connections(4)
        .connect(db_url)
        .await
}

/// Applies every pending migration from `./migrations`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("employee not found")]
    NotFound,
    #[error("failed to {action} employee: {source}")]
    Database {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound)
    }
}

pub type Result<T, E = RepositoryError> = std::result::Result<T, E>;

/// Storage capability the service layer is written against.
///
/// `create` and `update` write the server-assigned fields (id, timestamps)
/// back into the passed entity.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, employee: &mut Employee) -> Result<()>;
    async fn get_by_id(&self, id: i32) -> Result<Employee>;
    /// Newest first.
    async fn get_all(&self) -> Result<Vec<Employee>>;
    async fn update(&self, employee: &mut Employee) -> Result<()>;
    async fn delete(&self, id: i32) -> Result<()>;
}

pub struct PostgreDatabase {
    sqlx_db: PgPool,
}

impl PostgreDatabase {
    pub fn new(sqlx_db: PgPool) -> Self {
        PostgreDatabase { sqlx_db }
    }
}

/// Current instant at the precision PostgreSQL stores (microseconds)
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Timestamp for a mutation of a row last touched at `previous`; always later than `previous`
pub(crate) fn refreshed_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = now();
    if now > previous {
        now
    } else {
        previous + chrono::Duration::microseconds(1)
    }
}
