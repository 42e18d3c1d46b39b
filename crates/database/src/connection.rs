use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::{postgres::PgPoolOptions, Connection, PgPool};
use std::env;
use std::time::Duration;

/// Reads the connection string from the environment variable named in the settings.
pub fn database_url(settings: &DatabaseSettings) -> Result<String, DbError> {
    env::var(&settings.url_env).map_err(|_e| {
        DbError::ConnectionConfigError(format!("{} must be set.", settings.url_env))
    })
}

/// Establishes a connection pool to the PostgreSQL database.
///
/// The pool opens its first connection eagerly, so an unreachable server or
/// bad credentials surface here rather than on the first request.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let database_url = database_url(settings)?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(&database_url)
        .await
        .map_err(DbError::ConnectionError)?;

    tracing::info!(
        max_connections = settings.max_connections,
        "Database connection pool established."
    );
    Ok(pool)
}

/// Liveness check: checks out one connection and round-trips a ping over it.
pub async fn ping(pool: &PgPool) -> Result<(), DbError> {
    let mut conn = pool.acquire().await.map_err(DbError::PingError)?;
    conn.ping().await.map_err(DbError::PingError)?;
    Ok(())
}
