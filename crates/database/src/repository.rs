use crate::DbError;
use async_trait::async_trait;
use core_types::{Album, CreateAlbumRequest};
use sqlx::postgres::PgPool;

const SELECT_ALL: &str = "SELECT * FROM album";
const SELECT_BY_ARTIST: &str = "SELECT * FROM album WHERE artist=$1";
const SELECT_BY_ID: &str = "SELECT * FROM album WHERE id=$1";
const INSERT_ALBUM: &str = "INSERT INTO album (title, artist, price) VALUES ($1,$2,$3)";

/// The data access surface the web layer depends on.
///
/// Each method issues exactly one statement. Implementations must be safe to
/// share across concurrently running requests.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// Every album, in whatever order the store returns them.
    async fn list_albums(&self) -> Result<Vec<Album>, DbError>;

    /// Albums whose artist matches `artist` exactly (case-sensitive).
    async fn list_albums_by_artist(&self, artist: &str) -> Result<Vec<Album>, DbError>;

    /// Fails with [`DbError::NotFound`] when no row has this id.
    async fn get_album_by_id(&self, id: i32) -> Result<Album, DbError>;

    /// Inserts a new row. The database assigns the id.
    async fn create_album(&self, request: &CreateAlbumRequest) -> Result<(), DbError>;
}

/// The `DbRepository` is the PostgreSQL-backed [`AlbumStore`]. It owns the
/// shared connection pool and encapsulates all SQL for the `album` table.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Waits for checked-out connections to return, then closes them all.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl AlbumStore for DbRepository {
    async fn list_albums(&self) -> Result<Vec<Album>, DbError> {
        tracing::debug!("Fetching all albums.");
        let albums = sqlx::query_as::<_, Album>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(albums)
    }

    async fn list_albums_by_artist(&self, artist: &str) -> Result<Vec<Album>, DbError> {
        tracing::debug!(artist, "Fetching albums by artist.");
        let albums = sqlx::query_as::<_, Album>(SELECT_BY_ARTIST)
            .bind(artist)
            .fetch_all(&self.pool)
            .await?;
        Ok(albums)
    }

    async fn get_album_by_id(&self, id: i32) -> Result<Album, DbError> {
        tracing::debug!(id, "Fetching album by id.");
        let album = sqlx::query_as::<_, Album>(SELECT_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => DbError::NotFound(id),
                e => e.into(),
            })?;
        Ok(album)
    }

    async fn create_album(&self, request: &CreateAlbumRequest) -> Result<(), DbError> {
        let result = sqlx::query(INSERT_ALBUM)
            .bind(&request.title)
            .bind(&request.artist)
            .bind(request.price)
            .execute(&self.pool)
            .await
            .map_err(DbError::from_write)?;

        tracing::debug!(rows = result.rows_affected(), "Album inserted.");
        Ok(())
    }
}
