use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single row of the `album` table.
///
/// `id` is assigned by the database on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Album {
    pub id: i32,
    pub title: String,
    pub artist: String,
    /// Stored as `NUMERIC`, sent over the wire as a plain JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// The body of `POST /albums`. Same shape as [`Album`] minus the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAlbumRequest {
    pub title: String,
    pub artist: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl CreateAlbumRequest {
    /// Builds the full record once the database has handed out an id.
    pub fn into_album(self, id: i32) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}
