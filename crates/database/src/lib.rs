//! # Albums Database Crate
//!
//! The only place in the service that knows SQL. It owns the PostgreSQL
//! connection pool and turns typed requests into parameterized statements
//! against the `album` table.
//!
//! ## Public API
//!
//! - `connect` / `ping`: open the pool and check the server is alive.
//! - `AlbumStore`: the data access trait the web layer is written against.
//! - `DbRepository`: the `PgPool`-backed implementation of `AlbumStore`.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, database_url, ping};
pub use error::DbError;
pub use repository::{AlbumStore, DbRepository};
