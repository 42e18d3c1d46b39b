/// Common test utilities and fixtures
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use configuration::ServerSettings;
use core_types::{Album, CreateAlbumRequest};
use database::{AlbumStore, DbError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;
use web_server::AppState;

/// How every call to a [`MemoryStore`] should end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Healthy,
    /// Every call fails the way a dropped connection would.
    Broken,
    /// Inserts are rejected by a constraint; reads behave normally.
    RejectWrites,
}

/// In-memory stand-in for PostgreSQL with the same observable behaviour as
/// `DbRepository`: serial ids from 1, insertion order, exact artist match.
pub struct MemoryStore {
    rows: Mutex<Vec<Album>>,
    calls: AtomicUsize,
    mode: Mode,
}

impl MemoryStore {
    pub fn new(mode: Mode) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            mode,
        }
    }

    /// Number of data access calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            Mode::Broken => Err(DbError::Query(sqlx::Error::PoolTimedOut)),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl AlbumStore for MemoryStore {
    async fn list_albums(&self) -> Result<Vec<Album>, DbError> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_albums_by_artist(&self, artist: &str) -> Result<Vec<Album>, DbError> {
        self.enter()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|a| a.artist == artist).cloned().collect())
    }

    async fn get_album_by_id(&self, id: i32) -> Result<Album, DbError> {
        self.enter()?;
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(DbError::NotFound(id))
    }

    async fn create_album(&self, request: &CreateAlbumRequest) -> Result<(), DbError> {
        self.enter()?;
        if self.mode == Mode::RejectWrites {
            return Err(DbError::Constraint(
                "numeric field overflow".to_string(),
            ));
        }
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push(request.clone().into_album(id));
        Ok(())
    }
}

/// Helper to create a test app router around a fresh store.
pub fn create_test_app(mode: Mode) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new(mode));
    let state = Arc::new(AppState::new(store.clone()));
    let app = web_server::router(state, &ServerSettings::default());
    (app, store)
}

/// Sends one request through the router and returns status and raw body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
