use axum::{extract::DefaultBodyLimit, routing::get, Router};
use configuration::{ServerSettings, Settings};
use database::{AlbumStore, DbRepository};
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<dyn AlbumStore>,
}

impl AppState {
    pub fn new(albums: Arc<dyn AlbumStore>) -> Self {
        Self { albums }
    }
}

/// Builds the router with the four album routes. Kept separate from
/// `run_server` so tests can drive it without a socket or a database.
pub fn router(state: Arc<AppState>, settings: &ServerSettings) -> Router {
    Router::new()
        .route(
            "/albums",
            get(handlers::list_albums).post(handlers::create_album),
        )
        .route("/albums/artist/:artist", get(handlers::list_albums_by_artist))
        .route("/albums/:id", get(handlers::get_album_by_id))
        .with_state(state)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(settings.body_limit_bytes))
}

/// Connects to the database, then serves HTTP until `shutdown` resolves.
///
/// Connect and ping failures are returned before anything is bound; the
/// caller treats them as fatal. The pool is closed once the server stops.
pub async fn run_server(
    settings: Settings,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let db_pool = database::connect(&settings.database).await?;
    database::ping(&db_pool).await?;
    let db_repo = DbRepository::new(db_pool);

    let app_state = Arc::new(AppState::new(Arc::new(db_repo.clone())));
    let app = router(app_state, &settings.server);

    let addr = settings.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Web server stopped, closing database pool.");
    db_repo.close().await;
    Ok(())
}

/// Resolves on ctrl-c.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received.");
}
