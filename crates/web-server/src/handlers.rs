use crate::{error::AppError, AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use core_types::{Album, CreateAlbumRequest};
use std::sync::Arc;

/// # GET /albums
pub async fn list_albums(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Album>>, AppError> {
    let albums = state.albums.list_albums().await?;
    Ok(Json(albums))
}

/// # GET /albums/artist/:artist
/// An artist with no albums is an empty list, not an error.
pub async fn list_albums_by_artist(
    artist: Result<Path<String>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Album>>, AppError> {
    let Path(artist) = artist.map_err(path_rejection)?;
    let albums = state.albums.list_albums_by_artist(&artist).await?;
    Ok(Json(albums))
}

/// # GET /albums/:id
/// The id is parsed here rather than by the extractor so a bad id gets our
/// own `Invalid params` body, and never reaches the database.
pub async fn get_album_by_id(
    raw_id: Result<Path<String>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Album>, AppError> {
    let Path(raw_id) = raw_id.map_err(path_rejection)?;
    let id = raw_id
        .parse::<i32>()
        .map_err(|e| AppError::InvalidParams(format!("album id {raw_id:?}: {e}")))?;
    let album = state.albums.get_album_by_id(id).await?;
    Ok(Json(album))
}

/// # POST /albums
/// Responds 201 with an empty body.
pub async fn create_album(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAlbumRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::InvalidParams(rejection.body_text()))?;
    state.albums.create_album(&request).await?;
    tracing::info!(title = %request.title, artist = %request.artist, "Album created.");
    Ok(StatusCode::CREATED)
}

/// Segments that do not decode (e.g. `%FF`) get the same body as any other bad parameter.
fn path_rejection(rejection: PathRejection) -> AppError {
    AppError::InvalidParams(rejection.body_text())
}
