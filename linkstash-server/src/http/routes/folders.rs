//! Folder endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::FolderRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{CreateFolderRequest, FolderName, FolderResponse};

/// GET /folders - folder names, ascending
async fn list_folders(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, ApiError> {
    let names = FolderRepo::new(&state.pool).list().await?;
    Ok(Json(names))
}

/// POST /folders - create a new folder
async fn create_folder(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateFolderRequest>,
) -> Result<(StatusCode, Json<FolderResponse>), ApiError> {
    let name = FolderName::new(req.name)?;
    let name = FolderRepo::new(&state.pool).create(name).await?;

    Ok((StatusCode::CREATED, Json(FolderResponse { name })))
}

/// Folder routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/folders", get(list_folders).post(create_folder))
}
