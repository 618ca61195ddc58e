//! Link endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::LinkRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{CreateLinkRequest, Link, LinkUpdate, NewLink, UpdateLinkRequest};

/// Confirmation body for update/delete
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /links - all links, newest first
async fn list_links(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Link>>, ApiError> {
    let links = LinkRepo::new(&state.pool).list().await?;
    Ok(Json(links))
}

/// GET /links/{id}
async fn get_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Link>, ApiError> {
    let link = LinkRepo::new(&state.pool).get(&id).await?;
    Ok(Json(link))
}

/// POST /links - create with a client-chosen id
async fn create_link(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateLinkRequest>,
) -> Result<(StatusCode, Json<Link>), ApiError> {
    let link = NewLink::from_request(req)?;
    let created = LinkRepo::new(&state.pool).create(link).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /links/{id} - replace url, notes, folder and tags
async fn update_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateLinkRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    LinkRepo::new(&state.pool)
        .update(&id, LinkUpdate::from(req))
        .await?;

    Ok(Json(MessageResponse {
        message: "Link updated",
    }))
}

/// DELETE /links/{id}
async fn delete_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    LinkRepo::new(&state.pool).delete(&id).await?;

    Ok(Json(MessageResponse {
        message: "Link deleted",
    }))
}

/// Link routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/links", get(list_links).post(create_link))
        .route(
            "/links/{id}",
            get(get_link).put(update_link).delete(delete_link),
        )
}
