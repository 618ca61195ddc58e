//! Route handlers organized by resource

use std::sync::Arc;

use axum::Router;

use super::server::AppState;

pub mod folders;
pub mod health;
pub mod links;

/// Everything mounted under `/api`.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::router())
        .merge(links::router())
        .merge(folders::router())
}
