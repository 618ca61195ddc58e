//! linkstash-server: HTTP API for bookmark storage
//!
//! Stores links (URL, notes, folder, tags, creation timestamp) and named
//! folders in SQLite and exposes CRUD over JSON under `/api`.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, ensure_schema, DbError};
pub use http::{
    build_router, cors_layer, open_store, run_server, ApiError, AppState, ServerConfig, ServerError,
};
