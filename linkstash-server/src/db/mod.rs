//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared by all handlers - no Arc<Mutex<Connection>>
//! - One statement per operation, no multi-step transactions
//! - Rely on DB constraints, handle conflicts - no check-then-insert

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options, default_database_url};
pub use repos::*;
pub use schema::ensure_schema;
