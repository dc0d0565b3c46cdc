//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. All fields are cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `JwtService` holds the precomputed signing keys
//! - `Defaults` is a small value struct behind an `Arc`

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{config::Defaults, util::jwt::JwtService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and validates access tokens.
    pub jwt: JwtService,

    /// Fallback values for omitted payment and product fields.
    pub defaults: Arc<Defaults>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtService, defaults: Defaults) -> Self {
        Self {
            db,
            jwt,
            defaults: Arc::new(defaults),
        }
    }
}
