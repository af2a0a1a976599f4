use sea_orm::DatabaseConnection;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// Pooled connection to the relational store
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
