use sea_orm::DatabaseConnection;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the persistence engine
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
