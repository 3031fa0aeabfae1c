use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// The database handle is injected here and carried through actix's
/// `web::Data`; nothing in the codebase reaches for a global connection.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
