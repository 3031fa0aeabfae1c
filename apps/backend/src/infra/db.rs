//! Database bootstrap: connect and migrate in one entrypoint.

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, is_in_memory, DbProfile};
use crate::error::AppError;

/// Connect to the profile's SQLite database and bring the schema up to
/// date. Every caller (server, CLI, tests) goes through here so there is
/// exactly one migration path.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    let mut opts = ConnectOptions::new(url.clone());
    opts.sqlx_logging(false)
        .connect_timeout(Duration::from_secs(5));

    if is_in_memory(&url) {
        // A pool of in-memory connections is a pool of separate empty
        // databases; pin to one connection.
        opts.min_connections(1).max_connections(1);
    } else {
        opts.max_connections(5);
    }

    let conn = Database::connect(opts).await?;

    Migrator::up(&conn, None).await?;
    info!(profile = ?profile, "database connected and migrated");

    Ok(conn)
}
