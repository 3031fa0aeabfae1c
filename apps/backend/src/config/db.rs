use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production profile: SQLite file from BINGO_DB_PATH
    Prod,
    /// Test profile: in-memory SQLite, or BINGO_TEST_DB_PATH with a
    /// `_test.db` suffix guard
    Test,
}

/// Builds the SQLite connection URL from environment variables.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => {
            let path = env::var("BINGO_DB_PATH").unwrap_or_else(|_| "bingo_cards.db".to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbProfile::Test => match env::var("BINGO_TEST_DB_PATH") {
            Ok(path) => {
                // Enforce safety: a file-backed test DB must be clearly a test DB
                if !path.ends_with("_test.db") {
                    return Err(AppError::config(format!(
                        "Test profile requires database path to end with '_test.db', but got: '{path}'"
                    )));
                }
                Ok(format!("sqlite://{path}?mode=rwc"))
            }
            Err(_) => Ok("sqlite::memory:".to_string()),
        },
    }
}

/// True for URLs that address an in-memory database; such connections must
/// be pinned to a single pooled connection or every checkout sees a
/// different empty database.
pub fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:")
}
