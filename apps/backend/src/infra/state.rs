use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main).
pub struct StateBuilder {
    db_profile: DbProfile,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: DbProfile::Test,
        }
    }

    pub fn with_profile(mut self, profile: DbProfile) -> Self {
        self.db_profile = profile;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        // single entrypoint: connect + migrate
        let conn = connect_db(self.db_profile).await?;
        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    // Serialized with the config tests that mutate BINGO_TEST_DB_PATH.
    #[tokio::test]
    #[serial]
    async fn default_builder_uses_in_memory_test_db() {
        let state = build_state().build().await.unwrap();
        assert!(state.db.ping().await.is_ok());
    }
}
