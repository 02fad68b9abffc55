//! Process-level settings for the binary.

use nesta_core::config::EnvConfig;
use nesta_storage_sqlite::get_db_path;

/// Where the app keeps its data and which environment it was started in.
pub struct AppConfig {
    pub db_path: String,
    pub env: EnvConfig,
}

impl AppConfig {
    /// Loads `.env` (without overriding existing variables) and reads the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            db_path: get_db_path(),
            env: EnvConfig::from_env(),
        }
    }
}
