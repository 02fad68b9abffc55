use crate::config::{Config, ConfigUpdate};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for config repository operations
#[async_trait]
pub trait ConfigRepositoryTrait: Send + Sync {
    /// The stored config, or `None` before anything has been saved.
    fn load_config(&self) -> Result<Option<Config>>;
    async fn save_config(&self, config: Config) -> Result<()>;
}

/// Trait for config service operations
#[async_trait]
pub trait ConfigServiceTrait: Send + Sync {
    /// Effective config, persisted first if the environment filled any gap.
    async fn get_config(&self) -> Result<Config>;
    async fn set_config(&self, update: ConfigUpdate) -> Result<Config>;
}
