use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::config_model::{resolve_config, Config, ConfigUpdate, EnvConfig};
use super::config_traits::{ConfigRepositoryTrait, ConfigServiceTrait};
use crate::errors::Result;

pub struct ConfigService {
    repository: Arc<dyn ConfigRepositoryTrait>,
    env: EnvConfig,
}

impl ConfigService {
    pub fn new(repository: Arc<dyn ConfigRepositoryTrait>, env: EnvConfig) -> Self {
        Self { repository, env }
    }

    /// Service reading fallbacks from the current process environment.
    pub fn from_env(repository: Arc<dyn ConfigRepositoryTrait>) -> Self {
        Self::new(repository, EnvConfig::from_env())
    }
}

#[async_trait]
impl ConfigServiceTrait for ConfigService {
    async fn get_config(&self) -> Result<Config> {
        let stored = self.repository.load_config()?;
        let effective = resolve_config(stored.as_ref(), &self.env);

        let baseline = stored.unwrap_or_default();
        if baseline != effective {
            debug!("Persisting config hydrated from the environment");
            self.repository.save_config(effective.clone()).await?;
        }

        Ok(effective)
    }

    async fn set_config(&self, update: ConfigUpdate) -> Result<Config> {
        let mut config = self.get_config().await?;
        config.apply(&update);
        self.repository.save_config(config.clone()).await?;
        debug!(
            "Config updated (steam id set: {}, api key set: {})",
            config.has_steam_id(),
            config.has_api_key()
        );
        Ok(config)
    }
}
