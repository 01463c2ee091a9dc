use super::{
    benchmark::BenchmarkConfig,
    evolution::EvolutionConfig,
    traits::validate_section,
};
use crate::error::PasswordError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix of environment variables overriding file settings,
/// e.g. `GENOPASS__EVOLUTION__STAGNATION_LIMIT=50`
pub const ENV_PREFIX: &str = "GENOPASS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub benchmark: BenchmarkConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), PasswordError> {
        validate_section(&self.evolution)?;
        validate_section(&self.benchmark)?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML or JSON file, then apply `GENOPASS__*` environment overrides
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PasswordError> {
        let builder = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()).required(true));
        self.load(builder)
    }

    /// Defaults plus environment overrides only
    pub fn load_from_env(&self) -> Result<(), PasswordError> {
        self.load(::config::Config::builder())
    }

    fn load(
        &self,
        builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
    ) -> Result<(), PasswordError> {
        let config: AppConfig = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| PasswordError::Configuration(format!("Failed to load config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PasswordError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| PasswordError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Apply `f` and keep the result only if it validates
    pub fn update<F>(&self, f: F) -> Result<(), PasswordError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
