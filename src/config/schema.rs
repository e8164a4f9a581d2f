use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

/// Development default, used by debug builds.
pub const DEV_URL: &str = "http://localhost:3000";
/// Production default, used by release builds.
pub const PROD_URL: &str = "https://menumind-backend-cf4730043d9a.herokuapp.com";

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Workspace directory - computed from home, not serialized
    #[serde(skip)]
    pub workspace_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub api: ApiConfig,
}

// ── Analysis service endpoint ────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the analysis service. Unset means the build-profile
    /// default applies.
    #[serde(default)]
    pub base_url: Option<String>,
}

// ── Config impl ──────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());
        let menumind_dir = home.join(".menumind");

        Self {
            workspace_dir: menumind_dir.join("workspace"),
            config_path: menumind_dir.join("config.toml"),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// The build profile picks the fallback endpoint: local development
    /// server for debug builds, the hosted backend otherwise.
    #[must_use]
    pub fn default_api_url() -> &'static str {
        if cfg!(debug_assertions) { DEV_URL } else { PROD_URL }
    }

    /// Resolved base URL: configured value (already env-overridden) or the
    /// build default, without a trailing slash.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        self.api
            .base_url
            .as_deref()
            .unwrap_or_else(|| Self::default_api_url())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = self.api.base_url.as_deref() {
            Url::parse(base_url).map_err(|error| {
                ConfigError::Validation(format!("api.base_url '{base_url}': {error}"))
            })?;
        }
        Ok(())
    }

    pub fn load_or_init() -> Result<Self, ConfigError> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Load("could not find home directory".into()))?;
        let menumind_dir = home.join(".menumind");
        let config_path = menumind_dir.join("config.toml");

        if !menumind_dir.exists() {
            fs::create_dir_all(&menumind_dir)?;
            fs::create_dir_all(menumind_dir.join("workspace"))?;
        }

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            let mut config: Config = toml::from_str(&contents)
                .map_err(|error| ConfigError::Load(error.to_string()))?;
            // Set computed paths that are skipped during serialization
            config.config_path.clone_from(&config_path);
            config.workspace_dir = menumind_dir.join("workspace");
            config.validate()?;
            Ok(config)
        } else {
            let config = Self {
                config_path: config_path.clone(),
                workspace_dir: menumind_dir.join("workspace"),
                ..Self::default()
            };
            config.save()?;
            Ok(config)
        }
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        // Analysis endpoint: MENUMIND_API_URL
        if let Ok(api_url) = std::env::var("MENUMIND_API_URL") {
            if !api_url.is_empty() {
                self.api.base_url = Some(api_url);
            }
        }

        // Workspace directory: MENUMIND_WORKSPACE
        if let Ok(workspace) = std::env::var("MENUMIND_WORKSPACE") {
            if !workspace.is_empty() {
                self.workspace_dir = PathBuf::from(shellexpand::tilde(&workspace).into_owned());
            }
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|error| ConfigError::Load(error.to_string()))?;
        fs::write(&self.config_path, toml_str)?;
        Ok(())
    }
}
