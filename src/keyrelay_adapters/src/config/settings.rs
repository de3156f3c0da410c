use std::{path::Path, time::Duration};

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{
    CONFIGURATION_DIR, DEFAULT_ENVIRONMENT, auth0::MANAGEMENT_AUDIENCE_PATH, env, prod,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub auth0: Auth0Settings,
    pub backend: BackendSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Auth0Settings {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: Secret<String>,
    /// Management API audience. Defaults to `{base_url}/api/v2/`.
    #[serde(default)]
    pub audience: Option<String>,
    /// Pre-issued management token. When set, no client-credentials exchange happens.
    #[serde(default)]
    pub management_token: Option<Secret<String>>,
    #[serde(default = "default_timeout_millis")]
    pub timeout_millis: u64,
}

impl Auth0Settings {
    pub fn audience(&self) -> String {
        self.audience.clone().unwrap_or_else(|| {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                MANAGEMENT_AUDIENCE_PATH
            )
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub graphql_url: String,
    #[serde(default = "default_timeout_millis")]
    pub timeout_millis: u64,
}

impl BackendSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

fn default_timeout_millis() -> u64 {
    prod::TIMEOUT_MILLIS
}

/// Browser origins allowed to call the resolvers cross-origin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Settings {
    /// Load settings from `configuration/base.json`, the optional environment
    /// file `configuration/{KEYRELAY_ENVIRONMENT}.json`, and `KEYRELAY_*`
    /// environment variables, in increasing precedence.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_path =
            std::env::current_dir().map_err(|e| ConfigError::Message(e.to_string()))?;
        let environment = std::env::var(env::ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        Self::load_from(&base_path.join(CONFIGURATION_DIR), &environment)
    }

    pub fn load_from(configuration_dir: &Path, environment: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(configuration_dir.join("base.json")).required(false))
            .add_source(
                File::from(configuration_dir.join(format!("{environment}.json"))).required(false),
            )
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(env::ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("application.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
