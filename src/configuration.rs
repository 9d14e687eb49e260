use crate::blog_client::BlogClient;
use crate::constant::{LOCAL_ENVIRONMENT, PRODUCTION_ENVIRONMENT};
use crate::error::BizErrorEnum;
use config::{Config, File};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_option_number_from_string;
use std::path::Path;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub name: String,
    pub log_filter: String,
}

#[derive(Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

impl BackendSettings {
    /// No timeout unless one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }

    pub fn client(&self) -> Result<BlogClient, BizErrorEnum> {
        BlogClient::new(self.base_url.clone(), self.timeout())
    }
}

pub fn get_configuration() -> Result<Settings, BizErrorEnum> {
    let base_path = std::env::current_dir().map_err(|e| {
        tracing::error!("Failed to get current dir.");
        BizErrorEnum::GetCurrentDirError(e)
    })?;
    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| LOCAL_ENVIRONMENT.into())
        .try_into()
        .map_err(|e| {
            tracing::error!("Failed to parse APP_ENVIRONMENT: {:?}", e);
            BizErrorEnum::ParseEnvironmentVariableError(e)
        })?;
    get_configuration_from(&base_path.join("configuration"), environment)
}

pub fn get_configuration_from(
    config_dir: &Path,
    environment: Environment,
) -> Result<Settings, BizErrorEnum> {
    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = Config::builder()
        .add_source(File::from(config_dir.join("base.yaml")))
        .add_source(File::from(config_dir.join(environment_filename)))
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build config sources.");
            BizErrorEnum::BuildConfigSourcesError(e)
        })?;
    // Try to convert the configuration values it read into our Settings type
    settings.try_deserialize().map_err(|e| {
        tracing::error!("Failed to deserialize config file.");
        BizErrorEnum::DeserializeConfigurationFileError(e)
    })
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => LOCAL_ENVIRONMENT,
            Environment::Production => PRODUCTION_ENVIRONMENT,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            LOCAL_ENVIRONMENT => Ok(Self::Local),
            PRODUCTION_ENVIRONMENT => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'local' or 'production'.",
                other
            )),
        }
    }
}
