use crate::Error;
use std::env;
use std::fmt;

pub const ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";
pub const API_VERSION_VAR: &str = "AZURE_API_VERSION";
pub const API_KEY_VAR: &str = "AZURE_API_KEY";
pub const DEPLOYMENT_VAR: &str = "AZURE_DEPLOYMENT_NAME";

/// Connection settings for an Azure OpenAI deployment.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub api_version: String,
    pub api_key: String,
    pub deployment: String,
}

impl ProviderConfig {
    pub fn new(
        endpoint: impl Into<String>,
        api_version: impl Into<String>,
        api_key: impl Into<String>,
        deployment: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_version: api_version.into(),
            api_key: api_key.into(),
            deployment: deployment.into(),
        }
    }

    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// Every variable must be set to a non-blank value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| -> Result<String, Error> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
                Some(_) => Err(Error::config(format!(
                    "{name} environment variable is set but empty"
                ))),
                None => Err(Error::config(format!(
                    "{name} environment variable is required"
                ))),
            }
        };

        Ok(Self {
            endpoint: require(ENDPOINT_VAR)?,
            api_version: require(API_VERSION_VAR)?,
            api_key: require(API_KEY_VAR)?,
            deployment: require(DEPLOYMENT_VAR)?,
        })
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("api_key", &"<redacted>")
            .field("deployment", &self.deployment)
            .finish()
    }
}
