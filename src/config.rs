//! Serializer configuration.

use std::collections::BTreeMap;

use serde_json;

use entities::serializer_for;
use serializer::{Context, Mode, Serializer};

/// Deployment level settings for the API serializers.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// Base URL for absolute hyperlinks, e.g. `"https://cfs.example.org/api"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Overrides the mode of individual entities.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub modes: BTreeMap<String, Mode>,
}

impl Config {
    /// Loads a config from a JSON string.
    pub fn from_json(s: &str) -> Result<Config, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Serializes the config into a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }

    /// Serializes the config into a pretty JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }

    /// Creates the request context for this config.
    pub fn context(&self) -> Context {
        match self.base_url {
            Some(ref base_url) => Context::with_base_url(base_url.as_str()),
            None => Context::new(),
        }
    }

    /// The serializer of an entity with this config's mode overrides applied,
    /// including those for nested entities.
    pub fn serializer(&self, entity: &str) -> Option<Serializer> {
        Some(serializer_for(entity)?.clone().with_modes(&self.modes))
    }
}
