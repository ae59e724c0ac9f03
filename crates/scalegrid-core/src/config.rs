//! Trigger input envelope.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Everything a scaler receives about one trigger definition.
///
/// Secrets live in `auth_params` and are never looked up in
/// `trigger_metadata`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalerConfig {
    /// Non-secret trigger parameters.
    #[serde(default)]
    pub trigger_metadata: HashMap<String, String>,
    /// Resolved authentication parameters.
    #[serde(default)]
    pub auth_params: HashMap<String, String>,
    /// Position of the trigger within its scaled object.
    #[serde(default)]
    pub scaler_index: usize,
}

impl ScalerConfig {
    /// Build a config from the two mappings with scaler index 0.
    pub fn new(
        trigger_metadata: HashMap<String, String>,
        auth_params: HashMap<String, String>,
    ) -> Self {
        Self {
            trigger_metadata,
            auth_params,
            scaler_index: 0,
        }
    }

    /// Set the trigger index.
    pub fn with_scaler_index(mut self, index: usize) -> Self {
        self.scaler_index = index;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_from_json() {
        let json = r#"{
            "triggerMetadata": { "query": "SELECT COUNT(*) FROM ks.t;" },
            "authParams": { "password": "secret" },
            "scalerIndex": 2
        }"#;
        let config: ScalerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.scaler_index, 2);
        assert_eq!(config.trigger_metadata["query"], "SELECT COUNT(*) FROM ks.t;");
        assert_eq!(config.auth_params["password"], "secret");
    }

    #[test]
    fn deserialize_from_toml_with_defaults() {
        let toml_str = r#"
[triggerMetadata]
username = "cassandra"
"#;
        let config: ScalerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scaler_index, 0);
        assert!(config.auth_params.is_empty());
        assert_eq!(config.trigger_metadata["username"], "cassandra");
    }

    #[test]
    fn with_scaler_index_overrides() {
        let config = ScalerConfig::new(HashMap::new(), HashMap::new()).with_scaler_index(3);
        assert_eq!(config.scaler_index, 3);
    }
}
