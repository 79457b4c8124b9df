use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SERVICE: &str = "medical-imaging";
pub const DEFAULT_REGION: &str = "ap-southeast-2";

/// Target service metadata used by the signer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerConfig {
    /// Host of the downstream AWS endpoint, e.g. `runtime-medical-imaging.ap-southeast-2.amazonaws.com`
    pub host: String,
    #[serde(default = "default_service")]
    pub service: String,
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_service() -> String {
    DEFAULT_SERVICE.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl SignerConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            service: default_service(),
            region: default_region(),
        }
    }

    /// Load a config file. `.yaml`/`.yml` files are parsed as YAML, anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let config: SignerConfig = if is_yaml {
            serde_yml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// The host is concatenated into the signed URI, so it must be a bare authority.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("host must not be empty".to_string());
        }
        if self.host.contains("://") || self.host.contains('/') {
            return Err(format!(
                "host '{}' must not include a scheme or path",
                self.host
            ));
        }
        if self.service.is_empty() {
            return Err("service must not be empty".to_string());
        }
        if self.region.is_empty() {
            return Err("region must not be empty".to_string());
        }
        Ok(())
    }
}
