//! Service configuration
//!
//! Layered: built-in defaults, then an optional config file, then
//! `CURRICULA_*` environment variables.

use curricula_audit::InstitutionConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Top-level daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the REST listener binds to
    pub listen_addr: SocketAddr,
    /// Institution-specific audit constants
    pub institution: InstitutionConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8620)),
            institution: InstitutionConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration, layering file and environment over defaults
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&ServiceConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CURRICULA").try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let config = ServiceConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ServiceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.listen_addr, config.listen_addr);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"listen_addr":"0.0.0.0:9000"}"#).unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.institution.hours_per_unit, 54.0);
    }

    #[test]
    fn test_load_without_file_yields_defaults() {
        let config = ServiceConfig::load(None).unwrap();
        assert_eq!(config.listen_addr.port(), 8620);
    }
}
