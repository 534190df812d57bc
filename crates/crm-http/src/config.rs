//! Route configuration for the auth-failure router
//!
//! Loaded from a TOML fragment; every key is optional:
//!
//! ```toml
//! login_route = "/login"
//! forbidden_route = "/error/403"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::router::Destination;

/// Routes the user is sent to on 401 and 403
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub login_route: String,
    pub forbidden_route: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            login_route: "/login".to_string(),
            forbidden_route: "/error/403".to_string(),
        }
    }
}

impl RouterConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded router config");
        Ok(config)
    }

    /// Routes must be absolute paths within the app
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, route) in [
            ("login_route", &self.login_route),
            ("forbidden_route", &self.forbidden_route),
        ] {
            if !route.starts_with('/') {
                return Err(ConfigError::InvalidRoute {
                    field,
                    route: route.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn route_for(&self, destination: Destination) -> &str {
        match destination {
            Destination::Login => &self.login_route,
            Destination::Forbidden => &self.forbidden_route,
        }
    }
}
