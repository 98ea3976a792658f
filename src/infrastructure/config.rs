use crate::domain::dashboard::Dashboard;
use crate::domain::datasource::Datasource;
use crate::domain::error::ProvisionError;
use crate::domain::organisation::Organisation;
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "grafana_bootstrap.yml";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/";
pub const DEFAULT_ADMIN: &str = "admin";
const ENV_PREFIX: &str = "GRAFANA_BOOTSTRAP";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct BootstrapConfig {
    pub datasources: HashMap<String, Datasource>,
    pub dashboards: HashMap<String, Dashboard>,
    pub organisations: Vec<Organisation>,
}

impl BootstrapConfig {
    pub fn parse(path: &Path, content: &str) -> Result<Self, ProvisionError> {
        let config: Self = serde_yaml::from_str(content).map_err(|source| ProvisionError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Every name an organisation references must have a top-level definition.
    pub fn validate(&self) -> Result<(), ProvisionError> {
        for org in &self.organisations {
            for name in &org.datasources {
                self.datasource(org, name)?;
            }
            for name in &org.dashboards {
                self.dashboard(org, name)?;
            }
        }
        Ok(())
    }

    pub fn datasource(&self, org: &Organisation, name: &str) -> Result<&Datasource, ProvisionError> {
        self.datasources
            .get(name)
            .ok_or_else(|| ProvisionError::UnknownDatasource {
                org: org.name.clone(),
                name: name.to_string(),
            })
    }

    pub fn dashboard(&self, org: &Organisation, name: &str) -> Result<&Dashboard, ProvisionError> {
        self.dashboards
            .get(name)
            .ok_or_else(|| ProvisionError::UnknownDashboard {
                org: org.name.clone(),
                name: name.to_string(),
            })
    }
}

pub fn load_bootstrap_config(path: &Path) -> Result<BootstrapConfig, ProvisionError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProvisionError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    BootstrapConfig::parse(path, &content)
}

/// Where and as whom to reach the platform's API
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConnectionSettings {
    pub endpoint: String,
    pub user: String,
    pub pass: String,
}

impl ConnectionSettings {
    /// Endpoint used with bearer API keys
    pub fn api_endpoint(&self) -> Result<Url, ProvisionError> {
        Url::parse(&self.endpoint).map_err(|e| ProvisionError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        })
    }

    /// Endpoint with the admin user and password embedded as userinfo
    pub fn admin_endpoint(&self) -> Result<Url, ProvisionError> {
        let mut url = self.api_endpoint()?;
        url.set_username(&self.user)
            .and_then(|_| url.set_password(Some(&self.pass)))
            .map_err(|_| ProvisionError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                reason: "endpoint cannot carry credentials".to_string(),
            })?;
        Ok(url)
    }
}

/// Defaults, then `GRAFANA_BOOTSTRAP_*` variables, then the given flag values
pub fn load_connection_settings(
    endpoint: Option<String>,
    user: Option<String>,
    pass: Option<String>,
) -> anyhow::Result<ConnectionSettings> {
    build_connection_settings(
        config::Environment::with_prefix(ENV_PREFIX),
        [("endpoint", endpoint), ("user", user), ("pass", pass)],
    )
}

fn build_connection_settings(
    environment: config::Environment,
    overrides: [(&str, Option<String>); 3],
) -> anyhow::Result<ConnectionSettings> {
    let mut builder = config::Config::builder()
        .set_default("endpoint", DEFAULT_ENDPOINT)?
        .set_default("user", DEFAULT_ADMIN)?
        .set_default("pass", DEFAULT_ADMIN)?
        .add_source(environment);
    for (key, value) in overrides {
        builder = builder.set_override_option(key, value)?;
    }

    Ok(builder.build()?.try_deserialize()?)
}
