// Organisation domain model
use super::error::ProvisionError;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Organisation {
    pub name: String,
    pub api_key: String,
    pub datasources: Vec<String>,
    pub dashboards: Vec<String>,
    pub dashboard_vars: HashMap<String, String>,
}

/// An organisation paired with the identifier the platform knows it by.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedOrganisation<'a> {
    pub id: i64,
    pub definition: &'a Organisation,
}

impl<'a> ResolvedOrganisation<'a> {
    pub fn new(id: i64, definition: &'a Organisation) -> Self {
        Self { id, definition }
    }

    /// Bearer credential for org-scoped calls. Empty keys are rejected.
    pub fn api_key(&self) -> Result<&'a str, ProvisionError> {
        if self.definition.api_key.is_empty() {
            return Err(ProvisionError::MissingApiKey {
                org_id: self.id,
                org: self.definition.name.clone(),
            });
        }
        Ok(&self.definition.api_key)
    }

    pub fn dashboard_vars(&self) -> &'a HashMap<String, String> {
        &self.definition.dashboard_vars
    }
}
