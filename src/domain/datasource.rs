// Datasource domain model
use serde::{Deserialize, Serialize};

/// Datasource fields as the platform's datasource API expects them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Datasource {
    pub access: String,
    pub basic_auth: bool,
    pub basic_auth_password: String,
    pub basic_auth_user: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_json_data: Option<serde_json::Value>,
    pub name: String,
    pub org_id: i64,
    pub password: String,
    pub r#type: String,
    pub type_logo_url: String,
    pub url: String,
    pub user: String,
    pub with_credentials: bool,
}

impl Datasource {
    /// Copy of this definition addressed to an organisation under `name`.
    /// `id` is set only when updating an existing remote record.
    pub fn prepared(&self, name: &str, org_id: i64, id: Option<i64>) -> Self {
        Self {
            id,
            name: name.to_string(),
            org_id,
            ..self.clone()
        }
    }
}
