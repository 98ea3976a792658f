// Provisioning error kinds
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse bootstrap config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("organisation \"{org}\" references unknown datasource \"{name}\"")]
    UnknownDatasource { org: String, name: String },

    #[error("organisation \"{org}\" references unknown dashboard \"{name}\"")]
    UnknownDashboard { org: String, name: String },

    #[error("Missing API key for Org: {org_id} ({org})")]
    MissingApiKey { org_id: i64, org: String },

    /// Non-success HTTP status, carried as its status line (e.g. `404 Not Found`)
    #[error("{0}")]
    Status(String),
}
