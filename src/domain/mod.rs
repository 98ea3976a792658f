// Domain layer - Provisioning models and rules
pub mod dashboard;
pub mod datasource;
pub mod error;
pub mod organisation;
