// Application layer - Reconcile use cases and the ports they depend on
pub mod bootstrap_service;
pub mod dashboard_service;
pub mod datasource_service;
#[cfg(test)]
pub mod fake;
pub mod grafana_repository;
pub mod organisation_service;
