// Command-line interface
use crate::infrastructure::config::DEFAULT_CONFIG_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "grafana-bootstrap")]
#[command(version)]
#[command(about = "Provision Grafana organisations, datasources and dashboards from a config file", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long = "debug-logging")]
    pub debug_logging: bool,

    /// The location of the bootstrap config to use
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// The Grafana API endpoint [default: http://localhost:3000/]
    #[arg(long)]
    pub endpoint: Option<String>,

    /// The Grafana admin user [default: admin]
    #[arg(long)]
    pub user: Option<String>,

    /// The Grafana admin password [default: admin]
    #[arg(long)]
    pub pass: Option<String>,
}
