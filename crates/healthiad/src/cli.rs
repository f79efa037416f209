//! Command-line arguments for healthiad

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// HealthIA diagnosis daemon
#[derive(Parser, Debug)]
#[command(name = "healthiad")]
#[command(about = "HealthIA - symptom-based diagnosis API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (overrides $HEALTHIA_CONFIG and /etc/healthia/config.toml)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Bind address
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Directory holding the model artifacts
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "healthiad=debug,tower_http=info"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Load and validate the model artifacts, then exit
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    /// Flags win over file and environment settings
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.model_dir {
            config.model.dir = dir.clone();
        }
    }
}
