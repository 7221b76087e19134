use crate::config::toml_config::TourConfig;
use crate::config::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "guided-tour")]
#[command(about = "A guided tour of everyday language features")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Sections to run, comma separated (defaults to the whole tour)
    #[arg(long, value_delimiter = ',')]
    pub sections: Vec<String>,

    /// Server name used by the concurrency section
    #[arg(long)]
    pub server: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入 TOML（若有指定）並套用命令列覆蓋
    pub fn resolve(&self) -> Result<TourConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TourConfig::from_file(path)?
            }
            None => TourConfig::default(),
        };

        if !self.sections.is_empty() {
            tracing::debug!("Sections overridden to: {:?}", self.sections);
            config.tour.sections = self.sections.clone();
        }

        if let Some(server) = &self.server {
            tracing::debug!("Server overridden to: {}", server);
            config.concurrency.server = server.clone();
        }

        Ok(config)
    }
}
