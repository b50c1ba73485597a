use crate::adapters::DEFAULT_DATA_FILE;
use crate::config::toml_config::{AppConfig, ReportConfig, StorageConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_path, validate_min_count, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "gradebook")]
#[command(about = "Student and score bookkeeping demo")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    pub data_file: String,

    #[arg(long, help = "Load settings from a TOML file instead of the flags above")]
    pub config: Option<String>,

    #[arg(long, default_value = "1")]
    pub top: usize,

    #[arg(long, help = "Also print the per-student report as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// `--config` 檔案優先；`--json` 永遠會開啟 JSON 報表
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                AppConfig::from_file(path)?
            }
            None => AppConfig {
                storage: StorageConfig {
                    data_file: self.data_file.clone(),
                },
                report: ReportConfig {
                    top_count: self.top,
                    json: self.json,
                },
            },
        };

        config.report.json |= self.json;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_file_path("data_file", &self.data_file)?;
        validate_min_count("top", self.top, 1)?;
        if let Some(path) = &self.config {
            validate_file_path("config", path)?;
        }
        Ok(())
    }
}
