use crate::adapters::DEFAULT_DATA_FILE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GradebookError, Result};
use crate::utils::validation::{validate_file_path, validate_min_count, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub top_count: usize,
    pub json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_count: 1,
            json: false,
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GradebookError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GradebookError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_file_path("storage.data_file", &self.storage.data_file)?;
        validate_min_count("report.top_count", self.report.top_count, 1)?;
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn data_file(&self) -> &str {
        &self.storage.data_file
    }

    fn top_count(&self) -> usize {
        self.report.top_count
    }

    fn json_report(&self) -> bool {
        self.report.json
    }
}
