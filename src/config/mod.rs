//! Report configuration: account classification, layout, and locale.

use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    core::services::AccountOrder,
    currency::LocaleConfig,
    report::{layout::DEFAULT_COLUMN_WIDTH, Language, LayoutMode, LayoutOptions},
    utils::{fs::write_atomic, paths},
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Accounts whose credits count as revenue.
    pub revenue_accounts: BTreeSet<String>,
    /// Accounts whose debits count as expense.
    pub expense_accounts: BTreeSet<String>,
    pub layout_mode: LayoutMode,
    pub account_order: AccountOrder,
    /// Stable-sort each snapshot by timestamp before building.
    pub chronological: bool,
    pub language: Language,
    pub locale: LocaleConfig,
    pub column_width: u16,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            revenue_accounts: BTreeSet::new(),
            expense_accounts: BTreeSet::new(),
            layout_mode: LayoutMode::default(),
            account_order: AccountOrder::default(),
            chronological: true,
            language: Language::default(),
            locale: LocaleConfig::default(),
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl ReportConfig {
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            mode: self.layout_mode,
            language: self.language,
            locale: self.locale.clone(),
            column_width: self.column_width,
        }
    }
}

/// Loads and saves [`ReportConfig`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Manager for the default location under the application directory.
    pub fn default_location() -> Self {
        Self::new(paths::config_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config, falling back to defaults when the file does not exist.
    pub fn load(&self) -> Result<ReportConfig, ConfigError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(ReportConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    pub fn save(&self, config: &ReportConfig) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.path, json.as_bytes())?;
        tracing::info!(path = %self.path.display(), "saved report config");
        Ok(())
    }
}
