use crate::core::summary::Transaction;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MonobankProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub monobank: Option<MonobankProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            monobank: Some(MonobankProviderConfig {
                base_url: "https://api.monobank.ua".to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// The transaction ledger, oldest first by convention (order does not
    /// affect any of the aggregations).
    #[serde(default)]
    pub ledger: Vec<Transaction>,
    #[serde(default)]
    pub providers: ProvidersConfig,
    pub data_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("ua", "kosht", "kosht")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("ua", "kosht", "kosht")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::TransactionType;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
ledger:
  - type: INCOME
    amount: 12000.0
    category: Income
    date: 2026-08-01
    comment: Salary
  - type: EXPENSE
    amount: -250.5
    category: Products
    date: 2026-08-03
  - type: EXPENSE
    amount: -80.0
    date: 2026-08-04
providers:
  monobank:
    base_url: "http://example.com/monobank"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.ledger.len(), 3);

        let salary = &config.ledger[0];
        assert_eq!(salary.kind, TransactionType::Income);
        assert_eq!(salary.amount, 12000.0);
        assert_eq!(salary.category.as_deref(), Some("Income"));
        assert_eq!(salary.comment.as_deref(), Some("Salary"));

        let groceries = &config.ledger[1];
        assert_eq!(groceries.kind, TransactionType::Expense);
        assert_eq!(groceries.amount, -250.5);

        assert!(config.ledger[2].category.is_none());

        assert_eq!(
            config.providers.monobank.unwrap().base_url,
            "http://example.com/monobank"
        );
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_config_defaults_apply_when_sections_missing() {
        let config: AppConfig = serde_yaml::from_str("data_path: /tmp/kosht").unwrap();
        assert!(config.ledger.is_empty());
        assert_eq!(
            config.providers.monobank.unwrap().base_url,
            "https://api.monobank.ua"
        );
        assert_eq!(config.data_path.as_deref(), Some("/tmp/kosht"));
    }
}
