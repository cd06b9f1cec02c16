//! Configuration Module
//! Dashboard settings loaded from a JSON file with environment overrides.

use crate::data::Table;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.json";

/// Environment variable replacing `data_dir`.
pub const DATA_DIR_ENV: &str = "DASHBOARD_DATA_DIR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// CSV file name of every table, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetFiles {
    pub customers: String,
    pub geolocation: String,
    pub order_items: String,
    pub payments: String,
    pub reviews: String,
    pub orders: String,
    pub category_translation: String,
    pub products: String,
    pub sellers: String,
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            customers: "customers_dataset.csv".to_string(),
            geolocation: "geolocation_dataset.csv".to_string(),
            order_items: "order_items_dataset.csv".to_string(),
            payments: "order_payments_dataset.csv".to_string(),
            reviews: "order_reviews_dataset.csv".to_string(),
            orders: "orders_dataset.csv".to_string(),
            category_translation: "product_category_name_translation.csv".to_string(),
            products: "products_dataset.csv".to_string(),
            sellers: "sellers_dataset.csv".to_string(),
        }
    }
}

impl DatasetFiles {
    pub fn file_name(&self, table: Table) -> &str {
        match table {
            Table::Customers => &self.customers,
            Table::Geolocation => &self.geolocation,
            Table::OrderItems => &self.order_items,
            Table::Payments => &self.payments,
            Table::Reviews => &self.reviews,
            Table::Orders => &self.orders,
            Table::CategoryTranslation => &self.category_translation,
            Table::Products => &self.products,
            Table::Sellers => &self.sellers,
        }
    }

    pub fn path_for(&self, data_dir: &Path, table: Table) -> PathBuf {
        data_dir.join(self.file_name(table))
    }
}

/// Row limits applied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopLimits {
    pub categories: usize,
    pub cities: usize,
    pub sellers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    pub files: DatasetFiles,
    pub top_categories: usize,
    pub top_cities: usize,
    pub top_sellers: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            files: DatasetFiles::default(),
            top_categories: 20,
            top_cities: 10,
            top_sellers: 10,
        }
    }
}

impl DashboardConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, `dashboard.json` in
    /// the working directory is used if present, defaults otherwise. The
    /// `DASHBOARD_DATA_DIR` variable overrides `data_dir` in both cases.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    warn!("No {} found, using default settings", DEFAULT_CONFIG_FILE);
                    Self::default()
                }
            }
        };

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn limits(&self) -> TopLimits {
        TopLimits {
            categories: self.top_categories,
            cities: self.top_cities,
            sellers: self.top_sellers,
        }
    }
}
