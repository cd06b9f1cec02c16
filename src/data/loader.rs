//! CSV Dataset Loader Module
//! Reads the nine dataset tables with Polars and normalizes their column types.

use crate::config::DatasetFiles;
use crate::data::tables::{self, Dataset, Table};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Purchase timestamps in the export look like `2017-10-02 10:56:33`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing data file for table '{table}': {path}")]
    MissingFile { table: &'static str, path: PathBuf },
}

/// Loads the dataset from a directory of CSV files.
pub struct DatasetLoader {
    data_dir: PathBuf,
    files: DatasetFiles,
}

impl DatasetLoader {
    pub fn new(data_dir: impl Into<PathBuf>, files: DatasetFiles) -> Self {
        Self {
            data_dir: data_dir.into(),
            files,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load all nine tables.
    pub fn load(&self) -> Result<Dataset, LoaderError> {
        let mut dataset = Dataset::default();
        for table in Table::ALL {
            *dataset.table_mut(table) = self.load_table(table)?;
        }

        info!(
            data_dir = %self.data_dir.display(),
            orders = dataset.orders.height(),
            order_items = dataset.order_items.height(),
            geolocation = dataset.geolocation.height(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Load a single table and normalize its types.
    pub fn load_table(&self, table: Table) -> Result<DataFrame, LoaderError> {
        let path = self.files.path_for(&self.data_dir, table);
        if !path.exists() {
            return Err(LoaderError::MissingFile {
                table: table.name(),
                path,
            });
        }

        // Inference length 0 reads every column as text; zip prefixes keep
        // their leading zeros.
        let lazy = LazyCsvReader::new(&path)
            .with_infer_schema_length(Some(0))
            .with_ignore_errors(true)
            .finish()?;

        let df = normalize(table, lazy).collect()?;
        debug!(table = table.name(), rows = df.height(), "Loaded table");
        Ok(df)
    }
}

/// Apply the type casts of `table` to an all-text frame.
///
/// Used by the loader and by callers that build tables in memory.
pub fn prepare_table(table: Table, df: DataFrame) -> Result<DataFrame, LoaderError> {
    Ok(normalize(table, df.lazy()).collect()?)
}

fn normalize(table: Table, lazy: LazyFrame) -> LazyFrame {
    let mut casts: Vec<Expr> = table
        .numeric_columns()
        .into_iter()
        .map(|(name, dtype)| col(name).cast(dtype))
        .collect();

    if table == Table::Orders {
        casts.push(parse_timestamp(tables::ORDER_PURCHASE_TIMESTAMP));
    }

    if casts.is_empty() {
        lazy
    } else {
        lazy.with_columns(casts)
    }
}

fn parse_timestamp(column: &str) -> Expr {
    col(column).str().to_datetime(
        Some(TimeUnit::Milliseconds),
        None,
        StrptimeOptions {
            format: Some(TIMESTAMP_FORMAT.into()),
            strict: false,
            ..Default::default()
        },
        lit("raise"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_prepare_orders_parses_timestamp() {
        let raw = df!(
            "order_id" => ["O1", "O2"],
            "order_status" => ["delivered", "canceled"],
            "order_purchase_timestamp" => ["2018-01-05 10:00:00", "2018-02-10 23:59:59"],
        )
        .unwrap();

        let orders = prepare_table(Table::Orders, raw).unwrap();
        let ts = orders.column(tables::ORDER_PURCHASE_TIMESTAMP).unwrap();
        assert_eq!(
            ts.dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
        assert_eq!(ts.null_count(), 0);
    }

    #[test]
    fn test_prepare_reviews_casts_score() {
        let raw = df!(
            "order_id" => ["O1", "O2"],
            "review_score" => ["4", "not a number"],
        )
        .unwrap();

        let reviews = prepare_table(Table::Reviews, raw).unwrap();
        let scores: Vec<Option<i64>> = reviews
            .column(tables::REVIEW_SCORE)
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(scores, vec![Some(4), None]);
    }

    #[test]
    fn test_load_table_keeps_zip_prefix_as_text() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("customers_dataset.csv"),
            "customer_id,customer_unique_id,customer_zip_code_prefix,customer_city,customer_state\n\
             c1,u1,01310,sao paulo,SP\n",
        )
        .unwrap();

        let loader = DatasetLoader::new(dir.path(), DatasetFiles::default());
        let customers = loader.load_table(Table::Customers).unwrap();
        let prefix = customers
            .column(tables::CUSTOMER_ZIP_CODE_PREFIX)
            .unwrap()
            .str()
            .unwrap()
            .get(0);
        assert_eq!(prefix, Some("01310"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let loader = DatasetLoader::new(dir.path(), DatasetFiles::default());
        let err = loader.load_table(Table::Sellers).unwrap_err();
        assert!(matches!(err, LoaderError::MissingFile { table: "sellers", .. }));
    }
}
