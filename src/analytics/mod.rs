//! Analytics module - the five aggregate views and the pipeline that feeds them

mod customers;
mod dashboard;
mod payments;
mod reviews;
mod sales;
mod sellers;

pub use customers::{customers_by_city, CityCustomers};
pub use dashboard::{Dashboard, DashboardViews, FilteredTables};
pub use payments::{payment_methods, PaymentCount, PaymentSatisfaction, PaymentSummary};
pub use reviews::{reviews_by_status, ReviewDistribution, StatusScores, CANCELED_STATUS};
pub use sales::{sales_by_category, CategorySales};
pub use sellers::{seller_performance, SellerPerformance};

use crate::data::FilterError;
use polars::prelude::*;
use thiserror::Error;

pub const TOTAL_SALES: &str = "total_sales";
pub const ITEMS_SOLD: &str = "items_sold";
pub const AVG_REVIEW_SCORE: &str = "avg_review_score";
pub const CUSTOMER_COUNT: &str = "customer_count";
pub const PAYMENT_COUNT: &str = "count";

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Filter error: {0}")]
    FilterError(#[from] FilterError),
}

/// Descending sort that keeps first-seen order among equal values.
fn descending_stable() -> SortMultipleOptions {
    SortMultipleOptions::default()
        .with_order_descending(true)
        .with_maintain_order(true)
}

/// Rows counted by `len()`, as `u64` regardless of the index width.
fn row_count(name: &str) -> Expr {
    len().cast(DataType::UInt64).alias(name)
}

fn str_column<'a>(df: &'a DataFrame, name: &str) -> PolarsResult<&'a StringChunked> {
    df.column(name)?.str()
}

fn f64_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column
        .f64()?
        .into_iter()
        .map(|v| v.filter(|x| !x.is_nan()))
        .collect())
}

/// Count values; a null count is an error.
fn u64_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<u64>> {
    let column = df.column(name)?.cast(&DataType::UInt64)?;
    column
        .u64()?
        .into_iter()
        .map(|v| {
            v.ok_or_else(|| {
                PolarsError::ComputeError(format!("null count in column '{}'", name).into())
            })
        })
        .collect()
}
