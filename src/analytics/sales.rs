//! Sales by product category.

use super::{descending_stable, f64_values, row_count, str_column, u64_values};
use super::{AnalyticsError, ITEMS_SOLD, TOTAL_SALES};
use crate::data::inner_join_stable;
use crate::data::tables::{PRICE, PRODUCT_CATEGORY_NAME_ENGLISH, PRODUCT_ID};
use polars::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySales {
    pub category: String,
    pub total_sales: f64,
    pub items_sold: u64,
}

/// Revenue and item count per English category, highest revenue first.
///
/// Items whose product has no English label are left out rather than
/// bucketed; categories without items in range do not appear.
pub fn sales_by_category(
    filtered_items: &DataFrame,
    products_translated: &DataFrame,
) -> Result<Vec<CategorySales>, AnalyticsError> {
    let products = products_translated
        .clone()
        .lazy()
        .select([col(PRODUCT_ID), col(PRODUCT_CATEGORY_NAME_ENGLISH)]);

    let df = inner_join_stable(filtered_items.clone().lazy(), products, PRODUCT_ID, PRODUCT_ID)
        .filter(col(PRODUCT_CATEGORY_NAME_ENGLISH).is_not_null())
        .group_by_stable([col(PRODUCT_CATEGORY_NAME_ENGLISH)])
        .agg([col(PRICE).sum().alias(TOTAL_SALES), row_count(ITEMS_SOLD)])
        .sort([TOTAL_SALES], descending_stable())
        .collect()?;

    let categories = str_column(&df, PRODUCT_CATEGORY_NAME_ENGLISH)?;
    let totals = f64_values(&df, TOTAL_SALES)?;
    let counts = u64_values(&df, ITEMS_SOLD)?;

    Ok(categories
        .into_iter()
        .zip(totals)
        .zip(counts)
        .filter_map(|((category, total), items)| {
            Some(CategorySales {
                category: category?.to_string(),
                total_sales: total.unwrap_or(0.0),
                items_sold: items,
            })
        })
        .collect())
}
