//! Customers by city.

use super::{descending_stable, row_count, str_column, u64_values};
use super::{AnalyticsError, CUSTOMER_COUNT};
use crate::data::left_join_stable;
use crate::data::tables::{CUSTOMER_ZIP_CODE_PREFIX, GEO_CITY, GEO_ZIP_CODE_PREFIX};
use polars::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CityCustomers {
    pub city: String,
    pub customers: u64,
}

/// Customer count per city, most customers first.
///
/// Customers are a static dimension, so this view takes the full customer
/// table and is never restricted by the date range. Customers whose zip
/// prefix has no location are not counted.
pub fn customers_by_city(
    customers: &DataFrame,
    geolocation: &DataFrame,
) -> Result<Vec<CityCustomers>, AnalyticsError> {
    let locations = geolocation
        .clone()
        .lazy()
        .select([col(GEO_ZIP_CODE_PREFIX), col(GEO_CITY)]);

    let df = left_join_stable(
        customers.clone().lazy(),
        locations,
        CUSTOMER_ZIP_CODE_PREFIX,
        GEO_ZIP_CODE_PREFIX,
    )
    .filter(col(GEO_CITY).is_not_null())
    .group_by_stable([col(GEO_CITY)])
    .agg([row_count(CUSTOMER_COUNT)])
    .sort([CUSTOMER_COUNT], descending_stable())
    .collect()?;

    let cities = str_column(&df, GEO_CITY)?;
    let counts = u64_values(&df, CUSTOMER_COUNT)?;

    Ok(cities
        .into_iter()
        .zip(counts)
        .filter_map(|(city, customers)| {
            Some(CityCustomers {
                city: city?.to_string(),
                customers,
            })
        })
        .collect())
}
