//! Payment-method distribution and satisfaction.

use super::{descending_stable, f64_values, row_count, str_column, u64_values};
use super::{AnalyticsError, AVG_REVIEW_SCORE, PAYMENT_COUNT};
use crate::data::inner_join_stable;
use crate::data::tables::{ORDER_ID, PAYMENT_TYPE, REVIEW_SCORE};
use polars::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentCount {
    pub payment_type: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSatisfaction {
    pub payment_type: String,
    pub avg_review_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentSummary {
    /// Payment rows per type, most used first.
    pub counts: Vec<PaymentCount>,
    /// Mean review score per type, by type name.
    pub satisfaction: Vec<PaymentSatisfaction>,
}

/// Both payment tables from the date-filtered payments.
pub fn payment_methods(
    filtered_payments: &DataFrame,
    reviews: &DataFrame,
) -> Result<PaymentSummary, AnalyticsError> {
    let counts_df = filtered_payments
        .clone()
        .lazy()
        .filter(col(PAYMENT_TYPE).is_not_null())
        .group_by_stable([col(PAYMENT_TYPE)])
        .agg([row_count(PAYMENT_COUNT)])
        .sort([PAYMENT_COUNT], descending_stable())
        .collect()?;

    let types = str_column(&counts_df, PAYMENT_TYPE)?;
    let counts = u64_values(&counts_df, PAYMENT_COUNT)?;
    let counts = types
        .into_iter()
        .zip(counts)
        .filter_map(|(payment_type, count)| {
            Some(PaymentCount {
                payment_type: payment_type?.to_string(),
                count,
            })
        })
        .collect();

    let scores = reviews
        .clone()
        .lazy()
        .select([col(ORDER_ID), col(REVIEW_SCORE)]);
    let satisfaction_df = inner_join_stable(
        filtered_payments.clone().lazy(),
        scores,
        ORDER_ID,
        ORDER_ID,
    )
    .filter(col(PAYMENT_TYPE).is_not_null())
    .group_by([col(PAYMENT_TYPE)])
    .agg([col(REVIEW_SCORE).mean().alias(AVG_REVIEW_SCORE)])
    .sort([PAYMENT_TYPE], SortMultipleOptions::default())
    .collect()?;

    let types = str_column(&satisfaction_df, PAYMENT_TYPE)?;
    let means = f64_values(&satisfaction_df, AVG_REVIEW_SCORE)?;
    let satisfaction = types
        .into_iter()
        .zip(means)
        .filter_map(|(payment_type, avg)| {
            Some(PaymentSatisfaction {
                payment_type: payment_type?.to_string(),
                avg_review_score: avg,
            })
        })
        .collect();

    Ok(PaymentSummary {
        counts,
        satisfaction,
    })
}
