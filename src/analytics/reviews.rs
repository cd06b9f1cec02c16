//! Review-score distribution by order status.

use super::{f64_values, str_column, AnalyticsError};
use crate::data::inner_join_stable;
use crate::data::tables::{ORDER_ID, ORDER_STATUS, REVIEW_SCORE};
use crate::stats::{BoxSummary, StatsCalculator};
use polars::prelude::*;

pub const CANCELED_STATUS: &str = "canceled";

/// Every review score of one order status, with its boxplot summary.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusScores {
    pub status: String,
    pub scores: Vec<f64>,
    pub summary: Option<BoxSummary>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewDistribution {
    /// Statuses in order of first appearance.
    pub by_status: Vec<StatusScores>,
    /// Mean score of canceled orders; `None` when no canceled order is in range.
    pub canceled_mean: Option<f64>,
}

impl ReviewDistribution {
    pub fn status(&self, status: &str) -> Option<&StatusScores> {
        self.by_status.iter().find(|s| s.status == status)
    }

    pub fn review_count(&self) -> usize {
        self.by_status.iter().map(|s| s.scores.len()).sum()
    }
}

/// Join reviews to the filtered orders and collect scores per status.
pub fn reviews_by_status(
    reviews: &DataFrame,
    filtered_orders: &DataFrame,
) -> Result<ReviewDistribution, AnalyticsError> {
    let statuses = filtered_orders
        .clone()
        .lazy()
        .select([col(ORDER_ID), col(ORDER_STATUS)]);
    let df = inner_join_stable(
        reviews
            .clone()
            .lazy()
            .select([col(ORDER_ID), col(REVIEW_SCORE)]),
        statuses,
        ORDER_ID,
        ORDER_ID,
    )
    .collect()?;

    let status_col = str_column(&df, ORDER_STATUS)?;
    let scores = f64_values(&df, REVIEW_SCORE)?;

    let mut by_status: Vec<StatusScores> = Vec::new();
    for (status, score) in status_col.into_iter().zip(scores) {
        let (Some(status), Some(score)) = (status, score) else {
            continue;
        };
        match by_status.iter_mut().find(|s| s.status == status) {
            Some(group) => group.scores.push(score),
            None => by_status.push(StatusScores {
                status: status.to_string(),
                scores: vec![score],
                summary: None,
            }),
        }
    }

    for group in &mut by_status {
        group.summary = StatsCalculator::box_summary(&group.scores);
    }

    let canceled_mean = by_status
        .iter()
        .find(|s| s.status == CANCELED_STATUS)
        .and_then(|s| StatsCalculator::mean(&s.scores));

    Ok(ReviewDistribution {
        by_status,
        canceled_mean,
    })
}
