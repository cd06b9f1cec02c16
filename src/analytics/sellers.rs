//! Seller performance: revenue against review score.

use super::{descending_stable, f64_values, str_column};
use super::{AnalyticsError, AVG_REVIEW_SCORE, TOTAL_SALES};
use crate::data::inner_join_stable;
use crate::data::tables::{ORDER_ID, PRICE, REVIEW_SCORE, SELLER_ID};
use polars::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SellerPerformance {
    pub seller_id: String,
    pub total_sales: f64,
    pub avg_review_score: Option<f64>,
}

/// Revenue and mean review score per seller, highest revenue first.
///
/// Inner joins throughout: items of unknown sellers and items of unreviewed
/// orders are dropped, so a seller with no reviewed order is absent.
pub fn seller_performance(
    filtered_items: &DataFrame,
    sellers: &DataFrame,
    reviews: &DataFrame,
) -> Result<Vec<SellerPerformance>, AnalyticsError> {
    let seller_ids = sellers.clone().lazy().select([col(SELLER_ID)]);
    let scores = reviews
        .clone()
        .lazy()
        .select([col(ORDER_ID), col(REVIEW_SCORE)]);

    let with_sellers =
        inner_join_stable(filtered_items.clone().lazy(), seller_ids, SELLER_ID, SELLER_ID);
    let df = inner_join_stable(with_sellers, scores, ORDER_ID, ORDER_ID)
        .group_by_stable([col(SELLER_ID)])
        .agg([
            col(PRICE).sum().alias(TOTAL_SALES),
            col(REVIEW_SCORE).mean().alias(AVG_REVIEW_SCORE),
        ])
        .sort([TOTAL_SALES], descending_stable())
        .collect()?;

    let ids = str_column(&df, SELLER_ID)?;
    let totals = f64_values(&df, TOTAL_SALES)?;
    let means = f64_values(&df, AVG_REVIEW_SCORE)?;

    Ok(ids
        .into_iter()
        .zip(totals)
        .zip(means)
        .filter_map(|((seller_id, total), avg)| {
            Some(SellerPerformance {
                seller_id: seller_id?.to_string(),
                total_sales: total.unwrap_or(0.0),
                avg_review_score: avg,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, approx_eq};

    #[test]
    fn test_revenue_and_mean_score_per_seller() {
        let items = testing::order_items(&[
            ("O1", "P1", "S1", 100.0),
            ("O2", "P2", "S2", 300.0),
            ("O3", "P3", "S1", 50.0),
            ("O4", "P4", "S3", 999.0),
        ]);
        let sellers = testing::sellers(&["S1", "S2", "S3"]);
        let reviews = testing::reviews(&[("O1", 5), ("O2", 3), ("O3", 2)]);

        let view = seller_performance(&items, &sellers, &reviews).unwrap();
        assert_eq!(view.len(), 2, "S3 has no reviewed order");

        assert_eq!(view[0].seller_id, "S2");
        assert!(approx_eq(view[0].total_sales, 300.0));
        assert_eq!(view[0].avg_review_score, Some(3.0));

        assert_eq!(view[1].seller_id, "S1");
        assert!(approx_eq(view[1].total_sales, 150.0));
        assert!(approx_eq(view[1].avg_review_score.unwrap(), 3.5));

        assert!(view
            .windows(2)
            .all(|pair| pair[0].total_sales >= pair[1].total_sales));
        for row in &view {
            let avg = row.avg_review_score.unwrap();
            assert!((1.0..=5.0).contains(&avg));
        }
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let items = testing::order_items(&[
            ("O1", "P1", "SZ", 10.0),
            ("O2", "P2", "SA", 10.0),
            ("O3", "P3", "SM", 10.0),
        ]);
        let sellers = testing::sellers(&["SA", "SM", "SZ"]);
        let reviews = testing::reviews(&[("O1", 3), ("O2", 4), ("O3", 5)]);

        let view = seller_performance(&items, &sellers, &reviews).unwrap();
        let ids: Vec<&str> = view.iter().map(|row| row.seller_id.as_str()).collect();
        assert_eq!(ids, vec!["SZ", "SA", "SM"]);
    }

    #[test]
    fn test_unknown_seller_is_dropped() {
        let items = testing::order_items(&[("O1", "P1", "S9", 10.0)]);
        let sellers = testing::sellers(&["S1"]);
        let reviews = testing::reviews(&[("O1", 4)]);

        assert!(seller_performance(&items, &sellers, &reviews)
            .unwrap()
            .is_empty());
    }
}
