//! Dashboard Pipeline
//! Runs consolidation, translation, the date filter and all five views for
//! one date-range selection.

use super::{
    customers_by_city, payment_methods, reviews_by_status, sales_by_category, seller_performance,
};
use super::{
    AnalyticsError, CategorySales, CityCustomers, PaymentSummary, ReviewDistribution,
    SellerPerformance,
};
use crate::data::category::translate;
use crate::data::filter::{filter_by_orders, filter_orders};
use crate::data::geolocation::consolidate;
use crate::data::{Dataset, DateRange};
use polars::prelude::*;
use tracing::{debug, info, warn};

/// Order-keyed tables restricted to one date range.
///
/// Built once per run; every view reads from the same snapshot.
#[derive(Debug, Clone)]
pub struct FilteredTables {
    pub orders: DataFrame,
    pub order_items: DataFrame,
    pub payments: DataFrame,
}

impl FilteredTables {
    pub fn new(dataset: &Dataset, range: &DateRange) -> Result<Self, AnalyticsError> {
        let orders = filter_orders(&dataset.orders, range)?;
        let order_items = filter_by_orders(&dataset.order_items, &orders)?;
        let payments = filter_by_orders(&dataset.payments, &orders)?;
        Ok(Self {
            orders,
            order_items,
            payments,
        })
    }
}

/// All aggregate views for one date range.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViews {
    pub range: DateRange,
    pub order_count: usize,
    pub sales_by_category: Vec<CategorySales>,
    pub customers_by_city: Vec<CityCustomers>,
    pub seller_performance: Vec<SellerPerformance>,
    pub review_distribution: ReviewDistribution,
    pub payment_summary: PaymentSummary,
}

impl DashboardViews {
    pub fn top_categories(&self, n: usize) -> &[CategorySales] {
        &self.sales_by_category[..n.min(self.sales_by_category.len())]
    }

    pub fn top_cities(&self, n: usize) -> &[CityCustomers] {
        &self.customers_by_city[..n.min(self.customers_by_city.len())]
    }

    pub fn top_sellers(&self, n: usize) -> &[SellerPerformance] {
        &self.seller_performance[..n.min(self.seller_performance.len())]
    }
}

pub struct Dashboard;

impl Dashboard {
    /// Run the whole pipeline from the raw dataset.
    ///
    /// Nothing is cached between calls; each selection recomputes every
    /// derived table.
    pub fn compute(dataset: &Dataset, range: &DateRange) -> Result<DashboardViews, AnalyticsError> {
        let geolocation = consolidate(&dataset.geolocation)?;
        let products = translate(&dataset.products, &dataset.category_translation)?;

        let filtered = FilteredTables::new(dataset, range)?;
        if filtered.orders.height() == 0 {
            warn!(%range, "No orders in selected range");
        }

        let sales_by_category = sales_by_category(&filtered.order_items, &products)?;
        let customers_by_city = customers_by_city(&dataset.customers, &geolocation)?;
        let seller_performance =
            seller_performance(&filtered.order_items, &dataset.sellers, &dataset.reviews)?;
        let review_distribution = reviews_by_status(&dataset.reviews, &filtered.orders)?;
        let payment_summary = payment_methods(&filtered.payments, &dataset.reviews)?;

        debug!(
            categories = sales_by_category.len(),
            cities = customers_by_city.len(),
            sellers = seller_performance.len(),
            statuses = review_distribution.by_status.len(),
            payment_types = payment_summary.counts.len(),
            "Views computed"
        );
        info!(
            %range,
            orders = filtered.orders.height(),
            items = filtered.order_items.height(),
            payments = filtered.payments.height(),
            "Dashboard computed"
        );

        Ok(DashboardViews {
            range: *range,
            order_count: filtered.orders.height(),
            sales_by_category,
            customers_by_city,
            seller_performance,
            review_distribution,
            payment_summary,
        })
    }
}
