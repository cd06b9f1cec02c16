//! Text Report Module
//! Plain-text rendering of the dashboard views for headless runs.

use crate::analytics::DashboardViews;
use crate::charts::DashboardPlotter;
use crate::config::TopLimits;
use std::fmt;

/// The five views laid out as aligned text tables.
pub struct Report<'a> {
    views: &'a DashboardViews,
    limits: &'a TopLimits,
}

impl<'a> Report<'a> {
    pub fn new(views: &'a DashboardViews, limits: &'a TopLimits) -> Self {
        Self { views, limits }
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "-".repeat(title.chars().count()))
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let views = self.views;
        let limits = self.limits;

        writeln!(f, "E-Commerce Data Analysis Dashboard")?;
        writeln!(f, "Range: {} ({} orders)", views.range, views.order_count)?;

        section(
            f,
            &format!("1. Sales by Product Category (Top {})", limits.categories),
        )?;
        for row in views.top_categories(limits.categories) {
            writeln!(
                f,
                "{:<40} {:>14.2} {:>8}",
                row.category, row.total_sales, row.items_sold
            )?;
        }

        section(f, &format!("2. Top {} Cities by Customers", limits.cities))?;
        for row in views.top_cities(limits.cities) {
            writeln!(f, "{:<40} {:>8}", row.city, row.customers)?;
        }

        section(f, "3. Seller Performance")?;
        for row in views.top_sellers(limits.sellers) {
            writeln!(
                f,
                "{:<34} {:>14.2} {:>6}",
                row.seller_id,
                row.total_sales,
                DashboardPlotter::format_mean(row.avg_review_score)
            )?;
        }

        section(f, "4. Review Score Distribution by Order Status")?;
        for group in &views.review_distribution.by_status {
            match &group.summary {
                Some(s) => writeln!(
                    f,
                    "{:<14} n={:<7} min={:.1} q1={:.1} median={:.1} q3={:.1} max={:.1} mean={:.2} outliers={}",
                    group.status,
                    s.count,
                    s.min,
                    s.q1,
                    s.median,
                    s.q3,
                    s.max,
                    s.mean,
                    s.outliers.len()
                )?,
                None => writeln!(f, "{:<14} n=0", group.status)?,
            }
        }
        writeln!(
            f,
            "Average review score for canceled orders: {}",
            DashboardPlotter::format_mean(views.review_distribution.canceled_mean)
        )?;

        section(f, "5. Payment Methods")?;
        for row in &views.payment_summary.counts {
            writeln!(f, "{:<20} {:>8}", row.payment_type, row.count)?;
        }
        writeln!(f)?;
        writeln!(f, "Average review score by payment method:")?;
        for row in &views.payment_summary.satisfaction {
            writeln!(
                f,
                "{:<20} {:>6}",
                row.payment_type,
                DashboardPlotter::format_mean(row.avg_review_score)
            )?;
        }
        Ok(())
    }
}

/// Render all five views as aligned text tables.
pub fn render_report(views: &DashboardViews, limits: &TopLimits) -> String {
    Report::new(views, limits).to_string()
}
