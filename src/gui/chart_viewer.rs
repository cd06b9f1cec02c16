//! Chart Viewer Widget
//! Scrollable central panel with one card per dashboard view.

use crate::analytics::DashboardViews;
use crate::charts::DashboardPlotter;
use crate::config::TopLimits;
use egui::{Color32, RichText, ScrollArea};

const CARD_SPACING: f32 = 15.0;

/// Scrollable chart display area.
pub struct ChartViewer {
    pub views: Option<DashboardViews>,
    pub limits: TopLimits,
}

impl ChartViewer {
    pub fn new(limits: TopLimits) -> Self {
        Self {
            views: None,
            limits,
        }
    }

    pub fn set_views(&mut self, views: DashboardViews) {
        self.views = Some(views);
    }

    /// Readout under the boxplot.
    pub fn canceled_readout(views: &DashboardViews) -> String {
        format!(
            "Average review score for canceled orders: {}",
            DashboardPlotter::format_mean(views.review_distribution.canceled_mean)
        )
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(views) = &self.views else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };
        let limits = self.limits;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("E-Commerce Data Analysis Dashboard");
                ui.label(
                    RichText::new(format!(
                        "{} · {} orders in range",
                        views.range, views.order_count
                    ))
                    .color(Color32::GRAY),
                );
                ui.add_space(CARD_SPACING);

                Self::card(
                    ui,
                    &format!("1. Sales by Product Category (Top {})", limits.categories),
                    |ui| {
                        DashboardPlotter::draw_sales_by_category(
                            ui,
                            views.top_categories(limits.categories),
                        )
                    },
                );
                Self::card(
                    ui,
                    &format!("2. Top {} Cities by Customers", limits.cities),
                    |ui| {
                        DashboardPlotter::draw_customers_by_city(ui, views.top_cities(limits.cities))
                    },
                );
                Self::card(ui, "3. Seller Performance: Sales vs Review Score", |ui| {
                    DashboardPlotter::draw_seller_performance(ui, views.top_sellers(limits.sellers))
                });
                Self::card(ui, "4. Review Score Distribution by Order Status", |ui| {
                    DashboardPlotter::draw_review_distribution(ui, &views.review_distribution);
                    ui.add_space(5.0);
                    ui.label(RichText::new(Self::canceled_readout(views)).strong());
                });
                Self::card(
                    ui,
                    "5. Payment Methods and Review Score",
                    |ui| DashboardPlotter::draw_payment_summary(ui, &views.payment_summary),
                );
            });
    }

    fn card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(title).size(16.0).strong());
                ui.add_space(5.0);
                add_contents(ui);
            });
        ui.add_space(CARD_SPACING);
    }
}
