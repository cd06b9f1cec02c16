//! Chart Plotter Module
//! Draws the dashboard views with egui_plot.

use crate::analytics::{
    CategorySales, CityCustomers, PaymentSummary, ReviewDistribution, SellerPerformance,
};
use egui::Color32;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoints, Points};

pub const CHART_HEIGHT: f32 = 320.0;

/// Sequential palette for bar charts
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(68, 1, 84),
    Color32::from_rgb(72, 40, 120),
    Color32::from_rgb(62, 74, 137),
    Color32::from_rgb(49, 104, 142),
    Color32::from_rgb(38, 130, 142),
    Color32::from_rgb(31, 158, 137),
    Color32::from_rgb(53, 183, 121),
    Color32::from_rgb(109, 205, 89),
    Color32::from_rgb(180, 222, 44),
    Color32::from_rgb(253, 231, 37),
];

/// Label used wherever a mean has no data.
pub const MISSING: &str = "n/a";

/// Creates the dashboard charts using egui_plot.
pub struct DashboardPlotter;

impl DashboardPlotter {
    /// Color for the i-th of n bars, spread over the palette.
    pub fn bar_color(index: usize, count: usize) -> Color32 {
        if count <= 1 {
            return PALETTE[0];
        }
        let pos = index * (PALETTE.len() - 1) / (count - 1);
        PALETTE[pos.min(PALETTE.len() - 1)]
    }

    /// Format a mean for display, two decimals or `n/a`.
    pub fn format_mean(mean: Option<f64>) -> String {
        mean.map(|m| format!("{:.2}", m))
            .unwrap_or_else(|| MISSING.to_string())
    }

    /// Shorten long category names for axis ticks.
    pub fn truncate_label(label: &str, max_chars: usize) -> String {
        if label.chars().count() <= max_chars {
            label.to_string()
        } else {
            let head: String = label.chars().take(max_chars.saturating_sub(1)).collect();
            format!("{}…", head)
        }
    }

    /// Bar chart with one bar per label.
    fn labeled_bars(
        ui: &mut egui::Ui,
        id: &str,
        x_label: &str,
        y_label: &str,
        bars: Vec<(String, f64)>,
    ) {
        let labels: Vec<String> = bars.iter().map(|(l, _)| l.clone()).collect();
        let count = bars.len();
        let bars: Vec<Bar> = bars
            .into_iter()
            .enumerate()
            .map(|(i, (label, value))| {
                Bar::new(i as f64, value)
                    .name(label)
                    .width(0.7)
                    .fill(Self::bar_color(i, count))
            })
            .collect();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .allow_zoom(false)
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                    return String::new();
                }
                labels
                    .get(idx as usize)
                    .map(|l| Self::truncate_label(l, 14))
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// View 1: total sales per category.
    pub fn draw_sales_by_category(ui: &mut egui::Ui, rows: &[CategorySales]) {
        let bars = rows
            .iter()
            .map(|r| (r.category.clone(), r.total_sales))
            .collect();
        Self::labeled_bars(ui, "sales_by_category", "Product category", "Total sales", bars);
    }

    /// View 2: customers per city.
    pub fn draw_customers_by_city(ui: &mut egui::Ui, rows: &[CityCustomers]) {
        let bars = rows
            .iter()
            .map(|r| (r.city.clone(), r.customers as f64))
            .collect();
        Self::labeled_bars(ui, "customers_by_city", "City", "Customers", bars);
    }

    /// View 3: total sales against mean review score, point size by sales.
    pub fn draw_seller_performance(ui: &mut egui::Ui, rows: &[SellerPerformance]) {
        let max_sales = rows
            .iter()
            .map(|r| r.total_sales)
            .fold(0.0_f64, f64::max);

        Plot::new("seller_performance")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Total sales")
            .y_axis_label("Average review score")
            .include_y(1.0)
            .include_y(5.0)
            .show(ui, |plot_ui| {
                for (i, row) in rows.iter().enumerate() {
                    // Sellers without a score have no y position.
                    let Some(avg) = row.avg_review_score else {
                        continue;
                    };
                    let scale = if max_sales > 0.0 {
                        row.total_sales / max_sales
                    } else {
                        1.0
                    };
                    plot_ui.points(
                        Points::new(PlotPoints::from(vec![[row.total_sales, avg]]))
                            .radius(4.0 + 10.0 * scale as f32)
                            .color(Self::bar_color(i, rows.len()))
                            .name(&row.seller_id),
                    );
                }
            });
    }

    /// View 4: review score boxplot per order status.
    pub fn draw_review_distribution(ui: &mut egui::Ui, dist: &ReviewDistribution) {
        let labels: Vec<String> = dist.by_status.iter().map(|s| s.status.clone()).collect();
        let count = dist.by_status.len();

        Plot::new("review_distribution")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .allow_zoom(false)
            .legend(Legend::default())
            .x_axis_label("Order status")
            .y_axis_label("Review score")
            .include_y(0.5)
            .include_y(5.5)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                    return String::new();
                }
                labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                for (i, group) in dist.by_status.iter().enumerate() {
                    let Some(summary) = &group.summary else {
                        continue;
                    };
                    let color = Self::bar_color(i, count);
                    let x = i as f64;

                    let box_elem = BoxElem::new(
                        x,
                        BoxSpread::new(
                            summary.whisker_low,
                            summary.q1,
                            summary.median,
                            summary.q3,
                            summary.whisker_high,
                        ),
                    )
                    .box_width(0.5)
                    .fill(color.gamma_multiply(0.3))
                    .stroke(egui::Stroke::new(1.5, color));
                    plot_ui.box_plot(BoxPlot::new(vec![box_elem]).name(&group.status));

                    if !summary.outliers.is_empty() {
                        let points: PlotPoints =
                            summary.outliers.iter().map(|&y| [x, y]).collect();
                        plot_ui.points(
                            Points::new(points)
                                .radius(3.0)
                                .color(color)
                                .name(format!("{} outliers", group.status)),
                        );
                    }
                }
            });
    }

    /// View 5: payment type usage and mean review score side by side.
    pub fn draw_payment_summary(ui: &mut egui::Ui, summary: &PaymentSummary) {
        let counts = summary
            .counts
            .iter()
            .map(|c| (c.payment_type.clone(), c.count as f64))
            .collect();
        // Types without a mean get no bar.
        let means = summary
            .satisfaction
            .iter()
            .filter_map(|s| Some((s.payment_type.clone(), s.avg_review_score?)))
            .collect();

        ui.columns(2, |columns| {
            columns[0].label("Payment method usage");
            Self::labeled_bars(
                &mut columns[0],
                "payment_counts",
                "Payment method",
                "Payments",
                counts,
            );
            columns[1].label("Average review score by payment method");
            Self::labeled_bars(
                &mut columns[1],
                "payment_satisfaction",
                "Payment method",
                "Average review score",
                means,
            );
        });
    }
}
