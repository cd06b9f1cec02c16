//! Dashboard Main Application
//! Main window with the date-range control panel and the chart viewer.

use crate::analytics::Dashboard;
use crate::config::TopLimits;
use crate::data::{Dataset, DateBounds, DateRange};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;
use tracing::error;

/// Main application window.
pub struct DashboardApp {
    dataset: Dataset,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        dataset: Dataset,
        bounds: DateBounds,
        initial: DateRange,
        limits: TopLimits,
    ) -> Self {
        let mut control_panel = ControlPanel::new(bounds, initial);
        control_panel.table_rows = dataset.row_counts();

        let mut app = Self {
            dataset,
            control_panel,
            chart_viewer: ChartViewer::new(limits),
        };
        app.recompute(initial);
        app
    }

    /// Re-run the whole pipeline for a new selection.
    fn recompute(&mut self, range: DateRange) {
        match Dashboard::compute(&self.dataset, &range) {
            Ok(views) => {
                self.control_panel.status =
                    format!("{} orders between {}", views.order_count, range);
                self.chart_viewer.set_views(views);
            }
            Err(e) => {
                error!(%range, "Dashboard computation failed: {}", e);
                self.control_panel.status = format!("Error: {}", e);
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::RangeChanged(range) => self.recompute(range),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
