//! Control Panel Widget
//! Left side panel with the date-range picker and dataset summary.

use crate::data::{DateBounds, DateRange};
use chrono::NaiveDate;
use egui::{Color32, RichText};
use egui_extras::DatePickerButton;

/// Action requested by the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    RangeChanged(DateRange),
}

/// Left side control panel. The date pickers are the only input.
pub struct ControlPanel {
    bounds: DateBounds,
    start: NaiveDate,
    end: NaiveDate,
    applied: DateRange,
    error: Option<String>,
    pub table_rows: Vec<(&'static str, usize)>,
    pub status: String,
}

impl ControlPanel {
    pub fn new(bounds: DateBounds, initial: DateRange) -> Self {
        Self {
            bounds,
            start: initial.start(),
            end: initial.end(),
            applied: initial,
            error: None,
            table_rows: Vec::new(),
            status: "Ready".to_string(),
        }
    }

    pub fn applied_range(&self) -> DateRange {
        self.applied
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Set the picker values, as the date widgets do.
    pub fn set_dates(&mut self, start: NaiveDate, end: NaiveDate) {
        self.start = start;
        self.end = end;
    }

    /// Current picker values.
    pub fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Validate the picker values and emit a change when they form a new
    /// range. Picks outside the bounds are clamped back onto them; inverted
    /// selections never leave the panel.
    pub fn apply_edit(&mut self) -> ControlPanelAction {
        match DateRange::new(self.start, self.end) {
            Ok(picked) => {
                let range = self.bounds.clamp(&picked);
                self.set_dates(range.start(), range.end());
                self.error = None;
                if range == self.applied {
                    ControlPanelAction::None
                } else {
                    self.applied = range;
                    ControlPanelAction::RangeChanged(range)
                }
            }
            Err(e) => {
                self.error = Some(e.to_string());
                ControlPanelAction::None
            }
        }
    }

    /// Restore the full observed span.
    pub fn reset(&mut self) -> ControlPanelAction {
        let full = self.bounds.full_range();
        self.set_dates(full.start(), full.end());
        self.apply_edit()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 E-Commerce Dashboard")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Date Range Section =====
        ui.label(RichText::new("📅 Date Range").size(14.0).strong());
        ui.label(
            RichText::new(format!("Available: {}", self.bounds))
                .size(11.0)
                .color(Color32::GRAY),
        );
        ui.add_space(5.0);

        let label_width = 50.0;
        let mut edited = false;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("From:"));
            edited |= ui
                .add(DatePickerButton::new(&mut self.start).id_salt("range_start"))
                .changed();
        });
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("To:"));
            edited |= ui
                .add(DatePickerButton::new(&mut self.end).id_salt("range_end"))
                .changed();
        });

        if edited {
            action = self.apply_edit();
        }

        ui.add_space(5.0);
        if ui.button("↺ Full range").clicked() {
            action = self.reset();
        }

        if let Some(error) = &self.error {
            ui.add_space(5.0);
            ui.label(RichText::new(error).size(11.0).color(Color32::LIGHT_RED));
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Dataset Section =====
        ui.label(RichText::new("📁 Dataset").size(14.0).strong());
        ui.add_space(5.0);
        egui::Grid::new("table_rows")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for (name, rows) in &self.table_rows {
                    ui.label(*name);
                    ui.label(rows.to_string());
                    ui.end_row();
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.label(RichText::new(&self.status).size(11.0).color(Color32::GRAY));

        action
    }
}
