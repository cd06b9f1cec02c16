//! E-Commerce Dashboard - analytics over the public e-commerce CSV export
//!
//! Loads the nine dataset tables, filters orders by a date range and computes
//! five aggregate views, shown in an egui window or as a text report.

pub mod analytics;
pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod report;
pub mod stats;

#[cfg(test)]
mod testing;
