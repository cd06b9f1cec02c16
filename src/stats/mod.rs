//! Stats module - descriptive statistics

mod calculator;

pub use calculator::{BoxSummary, StatsCalculator, WHISKER_IQR_FACTOR};
