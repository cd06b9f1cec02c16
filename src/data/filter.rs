//! Date-Range Filter Module
//! Restricts orders to an inclusive calendar-date window and propagates the
//! selection to order-keyed fact tables.

use crate::data::joins::inner_join_stable;
use crate::data::tables::{ORDER_ID, ORDER_PURCHASE_TIMESTAMP};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::*;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Start date {start} is after end date {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
    #[error("Range {range} is outside the dataset bounds {bounds}")]
    OutOfBounds { range: DateRange, bounds: DateBounds },
    #[error("Orders table has no purchase timestamps")]
    NoTimestamps,
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Inclusive calendar-date range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FilterError> {
        if start > end {
            return Err(FilterError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// `start` at midnight.
    fn lower_bound(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Midnight after `end`; `None` when `end` is the last representable date.
    fn upper_bound_exclusive(&self) -> Option<NaiveDateTime> {
        self.end.succ_opt().map(|next| next.and_time(NaiveTime::MIN))
    }

    /// Predicate selecting timestamps inside the range, end day included up to
    /// its last instant.
    pub fn predicate(&self, timestamp: Expr) -> Expr {
        let dtype = DataType::Datetime(TimeUnit::Milliseconds, None);
        let lower = timestamp
            .clone()
            .gt_eq(lit(self.lower_bound()).cast(dtype.clone()));
        match self.upper_bound_exclusive() {
            Some(upper) => lower.and(timestamp.lt(lit(upper).cast(dtype))),
            None => lower,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// Observed min/max purchase dates of the orders table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    pub fn from_orders(orders: &DataFrame) -> Result<Self, FilterError> {
        let millis = orders
            .column(ORDER_PURCHASE_TIMESTAMP)?
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
            .cast(&DataType::Int64)?;
        let ca = millis.i64()?;

        let (Some(min), Some(max)) = (ca.min(), ca.max()) else {
            return Err(FilterError::NoTimestamps);
        };
        let to_date = |ms: i64| {
            DateTime::from_timestamp_millis(ms)
                .map(|dt| dt.date_naive())
                .ok_or(FilterError::NoTimestamps)
        };

        Ok(Self {
            min: to_date(min)?,
            max: to_date(max)?,
        })
    }

    /// The whole observed span, used as the initial selection.
    pub fn full_range(&self) -> DateRange {
        DateRange {
            start: self.min,
            end: self.max,
        }
    }

    pub fn validate(&self, range: &DateRange) -> Result<(), FilterError> {
        if range.start < self.min || range.end > self.max {
            return Err(FilterError::OutOfBounds {
                range: *range,
                bounds: *self,
            });
        }
        Ok(())
    }

    /// Pull a range back inside the bounds.
    pub fn clamp(&self, range: &DateRange) -> DateRange {
        let start = range.start.clamp(self.min, self.max);
        let end = range.end.clamp(start, self.max);
        DateRange { start, end }
    }
}

impl fmt::Display for DateBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.min, self.max)
    }
}

/// Orders whose purchase timestamp falls inside `range`, in original order.
///
/// A range that matches nothing yields an empty frame.
pub fn filter_orders(orders: &DataFrame, range: &DateRange) -> Result<DataFrame, FilterError> {
    let filtered = orders
        .clone()
        .lazy()
        .filter(range.predicate(col(ORDER_PURCHASE_TIMESTAMP)))
        .collect()?;
    Ok(filtered)
}

/// Rows of an order-keyed table (items, payments) belonging to the filtered
/// orders, in the table's original order.
pub fn filter_by_orders(
    table: &DataFrame,
    filtered_orders: &DataFrame,
) -> Result<DataFrame, FilterError> {
    let keys = filtered_orders.clone().lazy().select([col(ORDER_ID)]);
    let filtered = inner_join_stable(table.clone().lazy(), keys, ORDER_ID, ORDER_ID).collect()?;
    Ok(filtered)
}
