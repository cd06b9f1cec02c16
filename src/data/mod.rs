//! Data module - CSV loading, table preparation and the date-range filter

pub mod category;
pub mod filter;
pub mod geolocation;
mod joins;
mod loader;
pub mod tables;

pub use filter::{DateBounds, DateRange, FilterError};
pub use joins::{inner_join_stable, left_join_stable};
pub use loader::{prepare_table, DatasetLoader, LoaderError, TIMESTAMP_FORMAT};
pub use tables::{Dataset, Table};
