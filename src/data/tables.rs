//! Table Schema Module
//! Column names of the nine dataset tables and the in-memory `Dataset`.

use polars::prelude::*;

pub const ORDER_ID: &str = "order_id";
pub const ORDER_STATUS: &str = "order_status";
pub const ORDER_PURCHASE_TIMESTAMP: &str = "order_purchase_timestamp";

pub const ORDER_ITEM_ID: &str = "order_item_id";
pub const PRODUCT_ID: &str = "product_id";
pub const SELLER_ID: &str = "seller_id";
pub const PRICE: &str = "price";

pub const PAYMENT_TYPE: &str = "payment_type";
pub const PAYMENT_VALUE: &str = "payment_value";

pub const REVIEW_SCORE: &str = "review_score";

pub const CUSTOMER_ID: &str = "customer_id";
pub const CUSTOMER_ZIP_CODE_PREFIX: &str = "customer_zip_code_prefix";

pub const GEO_ZIP_CODE_PREFIX: &str = "geolocation_zip_code_prefix";
pub const GEO_LAT: &str = "geolocation_lat";
pub const GEO_LNG: &str = "geolocation_lng";
pub const GEO_CITY: &str = "geolocation_city";

pub const PRODUCT_CATEGORY_NAME: &str = "product_category_name";
pub const PRODUCT_CATEGORY_NAME_ENGLISH: &str = "product_category_name_english";

/// The nine tables of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Customers,
    Geolocation,
    OrderItems,
    Payments,
    Reviews,
    Orders,
    CategoryTranslation,
    Products,
    Sellers,
}

impl Table {
    pub const ALL: [Table; 9] = [
        Table::Customers,
        Table::Geolocation,
        Table::OrderItems,
        Table::Payments,
        Table::Reviews,
        Table::Orders,
        Table::CategoryTranslation,
        Table::Products,
        Table::Sellers,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Customers => "customers",
            Table::Geolocation => "geolocation",
            Table::OrderItems => "order_items",
            Table::Payments => "order_payments",
            Table::Reviews => "order_reviews",
            Table::Orders => "orders",
            Table::CategoryTranslation => "product_category_translation",
            Table::Products => "products",
            Table::Sellers => "sellers",
        }
    }

    /// Columns cast away from text after loading. Everything else stays `String`.
    pub fn numeric_columns(&self) -> Vec<(&'static str, DataType)> {
        match self {
            Table::Geolocation => vec![(GEO_LAT, DataType::Float64), (GEO_LNG, DataType::Float64)],
            Table::OrderItems => vec![(PRICE, DataType::Float64)],
            Table::Payments => vec![(PAYMENT_VALUE, DataType::Float64)],
            Table::Reviews => vec![(REVIEW_SCORE, DataType::Int64)],
            _ => Vec::new(),
        }
    }
}

/// Fully materialized dataset. Tables are never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub customers: DataFrame,
    pub geolocation: DataFrame,
    pub order_items: DataFrame,
    pub payments: DataFrame,
    pub reviews: DataFrame,
    pub orders: DataFrame,
    pub category_translation: DataFrame,
    pub products: DataFrame,
    pub sellers: DataFrame,
}

impl Dataset {
    pub fn table(&self, table: Table) -> &DataFrame {
        match table {
            Table::Customers => &self.customers,
            Table::Geolocation => &self.geolocation,
            Table::OrderItems => &self.order_items,
            Table::Payments => &self.payments,
            Table::Reviews => &self.reviews,
            Table::Orders => &self.orders,
            Table::CategoryTranslation => &self.category_translation,
            Table::Products => &self.products,
            Table::Sellers => &self.sellers,
        }
    }

    pub(crate) fn table_mut(&mut self, table: Table) -> &mut DataFrame {
        match table {
            Table::Customers => &mut self.customers,
            Table::Geolocation => &mut self.geolocation,
            Table::OrderItems => &mut self.order_items,
            Table::Payments => &mut self.payments,
            Table::Reviews => &mut self.reviews,
            Table::Orders => &mut self.orders,
            Table::CategoryTranslation => &mut self.category_translation,
            Table::Products => &mut self.products,
            Table::Sellers => &mut self.sellers,
        }
    }

    /// Row counts per table, in load order.
    pub fn row_counts(&self) -> Vec<(&'static str, usize)> {
        Table::ALL
            .iter()
            .map(|t| (t.name(), self.table(*t).height()))
            .collect()
    }
}
