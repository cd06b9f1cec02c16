//! In-memory table builders for unit tests.

use crate::data::{prepare_table, Dataset, Table};
use polars::prelude::*;

fn frame(table: Table, columns: Vec<Column>) -> DataFrame {
    let df = DataFrame::new(columns).unwrap();
    prepare_table(table, df).unwrap()
}

fn text(name: &str, values: Vec<&str>) -> Column {
    Column::new(name.into(), values)
}

fn text_opt(name: &str, values: Vec<Option<&str>>) -> Column {
    Column::new(name.into(), values)
}

/// `(order_id, status, "YYYY-MM-DD HH:MM:SS")`
pub fn orders(rows: &[(&str, &str, &str)]) -> DataFrame {
    frame(
        Table::Orders,
        vec![
            text("order_id", rows.iter().map(|r| r.0).collect()),
            text("customer_id", rows.iter().map(|r| r.0).collect()),
            text("order_status", rows.iter().map(|r| r.1).collect()),
            text("order_purchase_timestamp", rows.iter().map(|r| r.2).collect()),
        ],
    )
}

/// `(order_id, product_id, seller_id, price)`
pub fn order_items(rows: &[(&str, &str, &str, f64)]) -> DataFrame {
    let prices: Vec<String> = rows.iter().map(|r| r.3.to_string()).collect();
    frame(
        Table::OrderItems,
        vec![
            text("order_id", rows.iter().map(|r| r.0).collect()),
            text(
                "order_item_id",
                rows.iter().map(|_| "1").collect(),
            ),
            text("product_id", rows.iter().map(|r| r.1).collect()),
            text("seller_id", rows.iter().map(|r| r.2).collect()),
            text("price", prices.iter().map(|p| p.as_str()).collect()),
        ],
    )
}

/// `(order_id, payment_type, payment_value)`
pub fn payments(rows: &[(&str, &str, f64)]) -> DataFrame {
    let values: Vec<String> = rows.iter().map(|r| r.2.to_string()).collect();
    frame(
        Table::Payments,
        vec![
            text("order_id", rows.iter().map(|r| r.0).collect()),
            text("payment_type", rows.iter().map(|r| r.1).collect()),
            text("payment_value", values.iter().map(|v| v.as_str()).collect()),
        ],
    )
}

/// `(order_id, review_score)`
pub fn reviews(rows: &[(&str, i64)]) -> DataFrame {
    let scores: Vec<String> = rows.iter().map(|r| r.1.to_string()).collect();
    frame(
        Table::Reviews,
        vec![
            text("review_id", rows.iter().map(|r| r.0).collect()),
            text("order_id", rows.iter().map(|r| r.0).collect()),
            text("review_score", scores.iter().map(|s| s.as_str()).collect()),
        ],
    )
}

/// `(customer_id, zip_prefix)`
pub fn customers(rows: &[(&str, &str)]) -> DataFrame {
    frame(
        Table::Customers,
        vec![
            text("customer_id", rows.iter().map(|r| r.0).collect()),
            text("customer_zip_code_prefix", rows.iter().map(|r| r.1).collect()),
        ],
    )
}

/// `(zip_prefix, lat, lng, city)`
pub fn geolocation(rows: &[(&str, f64, f64, Option<&str>)]) -> DataFrame {
    let lats: Vec<String> = rows.iter().map(|r| r.1.to_string()).collect();
    let lngs: Vec<String> = rows.iter().map(|r| r.2.to_string()).collect();
    frame(
        Table::Geolocation,
        vec![
            text(
                "geolocation_zip_code_prefix",
                rows.iter().map(|r| r.0).collect(),
            ),
            text("geolocation_lat", lats.iter().map(|s| s.as_str()).collect()),
            text("geolocation_lng", lngs.iter().map(|s| s.as_str()).collect()),
            text_opt("geolocation_city", rows.iter().map(|r| r.3).collect()),
        ],
    )
}

/// `(product_id, category)`
pub fn products(rows: &[(&str, Option<&str>)]) -> DataFrame {
    frame(
        Table::Products,
        vec![
            text("product_id", rows.iter().map(|r| r.0).collect()),
            text_opt("product_category_name", rows.iter().map(|r| r.1).collect()),
        ],
    )
}

/// `(category, english)`
pub fn translation(rows: &[(&str, &str)]) -> DataFrame {
    frame(
        Table::CategoryTranslation,
        vec![
            text("product_category_name", rows.iter().map(|r| r.0).collect()),
            text(
                "product_category_name_english",
                rows.iter().map(|r| r.1).collect(),
            ),
        ],
    )
}

pub fn sellers(ids: &[&str]) -> DataFrame {
    frame(Table::Sellers, vec![text("seller_id", ids.to_vec())])
}

pub fn strings(df: &DataFrame, column: &str) -> Vec<String> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// A small but complete dataset covering every view.
///
/// Orders O1..O4 fall in January 2018, O5 in February 2018.
pub fn sample_dataset() -> Dataset {
    Dataset {
        orders: orders(&[
            ("O1", "delivered", "2018-01-05 10:00:00"),
            ("O2", "delivered", "2018-01-10 11:00:00"),
            ("O3", "canceled", "2018-01-20 12:00:00"),
            ("O4", "shipped", "2018-01-25 13:00:00"),
            ("O5", "canceled", "2018-02-10 14:00:00"),
        ]),
        order_items: order_items(&[
            ("O1", "P1", "S1", 100.0),
            ("O1", "P2", "S2", 50.0),
            ("O2", "P3", "S1", 30.0),
            ("O3", "P2", "S3", 80.0),
            ("O4", "P4", "S2", 10.0),
            ("O5", "P1", "S1", 500.0),
        ]),
        payments: payments(&[
            ("O1", "credit_card", 150.0),
            ("O2", "boleto", 30.0),
            ("O3", "credit_card", 80.0),
            ("O4", "voucher", 10.0),
            ("O5", "credit_card", 500.0),
        ]),
        reviews: reviews(&[("O1", 5), ("O2", 4), ("O3", 1), ("O5", 2)]),
        customers: customers(&[
            ("O1", "01310"),
            ("O2", "01310"),
            ("O3", "20040"),
            ("O4", "99999"),
            ("O5", "20040"),
        ]),
        geolocation: geolocation(&[
            ("01310", -23.56, -46.65, Some("sao paulo")),
            ("01310", -23.58, -46.67, Some("sao paulo")),
            ("20040", -22.90, -43.17, Some("rio de janeiro")),
        ]),
        products: products(&[
            ("P1", Some("beleza_saude")),
            ("P2", Some("esporte_lazer")),
            ("P3", Some("beleza_saude")),
            ("P4", Some("sem_traducao")),
        ]),
        category_translation: translation(&[
            ("beleza_saude", "health_beauty"),
            ("esporte_lazer", "sports_leisure"),
        ]),
        sellers: sellers(&["S1", "S2", "S3"]),
    }
}
