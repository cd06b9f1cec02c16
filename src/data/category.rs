//! Category Translator
//! Attaches the English category label to each product.

use crate::data::joins::left_join_stable;
use crate::data::tables::{PRODUCT_CATEGORY_NAME, PRODUCT_CATEGORY_NAME_ENGLISH};
use polars::prelude::*;

/// Left join products to the translation table.
///
/// Every product row is kept in its original order; the English label is
/// null when no translation exists.
pub fn translate(products: &DataFrame, translation: &DataFrame) -> PolarsResult<DataFrame> {
    let labels = translation
        .clone()
        .lazy()
        .select([col(PRODUCT_CATEGORY_NAME), col(PRODUCT_CATEGORY_NAME_ENGLISH)]);

    left_join_stable(
        products.clone().lazy(),
        labels,
        PRODUCT_CATEGORY_NAME,
        PRODUCT_CATEGORY_NAME,
    )
    .collect()
}
