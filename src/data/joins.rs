//! Order-preserving joins.
//!
//! Result rows follow the left table's row order. Downstream groupings break
//! ties by first appearance.

use polars::prelude::*;

const ROW_INDEX: &str = "__left_row";

fn join_stable(
    left: LazyFrame,
    right: LazyFrame,
    left_on: &str,
    right_on: &str,
    how: JoinType,
) -> LazyFrame {
    left.with_row_index(ROW_INDEX, None)
        .join(right, [col(left_on)], [col(right_on)], JoinArgs::new(how))
        .sort(
            [ROW_INDEX],
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .drop([ROW_INDEX])
}

/// Inner join keeping the left table's row order.
pub fn inner_join_stable(
    left: LazyFrame,
    right: LazyFrame,
    left_on: &str,
    right_on: &str,
) -> LazyFrame {
    join_stable(left, right, left_on, right_on, JoinType::Inner)
}

/// Left join keeping every left row, in order.
pub fn left_join_stable(
    left: LazyFrame,
    right: LazyFrame,
    left_on: &str,
    right_on: &str,
) -> LazyFrame {
    join_stable(left, right, left_on, right_on, JoinType::Left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_join_keeps_left_order() {
        let left = df!(
            "k" => ["c", "a", "b", "a"],
            "v" => [1, 2, 3, 4],
        )
        .unwrap();
        let right = df!(
            "k" => ["a", "b"],
            "w" => [10, 20],
        )
        .unwrap();

        let joined = inner_join_stable(left.lazy(), right.lazy(), "k", "k")
            .collect()
            .unwrap();
        let v: Vec<Option<i32>> = joined.column("v").unwrap().i32().unwrap().into_iter().collect();
        assert_eq!(v, vec![Some(2), Some(3), Some(4)]);
        assert!(joined.column(ROW_INDEX).is_err());
    }

    #[test]
    fn test_left_join_keeps_unmatched_rows() {
        let left = df!(
            "k" => ["x", "a"],
            "v" => [1, 2],
        )
        .unwrap();
        let right = df!(
            "key" => ["a"],
            "w" => ["matched"],
        )
        .unwrap();

        let joined = left_join_stable(left.lazy(), right.lazy(), "k", "key")
            .collect()
            .unwrap();
        assert_eq!(joined.height(), 2);
        let w: Vec<Option<&str>> = joined.column("w").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(w, vec![None, Some("matched")]);
    }
}
