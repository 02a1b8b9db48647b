//! Property tests over the comparator invariants.

use polars::prelude::{Column, DataFrame};
use proptest::prelude::*;
use recon_core::compare::compare_columns;
use recon_ingest::Dataset;

fn dataset(label: &str, name: &str, values: Vec<Option<i64>>) -> Dataset {
    let frame = DataFrame::new(vec![Column::new(name.into(), values)]).unwrap();
    Dataset::new(label, frame)
}

proptest! {
    #[test]
    fn total_is_max_of_stripped_lengths(
        left in prop::collection::vec(prop::option::of(-100i64..100), 0..30),
        right in prop::collection::vec(prop::option::of(-100i64..100), 0..30),
    ) {
        let left_present = left.iter().flatten().count();
        let right_present = right.iter().flatten().count();
        let sistema = dataset("Sistema", "v", left);
        let b3 = dataset("B3", "v", right);

        let comparison = compare_columns(&sistema, &b3, "v", "v").unwrap();

        prop_assert_eq!(comparison.stats.total, left_present.max(right_present));
        prop_assert_eq!(
            comparison.stats.equal + comparison.stats.different,
            comparison.stats.total
        );
        prop_assert_eq!(comparison.rows.len(), comparison.stats.total);
    }

    #[test]
    fn self_comparison_is_reflexive(
        values in prop::collection::vec(-100i64..100, 0..30),
    ) {
        let sistema = dataset("Sistema", "v", values.into_iter().map(Some).collect());

        let comparison = compare_columns(&sistema, &sistema, "v", "v").unwrap();

        prop_assert_eq!(comparison.stats.equal, comparison.stats.total);
        prop_assert_eq!(comparison.stats.different, 0);
    }
}
