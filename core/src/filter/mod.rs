pub mod payload;
pub mod site;

pub use payload::{filter_by_payload_range, PayloadRange};
pub use site::filter_by_site;

use crate::dataset::RowSet;
use crate::records::SiteSelection;

/// Row selection behind the scatter chart: payload range first, then site.
pub fn filter_for_scatter<'a>(
    rows: &RowSet<'a>,
    range: PayloadRange,
    site: &SiteSelection,
) -> RowSet<'a> {
    let in_range = filter_by_payload_range(rows, range.low, range.high);
    filter_by_site(&in_range, site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::records::{LaunchRecord, OutcomeClass, KNOWN_SITES};
    use proptest::prelude::*;

    fn record_strategy() -> impl Strategy<Value = LaunchRecord> {
        (
            prop::sample::select(KNOWN_SITES.to_vec()),
            0.0f64..=10_000.0,
            any::<bool>(),
            prop::sample::select(vec!["v1.0", "v1.1", "FT", "B4", "B5"]),
        )
            .prop_map(|(site, payload, success, booster)| {
                let outcome = if success {
                    OutcomeClass::Success
                } else {
                    OutcomeClass::Failure
                };
                LaunchRecord::new(site, payload.round(), outcome, booster)
            })
    }

    fn dataset_strategy() -> impl Strategy<Value = Dataset> {
        prop::collection::vec(record_strategy(), 0..64)
            .prop_map(|records| Dataset::from_records(records).unwrap())
    }

    fn bounds_strategy() -> impl Strategy<Value = (f64, f64)> {
        (0.0f64..=10_000.0, 0.0f64..=10_000.0).prop_map(|(a, b)| (a.min(b), a.max(b)))
    }

    proptest! {
        #[test]
        fn site_filter_keeps_only_matching_rows(dataset in dataset_strategy()) {
            let rows = dataset.rows();
            for site in KNOWN_SITES {
                let selected = filter_by_site(&rows, &SiteSelection::site(site));
                prop_assert!(selected.iter().all(|r| r.launch_site == site));
                let expected = rows.iter().filter(|r| r.launch_site == site).count();
                prop_assert_eq!(selected.len(), expected);
            }
            prop_assert_eq!(filter_by_site(&rows, &SiteSelection::All), rows.clone());
        }

        #[test]
        fn payload_filter_partitions_rows(dataset in dataset_strategy(), (low, high) in bounds_strategy()) {
            let rows = dataset.rows();
            let selected = filter_by_payload_range(&rows, low, high);
            prop_assert!(selected.iter().all(|r| low <= r.payload_mass_kg && r.payload_mass_kg <= high));
            let excluded = rows.len() - selected.len();
            let outside = rows
                .iter()
                .filter(|r| r.payload_mass_kg < low || r.payload_mass_kg > high)
                .count();
            prop_assert_eq!(excluded, outside);
        }

        #[test]
        fn filters_are_idempotent(
            dataset in dataset_strategy(),
            (low, high) in bounds_strategy(),
            site in prop::sample::select(KNOWN_SITES.to_vec()),
        ) {
            let rows = dataset.rows();
            let site = SiteSelection::site(site);
            let once = filter_by_site(&rows, &site);
            prop_assert_eq!(filter_by_site(&once, &site), once);
            let once = filter_by_payload_range(&rows, low, high);
            prop_assert_eq!(filter_by_payload_range(&once, low, high), once);
        }

        #[test]
        fn scatter_composition_commutes(
            dataset in dataset_strategy(),
            (low, high) in bounds_strategy(),
            site in prop::sample::select(KNOWN_SITES.to_vec()),
        ) {
            let rows = dataset.rows();
            let site = SiteSelection::site(site);
            let composed = filter_for_scatter(&rows, PayloadRange::new(low, high), &site);
            let reversed = filter_by_payload_range(&filter_by_site(&rows, &site), low, high);
            prop_assert_eq!(composed, reversed);
        }
    }
}
