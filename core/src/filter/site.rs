use crate::dataset::RowSet;
use crate::records::SiteSelection;

/// Rows launched from `site`, in their original order.
///
/// `SiteSelection::All` returns the rows unchanged; a site with no rows, known
/// or not, returns an empty set.
pub fn filter_by_site<'a>(rows: &RowSet<'a>, site: &SiteSelection) -> RowSet<'a> {
    match site {
        SiteSelection::All => rows.clone(),
        SiteSelection::Site(_) => rows.retain_where(|record| site.matches(&record.launch_site)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::records::{LaunchRecord, OutcomeClass};

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 2500.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("CCAFS LC-40", 500.0, OutcomeClass::Success, "v1.1"),
        ])
        .unwrap()
    }

    #[test]
    fn selected_site_preserves_dataset_order() {
        let dataset = dataset();
        let rows = filter_by_site(&dataset.rows(), &SiteSelection::site("CCAFS LC-40"));
        let payloads: Vec<f64> = rows.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, vec![0.0, 500.0]);
    }

    #[test]
    fn unknown_site_yields_empty_rows() {
        let dataset = dataset();
        let rows = filter_by_site(&dataset.rows(), &SiteSelection::site("Boca Chica"));
        assert!(rows.is_empty());
    }
}
