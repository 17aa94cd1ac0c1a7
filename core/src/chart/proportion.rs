use super::spec::{ChartData, ChartKind, ChartSpec, Encoding, Slice};
use crate::dataset::RowSet;
use crate::filter::filter_by_site;
use crate::math::stats::StatsHelper;
use crate::records::SiteSelection;
use indexmap::IndexMap;

/// Builds the success proportion chart for `selected_site`.
///
/// For `All`, each site is a slice sized by its number of successful launches.
/// For a single site, the rows are split by outcome class (`"0"` / `"1"`) and
/// each slice is sized by its row count. Groups keep first-appearance order.
pub fn build_proportion_chart(rows: &RowSet<'_>, selected_site: &SiteSelection) -> ChartSpec {
    let groups: IndexMap<String, f64> = match selected_site {
        SiteSelection::All => rows.iter().fold(IndexMap::new(), |mut acc, record| {
            *acc.entry(record.launch_site.clone()).or_insert(0.0) +=
                f64::from(record.outcome.as_u8());
            acc
        }),
        SiteSelection::Site(_) => filter_by_site(rows, selected_site).iter().fold(
            IndexMap::new(),
            |mut acc, record| {
                *acc.entry(record.outcome.to_string()).or_insert(0.0) += 1.0;
                acc
            },
        ),
    };

    let values: Vec<f64> = groups.values().copied().collect();
    let slices = groups
        .into_iter()
        .zip(StatsHelper::fractions(&values))
        .map(|((label, value), fraction)| Slice {
            label,
            value,
            fraction,
        })
        .collect();

    let (title, encoding) = match selected_site {
        SiteSelection::All => (
            "Total Successful Launches by Site".to_string(),
            Encoding {
                labels: Some("Launch Site".into()),
                values: Some("class".into()),
                ..Default::default()
            },
        ),
        SiteSelection::Site(name) => (
            format!("Success vs Failure for {name}"),
            Encoding {
                labels: Some("class".into()),
                ..Default::default()
            },
        ),
    };

    ChartSpec {
        kind: ChartKind::Proportion,
        title,
        data: ChartData::Slices(slices),
        encoding,
    }
}
