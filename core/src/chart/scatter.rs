use super::spec::{ChartData, ChartKind, ChartSpec, Encoding, ScatterPoint};
use crate::dataset::RowSet;
use crate::filter::filter_by_site;
use crate::records::SiteSelection;

/// Builds the payload-versus-outcome scatter, one point per row.
///
/// `rows` are expected to be restricted to the payload range already; the site
/// filter is applied here when a single site is selected.
pub fn build_scatter_chart(rows: &RowSet<'_>, selected_site: &SiteSelection) -> ChartSpec {
    let points = filter_by_site(rows, selected_site)
        .iter()
        .map(|record| ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome,
            booster_version_category: record.booster_version_category.clone(),
            launch_site: record.launch_site.clone(),
        })
        .collect();

    let title = match selected_site {
        SiteSelection::All => "Payload vs. Launch Outcome for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload vs. Launch Outcome for {name}"),
    };

    ChartSpec {
        kind: ChartKind::Scatter,
        title,
        data: ChartData::Points(points),
        encoding: Encoding {
            x: Some("Payload Mass (kg)".into()),
            y: Some("class".into()),
            color: Some("Booster Version Category".into()),
            labels: Some("Launch Site".into()),
            values: None,
        },
    }
}
