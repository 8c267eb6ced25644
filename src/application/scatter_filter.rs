// Scatter filter - Payload/outcome points within a payload window
use crate::domain::chart::{ScatterPoint, ScatterSpec};
use crate::domain::launch::Dataset;
use crate::domain::selection::{PayloadRange, SiteSelection};

pub fn compute_scatter(
    dataset: &Dataset,
    site: &SiteSelection,
    range: &PayloadRange,
) -> ScatterSpec {
    let points = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.launch_site))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome.code(),
            category: r.booster_version_category.clone(),
        })
        .collect();

    let title = match site {
        SiteSelection::All => {
            "Correlation between Payload and Success for all Sites".to_string()
        }
        SiteSelection::Site(name) => {
            format!("Correlation between Payload and Success for {}", name)
        }
    };

    ScatterSpec::new(title, points)
}
