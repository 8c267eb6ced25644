// Pie aggregator - Launch counts per site, or outcome split for one site
use crate::domain::chart::{PieSlice, PieSpec};
use crate::domain::launch::{Dataset, Outcome};
use crate::domain::selection::SiteSelection;

pub fn compute_pie(dataset: &Dataset, site: &SiteSelection) -> PieSpec {
    match site {
        SiteSelection::All => {
            // Every row counts toward its site, whatever the outcome
            let slices = dataset
                .launch_sites()
                .iter()
                .map(|launch_site| {
                    let count = dataset
                        .records()
                        .iter()
                        .filter(|r| &r.launch_site == launch_site)
                        .count();
                    PieSlice::new(launch_site.clone(), count as u64)
                })
                .collect();

            PieSpec::new("Total Success Launches By Site".to_string(), slices)
        }
        SiteSelection::Site(name) => {
            let mut failed = 0u64;
            let mut success = 0u64;
            for record in dataset.records().iter().filter(|r| &r.launch_site == name) {
                match record.outcome {
                    Outcome::Failed => failed += 1,
                    Outcome::Success => success += 1,
                }
            }

            let mut counts = vec![(Outcome::Failed, failed), (Outcome::Success, success)];
            // Largest share first; stable sort keeps Failed ahead on ties
            counts.sort_by(|a, b| b.1.cmp(&a.1));

            let slices = counts
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .map(|(outcome, count)| PieSlice::new(outcome.label(), count))
                .collect();

            PieSpec::new(format!("Total Success Launches for {}", name), slices)
        }
    }
}
