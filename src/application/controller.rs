// Reactive controller - Binds control triggers to chart transforms
use crate::application::layout_builder::{
    PAYLOAD_SLIDER_ID, PIE_CHART_ID, SCATTER_CHART_ID, SITE_DROPDOWN_ID,
};
use crate::application::pie_aggregator::compute_pie;
use crate::application::scatter_filter::compute_scatter;
use crate::domain::chart::{PieSpec, ScatterSpec};
use crate::domain::launch::Dataset;
use crate::domain::selection::{PayloadRange, SelectionError, SelectionState, SiteSelection};
use serde::Deserialize;
use std::sync::Arc;

/// Control whose change starts a recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Trigger {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

impl Trigger {
    pub fn id(self) -> &'static str {
        match self {
            Trigger::SiteDropdown => SITE_DROPDOWN_ID,
            Trigger::PayloadSlider => PAYLOAD_SLIDER_ID,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Pie(PieSpec),
    Scatter(ScatterSpec),
}

/// A recomputed chart addressed to its graph placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct ChartUpdate {
    pub output: &'static str,
    pub chart: ChartSpec,
}

#[derive(Clone)]
struct Binding {
    output: &'static str,
    inputs: &'static [Trigger],
    compute: fn(&Dataset, &SelectionState) -> ChartSpec,
}

impl Binding {
    fn listens_to(&self, trigger: Trigger) -> bool {
        self.inputs.contains(&trigger)
    }

    fn run(&self, dataset: &Dataset, snapshot: &SelectionState) -> ChartUpdate {
        ChartUpdate {
            output: self.output,
            chart: (self.compute)(dataset, snapshot),
        }
    }
}

fn pie_chart(dataset: &Dataset, snapshot: &SelectionState) -> ChartSpec {
    ChartSpec::Pie(compute_pie(dataset, &snapshot.site))
}

fn scatter_chart(dataset: &Dataset, snapshot: &SelectionState) -> ChartSpec {
    ChartSpec::Scatter(compute_scatter(dataset, &snapshot.site, &snapshot.payload_range))
}

#[derive(Clone)]
pub struct DashboardController {
    dataset: Arc<Dataset>,
    bindings: Vec<Binding>,
}

impl DashboardController {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let bindings = vec![
            Binding {
                output: PIE_CHART_ID,
                inputs: &[Trigger::SiteDropdown],
                compute: pie_chart,
            },
            Binding {
                output: SCATTER_CHART_ID,
                inputs: &[Trigger::SiteDropdown, Trigger::PayloadSlider],
                compute: scatter_chart,
            },
        ];

        Self { dataset, bindings }
    }

    /// Selection the page starts with: every site, full payload span of the data
    pub fn initial_state(&self) -> Result<SelectionState, SelectionError> {
        let range = PayloadRange::new(self.dataset.min_payload(), self.dataset.max_payload())?;
        Ok(SelectionState::new(SiteSelection::All, range))
    }

    /// Run every binding that listens to `trigger` against one snapshot
    pub fn dispatch(&self, trigger: Trigger, snapshot: &SelectionState) -> Vec<ChartUpdate> {
        let updates: Vec<ChartUpdate> = self
            .bindings
            .iter()
            .filter(|b| b.listens_to(trigger))
            .map(|b| b.run(&self.dataset, snapshot))
            .collect();

        tracing::debug!(
            "Trigger {} (site={}) published {} chart update(s)",
            trigger.id(),
            snapshot.site,
            updates.len()
        );

        updates
    }

    /// Run every binding, used for the first render of the page
    pub fn render_all(&self, snapshot: &SelectionState) -> Vec<ChartUpdate> {
        self.bindings
            .iter()
            .map(|b| b.run(&self.dataset, snapshot))
            .collect()
    }
}
