// Layout builder - Static control tree built once from the dataset
use crate::domain::launch::Dataset;
use crate::domain::layout::{
    DashboardLayout, Dropdown, DropdownOption, Graph, RangeSlider, SliderMark,
};
use crate::domain::selection::ALL_SITES;

pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

const SLIDER_MIN: u32 = 0;
const SLIDER_MAX: u32 = 10_000;
const SLIDER_STEP: u32 = 1_000;

pub fn build_layout(dataset: &Dataset) -> DashboardLayout {
    let mut options = vec![DropdownOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(dataset.launch_sites().iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }));

    let marks = (SLIDER_MIN..=SLIDER_MAX)
        .step_by(SLIDER_STEP as usize)
        .map(|value| SliderMark {
            value,
            label: value.to_string(),
        })
        .collect();

    DashboardLayout {
        title: PAGE_TITLE,
        site_dropdown: Dropdown {
            id: SITE_DROPDOWN_ID,
            options,
            value: ALL_SITES.to_string(),
            placeholder: "Select a Launch Site here",
            searchable: true,
        },
        pie_chart: Graph { id: PIE_CHART_ID },
        payload_slider: RangeSlider {
            id: PAYLOAD_SLIDER_ID,
            min: SLIDER_MIN,
            max: SLIDER_MAX,
            step: SLIDER_STEP,
            marks,
            value: [dataset.min_payload(), dataset.max_payload()],
            tooltip_always_visible: true,
        },
        scatter_chart: Graph {
            id: SCATTER_CHART_ID,
        },
    }
}
