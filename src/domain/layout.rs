// Page layout domain models (the static control tree)
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: &'static str,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: &'static str,
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub marks: Vec<SliderMark>,
    pub value: [f64; 2],
    pub tooltip_always_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    pub id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: &'static str,
    pub site_dropdown: Dropdown,
    pub pie_chart: Graph,
    pub payload_slider: RangeSlider,
    pub scatter_chart: Graph,
}
