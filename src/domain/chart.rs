// Chart specification domain models
use super::launch::Outcome;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

impl PieSlice {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    pub fn new(title: String, slices: Vec<PieSlice>) -> Self {
        Self { title, slices }
    }

    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: u8,
    pub category: String,
}

/// Labelling of the outcome (y) axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeAxis {
    pub label: &'static str,
    pub tick_values: [u8; 2],
    pub tick_labels: [&'static str; 2],
}

impl Default for OutcomeAxis {
    fn default() -> Self {
        Self {
            label: "Launch Outcome",
            tick_values: [Outcome::Failed.code(), Outcome::Success.code()],
            tick_labels: [Outcome::Failed.label(), Outcome::Success.label()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSpec {
    pub title: String,
    pub points: Vec<ScatterPoint>,
    pub outcome_axis: OutcomeAxis,
}

impl ScatterSpec {
    pub fn new(title: String, points: Vec<ScatterPoint>) -> Self {
        Self {
            title,
            points,
            outcome_axis: OutcomeAxis::default(),
        }
    }

    /// Distinct colour categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for point in &self.points {
            if !categories.contains(&point.category.as_str()) {
                categories.push(&point.category);
            }
        }
        categories
    }
}
