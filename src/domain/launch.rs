// Launch record domain models
use serde::Deserialize;
use std::fmt;

/// Outcome of a single launch, stored as the `class` column (0 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub enum Outcome {
    Failed,
    Success,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Failed => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failed => "Failed",
            Outcome::Success => "Success",
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failed),
            1 => Ok(Outcome::Success),
            other => Err(format!("launch outcome must be 0 or 1, got {}", other)),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    #[serde(rename = "class")]
    pub outcome: Outcome,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version_category: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version_category: booster_version_category.into(),
            outcome,
        }
    }
}

/// The loaded launch table. Immutable once built; the payload bounds and
/// site list are derived a single time at construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    launch_sites: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        let mut launch_sites: Vec<String> = Vec::new();

        for record in &records {
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
            if !launch_sites.iter().any(|s| s == &record.launch_site) {
                launch_sites.push(record.launch_site.clone());
            }
        }

        if records.is_empty() {
            min_payload = 0.0;
            max_payload = 0.0;
        }

        Self {
            records,
            min_payload,
            max_payload,
            launch_sites,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct launch sites in first-seen order
    pub fn launch_sites(&self) -> &[String] {
        &self.launch_sites
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Three-row table used across the crate's tests
    pub fn sample_dataset() -> Dataset {
        Dataset::new(vec![
            LaunchRecord::new("CCAFS", 500.0, "v1.0", Outcome::Failed),
            LaunchRecord::new("CCAFS", 5000.0, "v1.0", Outcome::Success),
            LaunchRecord::new("KSC", 2000.0, "v1.1", Outcome::Success),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_dataset;
    use super::*;

    #[test]
    fn test_derived_bounds_and_sites() {
        let dataset = sample_dataset();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.min_payload(), 500.0);
        assert_eq!(dataset.max_payload(), 5000.0);
        assert_eq!(dataset.launch_sites(), &["CCAFS".to_string(), "KSC".to_string()]);
    }

    #[test]
    fn test_sites_keep_first_seen_order() {
        let dataset = Dataset::new(vec![
            LaunchRecord::new("VAFB SLC-4E", 9600.0, "FT", Outcome::Success),
            LaunchRecord::new("CCAFS LC-40", 0.0, "v1.0", Outcome::Failed),
            LaunchRecord::new("VAFB SLC-4E", 500.0, "v1.1", Outcome::Failed),
        ]);
        assert_eq!(
            dataset.launch_sites(),
            &["VAFB SLC-4E".to_string(), "CCAFS LC-40".to_string()]
        );
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(Outcome::try_from(0u8), Ok(Outcome::Failed));
        assert_eq!(Outcome::try_from(1u8), Ok(Outcome::Success));
        assert!(Outcome::try_from(2u8).is_err());
        assert_eq!(Outcome::Success.code(), 1);
        assert_eq!(Outcome::Failed.to_string(), "Failed");
    }
}
