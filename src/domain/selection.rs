// Control selection domain models
use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

/// Dropdown value that disables the site filter.
pub const ALL_SITES: &str = "ALL";

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("payload range low bound {low} exceeds high bound {high}")]
    InvertedRange { low: f64, high: f64 },
    #[error("payload range bounds must be finite numbers")]
    NonFiniteBound,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    /// Whether a record from `launch_site` passes this selection
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site == launch_site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SiteSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SiteSelection::parse(&raw))
    }
}

/// Inclusive payload mass window in kilograms. Not clamped to the slider
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "[f64; 2]")]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, SelectionError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(SelectionError::NonFiniteBound);
        }
        if low > high {
            return Err(SelectionError::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}

impl TryFrom<[f64; 2]> for PayloadRange {
    type Error = SelectionError;

    fn try_from([low, high]: [f64; 2]) -> Result<Self, Self::Error> {
        PayloadRange::new(low, high)
    }
}

/// Snapshot of both controls at the moment a trigger fires.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl SelectionState {
    pub fn new(site: SiteSelection, payload_range: PayloadRange) -> Self {
        Self { site, payload_range }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_selection_parse() {
        assert_eq!(SiteSelection::parse("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::parse("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        // Only the exact sentinel means every site
        assert_eq!(
            SiteSelection::parse("all"),
            SiteSelection::Site("all".to_string())
        );
    }

    #[test]
    fn test_site_selection_matches() {
        assert!(SiteSelection::All.matches("CCAFS"));
        let ksc = SiteSelection::Site("KSC".to_string());
        assert!(ksc.matches("KSC"));
        assert!(!ksc.matches("CCAFS"));
    }

    #[test]
    fn test_payload_range_validation() {
        assert!(PayloadRange::new(0.0, 10000.0).is_ok());
        assert!(PayloadRange::new(3000.0, 3000.0).is_ok());
        assert_eq!(
            PayloadRange::new(5000.0, 1000.0),
            Err(SelectionError::InvertedRange {
                low: 5000.0,
                high: 1000.0
            })
        );
        assert_eq!(
            PayloadRange::new(f64::NAN, 1000.0),
            Err(SelectionError::NonFiniteBound)
        );
    }

    #[test]
    fn test_payload_range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 2000.0).unwrap();
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn test_selection_state_json() {
        let state: SelectionState =
            serde_json::from_str(r#"{"site":"ALL","payload_range":[0,9600]}"#).unwrap();
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range.high(), 9600.0);

        let inverted = serde_json::from_str::<SelectionState>(
            r#"{"site":"KSC","payload_range":[9600,0]}"#,
        );
        assert!(inverted.is_err());
    }
}
