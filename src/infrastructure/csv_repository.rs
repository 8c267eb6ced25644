// CSV repository implementation
use crate::application::launch_repository::LaunchRepository;
use crate::domain::launch::LaunchRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CsvLaunchRepository {
    path: PathBuf,
}

impl CsvLaunchRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LaunchRepository for CsvLaunchRepository {
    async fn load_records(&self) -> Result<Vec<LaunchRecord>> {
        let raw = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read launch dataset {}", self.path.display()))?;

        let records = parse_records(&raw)
            .with_context(|| format!("Failed to parse launch dataset {}", self.path.display()))?;

        tracing::info!(
            "Loaded {} launch records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Parse CSV bytes with a header row; columns not used by the dashboard are ignored
pub fn parse_records(raw: &[u8]) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(raw);

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<LaunchRecord>().enumerate() {
        let record =
            row.with_context(|| format!("Malformed launch record at data row {}", index + 1))?;

        if !record.payload_mass_kg.is_finite() || record.payload_mass_kg < 0.0 {
            anyhow::bail!(
                "Launch record at data row {} has invalid payload mass {}",
                index + 1,
                record.payload_mass_kg
            );
        }
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::launch::Outcome;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
";

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_parse_records_ignores_extra_columns() {
        let records = parse_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[2],
            LaunchRecord::new("VAFB SLC-4E", 9600.0, "FT", Outcome::Success)
        );
        assert_eq!(records[0].outcome, Outcome::Failed);
    }

    const HEADER: &str = "Launch Site,Payload Mass (kg),Booster Version Category,class\n";

    #[test]
    fn test_parse_records_rejects_bad_outcome() {
        let csv = format!("{}KSC LC-39A,2000,FT,3\n", HEADER);
        let err = parse_records(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("data row 1"));
    }

    #[test]
    fn test_parse_records_rejects_negative_payload() {
        let csv = format!("{}KSC LC-39A,-5,FT,1\n", HEADER);
        assert!(parse_records(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_records_requires_columns() {
        let csv = "Launch Site,class\nKSC LC-39A,1\n";
        assert!(parse_records(csv.as_bytes()).is_err());
    }

    #[tokio::test]
    async fn test_load_records_from_file() {
        let file = create_temp_csv(SAMPLE);
        let repository = CsvLaunchRepository::new(file.path());
        let records = repository.load_records().await.unwrap();
        assert_eq!(records.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let repository = CsvLaunchRepository::new("/nonexistent/spacex_launch_dash.csv");
        let err = repository.load_records().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read launch dataset"));
    }
}
