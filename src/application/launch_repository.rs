// Repository trait for launch record access
use crate::domain::launch::LaunchRecord;
use async_trait::async_trait;

#[async_trait]
pub trait LaunchRepository: Send + Sync {
    /// Load every launch record, in source order
    async fn load_records(&self) -> anyhow::Result<Vec<LaunchRecord>>;
}
