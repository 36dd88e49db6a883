// Repository trait for the monthly variance dataset
use crate::domain::variance::VarianceDataset;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Fetch the full dataset once. No retries; a failure ends the render.
    async fn fetch_dataset(&self) -> anyhow::Result<VarianceDataset>;

    /// Human-readable origin of the data, for logs.
    fn source(&self) -> String;
}
