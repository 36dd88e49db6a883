// Dataset repositories - HTTP and local file
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::variance::{VarianceDataset, VarianceRecord};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GlobalTemperaturePayload {
    #[serde(default)]
    base_temperature: Option<f64>,
    monthly_variance: Vec<VarianceRecord>,
}

impl From<GlobalTemperaturePayload> for VarianceDataset {
    fn from(payload: GlobalTemperaturePayload) -> Self {
        Self {
            base_temperature: payload.base_temperature,
            records: payload.monthly_variance,
        }
    }
}

/// Parse a `{ baseTemperature?, monthlyVariance: [...] }` document.
pub fn parse_dataset(json: &str) -> Result<VarianceDataset> {
    let payload: GlobalTemperaturePayload =
        serde_json::from_str(json).context("Failed to parse global temperature payload")?;
    Ok(payload.into())
}

#[derive(Debug, Clone)]
pub struct HttpDatasetRepository {
    url: String,
    client: reqwest::Client,
}

impl HttpDatasetRepository {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DatasetRepository for HttpDatasetRepository {
    async fn fetch_dataset(&self) -> Result<VarianceDataset> {
        tracing::debug!("Fetching dataset from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send dataset request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Dataset request failed with status {}: {}", status, body);
        }

        let payload = response
            .json::<GlobalTemperaturePayload>()
            .await
            .context("Failed to parse dataset response")?;

        Ok(payload.into())
    }

    fn source(&self) -> String {
        self.url.clone()
    }
}

#[derive(Debug, Clone)]
pub struct FileDatasetRepository {
    path: PathBuf,
}

impl FileDatasetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DatasetRepository for FileDatasetRepository {
    async fn fetch_dataset(&self) -> Result<VarianceDataset> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        parse_dataset(&json)
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}
