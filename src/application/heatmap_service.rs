// Heatmap service - Use case for fetching the dataset and building the chart
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::heatmap::{Heatmap, Viewport};
use crate::infrastructure::config::RenderSettings;
use anyhow::Context;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct HeatmapService {
    repository: Arc<dyn DatasetRepository>,
    render_settings: RenderSettings,
}

impl HeatmapService {
    pub fn new(repository: Arc<dyn DatasetRepository>, render_settings: RenderSettings) -> Self {
        Self {
            repository,
            render_settings,
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.render_settings.viewport_width,
            self.render_settings.viewport_height,
            self.render_settings.padding,
        )
    }

    /// Fetch once, then run the render pipeline to completion.
    pub async fn render(&self) -> anyhow::Result<Heatmap> {
        let start_time = Instant::now();
        let source = self.repository.source();

        let dataset = self
            .repository
            .fetch_dataset()
            .await
            .with_context(|| format!("Failed to load dataset from {}", source))?;

        tracing::info!(
            "Loaded {} monthly variance records from {}",
            dataset.records.len(),
            source
        );

        let baseline = self.render_settings.baseline_temperature;
        if let Some(advertised) = dataset.base_temperature {
            if (advertised - baseline).abs() > f64::EPSILON {
                tracing::warn!(
                    "Dataset advertises base temperature {} but {} is configured; using {}",
                    advertised,
                    baseline,
                    baseline
                );
            }
        }

        let heatmap = Heatmap::build(&dataset.records, baseline, self.viewport())
            .context("Failed to build heatmap")?;

        tracing::info!(
            "Rendered {} cells ({}-{}) in {} ms",
            heatmap.cells.len(),
            heatmap.years.min,
            heatmap.years.max,
            start_time.elapsed().as_millis()
        );

        Ok(heatmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::heatmap::HeatmapError;
    use crate::domain::variance::{VarianceDataset, VarianceRecord};
    use async_trait::async_trait;

    struct StaticRepository {
        dataset: VarianceDataset,
    }

    #[async_trait]
    impl DatasetRepository for StaticRepository {
        async fn fetch_dataset(&self) -> anyhow::Result<VarianceDataset> {
            Ok(self.dataset.clone())
        }

        fn source(&self) -> String {
            "static".to_string()
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl DatasetRepository for FailingRepository {
        async fn fetch_dataset(&self) -> anyhow::Result<VarianceDataset> {
            anyhow::bail!("connection refused")
        }

        fn source(&self) -> String {
            "nowhere".to_string()
        }
    }

    fn settings() -> RenderSettings {
        RenderSettings::default()
    }

    #[tokio::test]
    async fn test_render_builds_heatmap() {
        let repository = Arc::new(StaticRepository {
            dataset: VarianceDataset {
                base_temperature: Some(8.66),
                records: vec![
                    VarianceRecord::new(2000, 1, -1.5),
                    VarianceRecord::new(2000, 2, 0.5),
                ],
            },
        });
        let service = HeatmapService::new(repository, settings());

        let heatmap = service.render().await.unwrap();
        assert_eq!(heatmap.cells.len(), 2);
        assert_eq!(heatmap.baseline, 8.66);
        assert_eq!(heatmap.width, 1240.0);
        assert_eq!(heatmap.height, 700.0);
    }

    #[tokio::test]
    async fn test_configured_baseline_wins() {
        let repository = Arc::new(StaticRepository {
            dataset: VarianceDataset {
                base_temperature: Some(9.0),
                records: vec![VarianceRecord::new(2000, 1, 1.0)],
            },
        });
        let service = HeatmapService::new(repository, settings());

        let heatmap = service.render().await.unwrap();
        assert!((heatmap.cells[0].temperature - 9.66).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_render_fails_on_fetch_error() {
        let service = HeatmapService::new(Arc::new(FailingRepository), settings());

        let err = service.render().await.unwrap_err();
        assert!(err.to_string().contains("nowhere"));
    }

    #[tokio::test]
    async fn test_render_fails_on_empty_dataset() {
        let repository = Arc::new(StaticRepository {
            dataset: VarianceDataset::default(),
        });
        let service = HeatmapService::new(repository, settings());

        let err = service.render().await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<HeatmapError>(),
            Some(&HeatmapError::EmptyDataset)
        );
    }
}
