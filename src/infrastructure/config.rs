use crate::domain::variance::DEFAULT_BASELINE_TEMPERATURE;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct HeatmapConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_url")]
    pub url: String,
    /// Local JSON file used instead of `url` when set.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RenderSettings {
    #[serde(default = "default_baseline_temperature")]
    pub baseline_temperature: f64,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Where to also write the rendered SVG, if anywhere.
    #[serde(default)]
    pub svg_output: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_dataset_url() -> String {
    DEFAULT_DATASET_URL.to_string()
}

fn default_baseline_temperature() -> f64 {
    DEFAULT_BASELINE_TEMPERATURE
}

fn default_viewport_width() -> f64 {
    1280.0
}

fn default_viewport_height() -> f64 {
    800.0
}

fn default_padding() -> f64 {
    60.0
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            url: default_dataset_url(),
            path: None,
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            baseline_temperature: default_baseline_temperature(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            padding: default_padding(),
            svg_output: None,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Defaults, then `config/heatmap.*` if present, then `HEATMAP__SECTION__KEY` env vars.
pub fn load_heatmap_config() -> anyhow::Result<HeatmapConfig> {
    load_heatmap_config_from("config/heatmap")
}

pub fn load_heatmap_config_from(file: &str) -> anyhow::Result<HeatmapConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix("HEATMAP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = load_heatmap_config_from("config/does-not-exist").unwrap();

        assert_eq!(config.dataset.url, DEFAULT_DATASET_URL);
        assert!(config.dataset.path.is_none());
        assert_eq!(config.render.baseline_temperature, 8.66);
        assert_eq!(config.render.viewport_width, 1280.0);
        assert_eq!(config.render.viewport_height, 800.0);
        assert_eq!(config.render.padding, 60.0);
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("heatmap-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("heatmap.toml");
        std::fs::write(
            &file,
            "[render]\nviewport_width = 1600\npadding = 40\n\n[dataset]\npath = \"data/global-temperature.json\"\n",
        )
        .unwrap();

        let stem = dir.join("heatmap");
        let config = load_heatmap_config_from(stem.to_str().unwrap()).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(config.render.viewport_width, 1600.0);
        assert_eq!(config.render.viewport_height, 800.0);
        assert_eq!(config.render.padding, 40.0);
        assert_eq!(
            config.dataset.path,
            Some(PathBuf::from("data/global-temperature.json"))
        );
        assert_eq!(config.dataset.url, DEFAULT_DATASET_URL);
    }
}
