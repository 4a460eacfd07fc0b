/// Dashboard configuration.
///
/// Read from a JSON file when one exists, otherwise defaults. Every field is
/// optional in the file; missing fields take their default value.
use anyhow::{Context, Result};
use roadsign_core::analysis::{ClassifierRules, TOP_ROUTES};
use roadsign_core::overlay::DEFAULT_IMAGE_BASE_URL;
use roadsign_core::service::DataSources;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding [`DashboardConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "ROADSIGN_DATA_DIR";

/// Initial map view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        // Brasília, framing the whole state network.
        Self {
            center: (-15.77972, -47.92972),
            zoom: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    pub vertical_file: String,
    pub horizontal_file: String,
    pub image_base_url: String,
    pub ranking_limit: usize,
    pub map: MapView,
    /// Overrides the built-in keyword tiers when present.
    pub classifier: Option<ClassifierRules>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            vertical_file: "sinalizacao_vertical.csv".into(),
            horizontal_file: "sinalizacao_horizontal.csv".into(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.into(),
            ranking_limit: TOP_ROUTES,
            map: MapView::default(),
            classifier: None,
        }
    }
}

impl DashboardConfig {
    /// Load from `path` if given and present, then apply the environment
    /// override.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) if p.exists() => Self::from_file(p)?,
            Some(p) => {
                tracing::warn!("Config file {} not found, using defaults", p.display());
                Self::default()
            }
            None => Self::default(),
        };
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("writing config {}", path.display()))
    }

    pub fn sources(&self) -> DataSources {
        DataSources {
            vertical: self.data_dir.join(&self.vertical_file),
            horizontal: self.data_dir.join(&self.horizontal_file),
        }
    }

    pub fn rules(&self) -> ClassifierRules {
        self.classifier.clone().unwrap_or_default()
    }
}
