//! Analysis session configuration.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::plot::{GaParam, SaParam};

/// Where to find the optimizer logs and where to write charts.
///
/// ```toml
/// raw_path_ga = "logs/GA"
/// show_path_ga = "logs/GA_show"
/// raw_path_sa = "logs/SA"
/// output_dir = "charts"
/// ga_box_parameters = ["GEN", "POP", "MUT"]
/// sa_box_parameters = ["GEN", "TAB", "UPF"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Root of the GA log tree (searched recursively).
    pub raw_path_ga: PathBuf,
    /// Extra GA runs kept for presentation, merged with `raw_path_ga`.
    #[serde(default)]
    pub show_path_ga: Option<PathBuf>,
    /// Root of the SA log tree (searched recursively).
    pub raw_path_sa: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Parameters offered by the GA box-plot dropdown.
    #[serde(default = "default_ga_box_parameters")]
    pub ga_box_parameters: Vec<GaParam>,
    /// Parameters offered by the SA box-plot dropdown.
    #[serde(default = "default_sa_box_parameters")]
    pub sa_box_parameters: Vec<SaParam>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("charts")
}

fn default_ga_box_parameters() -> Vec<GaParam> {
    vec![GaParam::Variant, GaParam::Population, GaParam::Mutation]
}

fn default_sa_box_parameters() -> Vec<SaParam> {
    vec![SaParam::Variant, SaParam::Tabu, SaParam::UpdateFactor]
}

impl AnalysisConfig {
    /// Load configuration from a TOML file.
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.ga_box_parameters.is_empty() || config.sa_box_parameters.is_empty() {
            anyhow::bail!("box plot parameter lists must not be empty");
        }
        Ok(config)
    }
}
