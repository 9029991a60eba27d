use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::core::tradeoff::EpsPair;

// Machine epsilons of the two usual float widths; the default
// tolerance pairs are built from them.
const EPS32: f64 = 6e-8;
const EPS64: f64 = 1e-16;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "SweepConfig::default_start_exp")]
    pub start_exp: f64,
    #[serde(default = "SweepConfig::default_end_exp")]
    pub end_exp: f64,
    #[serde(default = "SweepConfig::default_count")]
    pub count: usize,
}

impl SweepConfig {
    fn default_start_exp() -> f64 {
        -11.0
    }
    fn default_end_exp() -> f64 {
        0.0
    }
    fn default_count() -> usize {
        200
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_exp: Self::default_start_exp(),
            end_exp: Self::default_end_exp(),
            count: Self::default_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsConfig {
    #[serde(default = "TermsConfig::default_weight")]
    pub alpha: f64,
    #[serde(default = "TermsConfig::default_weight")]
    pub beta: f64,
    #[serde(default = "TermsConfig::default_weight")]
    pub gamma: f64,
}

impl TermsConfig {
    fn default_weight() -> f64 {
        1.0
    }
}

impl Default for TermsConfig {
    fn default() -> Self {
        Self {
            alpha: Self::default_weight(),
            beta: Self::default_weight(),
            gamma: Self::default_weight(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "PlotConfig::default_output")]
    pub output: String,
    #[serde(default = "PlotConfig::default_width")]
    pub width: u32,
    #[serde(default = "PlotConfig::default_height")]
    pub height: u32,
    /// When set, the evaluated curves are also written as CSV.
    #[serde(default)]
    pub csv: Option<String>,
}

impl PlotConfig {
    fn default_output() -> String {
        "acc_disc_vs_dt.png".to_string()
    }
    fn default_width() -> u32 {
        1200
    }
    fn default_height() -> u32 {
        700
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output: Self::default_output(),
            width: Self::default_width(),
            height: Self::default_height(),
            csv: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub terms: TermsConfig,
    #[serde(default = "AppConfig::default_eps_pairs")]
    pub eps_pairs: Vec<EpsPair>,
    #[serde(default)]
    pub plot: PlotConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sweep: SweepConfig::default(),
            terms: TermsConfig::default(),
            eps_pairs: Self::default_eps_pairs(),
            plot: PlotConfig::default(),
        }
    }
}

impl AppConfig {
    fn default_eps_pairs() -> Vec<EpsPair> {
        vec![
            EpsPair {
                eps_a: EPS32,
                eps_b: EPS32,
            },
            EpsPair {
                eps_a: EPS64,
                eps_b: EPS64,
            },
            EpsPair {
                eps_a: EPS32,
                eps_b: EPS64,
            },
        ]
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("failed to parse config {path}: {err}; using defaults");
                    }
                },
                Err(err) => {
                    warn!("failed to read config {path}: {err}; using defaults");
                }
            }
            return Self::default();
        }

        // File does not exist: write commented defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                let mut commented = String::new();
                for line in text.lines() {
                    let trimmed = line.trim();
                    let is_section = trimmed.starts_with('[')
                        && trimmed.ends_with(']')
                        && !trimmed.starts_with("[[");
                    if trimmed.is_empty() {
                        commented.push('\n');
                    } else if is_section {
                        commented.push_str(line);
                        commented.push('\n');
                    } else {
                        // Array-of-table headers are commented out too, so
                        // the file parses back to the built-in pair list.
                        commented.push_str("# ");
                        commented.push_str(line);
                        commented.push('\n');
                    }
                }
                if let Err(err) = fs::write(path_obj, commented) {
                    warn!("failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                warn!("failed to serialize default config: {err}");
            }
        }
        default_cfg
    }
}
