use crate::compose::ScoreTier;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: Report,
    #[serde(default)]
    pub export: Export,
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw).with_context(|| "parsing TOML")?;
        Ok(cfg)
    }

    /// `load` when a path is given, built-in defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Path of the run index, next to the CSV.
    pub fn index_path(&self, csv_path: &Path) -> PathBuf {
        csv_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&self.export.index_filename)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    pub tier: ScoreTier,
    pub print_breakdowns: bool,
    pub print_table: bool,
    pub print_skipped: bool,
}
impl Default for Report {
    fn default() -> Self {
        Self {
            tier: ScoreTier::Average,
            print_breakdowns: true,
            print_table: true,
            print_skipped: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Export {
    pub enabled: bool,
    pub csv_path: String,
    pub utf8_bom: bool,
    pub normalize_names: bool,
    pub write_index_json: bool,
    pub index_filename: String,
}
impl Default for Export {
    fn default() -> Self {
        Self {
            enabled: true,
            csv_path: "out/license_true_pass_rates.csv".into(),
            utf8_bom: true,
            normalize_names: true,
            write_index_json: true,
            index_filename: "index.json".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub level: String,
    pub json: bool,
    pub write_to_file: bool,
    pub file_path: String,
}
impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            write_to_file: false,
            file_path: "".into(),
        }
    }
}
