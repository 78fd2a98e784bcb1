//! # Configuration
//!
//! Garage configuration is managed by [`confique`], which handles layered loading
//! from a TOML file, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `GARAGE_SPREADSHEET_ID`, `GARAGE_ACCESS_TOKEN`, etc.
//! 2. **Config file**: `--config <path>`, or `garage.toml` in the OS config
//!    directory (via `directories`).
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `backend` | `sheets` | `sheets` (Google Sheets) or `json` (local file) |
//! | `spreadsheet_id` | (none) | Spreadsheet holding the stock worksheet |
//! | `worksheet` | `stock` | Worksheet name |
//! | `access_token` | (none) | OAuth bearer token for the Sheets API |
//! | `api_base_url` | `https://sheets.googleapis.com/v4` | Sheets API root |
//! | `timeout_secs` | `10` | HTTP timeout per request |
//! | `data_file` | `<data dir>/stock.json` | File used by the `json` backend |
//! | `min_year` | `2001` | Oldest accepted vehicle year |
//! | `max_year` | current year + 10 | Newest accepted vehicle year |

use crate::error::Result;
use crate::validation::YearRange;
use chrono::{Datelike, NaiveDate};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Years past the current one accepted when `max_year` is not set.
pub const DEFAULT_YEARS_AHEAD: i32 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Sheets,
    Json,
}

/// Configuration for garage, stored in `garage.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GarageConfig {
    /// Which row store to use.
    #[config(env = "GARAGE_BACKEND", default = "sheets")]
    pub backend: BackendKind,

    #[config(env = "GARAGE_SPREADSHEET_ID")]
    pub spreadsheet_id: Option<String>,

    #[config(env = "GARAGE_WORKSHEET", default = "stock")]
    pub worksheet: String,

    #[config(env = "GARAGE_ACCESS_TOKEN")]
    pub access_token: Option<String>,

    #[config(default = "https://sheets.googleapis.com/v4")]
    pub api_base_url: String,

    #[config(default = 10)]
    pub timeout_secs: u64,

    /// File for the `json` backend. When absent, `stock.json` in the OS data directory.
    #[config(env = "GARAGE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    #[config(default = 2001)]
    pub min_year: i32,

    /// When absent, the current year plus ten.
    pub max_year: Option<i32>,
}

impl Default for GarageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Sheets,
            spreadsheet_id: None,
            worksheet: "stock".to_string(),
            access_token: None,
            api_base_url: "https://sheets.googleapis.com/v4".to_string(),
            timeout_secs: 10,
            data_file: None,
            min_year: 2001,
            max_year: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "garage")
}

impl GarageConfig {
    /// Load from environment, then `path` (or the default config file), then defaults.
    /// A missing config file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.map(Path::to_path_buf).or_else(Self::default_path);
        let mut builder = GarageConfig::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    /// `garage.toml` in the OS config directory.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("garage.toml"))
    }

    /// File used by the JSON backend.
    pub fn data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|dirs| dirs.data_dir().join("stock.json"))
                .unwrap_or_else(|| PathBuf::from("stock.json"))
        })
    }

    /// Accepted vehicle years as of `today`.
    pub fn year_range(&self, today: NaiveDate) -> YearRange {
        let max = self
            .max_year
            .unwrap_or(today.year() + DEFAULT_YEARS_AHEAD);
        YearRange::new(self.min_year, max)
    }
}
