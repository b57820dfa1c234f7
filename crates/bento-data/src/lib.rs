// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod demo;
mod remote;
mod validation;

use anyhow::{Context, Result, anyhow, bail};
use bento_app::{DashboardData, MetricKey};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub use demo::demo_document;
pub use remote::fetch_document;
pub use validation::{DataError, validate_document};

pub const APP_NAME: &str = "bento";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Remote(Url),
    Demo,
}

impl DataSource {
    /// Accepts a filesystem path or an `http(s)` URL.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            bail!("data source must not be empty");
        }

        if let Some(index) = raw.find("://")
            && index > 0
        {
            let scheme = &raw[..index];
            if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
                let url =
                    Url::parse(raw).with_context(|| format!("invalid data source URL {raw:?}"))?;
                return Ok(Self::Remote(url));
            }
            if scheme.chars().all(char::is_alphabetic) {
                bail!(
                    "data source {raw:?} uses unsupported scheme {scheme}://; use a file path or an http(s) URL"
                );
            }
        }

        if raw.starts_with("file:") {
            bail!("data source {raw:?} uses file: URI syntax; pass a plain filesystem path");
        }

        Ok(Self::File(PathBuf::from(raw)))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{url}"),
            Self::Demo => f.write_str("demo data"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Reject documents a mounted widget cannot render.
    #[default]
    Strict,
    /// Accept anything that decodes; missing metrics render blank.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub timeout: Duration,
    pub validation: Validation,
    pub required_metrics: Vec<MetricKey>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            validation: Validation::Strict,
            required_metrics: MetricKey::ALL.to_vec(),
        }
    }
}

pub fn load_document(source: &DataSource, options: &LoadOptions) -> Result<DashboardData> {
    let data = match source {
        DataSource::File(path) => read_document(path)?,
        DataSource::Remote(url) => fetch_document(url, options.timeout)?,
        DataSource::Demo => demo_document(),
    };

    if options.validation == Validation::Strict {
        validate_document(&data, &options.required_metrics)
            .with_context(|| format!("validate dashboard data from {source}"))?;
    }

    tracing::info!(
        source = %source,
        candidates = data.candidates.len(),
        requirements = data.requirements.len(),
        tech_skills = data.tech_skills.len(),
        "dashboard data loaded"
    );
    Ok(data)
}

pub fn read_document(path: &Path) -> Result<DashboardData> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read data file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse JSON data file {}", path.display()))
}

pub fn default_data_path() -> Result<PathBuf> {
    if let Some(override_path) = env::var_os("BENTO_DATA_PATH") {
        return Ok(PathBuf::from(override_path));
    }

    let data_root = dirs::data_local_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set BENTO_DATA_PATH to the dashboard JSON file")
    })?;
    Ok(data_root.join(APP_NAME).join("data.json"))
}
