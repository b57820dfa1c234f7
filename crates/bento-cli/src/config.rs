// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use bento_app::{DEFAULT_WIDGETS, Widget, default_widgets, mount_widgets, required_metrics};
use bento_data::{DataSource, LoadOptions, Validation};
use bento_tui::{DEFAULT_CENTER_HEIGHT, DashboardOptions, PanelSide};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data: Data::default(),
            layout: Layout::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Data {
    pub source: Option<String>,
    pub strict: Option<bool>,
    pub timeout: Option<String>,
}

impl Default for Data {
    fn default() -> Self {
        Self {
            source: None,
            strict: Some(true),
            timeout: Some("5s".to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Layout {
    pub requirements_panel: Option<String>,
    pub center_height: Option<u16>,
    pub widgets: Option<Vec<String>>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            requirements_panel: Some(PanelSide::Left.as_str().to_owned()),
            center_height: Some(DEFAULT_CENTER_HEIGHT),
            widgets: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("BENTO_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set BENTO_CONFIG_PATH to the config file")
        })?;
        Ok(config_root.join(bento_data::APP_NAME).join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} has no version; add `version = 1` at the top",
                    path.display()
                )
            })?;
        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(source) = &self.data.source {
            DataSource::parse(source)
                .with_context(|| format!("data.source in {}", path.display()))?;
        }

        if let Some(timeout) = &self.data.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "data.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        if let Some(panel) = &self.layout.requirements_panel
            && PanelSide::parse(panel).is_none()
        {
            bail!(
                "layout.requirements_panel in {} must be one of left, right, none; got {:?}",
                path.display(),
                panel
            );
        }

        if self.layout.center_height == Some(0) {
            bail!(
                "layout.center_height in {} must be positive",
                path.display()
            );
        }

        self.widgets()
            .with_context(|| format!("layout.widgets in {}", path.display()))?;
        Ok(())
    }

    /// Explicit `--data` wins over `[data].source`; the demo flag wins over both.
    pub fn data_source(&self, cli_data: Option<&str>, demo: bool) -> Result<DataSource> {
        if demo {
            return Ok(DataSource::Demo);
        }
        match cli_data.or(self.data.source.as_deref()) {
            Some(raw) => DataSource::parse(raw),
            None => Ok(DataSource::File(bento_data::default_data_path()?)),
        }
    }

    pub fn validation(&self) -> Validation {
        if self.data.strict.unwrap_or(true) {
            Validation::Strict
        } else {
            Validation::Lenient
        }
    }

    pub fn timeout(&self) -> Result<Duration> {
        parse_duration(self.data.timeout.as_deref().unwrap_or("5s"))
    }

    pub fn widgets(&self) -> Result<Vec<Widget>> {
        match &self.layout.widgets {
            Some(ids) => mount_widgets(ids),
            None => Ok(default_widgets()),
        }
    }

    pub fn dashboard_options(&self) -> Result<DashboardOptions> {
        let requirements_panel = match &self.layout.requirements_panel {
            Some(raw) => PanelSide::parse(raw)
                .ok_or_else(|| anyhow!("unknown requirements panel placement {raw:?}"))?,
            None => PanelSide::Left,
        };
        Ok(DashboardOptions {
            widgets: self.widgets()?,
            requirements_panel,
            center_height: self.layout.center_height.unwrap_or(DEFAULT_CENTER_HEIGHT),
        })
    }

    pub fn load_options(&self, widgets: &[Widget]) -> Result<LoadOptions> {
        Ok(LoadOptions {
            timeout: self.timeout()?,
            validation: self.validation(),
            required_metrics: required_metrics(widgets),
        })
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log.file.as_deref().map(PathBuf::from)
    }

    pub fn example_config(path: &Path) -> String {
        let widgets = DEFAULT_WIDGETS
            .iter()
            .map(|id| format!("  \"{id}\",\n"))
            .collect::<String>();
        format!(
            "# bento config\n# Place this file at: {}\n\nversion = 1\n\n[data]\n# A JSON file path or an http(s) URL. Default is the platform data dir\n# (for example ~/.local/share/bento/data.json), or BENTO_DATA_PATH when set\n# source = \"https://example.com/dashboard.json\"\nstrict = true\ntimeout = \"5s\"\n\n[layout]\n# left, right or none\nrequirements_panel = \"left\"\ncenter_height = {}\nwidgets = [\n{}]\n\n[log]\nlevel = \"{}\"\n# file = \"/tmp/bento.log\"\n",
            path.display(),
            DEFAULT_CENTER_HEIGHT,
            widgets,
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    let parse = |value: &str| -> Result<u64> {
        value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))
    };
    if let Some(value) = raw.strip_suffix("ms") {
        return Ok(Duration::from_millis(parse(value)?));
    }
    if let Some(value) = raw.strip_suffix('s') {
        return Ok(Duration::from_secs(parse(value)?));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let secs = parse(value)?
            .checked_mul(60)
            .with_context(|| format!("timeout duration {raw:?} is too large"))?;
        return Ok(Duration::from_secs(secs));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 5s)")
}
