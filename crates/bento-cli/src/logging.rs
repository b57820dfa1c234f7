// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::env;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "BENTO_LOG";

/// Sends tracing output to `file`. The terminal belongs to the dashboard, so
/// without a file nothing is installed and events are dropped.
pub fn init(file: Option<&Path>, level: &str) -> Result<bool> {
    let Some(file) = file else {
        return Ok(false);
    };

    let filter = log_filter(env::var(LOG_ENV).ok().as_deref(), level)?;
    if let Some(parent) = file.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let writer = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .with_context(|| format!("open log file {}", file.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(writer)),
        )
        .try_init()
        .context("install log subscriber")?;
    Ok(true)
}

fn log_filter(from_env: Option<&str>, level: &str) -> Result<EnvFilter> {
    let directives = from_env
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(level);
    EnvFilter::try_new(directives).with_context(|| {
        format!("invalid log filter {directives:?}; set {LOG_ENV} or [log].level to e.g. info or bento=debug")
    })
}
