// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use bento_app::DashboardData;
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use std::time::Duration;
use url::Url;

pub fn fetch_document(url: &Url, timeout: Duration) -> Result<DashboardData> {
    let http = HttpClient::builder()
        .timeout(timeout)
        .build()
        .context("build HTTP client")?;

    tracing::debug!(%url, ?timeout, "fetching dashboard data");
    let response = http
        .get(url.clone())
        .send()
        .map_err(|error| connection_error(url, error))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(status_error(url, status, &body));
    }

    response
        .json::<DashboardData>()
        .with_context(|| format!("decode dashboard data from {url}"))
}

fn connection_error(url: &Url, error: reqwest::Error) -> anyhow::Error {
    if error.is_timeout() {
        return anyhow!("timed out fetching {url}; raise [data].timeout or check the server");
    }
    anyhow!("cannot reach {url} ({error})")
}

fn status_error(url: &Url, status: StatusCode, body: &str) -> anyhow::Error {
    let body = body.trim();
    if !body.is_empty() && body.len() < 100 && !body.contains('{') {
        return anyhow!("{url} returned {}: {body}", status.as_u16());
    }
    anyhow!("{url} returned {}", status.as_u16())
}
