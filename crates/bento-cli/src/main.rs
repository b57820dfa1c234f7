// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result, anyhow};
use bento_app::AppState;
use config::Config;
use runtime::SystemRuntime;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `bento --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;
    logging::init(config.log_file().as_deref(), config.log_level())?;

    let source = config.data_source(options.data.as_deref(), options.demo)?;
    let dashboard = config.dashboard_options()?;
    let load_options = config.load_options(&dashboard.widgets)?;
    tracing::info!(
        source = %source,
        widgets = dashboard.widgets.len(),
        panel = dashboard.requirements_panel.as_str(),
        "starting dashboard"
    );

    if options.check_only {
        let data = bento_data::load_document(&source, &load_options)
            .with_context(|| format!("check data source {source}"))?;
        println!(
            "ok: {} candidates from {source}",
            data.candidates.len()
        );
        return Ok(());
    }

    let mut state = AppState::default();
    let mut runtime = SystemRuntime::new(source, load_options);
    bento_tui::run_app(&mut state, &mut runtime, &dashboard)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    data: Option<String>,
    print_config_path: bool,
    demo: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        data: None,
        print_config_path: false,
        demo: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--data" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--data requires a file path or http(s) URL"))?;
                options.data = Some(value.as_ref().to_owned());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    if options.demo && options.data.is_some() {
        return Err(anyhow!("--demo and --data cannot be combined; pick one source"));
    }

    Ok(options)
}

fn print_help() {
    println!("bento: candidate dashboard");
    println!("  --config <path>          Use a specific config path");
    println!("  --data <path|url>        Load dashboard JSON from a file or http(s) URL");
    println!("  --demo                   Launch with the built-in demo candidates");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config and data source, then exit");
    println!("  --help                   Show this help");
    println!();
    println!("environment:");
    println!("  BENTO_CONFIG_PATH        Config file path (default: <config dir>/bento/config.toml)");
    println!("  BENTO_DATA_PATH          Data file used when no source is configured");
    println!("  BENTO_LOG                Log filter, overrides [log].level");
}
