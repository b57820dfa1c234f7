// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use bento_app::{DashboardData, OutboundLink};
use bento_data::{DataSource, LoadOptions};
use std::process::{Command, Stdio};
use std::thread;

/// Loads the dashboard document and hands links to the desktop opener.
pub struct SystemRuntime {
    source: DataSource,
    load_options: LoadOptions,
    opener: Opener,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Opener {
    program: String,
    args: Vec<String>,
}

impl Opener {
    fn platform() -> Self {
        #[cfg(target_os = "macos")]
        {
            Self::program("open")
        }
        #[cfg(target_os = "windows")]
        {
            Self {
                program: "cmd".to_owned(),
                args: vec!["/C".to_owned(), "start".to_owned(), String::new()],
            }
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Self::program("xdg-open")
        }
    }

    fn program(program: &str) -> Self {
        Self {
            program: program.to_owned(),
            args: Vec::new(),
        }
    }

    fn command(&self, target: &str) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            if self.program.eq_ignore_ascii_case("cmd") {
                command.raw_arg(cmd_quoted(target));
                return command;
            }
        }
        command.arg(target);
        command
    }
}

/// `cmd` splits unquoted arguments on `&`, which every mailto link carries.
#[cfg_attr(not(windows), allow(dead_code))]
fn cmd_quoted(target: &str) -> String {
    format!("\"{}\"", target.replace('"', "%22"))
}

impl SystemRuntime {
    pub fn new(source: DataSource, load_options: LoadOptions) -> Self {
        Self {
            source,
            load_options,
            opener: Opener::platform(),
        }
    }

    #[cfg(test)]
    fn with_opener(mut self, program: &str) -> Self {
        self.opener = Opener::program(program);
        self
    }
}

impl bento_tui::DashboardRuntime for SystemRuntime {
    fn load_dashboard(&mut self) -> Result<DashboardData> {
        bento_data::load_document(&self.source, &self.load_options)
    }

    fn open_link(&mut self, link: &OutboundLink) -> Result<()> {
        let mut child = self
            .opener
            .command(link.target())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| {
                format!(
                    "run {} to open {} link",
                    self.opener.program,
                    link.label()
                )
            })?;
        // Reaped off the UI thread; openers may linger until the desktop responds.
        thread::spawn(move || {
            let _ = child.wait();
        });
        tracing::debug!(opener = %self.opener.program, kind = link.label(), "spawned link opener");
        Ok(())
    }
}
