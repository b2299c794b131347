//! Launching the connect program for a chosen host.

use crate::{command_path, config::DEFAULT_CONNECT_PROGRAM, log_debug};
use std::{
    io,
    path::Path,
    process::{Command, ExitStatus, Stdio},
};

#[cfg(unix)]
use std::os::unix::process::CommandExt;

pub trait Connector {
    /// Run a foreground session with `host` and wait for it to end.
    fn connect(&mut self, host: &str) -> io::Result<ExitStatus>;
}

/// Runs `<program> <host>` with the terminal's stdio.
#[derive(Debug, Clone)]
pub struct Launcher {
    program: String,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_PROGRAM)
    }
}

impl Launcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub(crate) fn command(&self, host: &str) -> io::Result<Command> {
        let program_path = command_path::program_path(&self.program)?;
        let mut cmd = Command::new(program_path);
        #[cfg(unix)]
        {
            cmd.arg0(&self.program);
        }
        if self.ends_options() {
            cmd.arg("--");
        }
        cmd.arg(host).stdin(Stdio::inherit()).stdout(Stdio::inherit()).stderr(Stdio::inherit());
        Ok(cmd)
    }

    // ssh takes options before the destination; `--` keeps an alias such as
    // `-oProxyCommand=...` from being read as one.
    fn ends_options(&self) -> bool {
        Path::new(&self.program).file_name().is_some_and(|name| name == DEFAULT_CONNECT_PROGRAM)
    }
}

impl Connector for Launcher {
    fn connect(&mut self, host: &str) -> io::Result<ExitStatus> {
        let mut cmd = self.command(host)?;
        log_debug!("Running {:?}", cmd);
        cmd.status()
    }
}

#[cfg(test)]
#[path = "test/connect.rs"]
mod tests;
