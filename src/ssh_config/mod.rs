//! SSH config host alias extraction.
//!
//! Only top-level `Host <alias>` lines matter here. Every other directive,
//! including `HostName`, `Match` blocks and comments, is ignored.

mod parser;
mod path;

pub use parser::{host_names_from_str, parse_host_line, parse_host_names, read_host_names};
pub use path::get_default_ssh_config_path;

pub(crate) use path::expand_tilde;

use std::path::{Path, PathBuf};

/// Supplies the ordered host aliases shown in the menu.
///
/// The menu asks again on every iteration, so an implementation backed by a
/// file picks up edits made while the menu is running.
pub trait HostSource {
    fn host_names(&self) -> Vec<String>;
}

/// A host source backed by an SSH client config file on disk.
#[derive(Debug, Clone)]
pub struct SshConfigFile {
    path: PathBuf,
}

impl SshConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HostSource for SshConfigFile {
    fn host_names(&self) -> Vec<String> {
        parse_host_names(&self.path)
    }
}

impl HostSource for Vec<String> {
    fn host_names(&self) -> Vec<String> {
        self.clone()
    }
}
