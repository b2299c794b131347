//! `Host` line filtering.

use crate::log_debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;

// Case-sensitive and anchored: `HostName`, `host` and indented lines never match.
static HOST_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Host\s+(\S+)").expect("host line pattern is valid"));

/// Extract the host alias from a single config line.
///
/// Returns the first alias after `Host`, or `None` when the line is not a
/// `Host` line, uses a `*` wildcard, or mentions `Match` anywhere. Any further
/// aliases on the same line are dropped.
pub fn parse_host_line(line: &str) -> Option<&str> {
    if line.contains("Match") {
        return None;
    }

    let captures = HOST_LINE.captures(line)?;
    let arguments = &line["Host".len()..];
    if arguments.contains('*') {
        return None;
    }

    captures.get(1).map(|alias| alias.as_str())
}

/// Collect host aliases from config text, in file order, duplicates kept.
pub fn host_names_from_str(contents: &str) -> Vec<String> {
    contents.lines().filter_map(parse_host_line).map(str::to_string).collect()
}

/// Read host aliases from a config file, surfacing I/O errors.
pub fn read_host_names(config_path: &Path) -> io::Result<Vec<String>> {
    let bytes = fs::read(config_path)?;
    Ok(host_names_from_str(&String::from_utf8_lossy(&bytes)))
}

/// Read host aliases from a config file.
///
/// A missing or unreadable file yields an empty list; the menu then only
/// offers Quit.
pub fn parse_host_names(config_path: &Path) -> Vec<String> {
    match read_host_names(config_path) {
        Ok(hosts) => {
            log_debug!("Parsed {} host(s) from {}", hosts.len(), config_path.display());
            hosts
        }
        Err(err) => {
            log_debug!("Could not read SSH config {}: {}", config_path.display(), err);
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "../test/ssh_config/parser.rs"]
mod tests;
