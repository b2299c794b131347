//! Read-select-dispatch loop.

use super::{MenuAction, MenuList};
use crate::connect::Connector;
use crate::ssh_config::HostSource;
use crate::ui::{MenuFrontend, UIError};
use crate::{log_debug, log_error, log_info, log_warn};
use std::{thread, time::Duration};

pub const GOODBYE_TITLE: &str = "Goodbye";
pub const GOODBYE_MESSAGE: &str = "Thanks for using ssh-menu. Goodbye!";
pub const INVALID_TITLE: &str = "No selection";
pub const INVALID_MESSAGE: &str = "You cancelled or have not chosen a valid option.";
pub const CONNECT_FAILED_TITLE: &str = "Connection failed";

/// Presentation settings for the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOptions {
    pub title: String,
    pub prompt: String,
    pub pacing_delay: Duration,
}

/// What the loop does after one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Dispatch {
    Connect(String),
    Quit,
    Invalid,
}

/// Drives the menu until the user picks Quit.
pub struct MenuController<S, F, C> {
    hosts: S,
    frontend: F,
    connector: C,
    options: MenuOptions,
}

impl<S, F, C> MenuController<S, F, C>
where
    S: HostSource,
    F: MenuFrontend,
    C: Connector,
{
    pub fn new(hosts: S, frontend: F, connector: C, options: MenuOptions) -> Self {
        Self {
            hosts,
            frontend,
            connector,
            options,
        }
    }

    /// Run until Quit. Only terminal failures escape; every other problem is
    /// reported in a dialog and the menu comes back.
    pub fn run(&mut self) -> Result<(), UIError> {
        loop {
            let menu = MenuList::build(&self.hosts.host_names());
            log_debug!("Menu built with {} host(s)", menu.host_count());

            let selection = self.frontend.menu(&self.options.title, &self.options.prompt, &menu.to_items())?;

            match resolve_selection(&menu, selection.as_deref()) {
                Dispatch::Connect(host) => {
                    self.connect(&host)?;
                    if !self.options.pacing_delay.is_zero() {
                        thread::sleep(self.options.pacing_delay);
                    }
                }
                Dispatch::Quit => {
                    log_info!("Quit selected");
                    self.frontend.message_box(GOODBYE_TITLE, GOODBYE_MESSAGE, None)?;
                    return Ok(());
                }
                Dispatch::Invalid => {
                    log_debug!("Invalid selection: {:?}", selection);
                    self.frontend.message_box(INVALID_TITLE, INVALID_MESSAGE, None)?;
                }
            }
        }
    }

    fn connect(&mut self, host: &str) -> Result<(), UIError> {
        log_info!("Connecting to host: {}", host);
        match self.connector.connect(host) {
            Ok(status) if status.success() => {
                log_debug!("Session with {} ended", host);
                Ok(())
            }
            Ok(status) => {
                log_warn!("Connection to {} exited with code: {:?}", host, status.code());
                Ok(())
            }
            Err(err) => {
                log_error!("Failed to launch connection to {}: {}", host, err);
                let message = format!("Could not connect to {}:\n{}", host, err);
                self.frontend.message_box(CONNECT_FAILED_TITLE, &message, None)
            }
        }
    }
}

pub(crate) fn resolve_selection(menu: &MenuList, selection: Option<&str>) -> Dispatch {
    match selection.and_then(|tag| menu.resolve(tag)) {
        Some(MenuAction::Connect(host)) => Dispatch::Connect(host.clone()),
        Some(MenuAction::Quit) => Dispatch::Quit,
        None => Dispatch::Invalid,
    }
}

#[cfg(test)]
#[path = "../test/menu/controller.rs"]
mod tests;
