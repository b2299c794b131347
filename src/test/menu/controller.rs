use super::{
    CONNECT_FAILED_TITLE, Dispatch, GOODBYE_MESSAGE, GOODBYE_TITLE, INVALID_MESSAGE, INVALID_TITLE, MenuController, MenuOptions,
    resolve_selection,
};
use crate::connect::Connector;
use crate::menu::MenuList;
use crate::ssh_config::HostSource;
use crate::ui::{MenuFrontend, MenuItem, UIError};
use std::{
    cell::Cell,
    collections::VecDeque,
    io,
    process::ExitStatus,
    time::{Duration, Instant},
};

#[cfg(unix)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

#[derive(Default)]
struct ScriptedFrontend {
    selections: VecDeque<Option<String>>,
    menus: Vec<Vec<MenuItem>>,
    messages: Vec<(String, String)>,
}

impl ScriptedFrontend {
    fn new(selections: &[Option<&str>]) -> Self {
        Self {
            selections: selections.iter().map(|choice| choice.map(str::to_string)).collect(),
            ..Self::default()
        }
    }

    fn message_titles(&self) -> Vec<&str> {
        self.messages.iter().map(|(title, _)| title.as_str()).collect()
    }
}

impl MenuFrontend for ScriptedFrontend {
    fn menu(&mut self, _title: &str, _prompt: &str, items: &[MenuItem]) -> Result<Option<String>, UIError> {
        self.menus.push(items.to_vec());
        // Running out of script ends the loop instead of spinning forever.
        self.selections.pop_front().ok_or(UIError::NotATerminal)
    }

    fn message_box(&mut self, title: &str, message: &str, _size: Option<(u16, u16)>) -> Result<(), UIError> {
        self.messages.push((title.to_string(), message.to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingConnector {
    hosts: Vec<String>,
    results: VecDeque<io::Result<ExitStatus>>,
}

impl Connector for RecordingConnector {
    fn connect(&mut self, host: &str) -> io::Result<ExitStatus> {
        self.hosts.push(host.to_string());
        self.results.pop_front().unwrap_or_else(|| Ok(exit_status(0)))
    }
}

/// Returns a different host list on each call.
struct ChangingHosts {
    calls: Cell<usize>,
    rounds: Vec<Vec<String>>,
}

impl HostSource for ChangingHosts {
    fn host_names(&self) -> Vec<String> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        self.rounds.get(call).or(self.rounds.last()).cloned().unwrap_or_default()
    }
}

fn options() -> MenuOptions {
    MenuOptions {
        title: "SSH Menu".to_string(),
        prompt: "Choose a host:".to_string(),
        pacing_delay: Duration::ZERO,
    }
}

fn hosts(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn tags(items: &[MenuItem]) -> Vec<&str> {
    items.iter().map(|item| item.tag.as_str()).collect()
}

#[test]
fn quit_shows_goodbye_and_returns() {
    let mut controller = MenuController::new(
        hosts(&["myserver", "devbox"]),
        ScriptedFrontend::new(&[Some("3")]),
        RecordingConnector::default(),
        options(),
    );

    controller.run().expect("clean quit");

    assert_eq!(controller.frontend.messages, vec![(GOODBYE_TITLE.to_string(), GOODBYE_MESSAGE.to_string())]);
    assert!(controller.connector.hosts.is_empty());
}

#[test]
fn quit_works_with_no_hosts() {
    let mut controller = MenuController::new(Vec::new(), ScriptedFrontend::new(&[Some("1")]), RecordingConnector::default(), options());

    controller.run().expect("clean quit");

    assert_eq!(tags(&controller.frontend.menus[0]), vec!["1"]);
    assert_eq!(controller.frontend.message_titles(), vec![GOODBYE_TITLE]);
}

#[test]
fn host_selection_connects_then_redisplays_menu() {
    let mut controller = MenuController::new(
        hosts(&["myserver", "devbox"]),
        ScriptedFrontend::new(&[Some("2"), Some("1"), Some("3")]),
        RecordingConnector::default(),
        options(),
    );

    controller.run().expect("clean quit");

    assert_eq!(controller.connector.hosts, vec!["devbox", "myserver"]);
    assert_eq!(controller.frontend.menus.len(), 3);
    assert_eq!(controller.frontend.message_titles(), vec![GOODBYE_TITLE]);
}

#[test]
fn invalid_or_cancelled_selection_shows_message_and_loops() {
    let mut controller = MenuController::new(
        hosts(&["myserver"]),
        ScriptedFrontend::new(&[None, Some(""), Some("0"), Some("7"), Some("abc"), Some("2")]),
        RecordingConnector::default(),
        options(),
    );

    controller.run().expect("clean quit");

    assert!(controller.connector.hosts.is_empty());
    assert_eq!(
        controller.frontend.message_titles(),
        vec![INVALID_TITLE, INVALID_TITLE, INVALID_TITLE, INVALID_TITLE, INVALID_TITLE, GOODBYE_TITLE]
    );
    assert_eq!(controller.frontend.messages[0].1, INVALID_MESSAGE);
    assert_eq!(controller.frontend.menus.len(), 6);
}

#[test]
fn launch_failure_is_shown_and_loop_continues() {
    let connector = RecordingConnector {
        results: VecDeque::from([Err(io::Error::new(io::ErrorKind::NotFound, "ssh not found in PATH"))]),
        ..RecordingConnector::default()
    };
    let mut controller = MenuController::new(hosts(&["myserver"]), ScriptedFrontend::new(&[Some("1"), Some("2")]), connector, options());

    controller.run().expect("clean quit");

    assert_eq!(controller.frontend.message_titles(), vec![CONNECT_FAILED_TITLE, GOODBYE_TITLE]);
    let (_, message) = &controller.frontend.messages[0];
    assert!(message.contains("myserver"));
    assert!(message.contains("ssh not found in PATH"));
}

#[test]
fn non_zero_exit_is_not_shown_to_the_user() {
    let connector = RecordingConnector {
        results: VecDeque::from([Ok(exit_status(255))]),
        ..RecordingConnector::default()
    };
    let mut controller = MenuController::new(hosts(&["myserver"]), ScriptedFrontend::new(&[Some("1"), Some("2")]), connector, options());

    controller.run().expect("clean quit");

    assert_eq!(controller.connector.hosts, vec!["myserver"]);
    assert_eq!(controller.frontend.message_titles(), vec![GOODBYE_TITLE]);
}

#[test]
fn menu_is_rebuilt_from_hosts_every_iteration() {
    let source = ChangingHosts {
        calls: Cell::new(0),
        rounds: vec![hosts(&["alpha"]), hosts(&["alpha", "beta", "gamma"])],
    };
    let mut controller = MenuController::new(source, ScriptedFrontend::new(&[Some("1"), Some("4")]), RecordingConnector::default(), options());

    controller.run().expect("clean quit");

    let menus = &controller.frontend.menus;
    assert_eq!(tags(&menus[0]), vec!["1", "2"]);
    assert_eq!(tags(&menus[1]), vec!["1", "2", "3", "4"]);
    assert_eq!(menus[1][3].label, "└─ Quit");
    assert_eq!(controller.hosts.calls.get(), 2);
}

#[test]
fn frontend_errors_end_the_loop() {
    let mut controller = MenuController::new(hosts(&["myserver"]), ScriptedFrontend::new(&[]), RecordingConnector::default(), options());

    let result = controller.run();
    assert!(matches!(result, Err(UIError::NotATerminal)));
}

#[test]
fn pacing_delay_follows_each_connection() {
    let pacing = MenuOptions {
        pacing_delay: Duration::from_millis(40),
        ..options()
    };
    let mut controller = MenuController::new(
        hosts(&["myserver"]),
        ScriptedFrontend::new(&[Some("1"), Some("1"), Some("2")]),
        RecordingConnector::default(),
        pacing,
    );

    let started = Instant::now();
    controller.run().expect("clean quit");

    assert!(started.elapsed() >= Duration::from_millis(80));
}

#[test]
fn resolves_selection_into_dispatch() {
    let menu = MenuList::build(&hosts(&["alpha"]));

    assert_eq!(resolve_selection(&menu, Some("1")), Dispatch::Connect("alpha".to_string()));
    assert_eq!(resolve_selection(&menu, Some("2")), Dispatch::Quit);
    assert_eq!(resolve_selection(&menu, Some("3")), Dispatch::Invalid);
    assert_eq!(resolve_selection(&menu, None), Dispatch::Invalid);
}
