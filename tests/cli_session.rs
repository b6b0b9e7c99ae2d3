//! Drives the built binary over stdin, the way an interactive user would.

use std::io::Write;
use std::net::{Ipv4Addr, TcpListener};
use std::process::{Command, Output, Stdio};

const QUIET_ARGS: [&str; 4] = ["--color", "never", "--log-level", "silent"];

fn run_session(input: &str) -> Output {
    run_session_with(&["--no-health-check"], input.as_bytes())
}

fn run_session_with(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dirsim"))
        .args(args)
        .args(QUIET_ARGS)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start dirsim");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input)
        .expect("Failed to write commands");

    child.wait_with_output().expect("Failed to wait for dirsim")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn prints_banner_and_exits_on_end_of_input() {
    let output = run_session("");

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "File System Simulator",
            "Enter commands (CREATE, LIST, DELETE, MOVE). One command at a time.",
        ]
    );
}

#[test]
fn applies_commands_in_order_and_reports_errors() {
    let output = run_session(
        "CREATE fruits\n\
         CREATE fruits/apples\n\
         create vegetables\n\
         MOVE fruits/apples vegetables\n\
         DELETE grains\n\
         LIST\n",
    );

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output)[2..],
        [
            "DELETE_ERROR, grains, No such directory",
            "    fruits/",
            "    vegetables/",
            "        apples/",
        ]
    );
}

#[test]
fn invalid_command_does_not_end_the_session() {
    let output = run_session("COPY a b\nCREATE a\nLIST\n");

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output)[2..],
        [
            "ERR, COPY, Invalid command: Enter commands (CREATE, LIST, DELETE, MOVE)",
            "    a/",
        ]
    );
}

#[test]
fn invalid_utf8_line_does_not_end_the_session() {
    let output = run_session_with(
        &["--no-health-check"],
        b"CREATE a\nCREATE caf\xe9\nLIST\n",
    );

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output)[2..],
        ["    a/", "    caf\u{FFFD}/"]
    );
}

#[test]
fn occupied_health_port_does_not_prevent_startup() {
    let blocker =
        TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).expect("Failed to bind blocking listener");
    let port = blocker
        .local_addr()
        .expect("Failed to get blocking listener address")
        .port()
        .to_string();

    let output = run_session_with(&["--port", &port], b"CREATE a\nLIST\n");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output)[2..], ["    a/"]);
    drop(blocker);
}

#[test]
fn missing_explicit_config_file_is_fatal() {
    let output = Command::new(env!("CARGO_BIN_EXE_dirsim"))
        .args(["--no-health-check", "--config", "does-not-exist.yaml"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run dirsim");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("configuration stage"));
}
