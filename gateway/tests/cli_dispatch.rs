//! CLI tests for the `gateway` binary.
//!
//! Spawns the binary against a temp config and verifies stdout JSON and
//! exit codes for successful and failing requests.

use std::collections::BTreeMap;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use gateway::exit_codes;
use gateway::io::config::{GatewayConfig, write_config};
use gateway::test_support::TestRoot;
use serde_json::Value;

fn configured_root() -> TestRoot {
    let root = TestRoot::new().expect("root");
    root.write("docs/guide.md", "step one\nstep two\n")
        .expect("write");
    let config = GatewayConfig {
        aliases: BTreeMap::from([("docs".to_string(), root.path_str("docs"))]),
    };
    write_config(&root.path().join("gateway.toml"), &config).expect("config");
    root
}

fn gateway_cmd(root: &TestRoot) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gateway"));
    cmd.current_dir(root.path());
    cmd
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout json")
}

#[test]
fn read_prints_success_response() {
    let root = configured_root();
    let output = gateway_cmd(&root)
        .args(["read", "docs/guide.md"])
        .output()
        .expect("gateway read");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let json = stdout_json(&output);
    assert_eq!(json["success"], Value::Bool(true));
    assert_eq!(json["content"], Value::from("step one\nstep two\n"));
}

#[test]
fn dispatch_reads_request_from_stdin() {
    let root = configured_root();
    let mut child = gateway_cmd(&root)
        .arg("dispatch")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn dispatch");
    let request = r#"{"requestCategory":"IO","requestType":"Update","filePath":"docs/guide.md","lineNumber":2,"content":"step one and a half"}"#;
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(request.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait dispatch");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        root.read("docs/guide.md").expect("read"),
        "step one\nstep one and a half\nstep two\n"
    );
}

#[test]
fn failing_request_exits_with_request_failed() {
    let root = configured_root();
    let output = gateway_cmd(&root)
        .args(["read", "nope/guide.md"])
        .output()
        .expect("gateway read");

    assert_eq!(output.status.code(), Some(exit_codes::REQUEST_FAILED));
    let json = stdout_json(&output);
    assert_eq!(json["isError"], Value::Bool(true));
    assert_eq!(json["success"], Value::Bool(false));
    assert_eq!(
        json["errorMessage"],
        Value::from("Directory alias 'nope' not found")
    );
}

#[test]
fn aliases_lists_configured_table() {
    let root = configured_root();
    let output = gateway_cmd(&root)
        .arg("aliases")
        .output()
        .expect("gateway aliases");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let json = stdout_json(&output);
    assert_eq!(json["docs"], Value::from(root.path_str("docs")));
}

#[test]
fn invalid_config_exits_with_invalid() {
    let root = TestRoot::new().expect("root");
    root.write("gateway.toml", "[aliases]\n\"a/b\" = \"/x\"\n")
        .expect("write");
    let output = gateway_cmd(&root)
        .arg("aliases")
        .output()
        .expect("gateway aliases");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}
