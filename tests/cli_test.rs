// file: tests/cli_test.rs
// version: 1.0.0
// guid: c3e7a1f9-6b04-4d28-9a5e-0f8d2c7b4e16

//! Binary level tests for tcat-tlv-client

use assert_cmd::Command;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use tempfile::NamedTempFile;

/// Command with an empty config file so the user's own config is never read
fn client(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("tcat-tlv-client").unwrap();
    cmd.env_remove("TCAT_DEVICE")
        .arg("--quiet")
        .arg("--config")
        .arg(config.path());
    cmd
}

fn empty_config() -> NamedTempFile {
    NamedTempFile::new().unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_tlv_list() {
    let config = empty_config();
    let stdout = stdout_of(client(&config).args(["tlv", "list"]));

    assert!(stdout.starts_with('\n'));
    assert!(stdout.contains("0x1\tRESPONSE_W_STATUS\n"));
    assert!(stdout.contains("0xa\tPING\n"));
    assert!(stdout.contains("0x82\tAPPLICATION"));
}

#[test]
fn test_tlv_send_without_device() {
    let config = empty_config();
    let stdout = stdout_of(client(&config).args(["tlv", "send", "0a"]));
    assert_eq!(stdout.trim(), "TCAT Device not connected.");
}

#[test]
fn test_tlv_send_to_device() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let device = thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();
        let mut request = [0u8; 3];
        socket.read_exact(&mut request).unwrap();
        socket.write_all(&[0x02, 0x04, b'T', b'C', b'A', b'T']).unwrap();
        request
    });

    let config = empty_config();
    let stdout = stdout_of(
        client(&config).args(["--device", addr.as_str(), "tlv", "send", "08", "ff"]),
    );

    assert_eq!(device.join().unwrap(), [0x08, 0x01, 0xFF]);
    assert!(stdout.contains("\tTYPE:\tRESPONSE_W_PAYLOAD (0x2)"));
    assert!(stdout.contains("\tVALUE:\t0x54434154"));
    assert!(stdout.contains("\tTEXT:\tTCAT"));
}

#[test]
fn test_tlv_send_bad_type_is_reported() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let device = thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();
        let mut rest = Vec::new();
        socket.read_to_end(&mut rest).unwrap();
        rest
    });

    let config = empty_config();
    let stdout = stdout_of(client(&config).args(["--device", addr.as_str(), "tlv", "send", "zz"]));

    assert!(stdout.starts_with("Command failed invalid TLV type 'zz'"));
    assert!(device.join().unwrap().is_empty());
}

#[test]
fn test_invalid_config_fails() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[device]\nresponse_timeout_ms = 0").unwrap();

    let output = client(&config).args(["tlv", "list"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("response_timeout_ms"));
}

#[test]
fn test_shell_reads_stdin() {
    let config = empty_config();
    let stdout = stdout_of(
        client(&config)
            .arg("shell")
            .write_stdin("help\ntlv send 0a\nexit\n"),
    );

    assert!(stdout.contains("tlv\tSend custom TLV message."));
    assert!(stdout.contains("TCAT Device not connected."));
}
