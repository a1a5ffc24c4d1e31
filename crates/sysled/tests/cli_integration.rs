//! Integration tests for the `sysled` binary.
//!
//! Every LED-touching test points `--root` at a temporary directory and
//! `--config` at a temporary file, so nothing reads or writes real sysfs.

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cli() -> assert_cmd::Command {
    cargo_bin_cmd!("sysled")
}

/// Temporary LED class root with red/green/blue directories.
fn led_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for color in ["red", "green", "blue"] {
        std::fs::create_dir(dir.path().join(color)).unwrap();
    }
    dir
}

fn read(root: &Path, color: &str, attr: &str) -> Option<String> {
    std::fs::read_to_string(root.join(color).join(attr)).ok()
}

fn cli_in(root: &Path) -> assert_cmd::Command {
    let mut cmd = cli();
    cmd.arg("--root")
        .arg(root)
        .arg("--config")
        .arg(root.join("no-config.toml"));
    cmd
}

#[test]
fn cli_help_succeeds() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sysled"));
}

#[test]
fn cli_version_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── steady ──

#[test]
fn cli_steady_on_writes_255() {
    let root = led_root();
    cli_in(root.path())
        .args(["steady", "green", "on"])
        .assert()
        .success();
    assert_eq!(read(root.path(), "green", "brightness").as_deref(), Some("255"));
    assert_eq!(read(root.path(), "red", "brightness"), None);
}

#[test]
fn cli_steady_off_writes_0() {
    let root = led_root();
    cli_in(root.path())
        .args(["steady", "RED", "off"])
        .assert()
        .success();
    assert_eq!(read(root.path(), "red", "brightness").as_deref(), Some("0"));
}

#[test]
fn cli_steady_missing_led_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    cli_in(dir.path())
        .args(["steady", "blue", "on"])
        .assert()
        .success()
        .stderr(predicate::str::contains("failed to write"));
}

#[test]
fn cli_steady_unknown_color_fails() {
    let root = led_root();
    cli_in(root.path())
        .args(["steady", "purple", "on"])
        .assert()
        .failure();
}

// ── blink ──

#[test]
fn cli_blink_writes_trigger_and_delays() {
    let root = led_root();
    cli_in(root.path())
        .args(["blink", "blue", "--on-ms", "50", "--off-ms", "50"])
        .assert()
        .success();
    assert_eq!(read(root.path(), "blue", "trigger").as_deref(), Some("timer"));
    assert_eq!(read(root.path(), "blue", "delay_on").as_deref(), Some("50"));
    assert_eq!(read(root.path(), "blue", "delay_off").as_deref(), Some("50"));
}

#[test]
fn cli_blink_stop_leaves_delay_off() {
    let root = led_root();
    std::fs::write(root.path().join("red").join("delay_off"), "800").unwrap();
    cli_in(root.path())
        .args(["blink", "red", "--stop"])
        .assert()
        .success();
    assert_eq!(read(root.path(), "red", "trigger").as_deref(), Some("timer"));
    assert_eq!(read(root.path(), "red", "delay_on").as_deref(), Some("0"));
    assert_eq!(read(root.path(), "red", "delay_off").as_deref(), Some("800"));
}

#[test]
fn cli_blink_negative_delay_passed_through() {
    let root = led_root();
    cli_in(root.path())
        .args(["blink", "green", "--on-ms", "-5", "--off-ms", "10"])
        .assert()
        .success();
    assert_eq!(read(root.path(), "green", "delay_on").as_deref(), Some("-5"));
}

#[test]
fn cli_blink_defaults_from_config() {
    let root = led_root();
    let config = root.path().join("config.toml");
    std::fs::write(&config, "blink_on_ms = 100\nblink_off_ms = 200\n").unwrap();
    cli()
        .arg("--root")
        .arg(root.path())
        .arg("--config")
        .arg(&config)
        .args(["blink", "red"])
        .assert()
        .success();
    assert_eq!(read(root.path(), "red", "delay_on").as_deref(), Some("100"));
    assert_eq!(read(root.path(), "red", "delay_off").as_deref(), Some("200"));
}

#[test]
fn cli_sysfs_root_from_config() {
    let root = led_root();
    let config = root.path().join("config.toml");
    std::fs::write(
        &config,
        format!("sysfs_root = {:?}\n", root.path().display().to_string()),
    )
    .unwrap();
    cli()
        .arg("--config")
        .arg(&config)
        .args(["steady", "blue", "on"])
        .assert()
        .success();
    assert_eq!(read(root.path(), "blue", "brightness").as_deref(), Some("255"));
}

#[test]
fn cli_relative_config_root_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "sysfs_root = \"leds\"\n").unwrap();
    cli()
        .arg("--config")
        .arg(&config)
        .args(["steady", "blue", "on"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

// ── status ──

#[test]
fn cli_status_json_reports_each_led() {
    let root = led_root();
    cli_in(root.path())
        .args(["steady", "red", "on"])
        .assert()
        .success();

    let output = cli_in(root.path())
        .args(["--json", "status"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("status --json should produce valid JSON");
    let leds = json["leds"].as_array().unwrap();
    assert_eq!(leds.len(), 3);
    assert_eq!(leds[0]["color"], "red");
    assert_eq!(leds[0]["status"]["brightness"], 255);
    assert!(leds[1]["status"].is_null());
    assert!(leds[1]["error"].is_string());
}

#[test]
fn cli_status_single_color_text() {
    let root = led_root();
    std::fs::write(root.path().join("blue").join("brightness"), "0\n").unwrap();
    std::fs::write(root.path().join("blue").join("trigger"), "none [timer]\n").unwrap();
    cli_in(root.path())
        .args(["status", "blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blue:"))
        .stdout(predicate::str::contains("timer"))
        .stdout(predicate::str::contains("red:").not());
}

// ── config ──

#[test]
fn cli_config_json_produces_valid_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli()
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .args(["--json", "config"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("config --json should produce valid JSON");
    assert!(json["settings"].is_object());
    assert_eq!(json["settings"]["sysfs_root"], "/sys/class/leds");
    assert_eq!(json["config_file_exists"], false);
}

#[test]
fn cli_verbose_flag_accepted() {
    let dir = tempfile::tempdir().unwrap();
    cli()
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .args(["-v", "config"])
        .assert()
        .success();
}

#[test]
fn cli_verbose_logs_each_write() {
    let root = led_root();
    cli_in(root.path())
        .args(["-v", "steady", "red", "on"])
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote \"255\""));
}

// ── config --init ──

#[test]
fn cli_config_init_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("sub").join("config.toml");
    cli()
        .arg("--config")
        .arg(&config)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let text = std::fs::read_to_string(&config).unwrap();
    assert!(text.contains("sysfs_root = \"/sys/class/leds\""));
    assert!(text.contains("blink_on_ms = 500"));
}

#[test]
fn cli_config_init_records_root() {
    let root = led_root();
    let config = root.path().join("config.toml");
    cli()
        .arg("--root")
        .arg(root.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "--init"])
        .assert()
        .success();

    // The saved root is picked up without --root.
    cli()
        .arg("--config")
        .arg(&config)
        .args(["steady", "green", "on"])
        .assert()
        .success();
    assert_eq!(read(root.path(), "green", "brightness").as_deref(), Some("255"));
}

#[test]
fn cli_config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "blink_on_ms = 42\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    assert_eq!(std::fs::read_to_string(&config).unwrap(), "blink_on_ms = 42\n");

    cli()
        .arg("--config")
        .arg(&config)
        .args(["config", "--init", "--force"])
        .assert()
        .success();
    assert!(std::fs::read_to_string(&config).unwrap().contains("blink_on_ms = 500"));
}

#[test]
fn cli_config_force_requires_init() {
    let dir = tempfile::tempdir().unwrap();
    cli()
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .args(["config", "--force"])
        .assert()
        .failure();
}

// ── alignment ──

#[test]
fn cli_status_values_share_a_column() {
    let root = led_root();
    std::fs::write(root.path().join("red").join("brightness"), "255\n").unwrap();
    let output = cli_in(root.path())
        .args(["status", "red"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();

    let root_line = text.lines().find(|l| l.starts_with("Root:")).unwrap();
    let bright_line = text.lines().find(|l| l.contains("brightness:")).unwrap();
    let root_col = root_line.len() - root_line["Root:".len()..].trim_start().len();
    let bright_col = bright_line.find("255").unwrap();
    assert_eq!(root_col, bright_col);
}
