mod common;
use common::rpb;

use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Create a unique config file path inside the system temp dir
fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpassbook.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

#[test]
fn test_help_lists_subcommands() {
    rpb()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("print"))
        .stdout(contains("printers"))
        .stdout(contains("ruler"))
        .stdout(contains("next-page"))
        .stdout(contains("align"));
}

#[test]
fn test_init_writes_config_file() {
    let cfg_path = setup_test_config("init_writes_config");

    rpb()
        .args(["--config", &cfg_path, "init"])
        .assert()
        .success();

    let content = fs::read_to_string(&cfg_path).expect("read config file");
    assert!(content.contains("api_base_url"));
    assert!(content.contains("spooler_url"));
    assert!(content.contains("header_lines"));
}

#[test]
fn test_config_print_shows_current_values() {
    let cfg_path = setup_test_config("config_print");

    rpb()
        .args(["--config", &cfg_path, "init"])
        .assert()
        .success();

    rpb()
        .args(["--config", &cfg_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("spooler_url"))
        .stdout(contains("lines_per_page"));
}

#[test]
fn test_config_check_accepts_defaults() {
    let cfg_path = setup_test_config("config_check_defaults");

    rpb()
        .args(["--config", &cfg_path, "init"])
        .assert()
        .success();

    rpb()
        .args(["--config", &cfg_path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));
}

#[test]
fn test_config_check_rejects_bad_line_spacing() {
    let cfg_path = setup_test_config("config_check_bad_spacing");
    fs::write(&cfg_path, "line_spacing: 0\n").expect("write config");

    rpb()
        .args(["--config", &cfg_path, "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("line_spacing"));
}

#[test]
fn test_print_rejects_unknown_driver() {
    rpb()
        .args(["print", "acc-1", "--driver", "laser"])
        .assert()
        .failure();
}

#[test]
fn test_align_requires_a_direction() {
    let cfg_path = setup_test_config("align_requires_direction");

    rpb()
        .args(["--config", &cfg_path, "align"])
        .assert()
        .failure()
        .stderr(contains("--forward or --reverse"));
}
