#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn admin_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("lumore-admin"));
    cmd.env("LUMORE_HOME", home.path())
        .env_remove("LUMORE_API_URL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_fields_lists_catalog() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("minAge"))
        .stdout(predicate::str::contains("Interests (Any)"))
        .stdout(predicate::str::contains("boolean"));
}

#[test]
fn test_filter_prints_query_params_in_order() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .args([
            "filter",
            "-f",
            "minAge=18",
            "-f",
            "interests=music, travel,  ",
            "-f",
            "isVerified=true",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filters (3):"))
        .stdout(predicate::str::contains("music, travel"))
        .stdout(predicate::str::is_match(r"(?s)minAge=18.*interests=music,travel.*isVerified=true").unwrap());
}

#[test]
fn test_filter_reports_rejected_values_and_keeps_the_rest() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .args(["filter", "-f", "minAge=abc", "-f", "isVerified=yes", "-f", "gender=female"])
        .assert()
        .success()
        .stderr(predicate::str::contains("minAge: Number value is invalid"))
        .stderr(predicate::str::contains("isVerified: Boolean value must be true or false"))
        .stdout(predicate::str::contains("Filters (1):"))
        .stdout(predicate::str::contains("gender=female"))
        .stdout(predicate::str::contains("minAge=").not());
}

#[test]
fn test_filter_rejects_missing_key() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .args(["filter", "-f", "=x", "-f", " =y", "-f", "gender=male"])
        .assert()
        .success()
        .stderr(predicate::str::contains("filter key is required"))
        .stdout(predicate::str::contains("Filters (1):"))
        .stdout(predicate::str::contains("gender=male"))
        .stdout(predicate::str::contains("\n  =").not());
}

#[test]
fn test_filter_json_uses_native_values() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .args(["filter", "--json", "-f", "minAge=18", "-f", "isVerified=false"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""minAge": 18"#))
        .stdout(predicate::str::contains(r#""isVerified": false"#));
}

#[test]
fn test_filter_later_value_wins() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .args(["filter", "-f", "minAge=18", "-f", "minAge=21"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filters (1):"))
        .stdout(predicate::str::contains("minAge=21"));
}

#[test]
fn test_empty_filter_set() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .arg("filter")
        .assert()
        .success()
        .stdout(predicate::str::contains("No filters applied."));
}

#[test]
fn test_recipients_split_ids_and_usernames() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .args(["recipients", "650000000000000000000001, alice\nbob,alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User ids (1):"))
        .stdout(predicate::str::contains("Usernames (2):"));
}

#[test]
fn test_recipients_from_stdin() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .arg("recipients")
        .write_stdin("carol\ndave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usernames (2):"))
        .stdout(predicate::str::contains("dave"));
}

#[test]
fn test_session_lifecycle() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .args(["session", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No session saved."));

    admin_cmd(&home)
        .args([
            "session",
            "save",
            "--token",
            "abcdefghijklmnop",
            "--username",
            "ops",
            "--user-id",
            "650000000000000000000001",
            "--admin",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session saved for ops."));

    let stored = fs::read_to_string(home.path().join("session.json")).unwrap();
    assert!(stored.contains(r#""accessToken": "abcdefghijklmnop""#));
    assert!(stored.contains(r#""_id": "650000000000000000000001""#));

    admin_cmd(&home)
        .args(["session", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as ops (admin)"))
        .stdout(predicate::str::contains("abcdef…"))
        .stdout(predicate::str::contains("abcdefghijklmnop").not());

    admin_cmd(&home)
        .args(["session", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session cleared."));

    assert!(!home.path().join("session.json").exists());
}

#[test]
fn test_session_save_rejects_blank_token() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .args(["session", "save", "--token", " ", "--username", "ops", "--user-id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_config_set_and_get() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api-url = http://localhost:5000/api"))
        .stdout(predicate::str::contains("page-limit = 20"));

    admin_cmd(&home)
        .args(["config", "page-limit", "50"])
        .assert()
        .success();

    admin_cmd(&home)
        .args(["config", "page-limit"])
        .assert()
        .success()
        .stdout(predicate::str::diff("50\n"));
}

#[test]
fn test_config_env_override() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .env("LUMORE_API_URL", "https://admin.lumore.app/api/")
        .args(["config", "api-url"])
        .assert()
        .success()
        .stdout(predicate::str::diff("https://admin.lumore.app/api\n"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = TempDir::new().unwrap();

    admin_cmd(&home)
        .args(["config", "theme", "dark"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown key 'theme'"));
}
