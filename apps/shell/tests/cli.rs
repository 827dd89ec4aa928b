use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

fn licsel(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("licsel").unwrap();
    cmd.current_dir(dir.path()).env("CSTUDIO__LOG__LEVEL", "warn");
    cmd
}

#[test]
fn catalog_lists_builtin_types() {
    let dir = tempdir().unwrap();
    licsel(&dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("all-rights-reserved  All Rights Reserved"))
        .stdout(predicate::str::contains("conflicts with SA"));
}

#[test]
fn apply_reports_conflict_then_succeeds() {
    let dir = tempdir().unwrap();
    licsel(&dir)
        .args(["apply", "type=creative-commons", "toggle=SA", "toggle=ND", "toggle=SA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("toggle=SA: rejected, option 'SA' conflicts with ND"))
        .stdout(predicate::str::ends_with("creative-commons: BY NC SA ver=4.0\n"));
}

#[test]
fn apply_fails_on_unknown_option() {
    let dir = tempdir().unwrap();
    licsel(&dir)
        .args(["apply", "type=creative-commons", "toggle=PD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'toggle=PD' failed"));
}

#[test]
fn malformed_action_is_a_usage_error() {
    let dir = tempdir().unwrap();
    licsel(&dir)
        .args(["apply", "flip=ND"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown action 'flip'"));
}

#[test]
fn parse_renders_preview() {
    let dir = tempdir().unwrap();
    licsel(&dir)
        .args(["--preview", "parse", "creative-commons: BY SA"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("creative-commons: BY SA ver=4.0\n"))
        .stdout(predicate::str::contains("  [ ] ND   No Derivatives"));
}

#[test]
fn parse_rejects_conflicting_notation() {
    let dir = tempdir().unwrap();
    licsel(&dir)
        .args(["parse", "creative-commons: ND SA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid license notation"));
}

#[test]
fn config_file_and_custom_catalog() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("licenses.json"),
        r#"{
            "types": {
                "campus-only": {
                    "displayName": "Campus Only",
                    "tooltip": "Visible to enrolled students",
                    "options": {
                        "print": {
                            "displayName": "Printing",
                            "valueType": "boolean",
                            "defaultValue": false
                        }
                    }
                }
            }
        }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("settings.toml"),
        "catalog = \"licenses.json\"\ninitial_type = \"campus-only\"\n",
    )
    .unwrap();

    licsel(&dir)
        .args(["--config", "settings.toml", "apply", "toggle=print"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("campus-only: print\n"));
}

#[test]
fn missing_catalog_file_fails() {
    let dir = tempdir().unwrap();
    licsel(&dir)
        .args(["--catalog", "absent.json", "catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot use catalog absent.json"));
}
