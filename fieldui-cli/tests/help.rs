use assert_cmd::cargo::{self};
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("fieldui");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("--field"));
}

#[test]
fn requires_a_field() {
    let mut cmd = cargo::cargo_bin_cmd!("fieldui");
    cmd.assert().failure().stderr(contains("--field"));
}

#[test]
fn rejects_malformed_descriptor_before_opening_the_ui() {
    let mut cmd = cargo::cargo_bin_cmd!("fieldui");
    cmd.args(["--field", r#"{"id": "", "type": "text"}"#])
        .assert()
        .failure()
        .stderr(contains("empty id"));
}
