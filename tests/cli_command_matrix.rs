use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

fn run_help(mut cmd: Command, home: &TempDir) {
    cmd.env("HOME", home.path()).arg("--help").assert().success();
}

#[test]
fn every_binary_has_help_path() {
    let home = TempDir::new().expect("temp home");

    run_help(cargo_bin_cmd!("podkit-cleanup"), &home);
    run_help(cargo_bin_cmd!("podkit-strip-word"), &home);
    run_help(cargo_bin_cmd!("podkit-add-text"), &home);
}

#[test]
fn every_binary_reports_version() {
    for mut cmd in [
        cargo_bin_cmd!("podkit-cleanup"),
        cargo_bin_cmd!("podkit-strip-word"),
        cargo_bin_cmd!("podkit-add-text"),
    ] {
        cmd.arg("--version").assert().success();
    }
}
