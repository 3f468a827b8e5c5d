#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use filetime::FileTime;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
    pub outputs: PathBuf,
    pub config: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        let outputs = tmp.path().join("outputs");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");

        let config = tmp.path().join("cleanup.toml");
        write_config(&config, &[&outputs, &tmp.path().join("missing")]);

        Self {
            _tmp: tmp,
            home,
            work,
            outputs,
            config,
        }
    }

    pub fn cmd(&self, bin: &str) -> Command {
        let mut cmd = match bin {
            "podkit-cleanup" => cargo_bin_cmd!("podkit-cleanup"),
            "podkit-strip-word" => cargo_bin_cmd!("podkit-strip-word"),
            "podkit-add-text" => cargo_bin_cmd!("podkit-add-text"),
            other => panic!("unknown binary {other}"),
        };
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.work);
        cmd
    }

    /// `podkit-cleanup` pinned to this env's config (GPU off, temp scan dirs).
    pub fn cleanup(&self) -> Command {
        let mut cmd = self.cmd("podkit-cleanup");
        cmd.arg("--config").arg(&self.config);
        cmd
    }

    pub fn cleanup_json(&self, mode: &str, expect_success: bool) -> Value {
        let mut cmd = self.cleanup();
        let assert = cmd.args(["--json", "--mode", mode]).assert();
        let assert = if expect_success {
            assert.success()
        } else {
            assert.code(1)
        };
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json output")
    }

    pub fn text_json(&self, bin: &str, args: &[&str]) -> Value {
        let out = self
            .cmd(bin)
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn work_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work.join(name);
        fs::write(&path, content).expect("write work file");
        path
    }
}

pub fn write_config(path: &Path, scan_dirs: &[&Path]) {
    let dirs: Vec<String> = scan_dirs
        .iter()
        .map(|d| format!("{:?}", d.to_string_lossy()))
        .collect();
    fs::write(
        path,
        format!(
            "[files]\nscan_dirs = [{}]\n\n[gpu]\nbackend = \"none\"\n",
            dirs.join(", ")
        ),
    )
    .expect("write config");
}

pub fn write_aged(path: &Path, age: Duration) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, b"png").expect("write image");
    let when = FileTime::from_system_time(SystemTime::now() - age);
    filetime::set_file_mtime(path, when).expect("set mtime");
}
