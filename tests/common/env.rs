//! Test environment builder for isolated wasmship testing.
//!
//! Provides `TestEnv` - a temp project directory with shell-script stand-ins
//! for the toolchain and the deploy tool. Each fake appends its argv to a
//! shared call log and exits with a scripted code.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::CONTRACT_MANIFEST;

/// Result of running a wasmship CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {line}"))
            })
            .collect()
    }
}

/// Isolated project with fake tools
pub struct TestEnv {
    pub project_root: TempDir,
    wasmship_bin: PathBuf,
}

impl TestEnv {
    /// Project with a contract manifest and no config
    pub fn new() -> Self {
        let env = Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            wasmship_bin: PathBuf::from(env!("CARGO_BIN_EXE_wasmship")),
        };
        env.write_project_file("Cargo.toml", CONTRACT_MANIFEST);
        env
    }

    /// Project whose build and deploy fakes exit with the given codes.
    ///
    /// `extra_config` is appended to the generated `wasmship.toml`.
    pub fn with_tools(build_code: i32, deploy_code: i32, extra_config: &str) -> Self {
        let env = Self::new();
        let cargo = env.fake_tool("cargo", build_code);
        let near = env.fake_tool("near", deploy_code);
        env.write_project_file(
            "wasmship.toml",
            &format!(
                "[build]\nprogram = '{}'\n\n[deploy]\nprogram = '{}'\n{}",
                cargo.display(),
                near.display(),
                extra_config
            ),
        );
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write an executable script that logs its argv and exits with `code`
    pub fn fake_tool(&self, name: &str, code: i32) -> PathBuf {
        let path = self.project_path(&format!("fake-bin/{}", name));
        let log = self.call_log_path();
        let script = format!(
            "#!/bin/sh\necho \"{} $* RUSTFLAGS=$RUSTFLAGS\" >> '{}'\nexit {}\n",
            name,
            log.display(),
            code
        );
        self.write_project_file(&format!("fake-bin/{}", name), &script);
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    pub fn call_log_path(&self) -> PathBuf {
        self.project_path("calls.log")
    }

    /// Lines appended by the fake tools, in invocation order
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.call_log_path())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Run wasmship in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run wasmship with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.wasmship_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("WASMSHIP_USER_CONFIG", self.project_path("no-user-config.toml"))
            .env_remove("WASMSHIP_ACCOUNT")
            .env_remove("WASMSHIP_BUILD_PROGRAM")
            .env_remove("WASMSHIP_DEPLOY_PROGRAM")
            .env_remove("WASMSHIP_PROFILE")
            .env_remove("WASMSHIP_TARGET_TRIPLE")
            .env_remove("CARGO_TARGET_DIR")
            .env_remove("RUSTFLAGS")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute wasmship");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
