//! Test driver: runs the `optdump` binary as a child process and captures
//! what it printed.

use std::collections::BTreeMap;
use std::process::Command;

/// Output captured from a completed run.
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    /// `key: value` lines of stdout, as printed for a successful parse.
    pub fn fields(&self) -> BTreeMap<String, String> {
        self.stdout
            .lines()
            .filter_map(|line| line.split_once(": "))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Value of one field; panics if the field was not printed.
    pub fn field(&self, key: &str) -> String {
        match self.fields().remove(key) {
            Some(v) => v,
            None => panic!("no field {key:?} in stdout:\n{}", self.stdout),
        }
    }
}

/// Run `binary` with `args` and `env`, wait for it, and check the exit code.
pub fn run(binary: &str, args: &[&str], env: &[(&str, &str)], expected_code: i32) -> RunOutput {
    let mut cmd = Command::new(binary);
    cmd.args(args).env_remove("RUST_LOG");
    for (k, v) in env {
        cmd.env(k, v);
    }
    let output = cmd.output().expect("failed to spawn binary");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    assert_eq!(
        code, expected_code,
        "expected exit code {expected_code}, got {code}\nargs: {args:?}\nstdout:\n{stdout}\nstderr:\n{stderr}"
    );

    RunOutput {
        stdout,
        stderr,
    }
}
