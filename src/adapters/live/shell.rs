//! Live process executor using `std::process::Command`.

use std::process::Command;

use crate::ports::{PortError, ShellExecutor, ShellOutput};

/// Live executor that spawns programs directly.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<ShellOutput, PortError> {
        tracing::debug!(program, ?args, "spawning process");
        let output = Command::new(program).args(args).output()?;
        Ok(ShellOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
