//! Process executor port for running external commands.

use super::PortError;

/// The output of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOutput {
    /// The exit code of the process.
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl ShellOutput {
    /// Returns `true` when the process exited with status zero.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs external programs.
///
/// Arguments are passed to the program directly, without a shell in
/// between, so titles and bodies never need quoting.
pub trait ShellExecutor: Send + Sync {
    /// Runs `program` with `args` and returns its captured output.
    ///
    /// A non-zero exit code is not an error at this layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned.
    fn run(&self, program: &str, args: &[&str]) -> Result<ShellOutput, PortError>;
}
