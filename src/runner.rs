//! External `patch` execution.
//!
//! One synchronous invocation per call: spawn the tool, wait, and fold the
//! captured stdout/stderr and exit status into a `PatchOutput`. The exact
//! command line is logged before every spawn.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use nix::unistd::{access, AccessFlags};
use tracing::{debug, info};

use crate::error::{PatchupError, Result};
use crate::invocation::PatchArgs;

/// Locate the `patch` executable by walking `PATH`.
pub fn find_patch_bin() -> Result<PathBuf> {
    let path = env::var_os("PATH").unwrap_or_default();
    for dir in env::split_paths(&path) {
        let candidate = dir.join("patch");
        if candidate.is_file() && access(&candidate, AccessFlags::X_OK).is_ok() {
            return Ok(candidate);
        }
    }
    Err(PatchupError::PatchBinMissing)
}

/// Output from one `patch` invocation.
#[derive(Debug, Clone)]
pub struct PatchOutput {
    /// Standard output from the tool.
    pub stdout: String,
    /// Standard error from the tool.
    pub stderr: String,
    /// Exit code (None if terminated by signal).
    pub exit_code: Option<i32>,
    /// Whether the tool exited successfully (exit code 0).
    pub success: bool,
}

impl PatchOutput {
    /// The tool's diagnostic text: stderr if it wrote one, stdout otherwise.
    pub fn error_text(&self) -> &str {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim()
        } else {
            stderr
        }
    }

    /// Check that the invocation succeeded and return an error if not.
    pub fn ensure_success(&self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(PatchupError::apply_failed(
                self.exit_code.unwrap_or(-1),
                self.error_text(),
            ))
        }
    }
}

/// Execute one `patch` invocation with the given typed arguments.
pub fn run_patch<T: PatchArgs>(patch_bin: &Path, args: &T) -> Result<PatchOutput> {
    let cli_args = args.to_cli_args();

    info!("running {} {:?}", patch_bin.display(), cli_args);

    let output = Command::new(patch_bin).args(&cli_args).output()?;

    let result = PatchOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code(),
        success: output.status.success(),
    };
    debug!("patch exited with code {:?}", result.exit_code);

    Ok(result)
}
