//! The apply procedure.
//!
//! A linear pipeline over one validated `PatchTask`: probe the target with
//! a reverse dry-run, and only run the forward apply when the patch is not
//! already present. Re-running on an already-patched target is a no-op.

use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::invocation::{ApplyArgs, ProbeArgs};
use crate::params::PatchTask;
use crate::runner::run_patch;

/// Result of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The patch was applied (or would be, under dry-run).
    Changed,
    /// The patch was already present in the target.
    Unchanged,
}

impl Outcome {
    pub fn changed(self) -> bool {
        matches!(self, Outcome::Changed)
    }
}

/// Probe whether the patch is already applied.
///
/// Runs `patch --reverse --dry-run`; exit 0 means every hunk reverses
/// cleanly, which is only the case when the patch is already in place.
pub fn is_already_applied(patch_bin: &Path, task: &PatchTask) -> Result<bool> {
    let probe = ProbeArgs::from_task(task);
    let output = run_patch(patch_bin, &probe)?;
    debug!(
        "idempotency probe for {} exited {:?}",
        task.src.display(),
        output.exit_code
    );
    Ok(output.success)
}

/// Run the forward apply.
///
/// A non-zero exit surfaces the tool's own diagnostic text verbatim as
/// `PatchupError::ApplyFailed`.
pub fn apply_patch(patch_bin: &Path, task: &PatchTask, dry_run: bool) -> Result<()> {
    let args = ApplyArgs::from_task(task, dry_run);
    let output = run_patch(patch_bin, &args)?;
    output.ensure_success()
}

/// The whole procedure: probe, then apply if needed.
pub fn run(patch_bin: &Path, task: &PatchTask, dry_run: bool) -> Result<Outcome> {
    if is_already_applied(patch_bin, task)? {
        info!("{} already applied, nothing to do", task.src.display());
        return Ok(Outcome::Unchanged);
    }

    apply_patch(patch_bin, task, dry_run)?;
    if dry_run {
        info!("{} would apply cleanly (dry run)", task.src.display());
    } else {
        info!("{} applied", task.src.display());
    }
    Ok(Outcome::Changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_changed() {
        assert!(Outcome::Changed.changed());
        assert!(!Outcome::Unchanged.changed());
    }
}
