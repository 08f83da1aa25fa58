//! Patchup library
//!
//! Applies patch files with the GNU `patch` tool, idempotently: a reverse
//! dry-run first checks whether the patch is already present in the target,
//! and the forward apply only runs when it is not.

pub mod apply;
pub mod cli;
pub mod error;
pub mod invocation;
pub mod params;
pub mod report;
pub mod runner;

// Re-export main types for convenience
pub use apply::{apply_patch, is_already_applied, run, Outcome};
pub use cli::Cli;
pub use error::{PatchupError, Result};
pub use invocation::{ApplyArgs, PatchArgs, ProbeArgs};
pub use params::PatchTask;
pub use report::PatchReport;
pub use runner::{find_patch_bin, run_patch, PatchOutput};
