//! Typed argument builders for the two `patch` invocations.
//!
//! The structs here are the single source of truth for the argv handed to
//! the external tool. The probe and the apply share most of their flags and
//! differ only in `--reverse --dry-run` vs `--batch --reject-file=-`;
//! keeping both as typed builders means the compiler catches flag drift
//! between them.
//!
//! Arguments go straight to `exec` without a shell, so no quoting layer
//! exists and `--backup` / `--version-control=numbered` are two separate
//! argv entries.

use std::path::PathBuf;

use crate::params::PatchTask;

/// Trait for typed `patch` invocations.
///
/// Implementors produce the argv tail passed to the `patch` executable,
/// in order.
pub trait PatchArgs {
    fn to_cli_args(&self) -> Vec<String>;
}

/// Reverse dry-run probe.
///
/// Exit 0 means every hunk reverses cleanly, i.e. the patch is already
/// applied and the run is a no-op.
#[derive(Debug, Clone)]
pub struct ProbeArgs {
    /// Absolute path of the patch file.
    pub input: PathBuf,
    /// Directory `patch` changes into before applying.
    pub basedir: PathBuf,
    /// Single target file, when pinned.
    pub dest: Option<PathBuf>,
    /// Prefix components stripped from file names in the patch.
    pub strip: u32,
    /// Disable the CRLF-to-LF heuristic.
    pub binary: bool,
}

impl ProbeArgs {
    pub fn from_task(task: &PatchTask) -> Self {
        Self {
            input: task.src.clone(),
            basedir: task.basedir.clone(),
            dest: task.dest.clone(),
            strip: task.strip,
            binary: task.binary,
        }
    }
}

impl PatchArgs for ProbeArgs {
    fn to_cli_args(&self) -> Vec<String> {
        let mut args = vec![
            "--quiet".to_string(),
            "--reverse".to_string(),
            "--forward".to_string(),
            "--dry-run".to_string(),
            format!("--strip={}", self.strip),
            format!("--directory={}", self.basedir.display()),
            format!("--input={}", self.input.display()),
        ];
        if self.binary {
            args.push("--binary".to_string());
        }
        if let Some(ref dest) = self.dest {
            args.push(dest.display().to_string());
        }
        args
    }
}

/// Forward apply.
///
/// `--batch` suppresses interactive prompts and `--reject-file=-` sends
/// reject hunks to stderr instead of littering `.rej` files, so a failed
/// apply surfaces its diagnostics in the captured output.
#[derive(Debug, Clone)]
pub struct ApplyArgs {
    /// Absolute path of the patch file.
    pub input: PathBuf,
    /// Directory `patch` changes into before applying.
    pub basedir: PathBuf,
    /// Single target file, when pinned.
    pub dest: Option<PathBuf>,
    /// Prefix components stripped from file names in the patch.
    pub strip: u32,
    /// Disable the CRLF-to-LF heuristic.
    pub binary: bool,
    /// Keep numbered backup copies of patched files.
    pub backup: bool,
    /// Preview only, leave the target untouched.
    pub dry_run: bool,
}

impl ApplyArgs {
    pub fn from_task(task: &PatchTask, dry_run: bool) -> Self {
        Self {
            input: task.src.clone(),
            basedir: task.basedir.clone(),
            dest: task.dest.clone(),
            strip: task.strip,
            binary: task.binary,
            backup: task.backup,
            dry_run,
        }
    }
}

impl PatchArgs for ApplyArgs {
    fn to_cli_args(&self) -> Vec<String> {
        let mut args = vec![
            "--quiet".to_string(),
            "--forward".to_string(),
            "--batch".to_string(),
            "--reject-file=-".to_string(),
            format!("--strip={}", self.strip),
            format!("--directory={}", self.basedir.display()),
            format!("--input={}", self.input.display()),
        ];
        if self.dry_run {
            args.push("--dry-run".to_string());
        }
        if self.binary {
            args.push("--binary".to_string());
        }
        if let Some(ref dest) = self.dest {
            args.push(dest.display().to_string());
        }
        if self.backup {
            args.push("--backup".to_string());
            args.push("--version-control=numbered".to_string());
        }
        args
    }
}
