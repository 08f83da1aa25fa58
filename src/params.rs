//! Parameter validation and task construction.
//!
//! Turns raw CLI options into a `PatchTask` whose paths have already been
//! checked: the patch source is readable, the destination is writable, the
//! base directory exists. Validation happens in this fixed order so every
//! failure is reported before any external process is spawned.

use std::path::{Path, PathBuf};

use nix::unistd::{access, AccessFlags};

use crate::cli::Cli;
use crate::error::{PatchupError, Result};

/// A fully validated patch application task.
#[derive(Debug, Clone)]
pub struct PatchTask {
    /// Absolute path of the patch file.
    pub src: PathBuf,
    /// Single target file, when pinned by the caller.
    pub dest: Option<PathBuf>,
    /// Directory `patch` changes into before applying.
    pub basedir: PathBuf,
    /// Prefix components stripped from file names in the patch.
    pub strip: u32,
    /// Keep numbered backup copies.
    pub backup: bool,
    /// Disable the CRLF-to-LF heuristic.
    pub binary: bool,
}

/// Expand a leading `~` component using `$HOME`, like a shell would.
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    path.to_path_buf()
}

fn is_readable(path: &Path) -> bool {
    access(path, AccessFlags::R_OK).is_ok()
}

fn is_writable(path: &Path) -> bool {
    access(path, AccessFlags::W_OK).is_ok()
}

impl PatchTask {
    /// Validate CLI parameters and build a task.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let src = expand_tilde(&cli.src);
        if !is_readable(&src) {
            return Err(PatchupError::SrcUnreadable(src));
        }

        if let Some(dest) = &cli.dest {
            if !is_writable(dest) {
                return Err(PatchupError::DestUnwritable(dest.clone()));
            }
        }

        if let Some(basedir) = &cli.basedir {
            if !basedir.exists() {
                return Err(PatchupError::BasedirMissing(basedir.clone()));
            }
        }

        let basedir = match &cli.basedir {
            Some(dir) => dir.clone(),
            // The CLI arg group guarantees dest is present here.
            None => cli
                .dest
                .as_ref()
                .and_then(|d| d.parent())
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        };

        // patch runs with --directory changed, so the input path must be
        // absolute or it would be resolved relative to basedir.
        let src = if src.is_absolute() {
            src
        } else {
            std::env::current_dir()?.join(src)
        };

        Ok(Self {
            src,
            dest: cli.dest.clone(),
            basedir,
            strip: cli.strip,
            backup: cli.backup,
            binary: cli.binary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn cli_from(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_missing_src_fails_fast() {
        let cli = cli_from(&[
            "patchup",
            "--src",
            "/nonexistent/fix.patch",
            "--basedir",
            "/tmp",
        ]);
        let err = PatchTask::from_cli(&cli).unwrap_err();
        assert!(matches!(err, PatchupError::SrcUnreadable(_)));
    }

    #[test]
    fn test_missing_dest_fails() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("fix.patch");
        fs::write(&src, "--- a\n+++ b\n").unwrap();

        let cli = cli_from(&[
            "patchup",
            "--src",
            src.to_str().unwrap(),
            "--dest",
            "/nonexistent/target.txt",
        ]);
        let err = PatchTask::from_cli(&cli).unwrap_err();
        assert!(matches!(err, PatchupError::DestUnwritable(_)));
    }

    #[test]
    fn test_missing_basedir_fails() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("fix.patch");
        fs::write(&src, "--- a\n+++ b\n").unwrap();

        let cli = cli_from(&[
            "patchup",
            "--src",
            src.to_str().unwrap(),
            "--basedir",
            "/nonexistent/tree",
        ]);
        let err = PatchTask::from_cli(&cli).unwrap_err();
        assert!(matches!(err, PatchupError::BasedirMissing(_)));
    }

    #[test]
    fn test_basedir_defaults_to_dest_parent() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("fix.patch");
        let dest = dir.path().join("target.txt");
        fs::write(&src, "--- a\n+++ b\n").unwrap();
        fs::write(&dest, "hello\n").unwrap();

        let cli = cli_from(&[
            "patchup",
            "--src",
            src.to_str().unwrap(),
            "--dest",
            dest.to_str().unwrap(),
        ]);
        let task = PatchTask::from_cli(&cli).unwrap();
        assert_eq!(task.basedir, dir.path());
        assert!(task.src.is_absolute());
    }

    #[test]
    fn test_explicit_basedir_wins() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("fix.patch");
        fs::write(&src, "--- a\n+++ b\n").unwrap();

        let cli = cli_from(&[
            "patchup",
            "--src",
            src.to_str().unwrap(),
            "--basedir",
            dir.path().to_str().unwrap(),
            "--strip",
            "1",
        ]);
        let task = PatchTask::from_cli(&cli).unwrap();
        assert_eq!(task.basedir, dir.path());
        assert_eq!(task.strip, 1);
        assert!(task.dest.is_none());
    }

    #[test]
    fn test_expand_tilde() {
        let home = std::env::var_os("HOME");
        if let Some(home) = home {
            let expanded = expand_tilde(Path::new("~/fix.patch"));
            assert_eq!(expanded, PathBuf::from(home).join("fix.patch"));
        }
        // Paths without a leading tilde pass through untouched.
        let plain = expand_tilde(Path::new("/tmp/fix.patch"));
        assert_eq!(plain, PathBuf::from("/tmp/fix.patch"));
    }
}
