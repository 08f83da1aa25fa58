//! Error handling module for patchup
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All fatal conditions the tool can hit map to one variant each, and every
//! validation failure is reported before any external process is spawned.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for patchup
#[derive(Error, Debug)]
pub enum PatchupError {
    /// The patch source file is missing or not readable
    #[error("src {} doesn't exist or not readable", .0.display())]
    SrcUnreadable(PathBuf),

    /// The destination file is missing or not writable
    #[error("dest {} doesn't exist or not writable", .0.display())]
    DestUnwritable(PathBuf),

    /// The base directory does not exist
    #[error("basedir {} doesn't exist", .0.display())]
    BasedirMissing(PathBuf),

    /// The `patch` executable was not found on PATH
    #[error("patch command not found")]
    PatchBinMissing,

    /// The forward apply exited non-zero; `msg` is the tool's own output
    #[error("{msg}")]
    ApplyFailed { code: i32, msg: String },

    /// IO errors (spawning the process, resolving paths)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for patchup operations
pub type Result<T> = std::result::Result<T, PatchupError>;

impl PatchupError {
    /// Create an apply-failure error carrying the external tool's message
    pub fn apply_failed(code: i32, msg: impl Into<String>) -> Self {
        Self::ApplyFailed {
            code,
            msg: msg.into(),
        }
    }
}
