use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Patchup - apply patch files with the GNU patch tool
///
/// At least one of `--dest` / `--basedir` must be given; when both are,
/// `dest` names the file to patch and `basedir` the directory to apply in.
#[derive(Parser, Debug)]
#[command(name = "patchup")]
#[command(about = "Idempotently apply patch files with the GNU patch tool")]
#[command(version)]
#[command(group(
    ArgGroup::new("target")
        .args(["dest", "basedir"])
        .required(true)
        .multiple(true)
))]
pub struct Cli {
    /// Path of the patch file, as accepted by the GNU patch tool
    #[arg(short, long, value_name = "PATCHFILE")]
    pub src: PathBuf,

    /// File to patch. The names of the files to be patched are usually
    /// taken from the patch file itself, but a single target can be
    /// pinned with this option.
    #[arg(short, long, value_name = "ORIGINALFILE")]
    pub dest: Option<PathBuf>,

    /// Base directory in which the patch file will be applied
    #[arg(short, long, value_name = "DIR")]
    pub basedir: Option<PathBuf>,

    /// Smallest prefix containing leading slashes stripped from each file
    /// name found in the patch file (GNU patch --strip)
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub strip: u32,

    /// Treat src as a path on this machine. Kept for interface parity with
    /// orchestration tooling; src is always read from the local filesystem.
    #[arg(long)]
    pub remote_src: bool,

    /// Keep numbered backup copies of patched files
    /// (passes --backup --version-control=numbered)
    #[arg(long)]
    pub backup: bool,

    /// Disable patch's heuristic for transforming CRLF line endings into
    /// LF; line endings of src and dest must match
    #[arg(long)]
    pub binary: bool,

    /// Preview mode: report what would change without touching the target
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the result as a JSON object on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_requires_dest_or_basedir() {
        let result = Cli::try_parse_from(["patchup", "--src", "/tmp/fix.patch"]);
        assert!(result.is_err(), "one of dest/basedir must be required");
    }

    #[test]
    fn test_cli_with_dest() {
        let result = Cli::try_parse_from([
            "patchup",
            "--src",
            "/tmp/fix.patch",
            "--dest",
            "/var/www/index.html",
        ]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert_eq!(cli.src, PathBuf::from("/tmp/fix.patch"));
        assert_eq!(cli.dest.unwrap(), PathBuf::from("/var/www/index.html"));
        assert!(cli.basedir.is_none());
        assert_eq!(cli.strip, 0);
        assert!(!cli.backup);
        assert!(!cli.binary);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_with_basedir_and_strip() {
        let result = Cli::try_parse_from([
            "patchup",
            "--src",
            "/tmp/customize.patch",
            "--basedir",
            "/var/www",
            "--strip",
            "1",
        ]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert_eq!(cli.basedir.unwrap(), PathBuf::from("/var/www"));
        assert_eq!(cli.strip, 1);
    }

    #[test]
    fn test_cli_both_dest_and_basedir_allowed() {
        let result = Cli::try_parse_from([
            "patchup",
            "--src",
            "/tmp/fix.patch",
            "--dest",
            "/srv/app/config.ini",
            "--basedir",
            "/srv/app",
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "patchup",
            "--src",
            "p.patch",
            "--dest",
            "f.txt",
            "--backup",
            "--binary",
            "--dry-run",
            "--json",
        ])
        .unwrap();
        assert!(cli.backup);
        assert!(cli.binary);
        assert!(cli.dry_run);
        assert!(cli.json);
    }
}
