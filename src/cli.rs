use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "globcopy",
    version,
    about = "Copy files matching a glob pattern into a mirrored directory tree"
)]
pub struct Args {
    /// Glob pattern matched against file and directory names
    pub pattern: String,

    /// Source directory to scan
    pub source: PathBuf,

    /// Destination directory (must not already exist)
    pub dest: PathBuf,

    /// Follow symbolic links while scanning
    #[arg(short = 'f', long = "follow-symlinks")]
    pub follow_symlinks: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Default tracing filter derived from the verbosity flags, used when
    /// RUST_LOG is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}
