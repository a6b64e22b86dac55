//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "buddylock")]
#[command(version, about = "Run commands under named cross-process file locks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the lock files (defaults to the system lock directory)
    #[arg(long, global = true, env = "BUDDYLOCK_DIR")]
    pub lock_dir: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the lock file path for a lock name
    Path {
        /// Lock name
        name: String,
    },

    /// Report whether a lock is currently held
    Status {
        /// Lock name
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a command while holding a named lock
    Run {
        /// Lock name
        name: String,

        #[command(flatten)]
        exec: ExecArgs,
    },

    /// Run a command under the project creation lock
    Project {
        /// Project slug
        slug: String,

        #[command(flatten)]
        exec: ExecArgs,
    },

    /// Run a command under the slug generation lock
    Slug {
        /// Base slug
        base: String,

        #[command(flatten)]
        exec: ExecArgs,
    },
}

#[derive(Args)]
pub struct ExecArgs {
    /// Seconds to wait for the lock (decimals allowed)
    #[arg(short, long, value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Command to run (after --)
    #[arg(last = true, required = true, num_args = 1..)]
    pub command: Vec<String>,
}

/// Parses non-negative, finite decimal seconds
pub fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", s))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("timeout must be a non-negative finite number, got '{}'", s))
}
