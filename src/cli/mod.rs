//! CLI argument definitions for workscan.

use clap::Parser;
use std::path::PathBuf;

/// Workscan - aggregate a multi-project workspace into one JSON report.
///
/// Scans the workspace root for projects, agents, skills, and learning
/// notes, pulls recent commits from discovered repositories, and writes a
/// single normalized JSON document for the site build to consume.
#[derive(Parser, Debug)]
#[command(name = "wscan")]
#[command(author, version, about = "Scan a multi-project workspace into a JSON report", long_about = None)]
pub struct Cli {
    /// Workspace root to scan.
    /// Can also be set via the WSCAN_ROOT environment variable.
    #[arg(short = 'C', long = "root", env = "WSCAN_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Output path for the aggregated JSON document (overwritten in full)
    #[arg(
        short = 'o',
        long = "output",
        env = "WSCAN_OUTPUT",
        default_value = "src/data/workspace-data.json"
    )]
    pub output: PathBuf,

    /// Optional overrides document with per-project field patches
    #[arg(
        long = "overrides",
        env = "WSCAN_OVERRIDES",
        default_value = "src/data/overrides.json"
    )]
    pub overrides: PathBuf,

    /// External skills directory (defaults to ~/.cursor/skills)
    #[arg(long = "skills-dir", env = "WSCAN_SKILLS_DIR")]
    pub skills_dir: Option<PathBuf>,

    /// Suppress progress and stat lines
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}
