//! Workscan CLI - scans a multi-project workspace into one JSON report.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

use workscan::cli::Cli;
use workscan::extract::timeline::GitCli;
use workscan::extract::{self, ScanPaths};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> workscan::Result<()> {
    let paths = ScanPaths {
        root: cli.root,
        overrides: cli.overrides,
        skills_dir: cli.skills_dir.unwrap_or_else(default_skills_dir),
    };

    let git = GitCli::default();
    let data = extract::run(&paths, &git, cli.quiet)?;

    // The final write is the second unguarded operation: a failure here is
    // fatal, with no partial-output guarantee.
    fs::write(&cli.output, serde_json::to_string_pretty(&data)?)?;

    if !cli.quiet {
        println!("Data written to: {}", cli.output.display());
        println!("Stats: {}", serde_json::to_string_pretty(&data.stats)?);
    }
    Ok(())
}

/// Default external skills location under the user's home directory.
fn default_skills_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cursor")
        .join("skills")
}
