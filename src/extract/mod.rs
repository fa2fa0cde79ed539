//! The extraction pipeline.
//!
//! A single-pass, synchronous batch job: independent extractors each walk
//! part of the workspace tree, and the aggregation stage merges their
//! outputs, applies overrides, and assembles the final document. The only
//! guarded-by-`Result` operations are the top-level directory enumeration
//! here and the final write in the binary; everything below is
//! individually fault-tolerant.

pub mod agent;
pub mod notes;
pub mod playbook;
pub mod project;
pub mod tech;
pub mod timeline;

use std::fs;
use std::path::PathBuf;

use crate::models::{ProjectInfo, WorkspaceData, WorkspaceStats, now_iso8601};
use crate::{Error, Result, fsutil, overrides};

use timeline::CommitLog;

/// Input paths for one extraction run.
pub struct ScanPaths {
    /// Workspace root to scan
    pub root: PathBuf,
    /// Optional overrides document
    pub overrides: PathBuf,
    /// External skills directory
    pub skills_dir: PathBuf,
}

/// Run the full pipeline and return the aggregated document.
///
/// Progress lines print to stdout unless `quiet` is set. Fails only when
/// the workspace root itself cannot be enumerated.
pub fn run(paths: &ScanPaths, log: &dyn CommitLog, quiet: bool) -> Result<WorkspaceData> {
    if !quiet {
        println!(
            "Extracting workspace data from: {}",
            paths.root.display()
        );
    }

    // The one unguarded enumeration: a failure here is fatal.
    if !paths.root.is_dir() {
        return Err(Error::NotADirectory(paths.root.display().to_string()));
    }
    let mut dir_names: Vec<String> = fs::read_dir(&paths.root)?
        .flatten()
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| !fsutil::is_skipped(name) && !name.starts_with('.'))
        .collect();
    dir_names.sort();

    let mut projects: Vec<ProjectInfo> = dir_names
        .iter()
        .filter_map(|name| project::extract_project(&paths.root.join(name), name))
        .collect();
    if !quiet {
        println!("Found {} projects", projects.len());
    }

    let agents = agent::extract_agents(&paths.root.join("agents"));
    if !quiet {
        println!("Found {} agents", agents.len());
    }

    let notes_dir = paths.root.join("learning-notes");
    let playbook_stats = playbook::extract_playbook_stats(&paths.root.join("engineering-playbook"));
    let total_notes = playbook::count_notes(&notes_dir);
    let skills = playbook::extract_skills(&paths.skills_dir);
    let notes = notes::extract_notes(&notes_dir);
    let tech_stack = tech::histogram(&projects);
    let timeline = timeline::extract_timeline(&paths.root, &dir_names, log);

    // The production count reflects derived statuses; overrides patch the
    // records but not this stat.
    let production_projects = projects.iter().filter(|p| p.status == "production").count();

    let override_entries = overrides::load_overrides(&paths.overrides);
    overrides::apply_overrides(&mut projects, &override_entries);

    let stats = WorkspaceStats {
        total_projects: projects.len(),
        production_projects,
        total_agents: agents.len(),
        total_notes,
        total_patterns: playbook_stats.patterns,
        total_skills: playbook_stats.skills + skills.len(),
        total_experience_archives: playbook_stats.archives,
    };

    Ok(WorkspaceData {
        projects,
        agents,
        skills,
        notes,
        stats,
        tech_stack,
        timeline,
        extracted_at: now_iso8601(),
    })
}
