//! Playbook, skill, and note-count extractors.
//!
//! These are existence+count operations over fixed sub-paths. Every missing
//! path contributes zero. The total-note count prefers an explicit figure
//! from the notes readme over a recursive file count.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::fsutil;
use crate::models::SkillInfo;

/// Localized "N articles" figure in the notes readme, e.g. `共 42 篇`.
static NOTE_COUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*篇").unwrap());

/// Counters extracted from the engineering playbook tree.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlaybookStats {
    /// Markdown files under `knowledge-base/`
    pub archives: usize,
    /// Markdown files under `patterns/`
    pub patterns: usize,
    /// Markdown files under `skills/personal/` + `skills/cursor-system/`
    pub skills: usize,
}

/// Count playbook artifacts. A missing playbook root (or any missing
/// sub-path) contributes zero.
pub fn extract_playbook_stats(playbook_dir: &Path) -> PlaybookStats {
    let skills_dir = playbook_dir.join("skills");
    PlaybookStats {
        archives: fsutil::markdown_count(&playbook_dir.join("knowledge-base")),
        patterns: fsutil::markdown_count(&playbook_dir.join("patterns")),
        skills: fsutil::markdown_count(&skills_dir.join("personal"))
            + fsutil::markdown_count(&skills_dir.join("cursor-system")),
    }
}

/// Total note count for the stats block.
///
/// First attempts to parse the localized count figure from the notes root's
/// readme; only on absence falls back to a full recursive markdown count
/// (excluding the readme itself).
pub fn count_notes(notes_dir: &Path) -> usize {
    if !notes_dir.exists() {
        return 0;
    }

    let readme = fsutil::read_to_string_safe(&notes_dir.join("README.md"));
    if let Some(caps) = NOTE_COUNT.captures(&readme) {
        if let Ok(count) = caps[1].parse() {
            return count;
        }
    }

    fsutil::markdown_count_recursive(notes_dir, "README.md")
}

/// Scan a skills directory for skill definitions: immediate sub-directories
/// containing a `SKILL.md`. Description is the file's first prose line,
/// truncated to 200 characters, with the directory name as fallback.
pub fn extract_skills(skills_dir: &Path) -> Vec<SkillInfo> {
    let Ok(entries) = fs::read_dir(skills_dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();

    let mut skills = Vec::new();
    for name in names {
        let skill_file = skills_dir.join(&name).join("SKILL.md");
        if !skill_file.exists() {
            continue;
        }

        let content = fsutil::read_to_string_safe(&skill_file);
        let description = content
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with("---"))
            .map(|l| fsutil::truncate_chars(l, 200))
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| name.clone());

        skills.push(SkillInfo {
            name,
            description,
            path: skill_file.to_string_lossy().to_string(),
        });
    }
    skills
}
