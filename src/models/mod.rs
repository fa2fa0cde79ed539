//! Data models for workscan records.
//!
//! This module defines the record types produced by the extractors:
//! - `ProjectInfo` - one workspace sub-directory recognized as a project
//! - `AgentInfo` - an agent definition with a derived category
//! - `NoteInfo` - a markdown learning note with normalized metadata
//! - `SkillInfo` - a skill-definition directory
//! - `TechStackEntry` - one row of the aggregated tech-stack histogram
//! - `TimelineEntry` - one commit from a discovered repository
//! - `WorkspaceData` - the final aggregated document
//!
//! Field names serialize in camelCase to match the JSON shape the site
//! consumes at build time.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A workspace sub-directory recognized as a software project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    /// Unique identifier, derived from the directory name
    pub slug: String,

    /// Display name (manifest name when present, else the directory name)
    pub name: String,

    /// Short description (manifest, readme first paragraph, or fallback)
    pub description: String,

    /// Canonical technology names resolved from the dependency files
    pub tech_stack: Vec<String>,

    /// Placeholder classification, correctable via overrides
    pub category: String,

    /// Derived status: "production" when a container config is present,
    /// else "learning". Overrides may introduce other values.
    pub status: String,

    /// Whether a docker-compose file was found
    pub has_docker: bool,

    /// Whether the project appears to expose an MCP SDK surface
    pub has_mcp: bool,

    /// Languages inferred from which dependency files exist
    pub languages: Vec<String>,

    /// Raw runtime dependency map from the manifest
    pub dependencies: BTreeMap<String, String>,
}

/// An agent definition found under the agents root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentInfo {
    /// Directory name of the agent
    pub name: String,

    /// Readme first paragraph, or a name-derived fallback
    pub description: String,

    /// Category from the ordered keyword cascade
    #[serde(rename = "type")]
    pub agent_type: String,
}

/// A markdown learning note with metadata merged from up to three
/// conventions (front-matter, inline labels, filename).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteInfo {
    pub title: String,

    /// Calendar date, `YYYY-MM-DD`. Mandatory: notes without a derivable
    /// date are dropped before this record is ever built.
    pub date: String,

    /// First path segment under the notes root, or "uncategorized"
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    pub tags: Vec<String>,

    /// Filename stem minus any date prefix
    pub slug: String,

    /// Path relative to the notes root
    pub path: String,

    pub summary: String,
}

/// A skill-definition directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillInfo {
    pub name: String,
    pub description: String,
    pub path: String,
}

/// One row of the aggregated tech-stack histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStackEntry {
    pub name: String,
    pub count: usize,
    pub category: String,
}

/// One commit from a discovered repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Calendar date, the first 10 characters of the author date
    pub date: String,
    pub message: String,
    /// Directory name of the owning repository
    pub project: String,
}

/// Summary counters for the stats block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceStats {
    pub total_projects: usize,
    pub production_projects: usize,
    pub total_agents: usize,
    pub total_notes: usize,
    pub total_patterns: usize,
    pub total_skills: usize,
    pub total_experience_archives: usize,
}

/// The final aggregated document, written whole on every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceData {
    pub projects: Vec<ProjectInfo>,
    pub agents: Vec<AgentInfo>,
    pub skills: Vec<SkillInfo>,
    pub notes: Vec<NoteInfo>,
    pub stats: WorkspaceStats,
    pub tech_stack: Vec<TechStackEntry>,
    pub timeline: Vec<TimelineEntry>,
    /// ISO 8601 generation timestamp
    pub extracted_at: String,
}

/// Current timestamp in the ISO 8601 form the site expects.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
