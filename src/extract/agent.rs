//! Agent discovery and categorization.
//!
//! Walks one level into the agents root. A sub-directory qualifies as an
//! agent when it holds a readme or any prompt-like file. The category comes
//! from an ordered keyword cascade: the first matching entry wins, so a name
//! matching several categories always resolves to the earliest one.

use std::fs;
use std::path::Path;

use crate::fsutil;
use crate::models::AgentInfo;

/// Ordered (keywords, category) cascade. Order is significant.
const AGENT_CATEGORIES: &[(&[&str], &str)] = &[
    (&["review", "code", "writer"], "development"),
    (&["analy", "radar", "market", "trump"], "analysis"),
    (&["okr", "report", "resume", "tapd", "tracker"], "efficiency"),
    (&["skill", "command", "prompt", "generator"], "meta-tool"),
    (&["mcp", "builder", "draw"], "tooling"),
    (&["tutor", "learn"], "learning"),
];

/// Categorize an agent from the lower-cased name + description text.
/// First match in the cascade wins; no match yields "other".
pub fn categorize_agent(name: &str, description: &str) -> &'static str {
    let combined = format!("{} {}", name, description).to_lowercase();
    for (keywords, category) in AGENT_CATEGORIES {
        if keywords.iter().any(|kw| combined.contains(kw)) {
            return category;
        }
    }
    "other"
}

fn has_prompt_file(dir: &Path) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };
    entries.flatten().any(|e| {
        let name = e.file_name().to_string_lossy().to_string();
        name.ends_with(".md") || name.ends_with(".txt") || name == "system-prompt.md"
    })
}

/// Scan the agents root for agent definitions. A missing root yields an
/// empty list.
pub fn extract_agents(agents_dir: &Path) -> Vec<AgentInfo> {
    let Ok(entries) = fs::read_dir(agents_dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|n| !fsutil::is_skipped(n))
        .collect();
    names.sort();

    let mut agents = Vec::new();
    for name in names {
        let entry_path = agents_dir.join(&name);
        let readme_path = entry_path.join("README.md");
        if !readme_path.exists() && !has_prompt_file(&entry_path) {
            continue;
        }

        let description = if readme_path.exists() {
            fsutil::first_paragraph(&readme_path)
        } else {
            format!("{} Agent", name)
        };

        let agent_type = categorize_agent(&name, &description).to_string();
        agents.push(AgentInfo {
            name,
            description,
            agent_type,
        });
    }
    agents
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn cascade_first_match_wins() {
        // "code" (development) appears before "tracker" (efficiency)
        assert_eq!(categorize_agent("code-tracker", ""), "development");
        assert_eq!(categorize_agent("okr-tracker", ""), "efficiency");
        assert_eq!(categorize_agent("mcp-builder", ""), "tooling");
        assert_eq!(categorize_agent("mystery", "does things"), "other");
    }

    #[test]
    fn description_feeds_the_cascade() {
        assert_eq!(
            categorize_agent("code-reviewer", "Reviews pull requests"),
            "development"
        );
        assert_eq!(categorize_agent("helper", "market analysis bot"), "analysis");
    }

    #[test]
    fn extracts_agents_with_readme_or_prompt_file() {
        let dir = TempDir::new().unwrap();

        let reviewer = dir.path().join("code-reviewer");
        fs::create_dir(&reviewer).unwrap();
        fs::write(reviewer.join("README.md"), "Reviews code for style.\n").unwrap();

        let tutor = dir.path().join("tutor-bot");
        fs::create_dir(&tutor).unwrap();
        fs::write(tutor.join("system-prompt.md"), "You are a tutor.").unwrap();

        let empty = dir.path().join("empty");
        fs::create_dir(&empty).unwrap();

        fs::create_dir(dir.path().join("node_modules")).unwrap();

        let agents = extract_agents(dir.path());
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0].name, "code-reviewer");
        assert_eq!(agents[0].description, "Reviews code for style.");
        assert_eq!(agents[0].agent_type, "development");
        assert_eq!(agents[1].name, "tutor-bot");
        assert_eq!(agents[1].description, "tutor-bot Agent");
        assert_eq!(agents[1].agent_type, "learning");
    }

    #[test]
    fn missing_agents_root_is_empty() {
        assert!(extract_agents(Path::new("/nonexistent/agents")).is_empty());
    }
}
