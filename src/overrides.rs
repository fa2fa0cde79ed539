//! User-authored override records.
//!
//! Overrides are partial patches keyed by project slug, loaded from an
//! optional side file and applied as a shallow merge after extraction.
//! Every field present in an override replaces the extracted value
//! unconditionally, empty values included; absent fields are untouched.
//! An override whose slug matches no project is a no-op.

use std::path::Path;

use serde_json::Value;

use crate::fsutil;
use crate::models::ProjectInfo;

/// Load the override entries from the overrides document. A missing or
/// malformed file yields no entries.
pub fn load_overrides(path: &Path) -> Vec<Value> {
    fsutil::read_json_safe(path)
        .and_then(|doc| doc.get("projects").cloned())
        .and_then(|projects| match projects {
            Value::Array(entries) => Some(entries),
            _ => None,
        })
        .unwrap_or_default()
}

/// Shallow-merge each override onto the project with a matching slug.
///
/// The merge happens at the JSON level so replace-if-present semantics are
/// literal. An entry producing a record that no longer deserializes leaves
/// the project unchanged.
pub fn apply_overrides(projects: &mut [ProjectInfo], entries: &[Value]) {
    for entry in entries {
        let Some(obj) = entry.as_object() else {
            continue;
        };
        let Some(slug) = obj.get("slug").and_then(|v| v.as_str()) else {
            continue;
        };
        let Some(project) = projects.iter_mut().find(|p| p.slug == slug) else {
            continue;
        };

        let Ok(Value::Object(mut merged)) = serde_json::to_value(&*project) else {
            continue;
        };
        for (key, value) in obj {
            merged.insert(key.clone(), value.clone());
        }
        if let Ok(patched) = serde_json::from_value(Value::Object(merged)) {
            *project = patched;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    fn project(slug: &str) -> ProjectInfo {
        ProjectInfo {
            slug: slug.to_string(),
            name: slug.to_string(),
            description: "extracted description".to_string(),
            tech_stack: vec!["React".to_string()],
            category: "uncategorized".to_string(),
            status: "learning".to_string(),
            has_docker: false,
            has_mcp: false,
            languages: vec!["JavaScript/TypeScript".to_string()],
            dependencies: BTreeMap::new(),
        }
    }

    #[test]
    fn replaces_exactly_the_specified_fields() {
        let mut projects = vec![project("demo")];
        let entries = vec![json!({
            "slug": "demo",
            "status": "tool",
            "category": "infrastructure"
        })];

        apply_overrides(&mut projects, &entries);
        assert_eq!(projects[0].status, "tool");
        assert_eq!(projects[0].category, "infrastructure");
        // untouched fields survive
        assert_eq!(projects[0].description, "extracted description");
        assert_eq!(projects[0].tech_stack, vec!["React".to_string()]);
    }

    #[test]
    fn empty_values_replace_too() {
        let mut projects = vec![project("demo")];
        let entries = vec![json!({"slug": "demo", "description": ""})];

        apply_overrides(&mut projects, &entries);
        assert_eq!(projects[0].description, "");
    }

    #[test]
    fn unmatched_slug_is_a_no_op() {
        let mut projects = vec![project("demo")];
        let before = serde_json::to_value(&projects[0]).unwrap();

        apply_overrides(&mut projects, &[json!({"slug": "ghost", "status": "tool"})]);
        assert_eq!(serde_json::to_value(&projects[0]).unwrap(), before);
    }

    #[test]
    fn type_mismatch_leaves_project_unchanged() {
        let mut projects = vec![project("demo")];
        let entries = vec![json!({"slug": "demo", "techStack": "not-a-list"})];

        apply_overrides(&mut projects, &entries);
        assert_eq!(projects[0].tech_stack, vec!["React".to_string()]);
    }

    #[test]
    fn load_overrides_tolerates_missing_and_malformed_files() {
        let dir = TempDir::new().unwrap();
        assert!(load_overrides(&dir.path().join("missing.json")).is_empty());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{oops").unwrap();
        assert!(load_overrides(&bad).is_empty());

        let good = dir.path().join("overrides.json");
        fs::write(
            &good,
            r#"{"projects": [{"slug": "demo", "status": "production"}]}"#,
        )
        .unwrap();
        let entries = load_overrides(&good);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["slug"], "demo");
    }
}
