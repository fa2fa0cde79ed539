//! Per-directory project extraction.
//!
//! A directory qualifies as a project when it contains at least one of
//! `package.json`, `requirements.txt`, or `README.md`. Field derivation
//! follows a fixed priority: explicit manifest values win over readme- and
//! name-derived fallbacks.

use std::collections::BTreeMap;
use std::path::Path;

use crate::extract::tech;
use crate::fsutil;
use crate::models::ProjectInfo;

const JS_LANGUAGE: &str = "JavaScript/TypeScript";
const PY_LANGUAGE: &str = "Python";

/// Extract a project record from a workspace sub-directory.
///
/// Returns `None` when the directory is not a project (no marker files) —
/// that is the expected outcome for most directories, not an error.
pub fn extract_project(dir: &Path, dir_name: &str) -> Option<ProjectInfo> {
    if !dir.is_dir() {
        return None;
    }

    let pkg_path = dir.join("package.json");
    let req_path = dir.join("requirements.txt");
    let readme_path = dir.join("README.md");
    let has_docker =
        dir.join("docker-compose.yml").exists() || dir.join("docker-compose.yaml").exists();

    let has_pkg = pkg_path.exists();
    let has_req = req_path.exists();
    let has_readme = readme_path.exists();

    if !has_pkg && !has_req && !has_readme {
        return None;
    }

    let mut name = dir_name.to_string();
    let mut description = String::new();
    let mut tech_stack: Vec<String> = Vec::new();
    let mut languages: Vec<String> = Vec::new();
    let mut dependencies: BTreeMap<String, String> = BTreeMap::new();

    if has_pkg {
        if let Some(pkg) = fsutil::read_json_safe(&pkg_path) {
            if let Some(pkg_name) = pkg.get("name").and_then(|v| v.as_str()) {
                name = pkg_name.to_string();
            }
            if let Some(pkg_desc) = pkg.get("description").and_then(|v| v.as_str()) {
                description = pkg_desc.to_string();
            }
            tech_stack = tech::resolve_package_json(&pkg);
            languages.push(JS_LANGUAGE.to_string());
            if let Some(deps) = pkg.get("dependencies").and_then(|v| v.as_object()) {
                for (dep, version) in deps {
                    if let Some(version) = version.as_str() {
                        dependencies.insert(dep.clone(), version.to_string());
                    }
                }
            }
        }
    }

    if has_req {
        for canonical in tech::resolve_requirements(&fsutil::read_to_string_safe(&req_path)) {
            if !tech_stack.contains(&canonical) {
                tech_stack.push(canonical);
            }
        }
        if !languages.iter().any(|l| l == PY_LANGUAGE) {
            languages.push(PY_LANGUAGE.to_string());
        }
    }

    if has_readme && description.is_empty() {
        description = fsutil::first_paragraph(&readme_path);
    }
    if description.is_empty() {
        description = format!("{} project", dir_name);
    }

    // Two weak signals, deliberately OR-ed: the resolved stack, or a literal
    // (case-sensitive) substring of the directory name.
    let has_mcp = tech_stack.iter().any(|t| t == "MCP SDK") || dir_name.contains("mcp");

    Some(ProjectInfo {
        slug: dir_name.to_string(),
        name,
        description,
        tech_stack,
        category: "uncategorized".to_string(),
        status: if has_docker { "production" } else { "learning" }.to_string(),
        has_docker,
        has_mcp,
        languages,
        dependencies,
    })
}
