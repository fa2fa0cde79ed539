//! Tech-stack resolution and the aggregated histogram.
//!
//! Two immutable lookup tables define the only recognized technologies:
//! one for npm dependency names, one for Python requirement lines. Anything
//! not in a table is silently dropped. Resolution is a plain lookup with no
//! fuzzy matching and no version awareness.

use std::collections::BTreeMap;

use crate::models::{ProjectInfo, TechStackEntry};

/// npm dependency name -> canonical display name.
pub const NPM_TECH: &[(&str, &str)] = &[
    ("react", "React"),
    ("react-dom", "React"),
    ("react-native", "React Native"),
    ("next", "Next.js"),
    ("astro", "Astro"),
    ("vue", "Vue.js"),
    ("svelte", "Svelte"),
    ("express", "Express.js"),
    ("fastify", "Fastify"),
    ("koa", "Koa"),
    ("tailwindcss", "Tailwind CSS"),
    ("@tailwindcss/vite", "Tailwind CSS"),
    ("typescript", "TypeScript"),
    ("vite", "Vite"),
    ("@modelcontextprotocol/sdk", "MCP SDK"),
    ("expo", "Expo"),
    ("electron", "Electron"),
    ("d3", "D3.js"),
    ("recharts", "Recharts"),
    ("three", "Three.js"),
    ("prisma", "Prisma"),
    ("drizzle-orm", "Drizzle"),
    ("zustand", "Zustand"),
    ("@tanstack/react-query", "TanStack Query"),
    ("axios", "Axios"),
    ("zod", "Zod"),
    ("phaser", "Phaser"),
    ("socket.io", "Socket.IO"),
    ("langfuse", "Langfuse"),
    ("ai", "Vercel AI SDK"),
];

/// Python requirement package name -> canonical display name.
pub const PY_TECH: &[(&str, &str)] = &[
    ("fastapi", "FastAPI"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("sqlalchemy", "SQLAlchemy"),
    ("celery", "Celery"),
    ("httpx", "httpx"),
    ("aiohttp", "aiohttp"),
    ("openai", "OpenAI SDK"),
    ("litellm", "LiteLLM"),
    ("graphiti-core", "Graphiti"),
    ("neo4j", "Neo4j"),
    ("apscheduler", "APScheduler"),
    ("pydantic", "Pydantic"),
    ("pymysql", "MySQL"),
    ("psycopg2", "PostgreSQL"),
    ("redis", "Redis"),
    ("mcp", "MCP SDK"),
];

/// Canonical name -> histogram category.
pub const TECH_CATEGORIES: &[(&str, &str)] = &[
    ("React", "Frontend"),
    ("React Native", "Mobile"),
    ("Next.js", "Frontend"),
    ("Vue.js", "Frontend"),
    ("Astro", "Frontend"),
    ("Svelte", "Frontend"),
    ("Tailwind CSS", "Frontend"),
    ("Vite", "Build Tool"),
    ("TypeScript", "Language"),
    ("Python", "Language"),
    ("JavaScript/TypeScript", "Language"),
    ("FastAPI", "Backend"),
    ("Django", "Backend"),
    ("Express.js", "Backend"),
    ("Flask", "Backend"),
    ("Koa", "Backend"),
    ("SQLAlchemy", "Database"),
    ("MySQL", "Database"),
    ("PostgreSQL", "Database"),
    ("Redis", "Database"),
    ("Neo4j", "Database"),
    ("Prisma", "Database"),
    ("MCP SDK", "AI/Agent"),
    ("OpenAI SDK", "AI/Agent"),
    ("LiteLLM", "AI/Agent"),
    ("Graphiti", "AI/Agent"),
    ("Vercel AI SDK", "AI/Agent"),
    ("Langfuse", "AI/Agent"),
    ("Docker", "DevOps"),
    ("Expo", "Mobile"),
    ("Electron", "Desktop"),
    ("Phaser", "Game"),
    ("Socket.IO", "Realtime"),
    ("Zustand", "State Management"),
    ("TanStack Query", "Data Fetching"),
    ("Pydantic", "Validation"),
    ("Zod", "Validation"),
    ("APScheduler", "Scheduler"),
    ("Celery", "Scheduler"),
];

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(raw, _)| *raw == key)
        .map(|(_, canonical)| *canonical)
}

fn push_unique(techs: &mut Vec<String>, name: &str) {
    if !techs.iter().any(|t| t == name) {
        techs.push(name.to_string());
    }
}

/// Resolve canonical tech names from a parsed `package.json` document.
/// Both `dependencies` and `devDependencies` keys are consulted.
pub fn resolve_package_json(pkg: &serde_json::Value) -> Vec<String> {
    let mut techs = Vec::new();
    for section in ["dependencies", "devDependencies"] {
        let Some(deps) = pkg.get(section).and_then(|v| v.as_object()) else {
            continue;
        };
        for dep in deps.keys() {
            if let Some(canonical) = lookup(NPM_TECH, dep) {
                push_unique(&mut techs, canonical);
            }
        }
    }
    techs
}

/// Resolve canonical tech names from `requirements.txt` content.
///
/// Each line is tokenized on version/extras punctuation (`= < > ! [`) and
/// whitespace; the leading token, lowercased, is the package name. Any
/// requirements file additionally contributes the fixed `Python` marker.
pub fn resolve_requirements(content: &str) -> Vec<String> {
    let mut techs = Vec::new();
    for line in content.lines() {
        let pkg = line
            .trim()
            .split(|c: char| matches!(c, '=' | '<' | '>' | '!' | '[') || c.is_whitespace())
            .next()
            .unwrap_or("")
            .to_lowercase();
        if let Some(canonical) = lookup(PY_TECH, &pkg) {
            push_unique(&mut techs, canonical);
        }
    }
    push_unique(&mut techs, "Python");
    techs
}

/// Histogram category for a canonical tech name, defaulting to "Other".
pub fn category_for(name: &str) -> &'static str {
    lookup(TECH_CATEGORIES, name).unwrap_or("Other")
}

/// Count canonical-name occurrences across all project records and attach
/// categories. Sorted by count descending, ties broken by name.
pub fn histogram(projects: &[ProjectInfo]) -> Vec<TechStackEntry> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for project in projects {
        for tech in &project.tech_stack {
            *counts.entry(tech).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<TechStackEntry> = counts
        .into_iter()
        .map(|(name, count)| TechStackEntry {
            name: name.to_string(),
            count,
            category: category_for(name).to_string(),
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn project_with_stack(slug: &str, stack: &[&str]) -> ProjectInfo {
        ProjectInfo {
            slug: slug.to_string(),
            name: slug.to_string(),
            description: String::new(),
            tech_stack: stack.iter().map(|s| s.to_string()).collect(),
            category: "uncategorized".to_string(),
            status: "learning".to_string(),
            has_docker: false,
            has_mcp: false,
            languages: Vec::new(),
            dependencies: BTreeMap::new(),
        }
    }

    #[test]
    fn resolves_known_npm_dependencies() {
        let pkg = serde_json::json!({
            "dependencies": {"react": "^18", "left-pad": "1.0.0"},
            "devDependencies": {"typescript": "^5"}
        });

        let techs = resolve_package_json(&pkg);
        assert!(techs.contains(&"React".to_string()));
        assert!(techs.contains(&"TypeScript".to_string()));
        assert_eq!(techs.len(), 2);
    }

    #[test]
    fn react_and_react_dom_resolve_once() {
        let pkg = serde_json::json!({
            "dependencies": {"react": "^18", "react-dom": "^18"}
        });

        assert_eq!(resolve_package_json(&pkg), vec!["React".to_string()]);
    }

    #[test]
    fn requirements_strip_version_specifiers() {
        let content = "fastapi==0.100\nredis>=4\nUvicorn[standard]\nmcp\n# comment\n";
        let techs = resolve_requirements(content);

        assert!(techs.contains(&"FastAPI".to_string()));
        assert!(techs.contains(&"Redis".to_string()));
        assert!(techs.contains(&"MCP SDK".to_string()));
        // uvicorn is not in the table; comment line resolves to nothing
        assert!(techs.contains(&"Python".to_string()));
        assert_eq!(techs.len(), 4);
    }

    #[test]
    fn requirements_always_mark_python() {
        assert_eq!(resolve_requirements(""), vec!["Python".to_string()]);
    }

    #[test]
    fn histogram_counts_match_project_occurrences() {
        let projects = vec![
            project_with_stack("a", &["React", "Zod"]),
            project_with_stack("b", &["React"]),
            project_with_stack("c", &["Mystery"]),
        ];

        let entries = histogram(&projects);
        assert_eq!(
            entries[0],
            TechStackEntry {
                name: "React".to_string(),
                count: 2,
                category: "Frontend".to_string(),
            }
        );
        // ties sort by name
        assert_eq!(entries[1].name, "Mystery");
        assert_eq!(entries[1].category, "Other");
        assert_eq!(entries[2].name, "Zod");
        assert_eq!(entries[2].category, "Validation");
    }
}
