//! Filesystem walking and safe-read helpers.
//!
//! Every reader here is "safe": a missing file, bad encoding, or malformed
//! content yields a neutral default (`None`, empty string, zero) instead of
//! an error. Extraction must survive any single unreadable file.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

/// Directory names excluded from workspace scans.
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".vscode",
    ".cursor",
    ".codebuddy",
    "dist",
    "build",
    "__pycache__",
    ".next",
    ".astro",
    "output",
    "logs",
    "personal-card",
];

/// Whether a directory name is on the exclusion set.
pub fn is_skipped(name: &str) -> bool {
    SKIP_DIRS.contains(&name)
}

/// Parse a JSON file, returning `None` on any failure.
pub fn read_json_safe(path: &Path) -> Option<serde_json::Value> {
    let text = fs::read_to_string(path).ok()?;
    serde_json::from_str(&text).ok()
}

/// Read a text file, returning an empty string on any failure.
pub fn read_to_string_safe(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

/// Truncate a string to at most `limit` characters.
pub fn truncate_chars(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}

/// Extract the first prose paragraph of a markdown file.
///
/// Treats the file as a line stream: skips leading blank lines, headings,
/// images, and front-matter delimiters, then accumulates the first
/// contiguous non-blank run joined by single spaces, stopping at the next
/// blank line. The result is truncated to 300 characters. Unreadable files
/// yield an empty string.
pub fn first_paragraph(path: &Path) -> String {
    let content = read_to_string_safe(path);
    let mut paragraph = String::new();
    let mut started = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if !started {
            if !trimmed.is_empty()
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('!')
                && !trimmed.starts_with("---")
            {
                started = true;
                paragraph.push_str(trimmed);
            }
            continue;
        }
        if trimmed.is_empty() {
            break;
        }
        paragraph.push(' ');
        paragraph.push_str(trimmed);
    }

    truncate_chars(&paragraph, 300)
}

/// Count markdown files directly inside a directory (non-recursive).
/// A missing directory counts zero.
pub fn markdown_count(dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    entries
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().ends_with(".md"))
        .count()
}

/// Count markdown files under a directory recursively, skipping excluded
/// directories and any file named like `exclude`. A missing directory
/// counts zero.
pub fn markdown_count_recursive(dir: &Path, exclude: &str) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            !(e.file_type().is_dir() && is_skipped(&name))
        })
        .flatten()
        .filter(|e| {
            let name = e.file_name().to_string_lossy();
            e.file_type().is_file() && name.ends_with(".md") && name != exclude
        })
        .count()
}
