//! Learning-note extraction.
//!
//! Notes encode metadata in up to three incompatible conventions. Each one
//! gets its own parser over the same raw text, and the results merge by a
//! fixed per-field precedence: front-matter, then inline labels, then
//! filename-derived values. A note with no resolvable date from any source
//! is dropped entirely.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::fsutil;
use crate::models::NoteInfo;

const SUMMARY_LIMIT: usize = 200;
const MIN_QUOTE_SUMMARY: usize = 10;

/// Category directory name -> display label.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("ai", "AI"),
    ("frontend", "前端"),
    ("backend", "后端"),
    ("devops", "DevOps"),
    ("architecture", "架构"),
    ("database", "数据库"),
    ("algorithms", "算法"),
    ("career", "职业成长"),
    ("reading", "读书笔记"),
];

/// Subcategory directory name -> display label.
const SUBCATEGORY_LABELS: &[(&str, &str)] = &[
    ("llm", "大模型"),
    ("agents", "智能体"),
    ("rag", "RAG"),
    ("react", "React"),
    ("vue", "Vue"),
    ("node", "Node.js"),
    ("python", "Python"),
    ("docker", "Docker"),
    ("kubernetes", "K8s"),
];

static FM_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^title:\s*["']?(.+?)["']?\s*$"#).unwrap());
static FM_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^date:\s*(\d{4}-\d{2}-\d{2})").unwrap());
static FM_CATEGORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^category:\s*["']?(.+?)["']?\s*$"#).unwrap());
static FM_SUBCATEGORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^subcategory:\s*["']?(.+?)["']?\s*$"#).unwrap());
static FM_TAGS_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^tags:\s*\[(.*)\]").unwrap());
static INLINE_TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());
static INLINE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:📅\s*)?(?:\*\*)?日期(?:\*\*)?\s*[:：]\s*(\d{4}-\d{2}-\d{2})").unwrap()
});
static SUMMARY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^>?\s*(?:\*\*)?(?:一句话总结|摘要)(?:\*\*)?\s*[:：]\s*(.+)$").unwrap()
});
static FILENAME_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})-(.+)$").unwrap());
static BOLD_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s*\*\*(.+?)\*\*\s*$").unwrap());

/// Tokens that mark a blockquote line as metadata noise, not a summary.
const QUOTE_NOISE: &[&str] = &["日期", "标签", "分类", "来源", "📅", "🏷"];

/// Partial metadata from one parsing convention. Fields are `None`/empty
/// when that convention does not supply them.
#[derive(Debug, Default)]
struct PartialNote {
    title: Option<String>,
    date: Option<String>,
    category: Option<String>,
    subcategory: Option<String>,
    tags: Vec<String>,
}

/// Split a leading front-matter block from the body.
///
/// The block opens with a `---` line at the very top and closes at the next
/// `---` line. Returns `(front_matter, body)`; an unterminated or absent
/// block yields `(None, full_text)`.
fn split_front_matter(text: &str) -> (Option<String>, String) {
    let lines: Vec<&str> = text.lines().collect();
    if lines.first().map(|l| l.trim_end()) != Some("---") {
        return (None, text.to_string());
    }

    match lines.iter().skip(1).position(|l| l.trim_end() == "---") {
        Some(offset) => {
            let close = offset + 1;
            let block = lines[1..close].join("\n");
            let body = lines[close + 1..].join("\n");
            (Some(block), body)
        }
        None => (None, text.to_string()),
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .map(|c| c[1].trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_tag_item(raw: &str) -> Option<String> {
    let tag = raw.trim().trim_matches(|c| c == '"' || c == '\'').trim();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}

/// Parse the YAML-ish front-matter block with field regexes. Tags may be an
/// inline bracket list or a block of `- item` lines under a bare `tags:`.
fn parse_front_matter(block: &str) -> PartialNote {
    let mut note = PartialNote {
        title: capture(&FM_TITLE, block),
        date: capture(&FM_DATE, block),
        category: capture(&FM_CATEGORY, block),
        subcategory: capture(&FM_SUBCATEGORY, block),
        tags: Vec::new(),
    };

    if let Some(caps) = FM_TAGS_INLINE.captures(block) {
        note.tags = caps[1].split(',').filter_map(parse_tag_item).collect();
    } else {
        let mut in_tags = false;
        for line in block.lines() {
            if line.trim_end() == "tags:" {
                in_tags = true;
                continue;
            }
            if in_tags {
                let trimmed = line.trim_start();
                if let Some(item) = trimmed.strip_prefix("- ") {
                    if let Some(tag) = parse_tag_item(item) {
                        note.tags.push(tag);
                    }
                } else {
                    break;
                }
            }
        }
    }

    note
}

/// Parse the inline textual conventions in the body: a leading `# ` heading
/// as the title and a localized date label.
fn parse_inline(body: &str) -> PartialNote {
    PartialNote {
        title: capture(&INLINE_TITLE, body),
        date: capture(&INLINE_DATE, body),
        ..PartialNote::default()
    }
}

/// Derive (date, slug) from a filename stem. The slug is the stem minus any
/// `YYYY-MM-DD-` prefix.
fn parse_filename(stem: &str) -> (Option<String>, String) {
    match FILENAME_DATE.captures(stem) {
        Some(caps) => (Some(caps[1].to_string()), caps[2].to_string()),
        None => (None, stem.to_string()),
    }
}

fn is_metadata_noise(line: &str) -> bool {
    QUOTE_NOISE.iter().any(|token| line.contains(token))
}

/// Summary fallback chain over the body (front-matter already stripped):
/// an explicit localized label, then a bold blockquote shortly after the
/// root heading, then any long-enough blockquote that is not metadata
/// noise.
fn extract_summary(body: &str) -> String {
    if let Some(summary) = capture(&SUMMARY_LABEL, body) {
        return fsutil::truncate_chars(&summary, SUMMARY_LIMIT);
    }

    let lines: Vec<&str> = body.lines().collect();
    if let Some(heading_idx) = lines.iter().position(|l| l.starts_with("# ")) {
        for line in lines.iter().skip(heading_idx + 1).take(10) {
            if let Some(caps) = BOLD_QUOTE.captures(line.trim()) {
                let quoted = caps[1].trim().to_string();
                if !quoted.is_empty() && !is_metadata_noise(&quoted) {
                    return fsutil::truncate_chars(&quoted, SUMMARY_LIMIT);
                }
            }
        }
    }

    for line in &lines {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix('>') {
            let quoted = rest.trim().trim_start_matches("**").trim_end_matches("**");
            if quoted.chars().count() >= MIN_QUOTE_SUMMARY && !is_metadata_noise(quoted) {
                return fsutil::truncate_chars(quoted, SUMMARY_LIMIT);
            }
        }
    }

    String::new()
}

fn label_for(table: &[(&str, &str)], key: &str) -> String {
    table
        .iter()
        .find(|(raw, _)| *raw == key)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Parse one note file. `rel_path` is the path relative to the notes root;
/// its leading segments supply category and subcategory. Returns `None`
/// when no date is derivable from any convention.
pub fn parse_note(raw: &str, rel_path: &str) -> Option<NoteInfo> {
    let (front_matter, body) = split_front_matter(raw);
    let fm = front_matter
        .as_deref()
        .map(parse_front_matter)
        .unwrap_or_default();
    let inline = parse_inline(&body);

    let file_name = rel_path.rsplit('/').next().unwrap_or(rel_path);
    let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
    let (file_date, slug) = parse_filename(stem);

    // Per-field precedence: front-matter, inline, filename. The date is the
    // hard filter: no source, no record.
    let date = fm.date.or(inline.date).or(file_date)?;
    let title = fm
        .title
        .or(inline.title)
        .unwrap_or_else(|| slug.clone());

    let mut segments = rel_path.split('/');
    let first = segments.next();
    let second = segments.next();
    // `first` is the category only when the note is nested (the last
    // segment is the filename itself).
    let path_category = second.and(first).map(|s| s.to_string());
    let path_subcategory = segments.next().and(second).map(|s| s.to_string());

    let category = fm
        .category
        .or(path_category)
        .unwrap_or_else(|| "uncategorized".to_string());
    let subcategory = fm.subcategory.or(path_subcategory);

    let mut tags = fm.tags;
    if tags.is_empty() {
        if category != "uncategorized" {
            tags.push(label_for(CATEGORY_LABELS, &category));
        }
        if let Some(sub) = &subcategory {
            tags.push(label_for(SUBCATEGORY_LABELS, sub));
        }
    }

    Some(NoteInfo {
        title,
        date,
        category,
        subcategory,
        tags,
        slug,
        path: rel_path.to_string(),
        summary: extract_summary(&body),
    })
}

/// Recursively scan the notes root for markdown notes, excluding readmes
/// and skipped directories. Output is sorted newest-first by date, ties
/// broken by path. A missing root yields an empty list.
pub fn extract_notes(notes_dir: &Path) -> Vec<NoteInfo> {
    let mut notes: Vec<NoteInfo> = WalkDir::new(notes_dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            !(e.file_type().is_dir() && fsutil::is_skipped(&name))
        })
        .flatten()
        .filter(|e| {
            let name = e.file_name().to_string_lossy();
            e.file_type().is_file() && name.ends_with(".md") && name != "README.md"
        })
        .filter_map(|e| {
            let rel = e
                .path()
                .strip_prefix(notes_dir)
                .ok()?
                .to_string_lossy()
                .replace('\\', "/");
            let raw = fsutil::read_to_string_safe(e.path());
            parse_note(&raw, &rel)
        })
        .collect();

    notes.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.path.cmp(&b.path)));
    notes
}
