//! Commit timeline extraction.
//!
//! Commit history comes from an external version-control invocation, hidden
//! behind the narrow [`CommitLog`] trait so tests can stub it. Any failure
//! (missing tool, timeout, not a repository) contributes zero entries for
//! that directory and never aborts the run.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::models::TimelineEntry;

/// Commits to request per repository.
const COMMITS_PER_REPO: usize = 10;
/// Cap on the pooled timeline.
const TIMELINE_LIMIT: usize = 50;
/// Bound on each subprocess invocation.
const GIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Field separator in the git log format string.
const LOG_SEPARATOR: &str = "|||";

/// Source of recent commits for a repository. Implementations never error;
/// an unavailable history is an empty list.
pub trait CommitLog {
    /// Return up to `limit` recent commits as (ISO author date, subject)
    /// pairs, newest first.
    fn recent_commits(&self, repo: &Path, limit: usize) -> Vec<(String, String)>;
}

/// `CommitLog` backed by the git CLI, each invocation bounded by a timeout.
pub struct GitCli {
    timeout: Duration,
}

impl GitCli {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(GIT_TIMEOUT)
    }
}

impl GitCli {
    fn try_log(&self, repo: &Path, limit: usize) -> Option<Vec<(String, String)>> {
        let format = format!("--format=%aI{}%s", LOG_SEPARATOR);
        let mut child = Command::new("git")
            .arg("-C")
            .arg(repo)
            .args(["log", &format, "-n"])
            .arg(limit.to_string())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .stdin(Stdio::null())
            .spawn()
            .ok()?;

        let status = match child.wait_timeout(self.timeout).ok()? {
            Some(status) => status,
            None => {
                // Timed out: kill and reap, report nothing.
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
        };
        if !status.success() {
            return None;
        }

        let mut output = String::new();
        child.stdout.take()?.read_to_string(&mut output).ok()?;

        Some(
            output
                .lines()
                .filter_map(|line| {
                    let (date, message) = line.split_once(LOG_SEPARATOR)?;
                    if date.is_empty() || message.is_empty() {
                        return None;
                    }
                    Some((date.to_string(), message.to_string()))
                })
                .collect(),
        )
    }
}

impl CommitLog for GitCli {
    fn recent_commits(&self, repo: &Path, limit: usize) -> Vec<(String, String)> {
        self.try_log(repo, limit).unwrap_or_default()
    }
}

/// Pool recent commits across the given top-level workspace directories.
///
/// Only directories containing a `.git` metadata directory are consulted.
/// Dates truncate to the 10-character calendar date; the pooled result is
/// sorted newest-first and capped at 50 entries.
pub fn extract_timeline(
    workspace_root: &Path,
    dir_names: &[String],
    log: &dyn CommitLog,
) -> Vec<TimelineEntry> {
    let mut timeline = Vec::new();

    for name in dir_names {
        let dir = workspace_root.join(name);
        if !dir.join(".git").exists() {
            continue;
        }
        for (date, message) in log.recent_commits(&dir, COMMITS_PER_REPO) {
            timeline.push(TimelineEntry {
                date: date.chars().take(10).collect(),
                message,
                project: name.clone(),
            });
        }
    }

    timeline.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.project.cmp(&b.project))
            .then_with(|| a.message.cmp(&b.message))
    });
    timeline.truncate(TIMELINE_LIMIT);
    timeline
}
