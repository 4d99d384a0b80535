//! Version-control activity probe: 7-day commit histogram via the git CLI.
//!
//! Every git invocation is best-effort; a failed day bucket counts zero
//! commits rather than aborting the probe.

use crate::core::score::Confidence;
use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub commits_7d: u32,
    /// Per-day commit counts, oldest first.
    pub trend: [u32; 7],
    pub contributors_7d: u32,
    pub confidence: Confidence,
}

impl Activity {
    pub fn none() -> Self {
        Activity {
            commits_7d: 0,
            trend: [0; 7],
            contributors_7d: 0,
            confidence: Confidence::Low,
        }
    }
}

/// Probe commit activity for a directory over the trailing 7 days.
pub fn probe_activity(dir: &Path) -> Activity {
    if !dir.join(".git").exists() {
        return Activity::none();
    }

    let mut trend = [0u32; 7];
    for (slot, days_back) in (0..7).rev().enumerate() {
        let since = format!("{} days ago", days_back + 1);
        let until = format!("{} days ago", days_back);
        trend[slot] = count_commits(dir, &since, &until);
    }

    Activity {
        commits_7d: trend.iter().sum(),
        trend,
        contributors_7d: count_contributors(dir),
        // The bucket loop ran to completion over a real repository.
        confidence: Confidence::High,
    }
}

fn count_commits(dir: &Path, since: &str, until: &str) -> u32 {
    let output = Command::new("git")
        .args(["rev-list", "--count", "--since", since, "--until", until, "HEAD"])
        .current_dir(dir)
        .output();

    match output {
        Ok(o) if o.status.success() => String::from_utf8_lossy(&o.stdout)
            .trim()
            .parse::<u32>()
            .unwrap_or(0),
        Ok(o) => {
            debug!(
                "git rev-list failed in {}: {}",
                dir.display(),
                String::from_utf8_lossy(&o.stderr).trim()
            );
            0
        }
        Err(e) => {
            debug!("git not runnable in {}: {}", dir.display(), e);
            0
        }
    }
}

fn count_contributors(dir: &Path) -> u32 {
    let output = Command::new("git")
        .args(["log", "--since", "7 days ago", "--format=%an"])
        .current_dir(dir)
        .output();

    match output {
        Ok(o) if o.status.success() => {
            let stdout = String::from_utf8_lossy(&o.stdout);
            let authors: FxHashSet<&str> = stdout
                .lines()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect();
            authors.len() as u32
        }
        Ok(o) => {
            debug!(
                "git log failed in {}: {}",
                dir.display(),
                String::from_utf8_lossy(&o.stderr).trim()
            );
            0
        }
        Err(e) => {
            debug!("git not runnable in {}: {}", dir.display(), e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_no_repo_marker_is_zero_activity() {
        let tmp = tempdir().unwrap();
        let activity = probe_activity(tmp.path());
        assert_eq!(activity.commits_7d, 0);
        assert_eq!(activity.trend, [0; 7]);
        assert_eq!(activity.contributors_7d, 0);
        assert_eq!(activity.confidence, Confidence::Low);
    }

    #[test]
    fn test_missing_dir_is_zero_activity() {
        let activity = probe_activity(Path::new("/no/such/repo"));
        assert_eq!(activity.confidence, Confidence::Low);
    }

    #[test]
    fn test_broken_repo_still_completes_buckets() {
        // A .git marker with no real repository behind it: every git call
        // fails, every bucket degrades to zero, the loop still finishes.
        let tmp = tempdir().unwrap();
        std::fs::create_dir(tmp.path().join(".git")).unwrap();
        let activity = probe_activity(tmp.path());
        assert_eq!(activity.trend, [0; 7]);
        assert_eq!(activity.commits_7d, 0);
        assert_eq!(activity.confidence, Confidence::High);
    }
}
