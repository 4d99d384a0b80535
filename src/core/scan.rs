//! Iterative filesystem walk: newest modification time under a directory.
//!
//! Uses an explicit worklist instead of recursion so depth is bounded and the
//! visited-entry cap can stop the walk mid-tree. Missing or unreadable
//! directories read as empty.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Directory names never descended into.
const SKIP_DIRS: [&str; 4] = [".git", "node_modules", ".next", "target"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanResult {
    /// Max modification time (epoch ms) over visited entries, None if nothing
    /// readable was seen.
    pub latest_mod_ms: Option<u64>,
    pub visited: usize,
    pub capped: bool,
}

impl ScanResult {
    pub fn empty() -> Self {
        ScanResult {
            latest_mod_ms: None,
            visited: 0,
            capped: false,
        }
    }
}

/// Walk `root`, tracking the newest mtime among all visited entries.
///
/// Stops as soon as `cap` entries have been visited; when capped the result
/// is the max over the entries seen up to that point, not the whole tree.
pub fn scan_tree(root: &Path, cap: usize) -> ScanResult {
    let mut result = ScanResult::empty();
    if !root.is_dir() {
        return result;
    }

    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("scan: skipping unreadable dir {}: {}", dir.display(), e);
                continue;
            }
        };
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("scan: skipping entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            if result.visited >= cap {
                result.capped = true;
                return result;
            }
            result.visited += 1;

            if let Ok(meta) = entry.metadata() {
                if let Ok(modified) = meta.modified() {
                    let ms = modified
                        .duration_since(UNIX_EPOCH)
                        .unwrap_or_default()
                        .as_millis() as u64;
                    result.latest_mod_ms =
                        Some(result.latest_mod_ms.map_or(ms, |prev| prev.max(ms)));
                }
                if meta.is_dir() {
                    let name = entry.file_name();
                    let name = name.to_string_lossy();
                    if !SKIP_DIRS.iter().any(|skip| *skip == name) {
                        pending.push(entry.path());
                    }
                }
            }
        }
    }
    result
}
