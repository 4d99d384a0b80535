//! Markdown checkbox counting for STATUS/TODO documents.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static CHECKBOX_ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-*]\s+\[(?: |x|X)\](?:\s|$)").unwrap());
static CHECKBOX_DONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-*]\s+\[(?:x|X)\](?:\s|$)").unwrap());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistStats {
    pub total: u32,
    pub done: u32,
    pub open: u32,
}

impl ChecklistStats {
    pub fn merge(self, other: ChecklistStats) -> ChecklistStats {
        let total = self.total + other.total;
        let done = self.done + other.done;
        ChecklistStats {
            total,
            done,
            open: total.saturating_sub(done),
        }
    }
}

/// Count checkbox list items in markdown text. Pure; empty input yields zeros.
pub fn count_checklist(text: &str) -> ChecklistStats {
    let total = CHECKBOX_ANY.find_iter(text).count() as u32;
    let done = CHECKBOX_DONE.find_iter(text).count() as u32;
    ChecklistStats {
        total,
        done,
        open: total.saturating_sub(done),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(count_checklist(""), ChecklistStats::default());
    }

    #[test]
    fn test_counts_done_and_open() {
        let stats = count_checklist("- [x] a\n- [ ] b\n- [x] c");
        assert_eq!(stats.total, 3);
        assert_eq!(stats.done, 2);
        assert_eq!(stats.open, 1);
    }

    #[test]
    fn test_case_insensitive_check_and_star_bullets() {
        let stats = count_checklist("* [X] shouted\n  - [ ] indented\nplain line");
        assert_eq!(stats.total, 2);
        assert_eq!(stats.done, 1);
    }

    #[test]
    fn test_ignores_non_list_brackets() {
        let stats = count_checklist("see [x] in prose\n-[x] missing space\n");
        assert_eq!(stats.total, 0);
    }

    #[test]
    fn test_open_never_negative() {
        let stats = count_checklist("- [x] only done items\n- [X] two");
        assert_eq!(stats.open, 0);
        assert!(stats.done <= stats.total);
    }

    #[test]
    fn test_merge_sums_counts() {
        let a = count_checklist("- [x] a\n- [ ] b");
        let b = count_checklist("- [ ] c");
        let merged = a.merge(b);
        assert_eq!(merged.total, 3);
        assert_eq!(merged.done, 1);
        assert_eq!(merged.open, 2);
    }
}
