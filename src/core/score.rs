//! Scoring heuristics: freshness buckets, progress, ROI, confidence.
//!
//! Pure functions over already-collected signals; no I/O here. The progress
//! rule is an optimistic maximum: the strongest single signal wins and weaker
//! signals never pull it down.

use crate::core::checklist::ChecklistStats;
use serde::{Deserialize, Serialize};

pub const MS_PER_HOUR: f64 = 3_600_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    Hot,
    Warm,
    Cold,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Signals feeding one project's scores.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs {
    pub latest_mod_ms: Option<u64>,
    pub checklist: ChecklistStats,
    pub commits_7d: u32,
    pub activity_confidence: Confidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub freshness: Freshness,
    pub progress: u32,
    pub roi_score: u32,
    pub confidence: Confidence,
}

pub fn freshness_hours(now_ms: u64, latest_mod_ms: Option<u64>) -> Option<f64> {
    latest_mod_ms.map(|t| now_ms.saturating_sub(t) as f64 / MS_PER_HOUR)
}

pub fn freshness_bucket(hours: Option<f64>) -> Freshness {
    match hours {
        None => Freshness::Unknown,
        Some(h) if h < 6.0 => Freshness::Hot,
        Some(h) if h < 24.0 => Freshness::Warm,
        Some(_) => Freshness::Cold,
    }
}

/// Explicit completion from checkbox counts, None when there is no checklist.
pub fn completion_from_todos(checklist: &ChecklistStats) -> Option<u32> {
    if checklist.total == 0 {
        return None;
    }
    let pct = 100.0 * f64::from(checklist.done) / f64::from(checklist.total);
    Some(pct.round() as u32)
}

fn freshness_floor(freshness: Freshness) -> u32 {
    match freshness {
        Freshness::Hot => 70,
        Freshness::Warm => 52,
        Freshness::Cold => 34,
        Freshness::Unknown => 0,
    }
}

fn freshness_bonus(freshness: Freshness) -> u32 {
    match freshness {
        Freshness::Hot => 15,
        Freshness::Warm => 7,
        Freshness::Cold => 2,
        Freshness::Unknown => 0,
    }
}

/// Optimistic-maximum progress: strongest of explicit completion, recency
/// floor, and commit volume (capped at 85).
pub fn progress(completion: Option<u32>, freshness: Freshness, commits_7d: u32) -> u32 {
    let commit_term = commits_7d.saturating_mul(8).min(85);
    completion
        .unwrap_or(0)
        .max(freshness_floor(freshness))
        .max(commit_term)
}

/// ROI priority score, always within 10..=99.
pub fn roi_score(progress: u32, freshness: Freshness, commits_7d: u32) -> u32 {
    let raw = f64::from(progress) * 0.55
        + f64::from(commits_7d) * 3.0
        + f64::from(freshness_bonus(freshness));
    raw.round().clamp(10.0, 99.0) as u32
}

pub fn confidence(activity_confidence: Confidence, checklist: &ChecklistStats) -> Confidence {
    match (activity_confidence, checklist.total) {
        (Confidence::High, total) if total > 0 => Confidence::High,
        (Confidence::High, _) => Confidence::Medium,
        _ => Confidence::Low,
    }
}

pub fn score_project(inputs: &ScoreInputs, now_ms: u64) -> ScoreCard {
    let hours = freshness_hours(now_ms, inputs.latest_mod_ms);
    let freshness = freshness_bucket(hours);
    let completion = completion_from_todos(&inputs.checklist);
    let progress = progress(completion, freshness, inputs.commits_7d);
    ScoreCard {
        freshness,
        progress,
        roi_score: roi_score(progress, freshness, inputs.commits_7d),
        confidence: confidence(inputs.activity_confidence, &inputs.checklist),
    }
}
