//! Snapshot data model and assembly.
//!
//! Everything the dashboard renders lives in one `Snapshot` document:
//! digest headlines, top-3 priority modules, the illustrative team scene, and
//! the full per-project status list. The snapshot is rebuilt from scratch and
//! fully overwrites the previous file on every run.

use crate::core::checklist::ChecklistStats;
use crate::core::error::PulseError;
use crate::core::score::{Confidence, Freshness};
use crate::probes::gateway::GatewayStatus;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Wire schema version; bump on any shape change.
pub const DATA_VERSION: u32 = 2;

const TIMELINE_STAGES: [&str; 4] = ["Prototype", "Build", "Harden", "Ship"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStage {
    pub stage: String,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatus {
    pub id: String,
    pub name: String,
    pub path: String,
    pub last_modified_ms: Option<u64>,
    pub freshness: Freshness,
    pub progress: u32,
    pub roi_score: u32,
    pub confidence: Confidence,
    /// Per-day commit counts, oldest first.
    pub trend: [u32; 7],
    pub checklist: ChecklistStats,
    pub timeline: Vec<TimelineStage>,
    pub next_actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestEntry {
    pub title: String,
    pub value: String,
    pub delta: Option<String>,
    pub confidence: Confidence,
    pub ts: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityModule {
    pub rank: u32,
    pub id: String,
    pub name: String,
    pub roi_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneMember {
    pub name: String,
    pub role: String,
    pub activity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScene {
    pub focus: String,
    pub members: Vec<SceneMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceModel {
    pub high: String,
    pub medium: String,
    pub low: String,
}

impl Default for ConfidenceModel {
    fn default() -> Self {
        ConfidenceModel {
            high: "backed by commit history and an explicit checklist".to_string(),
            medium: "backed by commit history only".to_string(),
            low: "heuristic defaults; little first-party evidence".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub generated_at: String,
    pub run_id: String,
    pub data_version: u32,
    pub confidence_model: ConfidenceModel,
    pub digest: Vec<DigestEntry>,
    pub priority_modules: Vec<PriorityModule>,
    pub team_scene: TeamScene,
    pub projects: Vec<ProjectStatus>,
}

/// Fixed 4-stage timeline; a stage is done once progress clears its quartile.
pub fn timeline_for(progress: u32) -> Vec<TimelineStage> {
    TIMELINE_STAGES
        .iter()
        .enumerate()
        .map(|(i, stage)| TimelineStage {
            stage: stage.to_string(),
            done: progress >= 25 * (i as u32 + 1),
        })
        .collect()
}

/// Suggested next actions for a project, cheapest signal first.
pub fn next_actions(checklist: &ChecklistStats, freshness: Freshness, commits_7d: u32) -> Vec<String> {
    let mut actions = Vec::new();
    if checklist.open > 0 {
        actions.push(format!("Close {} open checklist item(s)", checklist.open));
    }
    match freshness {
        Freshness::Cold => actions.push("Revisit: no changes in over a day".to_string()),
        Freshness::Unknown => actions.push("Wire up the project directory".to_string()),
        _ => {}
    }
    if commits_7d == 0 {
        actions.push("No commits this week; land something small".to_string());
    }
    if actions.is_empty() {
        actions.push("Keep shipping".to_string());
    }
    actions
}

/// Order projects by ROI and build the full snapshot document.
///
/// The sort is stable and ties keep input order, so repeated runs over an
/// unchanged workspace serialize the `projects` array byte-identically.
pub fn assemble(
    mut projects: Vec<ProjectStatus>,
    gateway: &GatewayStatus,
    generated_at: String,
    run_id: String,
) -> Snapshot {
    projects.sort_by(|a, b| b.roi_score.cmp(&a.roi_score));

    let priority_modules = projects
        .iter()
        .take(3)
        .enumerate()
        .map(|(i, p)| PriorityModule {
            rank: i as u32 + 1,
            id: p.id.clone(),
            name: p.name.clone(),
            roi_score: p.roi_score,
        })
        .collect();

    Snapshot {
        digest: build_digest(&projects, gateway, &generated_at),
        team_scene: build_team_scene(&projects),
        priority_modules,
        confidence_model: ConfidenceModel::default(),
        data_version: DATA_VERSION,
        generated_at,
        run_id,
        projects,
    }
}

fn build_digest(
    projects: &[ProjectStatus],
    gateway: &GatewayStatus,
    ts: &str,
) -> Vec<DigestEntry> {
    let fresh = projects
        .iter()
        .filter(|p| matches!(p.freshness, Freshness::Hot | Freshness::Warm))
        .count();
    let hot = projects
        .iter()
        .filter(|p| p.freshness == Freshness::Hot)
        .count();

    vec![
        DigestEntry {
            title: "Gateway runtime".to_string(),
            value: if gateway.running { "running" } else { "stopped" }.to_string(),
            delta: Some(if gateway.rpc_ok { "rpc ok" } else { "rpc unreachable" }.to_string()),
            confidence: Confidence::Medium,
            ts: ts.to_string(),
        },
        DigestEntry {
            title: "Top ROI".to_string(),
            value: projects
                .first()
                .map(|p| format!("{} ({})", p.name, p.roi_score))
                .unwrap_or_else(|| "no projects".to_string()),
            delta: None,
            confidence: projects
                .first()
                .map(|p| p.confidence)
                .unwrap_or(Confidence::Low),
            ts: ts.to_string(),
        },
        DigestEntry {
            title: "Fresh projects".to_string(),
            value: format!("{}/{}", fresh, projects.len()),
            delta: Some(format!("{} hot", hot)),
            confidence: Confidence::Medium,
            ts: ts.to_string(),
        },
        DigestEntry {
            title: "Gateway last run".to_string(),
            value: gateway
                .last_run
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            delta: None,
            confidence: if gateway.last_run.is_some() {
                Confidence::Medium
            } else {
                Confidence::Low
            },
            ts: ts.to_string(),
        },
    ]
}

fn build_team_scene(projects: &[ProjectStatus]) -> TeamScene {
    let roles = ["lead", "pairing", "scout"];
    let members = projects
        .iter()
        .take(3)
        .enumerate()
        .map(|(i, p)| SceneMember {
            name: p.name.clone(),
            role: roles[i].to_string(),
            activity: match p.freshness {
                Freshness::Hot => "deep in fresh changes".to_string(),
                Freshness::Warm => "picking the work back up".to_string(),
                Freshness::Cold => "circling back after a pause".to_string(),
                Freshness::Unknown => "waiting on signals".to_string(),
            },
        })
        .collect();

    TeamScene {
        focus: projects
            .first()
            .map(|p| format!("{} leads the board", p.name))
            .unwrap_or_else(|| "Quiet board".to_string()),
        members,
    }
}

/// Serialize and fully overwrite the snapshot file, creating parent dirs.
pub fn write_snapshot(snapshot: &Snapshot, path: &Path) -> Result<(), PulseError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut body = serde_json::to_string_pretty(snapshot)?;
    body.push('\n');
    fs::write(path, body)?;
    info!("snapshot written to {}", path.display());
    Ok(())
}
