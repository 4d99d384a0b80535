//! The generate pipeline: raw signals -> scoring -> assembly -> file write.
//!
//! One direction, one pass, run to completion. Per-project signal collection
//! degrades to defaults on any failure; the only hard errors are config
//! problems and an unwritable output file.

use crate::core::checklist::{self, ChecklistStats};
use crate::core::config::{Config, ProjectSpec};
use crate::core::error::PulseError;
use crate::core::scan;
use crate::core::score::{self, ScoreInputs};
use crate::core::snapshot::{self, ProjectStatus};
use crate::core::time;
use crate::probes::{gateway, git};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of one generator run, for the CLI envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub project_count: usize,
    pub top_project: Option<String>,
    /// Projects whose directory walk hit the visited-entry cap.
    pub capped_projects: Vec<String>,
    pub generated_at: String,
}

/// Collect signals for every configured project, score them, assemble the
/// snapshot, and overwrite the output file.
pub fn run_generate(config: &Config) -> Result<GenerateReport, PulseError> {
    let now_ms = time::now_epoch_ms();
    let mut projects = Vec::new();
    let mut capped_projects = Vec::new();

    for spec in config.all_projects() {
        let (status, capped) = collect_project(config, spec, now_ms);
        if capped {
            capped_projects.push(spec.id.clone());
        }
        projects.push(status);
    }

    let gateway_status = gateway::probe_gateway(&config.gateway_command);
    let snapshot = snapshot::assemble(
        projects,
        &gateway_status,
        time::now_iso8601(),
        time::new_run_id(),
    );

    let output_path = config.resolved_output();
    snapshot::write_snapshot(&snapshot, &output_path)?;

    Ok(GenerateReport {
        output_path,
        project_count: snapshot.projects.len(),
        top_project: snapshot.projects.first().map(|p| p.name.clone()),
        capped_projects,
        generated_at: snapshot.generated_at,
    })
}

fn collect_project(config: &Config, spec: &ProjectSpec, now_ms: u64) -> (ProjectStatus, bool) {
    let path = config.project_path(spec);
    let scan_result = scan::scan_tree(&path, config.scan_cap);
    let checklist = read_checklists(config, &path);
    let activity = git::probe_activity(&path);

    let card = score::score_project(
        &ScoreInputs {
            latest_mod_ms: scan_result.latest_mod_ms,
            checklist,
            commits_7d: activity.commits_7d,
            activity_confidence: activity.confidence,
        },
        now_ms,
    );

    let status = ProjectStatus {
        id: spec.id.clone(),
        name: spec.name.clone(),
        path: path.display().to_string(),
        last_modified_ms: scan_result.latest_mod_ms,
        freshness: card.freshness,
        progress: card.progress,
        roi_score: card.roi_score,
        confidence: card.confidence,
        trend: activity.trend,
        checklist,
        timeline: snapshot::timeline_for(card.progress),
        next_actions: snapshot::next_actions(&checklist, card.freshness, activity.commits_7d),
    };
    (status, scan_result.capped)
}

/// Read and sum the checklist documents under a project directory. Missing
/// or unreadable documents count zero.
fn read_checklists(config: &Config, dir: &Path) -> ChecklistStats {
    [&config.status_doc, &config.todo_doc]
        .into_iter()
        .fold(ChecklistStats::default(), |acc, doc| {
            match fs::read_to_string(dir.join(doc)) {
                Ok(text) => acc.merge(checklist::count_checklist(&text)),
                Err(e) => {
                    debug!("no checklist at {}/{}: {}", dir.display(), doc, e);
                    acc
                }
            }
        })
}
