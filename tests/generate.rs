//! End-to-end pipeline tests against a throwaway workspace.

use pulseboard::core::config::{Config, ProjectSpec};
use pulseboard::generate::run_generate;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// A hermetic config: no pinned default, no real gateway binary.
fn workspace_config(root: &Path) -> Config {
    Config {
        workspace_root: root.to_path_buf(),
        pinned: Some(ProjectSpec::new("bot", "Trading Bot", "bot")),
        projects: vec![
            ProjectSpec::new("alpha", "Alpha", "alpha"),
            ProjectSpec::new("ghost", "Ghost", "ghost"),
        ],
        gateway_command: vec!["pulseboard-test-no-such-gateway".to_string()],
        output_path: "out/status.json".into(),
        ..Config::default()
    }
}

fn seed_workspace(root: &Path) {
    fs::create_dir_all(root.join("bot")).unwrap();
    fs::write(
        root.join("bot/STATUS.md"),
        "# Status\n- [x] a\n- [ ] b\n- [x] c\n",
    )
    .unwrap();
    fs::write(root.join("bot/run.py"), "print('hi')\n").unwrap();

    fs::create_dir_all(root.join("alpha/src")).unwrap();
    fs::write(root.join("alpha/src/lib.rs"), "// alpha\n").unwrap();
    // "ghost" is deliberately missing.
}

fn read_snapshot(root: &Path) -> Value {
    let raw = fs::read_to_string(root.join("out/status.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_generate_produces_well_formed_snapshot() {
    let tmp = tempdir().unwrap();
    seed_workspace(tmp.path());
    let config = workspace_config(tmp.path());

    let report = run_generate(&config).unwrap();
    assert_eq!(report.project_count, 3);
    assert_eq!(report.output_path, tmp.path().join("out/status.json"));

    let snap = read_snapshot(tmp.path());
    assert!(snap["generatedAt"].is_string());
    assert!(snap["runId"].is_string());
    assert!(snap["dataVersion"].is_u64());
    assert_eq!(snap["digest"].as_array().unwrap().len(), 4);
    assert_eq!(snap["projects"].as_array().unwrap().len(), 3);

    // No gateway binary: runtime reads as stopped, last run unknown.
    assert_eq!(snap["digest"][0]["value"], "stopped");
    assert_eq!(snap["digest"][3]["value"], "unknown");

    // Top 3 priority modules with 1-based ranks, ordered by ROI.
    let modules = snap["priorityModules"].as_array().unwrap();
    assert_eq!(modules.len(), 3);
    assert_eq!(modules[0]["rank"], 1);
    let rois: Vec<i64> = modules.iter().map(|m| m["roiScore"].as_i64().unwrap()).collect();
    assert!(rois.windows(2).all(|w| w[0] >= w[1]));

    // Team scene mirrors the leader.
    assert_eq!(
        snap["teamScene"]["members"].as_array().unwrap().len(),
        3
    );
    assert!(snap["teamScene"]["focus"].as_str().unwrap().contains("leads the board"));
}

#[test]
fn test_checklist_and_missing_project_signals() {
    let tmp = tempdir().unwrap();
    seed_workspace(tmp.path());
    run_generate(&workspace_config(tmp.path())).unwrap();
    let snap = read_snapshot(tmp.path());

    let projects = snap["projects"].as_array().unwrap();
    let bot = projects.iter().find(|p| p["id"] == "bot").unwrap();
    assert_eq!(bot["checklist"]["total"], 3);
    assert_eq!(bot["checklist"]["done"], 2);
    assert_eq!(bot["checklist"]["open"], 1);
    // Fresh tempdir: bucket is hot, so the floor dominates the 67% checklist.
    assert_eq!(bot["freshness"], "hot");
    assert_eq!(bot["progress"], 70);
    assert_eq!(bot["trend"].as_array().unwrap().len(), 7);
    assert_eq!(bot["timeline"].as_array().unwrap().len(), 4);

    // Missing directory degrades to unknown/low, never an error.
    let ghost = projects.iter().find(|p| p["id"] == "ghost").unwrap();
    assert_eq!(ghost["freshness"], "unknown");
    assert_eq!(ghost["confidence"], "low");
    assert!(ghost["lastModifiedMs"].is_null());
    let roi = ghost["roiScore"].as_i64().unwrap();
    assert!((10..=99).contains(&roi));
}

#[test]
fn test_repeated_runs_are_stable_except_envelope() {
    let tmp = tempdir().unwrap();
    seed_workspace(tmp.path());
    let config = workspace_config(tmp.path());

    run_generate(&config).unwrap();
    let first = read_snapshot(tmp.path());
    run_generate(&config).unwrap();
    let second = read_snapshot(tmp.path());

    assert_eq!(
        serde_json::to_string(&first["projects"]).unwrap(),
        serde_json::to_string(&second["projects"]).unwrap()
    );
    assert_eq!(first["priorityModules"], second["priorityModules"]);
    assert_eq!(first["teamScene"], second["teamScene"]);
    assert_ne!(first["runId"], second["runId"]);
}

#[test]
fn test_output_overwrite_not_merge() {
    let tmp = tempdir().unwrap();
    seed_workspace(tmp.path());
    let config = workspace_config(tmp.path());

    fs::create_dir_all(tmp.path().join("out")).unwrap();
    fs::write(tmp.path().join("out/status.json"), "{\"stale\": true}").unwrap();
    run_generate(&config).unwrap();

    let snap = read_snapshot(tmp.path());
    assert!(snap.get("stale").is_none());
    assert!(snap["projects"].is_array());
}
