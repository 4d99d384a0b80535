//! Generator configuration: workspace layout, probe commands, output target.
//!
//! All knobs live in one explicit struct handed to the pipeline; nothing is
//! read from module-level globals. An optional `pulseboard.toml` at the
//! workspace root overrides the defaults.

use crate::core::error::PulseError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "pulseboard.toml";

/// Bounds for the filesystem scanner's visited-entry cap.
pub const SCAN_CAP_MIN: usize = 5000;
pub const SCAN_CAP_MAX: usize = 7000;
pub const DEFAULT_SCAN_CAP: usize = 6000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectSpec {
    pub id: String,
    pub name: String,
    /// Directory name under the workspace root.
    pub dir: String,
}

impl ProjectSpec {
    pub fn new(id: &str, name: &str, dir: &str) -> Self {
        ProjectSpec {
            id: id.to_string(),
            name: name.to_string(),
            dir: dir.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory under which the project directories live.
    pub workspace_root: PathBuf,
    /// Checklist documents read from each project directory.
    pub status_doc: String,
    pub todo_doc: String,
    /// Argv for the external service status probe.
    pub gateway_command: Vec<String>,
    /// Snapshot destination, resolved against `workspace_root` when relative.
    pub output_path: PathBuf,
    pub scan_cap: usize,
    /// Fixed project listed first, ahead of the scanned directory list.
    pub pinned: Option<ProjectSpec>,
    pub projects: Vec<ProjectSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workspace_root: PathBuf::from("."),
            status_doc: "STATUS.md".to_string(),
            todo_doc: "TODO.md".to_string(),
            gateway_command: vec!["gateway".to_string(), "status".to_string()],
            output_path: PathBuf::from("dashboard/data/status.json"),
            scan_cap: DEFAULT_SCAN_CAP,
            pinned: Some(ProjectSpec::new(
                "polymarket-bot",
                "Polymarket Bot",
                "polymarket-bot",
            )),
            projects: vec![
                ProjectSpec::new("gateway", "Gateway", "gateway"),
                ProjectSpec::new("dashboard", "Status Dashboard", "dashboard"),
                ProjectSpec::new("research", "Research Notes", "research"),
            ],
        }
    }
}

impl Config {
    /// Load config for a workspace root. A missing config file yields the
    /// defaults; a present but malformed file is a hard error (the one place
    /// degrade-to-default does not apply, since a silently ignored config
    /// would misreport every project).
    pub fn load(workspace_root: &Path) -> Result<Config, PulseError> {
        let path = workspace_root.join(CONFIG_FILE_NAME);
        let mut config = if path.is_file() {
            let raw = fs::read_to_string(&path)?;
            toml::from_str::<Config>(&raw)
                .map_err(|e| PulseError::ConfigError(format!("{}: {}", path.display(), e)))?
        } else {
            debug!("no {} at {}, using defaults", CONFIG_FILE_NAME, workspace_root.display());
            Config::default()
        };
        config.workspace_root = workspace_root.to_path_buf();
        if config.scan_cap < SCAN_CAP_MIN || config.scan_cap > SCAN_CAP_MAX {
            let clamped = config.scan_cap.clamp(SCAN_CAP_MIN, SCAN_CAP_MAX);
            warn!("scan_cap {} outside {}..={}, clamping to {}",
                config.scan_cap, SCAN_CAP_MIN, SCAN_CAP_MAX, clamped);
            config.scan_cap = clamped;
        }
        Ok(config)
    }

    /// All projects in snapshot input order: pinned first, then the list.
    pub fn all_projects(&self) -> Vec<&ProjectSpec> {
        self.pinned.iter().chain(self.projects.iter()).collect()
    }

    pub fn project_path(&self, spec: &ProjectSpec) -> PathBuf {
        self.workspace_root.join(&spec.dir)
    }

    pub fn resolved_output(&self) -> PathBuf {
        if self.output_path.is_absolute() {
            self.output_path.clone()
        } else {
            self.workspace_root.join(&self.output_path)
        }
    }
}
