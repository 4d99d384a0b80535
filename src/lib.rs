//! Pulseboard: workspace status snapshot generator.
//!
//! Pulseboard inspects a small set of sibling project directories plus their
//! git history, derives heuristic freshness/progress/ROI scores, and writes a
//! single JSON snapshot for the dashboard UI. There is no server and no
//! persistent state: every run recollects signals and fully overwrites the
//! previous snapshot.
//!
//! # Design
//!
//! - **Best-effort degrade-to-default**: missing directories, failed git
//!   invocations, and unreadable checklists contribute zero-signal defaults
//!   and are debug-logged, never escalated. Each derived number carries a
//!   `confidence` label saying how well it is backed by evidence.
//! - **Pure scoring**: the heuristics in [`core::score`] are free of I/O so
//!   their bound invariants stay unit-testable.
//! - **Explicit configuration**: everything the pipeline touches comes from
//!   one [`core::config::Config`] value, optionally loaded from
//!   `pulseboard.toml` at the workspace root.
//!
//! # Crate structure
//!
//! - [`core`]: config, scoring, scanning, checklist parsing, snapshot model
//! - [`probes`]: git activity and gateway status probes
//! - [`generate`]: the run-to-completion pipeline

pub mod core;
pub mod generate;
pub mod probes;

mod cli;

use crate::cli::{Cli, Command, ConfigCommand, OutputFormat, ProbeCommand};
use crate::core::config::Config;
use crate::core::error::PulseError;
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Parse the CLI and dispatch. The binary wraps this with context.
pub fn run() -> Result<(), PulseError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Generate(args) => {
            let root = resolve_workspace_root(args.dir)?;
            let mut config = Config::load(&root)?;
            if let Some(output) = args.output {
                config.output_path = output;
            }
            let report = generate::run_generate(&config)?;
            match args.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                OutputFormat::Text => {
                    println!("{}", "Pulseboard snapshot".bold());
                    println!("  projects: {}", report.project_count);
                    if let Some(top) = &report.top_project {
                        println!("  top roi:  {}", top.bright_cyan());
                    }
                    if !report.capped_projects.is_empty() {
                        println!(
                            "  {}   {}",
                            "capped:".yellow(),
                            report.capped_projects.join(", ")
                        );
                    }
                    println!(
                        "  written:  {}",
                        report.output_path.display().to_string().green()
                    );
                }
            }
            Ok(())
        }
        Command::Probe(probe) => match probe.command {
            ProbeCommand::Git { dir, format } => {
                let activity = probes::git::probe_activity(&dir);
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&activity)?);
                    }
                    OutputFormat::Text => {
                        println!("commits (7d):      {}", activity.commits_7d);
                        println!("contributors (7d): {}", activity.contributors_7d);
                        println!("trend (old->new):  {:?}", activity.trend);
                        println!(
                            "confidence:        {}",
                            format!("{:?}", activity.confidence).to_lowercase()
                        );
                    }
                }
                Ok(())
            }
            ProbeCommand::Gateway { dir, format } => {
                let root = resolve_workspace_root(dir)?;
                let config = Config::load(&root)?;
                let status = probes::gateway::probe_gateway(&config.gateway_command);
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&status)?);
                    }
                    OutputFormat::Text => {
                        let runtime = if status.running {
                            "running".green()
                        } else {
                            "stopped".red()
                        };
                        println!("runtime:  {}", runtime);
                        println!("rpc:      {}", if status.rpc_ok { "ok" } else { "unreachable" });
                        println!(
                            "last run: {}",
                            status.last_run.as_deref().unwrap_or("unknown")
                        );
                    }
                }
                Ok(())
            }
        },
        Command::Config(config_cli) => match config_cli.command {
            ConfigCommand::Show { dir } => {
                let root = resolve_workspace_root(dir)?;
                let config = Config::load(&root)?;
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| PulseError::ConfigError(e.to_string()))?;
                print!("{}", rendered);
                Ok(())
            }
        },
    }
}

/// Project directories are siblings of the generator's own checkout, so the
/// default workspace root is the parent of the current directory.
fn resolve_workspace_root(dir: Option<PathBuf>) -> Result<PathBuf, PulseError> {
    match dir {
        Some(dir) => Ok(dir),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(cwd.parent().map(Path::to_path_buf).unwrap_or(cwd))
        }
    }
}
