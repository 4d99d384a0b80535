//! CLI struct definitions for the pulseboard command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(
    name = "pulseboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pulseboard is the daemonless status-snapshot generator: it scores local project directories by freshness, progress, and ROI, and writes one JSON snapshot for the dashboard.",
    disable_version_flag = true
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Generate the dashboard snapshot
    Generate(GenerateCli),
    /// Run a single probe without writing a snapshot
    Probe(ProbeCli),
    /// Inspect configuration
    Config(ConfigCli),
    /// Show version information
    Version,
}

#[derive(clap::Args, Debug)]
pub(crate) struct GenerateCli {
    /// Workspace root holding the project directories (defaults to the
    /// parent of the current directory).
    #[clap(long)]
    pub dir: Option<PathBuf>,
    /// Override the configured snapshot output path.
    #[clap(long)]
    pub output: Option<PathBuf>,
    /// Output format for the run summary: 'text' or 'json'.
    #[clap(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub(crate) struct ProbeCli {
    #[clap(subcommand)]
    pub command: ProbeCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ProbeCommand {
    /// 7-day commit activity for one directory
    Git {
        dir: PathBuf,
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Gateway service runtime status
    Gateway {
        /// Workspace root for config resolution.
        #[clap(long)]
        dir: Option<PathBuf>,
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(clap::Args, Debug)]
pub(crate) struct ConfigCli {
    #[clap(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ConfigCommand {
    /// Print the resolved configuration as TOML
    Show {
        #[clap(long)]
        dir: Option<PathBuf>,
    },
}
