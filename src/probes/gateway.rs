//! External service probe: run the gateway status command and read markers
//! out of whatever it printed.
//!
//! A non-zero exit is not a failure here; the captured output is still
//! searched, so a crashing gateway reports as not-running rather than
//! aborting the snapshot.

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::process::Command;
use std::sync::LazyLock;

static LAST_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*Last run(?: time)?:\s*(.+?)\s*$").unwrap());

pub const RUNNING_MARKER: &str = "Runtime: running";
pub const RPC_OK_MARKER: &str = "RPC probe: ok";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayStatus {
    pub running: bool,
    pub rpc_ok: bool,
    pub last_run: Option<String>,
}

/// Run the configured status command and parse its combined output.
pub fn probe_gateway(argv: &[String]) -> GatewayStatus {
    let Some((program, args)) = argv.split_first() else {
        return GatewayStatus::default();
    };

    let combined = match Command::new(program).args(args).output() {
        Ok(o) => {
            let mut text = String::from_utf8_lossy(&o.stdout).into_owned();
            text.push('\n');
            text.push_str(&String::from_utf8_lossy(&o.stderr));
            text
        }
        Err(e) => {
            debug!("gateway command {:?} not runnable: {}", program, e);
            String::new()
        }
    };

    parse_status_output(&combined)
}

/// Marker extraction, split out so text parsing is testable without a command.
pub fn parse_status_output(text: &str) -> GatewayStatus {
    GatewayStatus {
        running: text.contains(RUNNING_MARKER),
        rpc_ok: text.contains(RPC_OK_MARKER),
        last_run: LAST_RUN
            .captures(text)
            .map(|caps| caps[1].to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_markers() {
        let text = "Gateway v2\nRuntime: running\nRPC probe: ok\nLast run: 2026-08-25 23:40 UTC\n";
        let status = parse_status_output(text);
        assert!(status.running);
        assert!(status.rpc_ok);
        assert_eq!(status.last_run.as_deref(), Some("2026-08-25 23:40 UTC"));
    }

    #[test]
    fn test_parse_absent_markers() {
        let status = parse_status_output("Runtime: stopped\nsomething went wrong\n");
        assert!(!status.running);
        assert!(!status.rpc_ok);
        assert!(status.last_run.is_none());
    }

    #[test]
    fn test_last_run_time_variant() {
        let status = parse_status_output("Last run time: 3 minutes ago");
        assert_eq!(status.last_run.as_deref(), Some("3 minutes ago"));
    }

    #[test]
    fn test_unrunnable_command_degrades_to_default() {
        let argv = vec!["definitely-not-a-real-binary-pulseboard".to_string()];
        let status = probe_gateway(&argv);
        assert!(!status.running);
        assert!(!status.rpc_ok);
        assert!(status.last_run.is_none());
    }

    #[test]
    fn test_empty_argv() {
        let status = probe_gateway(&[]);
        assert!(!status.running);
    }
}
