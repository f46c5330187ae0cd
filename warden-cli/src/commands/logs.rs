//! Log viewing command.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::Command;

use crate::error::CliError;
use crate::util::{Console, create_config_manager};

/// Pager used when `$PAGER` is unset
const DEFAULT_PAGER: &str = "less";

/// Logs command handler
pub fn cmd_logs(config_path: Option<&Path>, console: Console, no_pager: bool) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let log_path = config_manager.log_path();

    if !log_path.is_file() {
        console.warn(format!("No log file at {}", log_path.display()));
        return Ok(());
    }

    if !no_pager && io::stdout().is_terminal() {
        let pager = std::env::var("PAGER")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PAGER.to_string());
        if run_pager(&pager, &log_path) {
            return Ok(());
        }
        console.warn(format!("Could not run pager '{pager}', printing instead"));
    }

    let mut file = File::open(&log_path)?;
    io::copy(&mut file, &mut io::stdout().lock())?;
    Ok(())
}

/// Runs `pager` (which may carry arguments, e.g. `less -R`) on `path`.
///
/// Returns false if the pager could not be started.
fn run_pager(pager: &str, path: &Path) -> bool {
    let mut parts = pager.split_whitespace();
    let Some(program) = parts.next() else {
        return false;
    };
    Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .is_ok()
}
