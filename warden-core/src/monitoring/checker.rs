//! Host checker
//!
//! Runs [`DF_COMMAND`] on every host in order, parses and filters the report,
//! and collects one [`Notification`] per host with breaching disks. A host
//! that cannot be reached or whose report fails is logged and skipped; it
//! never aborts the run.

use tracing::Instrument;

use super::filter::breaching_disks;
use super::parser::{DF_COMMAND, DiskReportParser};
use super::ssh_exec::RemoteExecutor;
use crate::models::{Host, Notification};
use crate::tracing::span_names;

/// Checks `hosts` sequentially and returns notifications in host order
pub async fn check_hosts<E>(hosts: &[Host], executor: &E) -> Vec<Notification>
where
    E: RemoteExecutor + ?Sized,
{
    let mut notifications = Vec::new();
    for host in hosts {
        let span = tracing::info_span!(span_names::HOST_CHECK, host = %host.name);
        if let Some(notification) = check_host(host, executor).instrument(span).await {
            notifications.push(notification);
        }
    }
    tracing::info!(
        hosts = hosts.len(),
        notifications = notifications.len(),
        "Check run finished"
    );
    notifications
}

/// Checks a single host; `None` when it failed or nothing breached
pub async fn check_host<E>(host: &Host, executor: &E) -> Option<Notification>
where
    E: RemoteExecutor + ?Sized,
{
    let output = match executor.run(host, DF_COMMAND).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(error = %e, "Unable to run report command, skipping host");
            return None;
        }
    };

    if !output.success {
        tracing::warn!(
            exit_code = ?output.exit_code,
            stderr = %output.stderr,
            "Report command failed, skipping host"
        );
        return None;
    }

    let usages = DiskReportParser::parse_report(&output.stdout);
    tracing::debug!(disks = usages.len(), "Parsed report");

    let notification = Notification::for_host(host, breaching_disks(host, usages));
    match &notification {
        Some(n) => tracing::info!(
            disks = n.disks.len(),
            threshold = host.threshold,
            "Disks at or above threshold"
        ),
        None => tracing::info!("No notification needed"),
    }
    notification
}
