//! One check run: load, check, notify

use warden_core::config::ConfigManager;
use warden_core::error::WardenError;
use warden_core::inventory::Inventory;
use warden_core::monitoring::{SshExecutor, check_hosts};
use warden_core::notify::{Notifier, NotifyOutcome, SmtpMailer, WarningMessage, local_hostname};
use warden_core::tracing::{TracingConfig, init_tracing};

use crate::cli::Cli;

/// Runs the check for the hosts selected by `cli`.
///
/// Unreachable hosts and failed reports are logged and skipped; only
/// configuration, logging and mail failures end the run with an error.
pub async fn run(cli: &Cli) -> Result<(), WardenError> {
    let manager = ConfigManager::from_flag(cli.config.as_deref())?;
    let settings = manager.load_settings()?;
    init_tracing(&TracingConfig::log_file(manager.log_path(), &settings.logging))?;

    let inventory = manager.load_inventory()?;
    warn_unknown_hosts(&inventory, &cli.hosts);
    let hosts = inventory.select(&cli.hosts);
    if hosts.is_empty() {
        tracing::info!("No hosts to check");
        return Ok(());
    }

    tracing::info!(hosts = hosts.len(), dry_run = cli.dry_run, "Starting check run");
    let executor = SshExecutor::from_settings(&settings.check);
    let notifications = check_hosts(&hosts, &executor).await;

    if cli.dry_run {
        match WarningMessage::for_run(&notifications, &local_hostname()) {
            Some(message) => println!("Subject: {}\n\n{}", message.subject, message.body),
            None => println!("No disk at or above its threshold"),
        }
        return Ok(());
    }

    // Mail settings only matter once there is something to send
    if notifications.is_empty() {
        tracing::info!("No disk above threshold, no mail sent");
        return Ok(());
    }

    let mailer = SmtpMailer::from_settings(&settings.mail)?;
    match Notifier::with_local_origin(mailer).notify(&notifications).await? {
        NotifyOutcome::Sent { hosts } => tracing::info!(hosts, "Check run complete"),
        NotifyOutcome::Skipped => {}
    }
    Ok(())
}

fn warn_unknown_hosts(inventory: &Inventory, names: &[String]) {
    for name in names {
        if inventory.find(name).is_none() {
            tracing::warn!(host = %name, "Requested host is not in the inventory");
            eprintln!("Warning: host '{name}' is not in the inventory");
        }
    }
}
