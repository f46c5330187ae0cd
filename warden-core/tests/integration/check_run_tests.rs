//! End-to-end check runs with scripted SSH and SMTP collaborators

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use warden_core::models::{DiskUsage, Host};
use warden_core::monitoring::{CommandOutput, ExecError, RemoteExecutor, check_hosts};
use warden_core::notify::{Mailer, Notifier, NotifyOutcome, NotifyResult, WarningMessage};

const HEADER: &str = "Filesystem      Size  Used Avail Use% Mounted on\n";

/// Replays one canned report (or transport failure) per host address
#[derive(Default)]
struct ScriptedExecutor {
    reports: HashMap<String, Option<String>>,
}

impl ScriptedExecutor {
    fn report(mut self, address: &str, body: &str) -> Self {
        self.reports
            .insert(address.to_string(), Some(format!("{HEADER}{body}")));
        self
    }

    fn unreachable(mut self, address: &str) -> Self {
        self.reports.insert(address.to_string(), None);
        self
    }
}

#[async_trait]
impl RemoteExecutor for ScriptedExecutor {
    async fn run(&self, host: &Host, _command: &str) -> Result<CommandOutput, ExecError> {
        match self.reports.get(&host.host) {
            Some(Some(report)) => Ok(CommandOutput::success(report.clone())),
            _ => Err(ExecError::Connection {
                destination: host.destination(),
                message: "ssh: connect to host port 22: Connection refused".into(),
            }),
        }
    }
}

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<WarningMessage>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &WarningMessage) -> NotifyResult<()> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

fn host(name: &str, address: &str, threshold: u8, disks: &[&str]) -> Host {
    Host::new(
        name,
        address,
        "ops",
        threshold,
        disks.iter().map(ToString::to_string).collect(),
    )
}

#[tokio::test]
async fn test_scenario_single_breach() {
    let executor =
        ScriptedExecutor::default().report("10.0.0.1", "/dev/sda1 10G 9.5G 0.5G 95% /\n");
    let notifications = check_hosts(&[host("web1", "10.0.0.1", 90, &["sda1"])], &executor).await;

    assert_eq!(notifications.len(), 1);
    assert_eq!(
        notifications[0].disks,
        vec![DiskUsage::new("/dev/sda1", 95)]
    );
}

#[tokio::test]
async fn test_scenario_below_threshold_sends_nothing() {
    let executor =
        ScriptedExecutor::default().report("10.0.0.1", "/dev/sda1 10G 9.5G 0.5G 95% /\n");
    let notifications = check_hosts(&[host("web1", "10.0.0.1", 96, &["sda1"])], &executor).await;
    assert!(notifications.is_empty());

    let notifier = Notifier::new(RecordingMailer::default(), "checker");
    assert_eq!(
        notifier.notify(&notifications).await.unwrap(),
        NotifyOutcome::Skipped
    );
}

#[tokio::test]
async fn test_scenario_unreachable_host_is_skipped() {
    let executor = ScriptedExecutor::default()
        .unreachable("10.0.0.1")
        .report("10.0.0.2", "/dev/sdb1 100G 90G 10G 90% /data\n");
    let hosts = [
        host("web1", "10.0.0.1", 50, &["sda1"]),
        host("db1", "10.0.0.2", 80, &["/dev/sdb1"]),
    ];

    let notifications = check_hosts(&hosts, &executor).await;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].host, "db1");
}

#[tokio::test]
async fn test_full_run_mails_one_message() {
    let executor = ScriptedExecutor::default()
        .report(
            "10.0.0.1",
            "/dev/sda1 10G 9.5G 0.5G 95% /\ntmpfs 3.9G 3.9G 0 100% /dev/shm\n/dev/sdb1 100G 42G 58G 42% /data\n",
        )
        .report("10.0.0.2", "sdc1 50G 45G 5G 90% /var\n");
    let hosts = [
        host("web1", "10.0.0.1", 90, &["sda1", "sdb1"]),
        host("db1", "10.0.0.2", 90, &["/dev/sdc1"]),
    ];

    let notifications = check_hosts(&hosts, &executor).await;
    let notifier = Notifier::new(RecordingMailer::default(), "checker");
    let outcome = notifier.notify(&notifications).await.unwrap();
    assert_eq!(outcome, NotifyOutcome::Sent { hosts: 2 });

    let message = WarningMessage::for_run(&notifications, "checker").unwrap();
    assert!(message.body.contains("web1 [threshold=90%]:\n    /dev/sda1 -> 95%\n"));
    assert!(message.body.contains("db1 [threshold=90%]:\n    sdc1 -> 90%\n"));
    assert!(!message.body.contains("tmpfs"));
    assert!(!message.body.contains("sdb1"));
}
