//! Configuration directory round trips through the file system

use std::fs;

use tempfile::TempDir;
use warden_core::config::{ConfigManager, SetOutcome};
use warden_core::error::ConfigError;
use warden_core::inventory::{AddOutcome, HostEdit};
use warden_core::models::Host;

fn manager() -> (TempDir, ConfigManager) {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().to_path_buf());
    (dir, manager)
}

#[test]
fn test_missing_files_load_defaults() {
    let (_dir, manager) = manager();
    assert!(manager.load_inventory().unwrap().hosts.is_empty());
    assert_eq!(manager.load_settings().unwrap().mail.port, 587);
}

#[test]
fn test_inventory_survives_save_and_load() {
    let (_dir, manager) = manager();
    let mut inventory = manager.load_inventory().unwrap();
    let web1 = Host::new(
        "web1",
        "10.0.0.1",
        "ops",
        80,
        vec!["sda1".into(), "sdb1".into()],
    );
    assert_eq!(inventory.add(web1.clone()).unwrap(), AddOutcome::Added);
    manager.save_inventory(&inventory).unwrap();

    let mut reloaded = manager.load_inventory().unwrap();
    assert_eq!(reloaded.find("web1"), Some(&web1));

    reloaded
        .edit(
            "web1",
            HostEdit {
                threshold: Some(90),
                ..Default::default()
            },
        )
        .unwrap();
    manager.save_inventory(&reloaded).unwrap();
    assert_eq!(
        manager
            .load_inventory()
            .unwrap()
            .find("web1")
            .unwrap()
            .threshold,
        90
    );
}

#[test]
fn test_string_threshold_in_hand_edited_inventory() {
    let (dir, manager) = manager();
    fs::write(
        dir.path().join("hosts.json"),
        r#"{"hosts":[{"name":"web1","host":"10.0.0.1","user":"ops","threshold":"85","disks":["sda1"]}]}"#,
    )
    .unwrap();
    assert_eq!(
        manager
            .load_inventory()
            .unwrap()
            .find("web1")
            .unwrap()
            .threshold,
        85
    );
}

#[test]
fn test_type_mismatch_leaves_file_untouched() {
    let (_dir, manager) = manager();
    let mut settings = manager.load_settings().unwrap();
    settings.set_path("mail.host", "smtp.example.com").unwrap();
    manager.save_settings(&settings).unwrap();
    let before = fs::read(manager.settings_path()).unwrap();

    let mut settings = manager.load_settings().unwrap();
    let result = settings.set_path("mail.port", "not-a-number");
    assert!(matches!(result, Err(ConfigError::TypeMismatch { .. })));

    assert_eq!(fs::read(manager.settings_path()).unwrap(), before);
}

#[test]
fn test_set_then_reload() {
    let (_dir, manager) = manager();
    let mut settings = manager.load_settings().unwrap();
    let outcome = settings
        .set_path("mail.wardens", "ops@example.com, oncall@example.com")
        .unwrap();
    assert!(matches!(outcome, SetOutcome::Updated { .. }));
    manager.save_settings(&settings).unwrap();

    let reloaded = manager.load_settings().unwrap();
    assert_eq!(
        reloaded.mail.wardens,
        vec!["ops@example.com", "oncall@example.com"]
    );
}

#[test]
fn test_malformed_json_is_parse_error() {
    let (dir, manager) = manager();
    fs::write(dir.path().join("config.json"), "{ not json").unwrap();
    assert!(matches!(
        manager.load_settings(),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_unrecognized_entries_survive_set_and_save() {
    let (dir, manager) = manager();
    fs::write(
        dir.path().join("config.json"),
        r#"{"mail":{"host":"smtp.example.com","port":587,"footer":"keep me"},"extra":{"k":1}}"#,
    )
    .unwrap();

    let mut settings = manager.load_settings().unwrap();
    settings.set_path("mail.port", "465").unwrap();
    manager.save_settings(&settings).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(manager.settings_path()).unwrap()).unwrap();
    assert_eq!(written["mail"]["port"], 465);
    assert_eq!(written["mail"]["footer"], "keep me");
    assert_eq!(written["extra"], serde_json::json!({"k": 1}));
}
