//! Property tests for dot-path settings access

use proptest::prelude::*;
use serde_json::Value;
use warden_core::config::{SetOutcome, Settings};
use warden_core::error::ConfigError;

/// Strings that never parse as an unsigned integer
fn arb_non_integer() -> impl Strategy<Value = String> {
    prop_oneof!["[a-zA-Z][a-zA-Z0-9_-]{0,12}", "-[1-9][0-9]{0,4}", "[0-9]{1,3}\\.[0-9]{1,3}"]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any port number is accepted and read back
    #[test]
    fn port_set_then_get(port in any::<u16>()) {
        let mut settings = Settings::default();
        let outcome = settings.set_path("mail.port", &port.to_string()).unwrap();
        prop_assert!(matches!(outcome, SetOutcome::Updated { .. }), "unexpected outcome");
        prop_assert_eq!(settings.mail.port, port);
        prop_assert_eq!(settings.get_path("mail.port").unwrap(), Some(Value::from(port)));
    }

    /// A non-integer for an integer setting is a type mismatch and changes nothing
    #[test]
    fn non_integer_port_is_mismatch(raw in arb_non_integer()) {
        let mut settings = Settings::default();
        let before = settings.clone();
        let result = settings.set_path("mail.port", &raw);
        prop_assert!(
            matches!(result, Err(ConfigError::TypeMismatch { .. })),
            "expected type mismatch"
        );
        prop_assert_eq!(settings, before);
    }

    /// String settings take any value verbatim
    #[test]
    fn string_setting_takes_any_value(raw in "\\PC{0,40}") {
        let mut settings = Settings::default();
        settings.set_path("mail.host", &raw).unwrap();
        prop_assert_eq!(settings.mail.host, raw);
    }

    /// Unknown keys are reported as not found
    #[test]
    fn unknown_key_is_not_found(section in "[a-z]{1,8}", key in "[a-z]{1,8}") {
        prop_assume!(!["mail", "check", "logging"].contains(&section.as_str()));
        let mut settings = Settings::default();
        let path = format!("{section}.{key}");
        prop_assert_eq!(settings.get_path(&path).unwrap(), None);
        prop_assert_eq!(settings.set_path(&path, "x").unwrap(), SetOutcome::NotFound);
    }
}
