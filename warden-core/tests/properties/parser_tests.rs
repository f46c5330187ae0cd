//! Property tests for the free-space report parser

use proptest::prelude::*;
use warden_core::monitoring::DiskReportParser;

/// Disk identifiers as they appear in the first column
fn arb_disk_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "/dev/[a-z]{2,4}[0-9]{0,2}",
        "[a-z]{3,8}",
        "/dev/mapper/[a-z]{2,6}-[a-z]{2,6}",
    ]
}

/// Columns that never form a `<digits>%` token
fn arb_plain_token() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,3}(\\.[0-9])?[KMGT]", "/[a-z]{0,8}", "[A-Za-z]{1,8}"]
}

/// Runs of spaces and tabs
fn arb_gap() -> impl Strategy<Value = String> {
    "[ \t]{1,6}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A well-formed `<n>%` column yields usage n whatever surrounds it
    #[test]
    fn percent_token_yields_usage(
        name in arb_disk_name(),
        before in prop::collection::vec((arb_gap(), arb_plain_token()), 0..4),
        after in prop::collection::vec((arb_gap(), arb_plain_token()), 0..3),
        gap in arb_gap(),
        lead in "[ \t]{0,3}",
        usage in 0u32..=1_000_000,
    ) {
        let mut line = format!("{lead}{name}");
        for (g, token) in &before {
            line.push_str(g);
            line.push_str(token);
        }
        line.push_str(&gap);
        line.push_str(&format!("{usage}%"));
        for (g, token) in &after {
            line.push_str(g);
            line.push_str(token);
        }

        let parsed = DiskReportParser::parse_line(&line).unwrap();
        prop_assert_eq!(parsed.name, name);
        prop_assert_eq!(parsed.usage, usage);
    }

    /// A line without any `%` yields usage 0
    #[test]
    fn missing_percent_yields_zero(
        name in arb_disk_name(),
        columns in prop::collection::vec((arb_gap(), arb_plain_token()), 0..6),
    ) {
        let mut line = name.clone();
        for (g, token) in &columns {
            line.push_str(g);
            line.push_str(token);
        }

        let parsed = DiskReportParser::parse_line(&line).unwrap();
        prop_assert_eq!(parsed.name, name);
        prop_assert_eq!(parsed.usage, 0);
    }

    /// Only the first `<n>%` column counts
    #[test]
    fn first_percent_token_wins(
        name in arb_disk_name(),
        first in 0u32..=100,
        second in 0u32..=100,
    ) {
        let line = format!("{name} 10G {first}% {second}% /");
        prop_assert_eq!(DiskReportParser::parse_line(&line).unwrap().usage, first);
    }

    /// The header is always dropped and every other line yields one record
    #[test]
    fn report_has_one_record_per_body_line(
        rows in prop::collection::vec((arb_disk_name(), 0u32..=100), 0..10),
    ) {
        let mut report = String::from("Filesystem Size Used Avail Use% Mounted on\n");
        for (name, usage) in &rows {
            report.push_str(&format!("{name} 10G 5G 5G {usage}% /mnt\n"));
        }

        let parsed = DiskReportParser::parse_report(&report);
        prop_assert_eq!(parsed.len(), rows.len());
        for (record, (name, usage)) in parsed.iter().zip(&rows) {
            prop_assert_eq!(&record.name, name);
            prop_assert_eq!(record.usage, *usage);
        }
    }
}
