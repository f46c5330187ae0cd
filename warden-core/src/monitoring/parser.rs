//! Parser for remote free-space reports
//!
//! Parses the output of [`DF_COMMAND`]: one header line followed by one line
//! per mounted filesystem, e.g.
//!
//! ```text
//! Filesystem      Size  Used Avail Use% Mounted on
//! /dev/sda1        10G  9.5G  0.5G  95% /
//! ```
//!
//! Parsing is deliberately lenient: a line without a `<digits>%` token yields
//! a zero-usage record instead of an error, so one odd line never aborts a run.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::DiskUsage;

/// Report command run on every host.
///
/// `-P` keeps each filesystem on a single line even when the device name is
/// longer than the column.
pub const DF_COMMAND: &str = "df -hP";

/// Matches a whitespace-delimited `<digits>%` token
static USAGE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)(\d+)%(?:\s|$)").expect("USAGE_TOKEN is a valid regex pattern")
});

/// Stateless parser for free-space reports
pub struct DiskReportParser;

impl DiskReportParser {
    /// Parses one report line.
    ///
    /// The disk identifier is the first whitespace-delimited token; the usage
    /// is the first `<digits>%` token, or 0 if there is none. Returns `None`
    /// only for blank lines, which have no identifier at all.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<DiskUsage> {
        let name = line.split_whitespace().next()?;
        Some(DiskUsage::new(name, Self::usage_percent(line)))
    }

    /// Parses a whole report, skipping its header line
    #[must_use]
    pub fn parse_report(report: &str) -> Vec<DiskUsage> {
        report.lines().skip(1).filter_map(Self::parse_line).collect()
    }

    /// First `<digits>%` token of `line`; 0 when absent or out of range
    fn usage_percent(line: &str) -> u32 {
        USAGE_TOKEN
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }
}
