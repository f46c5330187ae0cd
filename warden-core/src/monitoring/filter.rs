//! Threshold filter

use crate::models::{DiskUsage, Host};

/// Returns the usages that should be reported for `host`, in report order.
///
/// A usage qualifies when the host monitors the disk (see [`Host::monitors`])
/// and its usage is at or above the host's threshold.
#[must_use]
pub fn breaching_disks<I>(host: &Host, usages: I) -> Vec<DiskUsage>
where
    I: IntoIterator<Item = DiskUsage>,
{
    let threshold = u32::from(host.threshold);
    usages
        .into_iter()
        .filter(|usage| usage.usage >= threshold && host.monitors(&usage.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(threshold: u8) -> Host {
        Host::new("web1", "10.0.0.1", "ops", threshold, vec!["sda1".into()])
    }

    fn usages() -> Vec<DiskUsage> {
        vec![
            DiskUsage::new("/dev/sda1", 95),
            DiskUsage::new("tmpfs", 99),
            DiskUsage::new("/dev/sdb1", 97),
        ]
    }

    #[test]
    fn test_only_monitored_disks_qualify() {
        let result = breaching_disks(&host(90), usages());
        assert_eq!(result, vec![DiskUsage::new("/dev/sda1", 95)]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let result = breaching_disks(&host(95), usages());
        assert_eq!(result.len(), 1);
        assert!(breaching_disks(&host(96), usages()).is_empty());
    }

    #[test]
    fn test_report_order_is_kept() {
        let host = Host::new(
            "web1",
            "10.0.0.1",
            "ops",
            50,
            vec!["sdb1".into(), "/dev/sda1".into()],
        );
        let names: Vec<_> = breaching_disks(&host, usages())
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["/dev/sda1", "/dev/sdb1"]);
    }

    #[test]
    fn test_zero_threshold_reports_every_monitored_disk() {
        let result = breaching_disks(&host(0), vec![DiskUsage::new("sda1", 0)]);
        assert_eq!(result.len(), 1);
    }
}
