//! Property tests for the threshold filter

use proptest::prelude::*;
use warden_core::models::{DiskUsage, Host, strip_dev};
use warden_core::monitoring::breaching_disks;

/// Bare device names from a small pool so matches actually happen
fn arb_device() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "sda1".to_owned(),
        "sda2".to_owned(),
        "sdb1".to_owned(),
        "nvme0n1p1".to_owned(),
        "tmpfs".to_owned(),
    ])
}

/// A device with or without the `/dev/` prefix
fn arb_disk_id() -> impl Strategy<Value = String> {
    (arb_device(), any::<bool>()).prop_map(|(device, prefixed)| {
        if prefixed {
            format!("/dev/{device}")
        } else {
            device
        }
    })
}

fn arb_usage() -> impl Strategy<Value = DiskUsage> {
    (arb_disk_id(), 0u32..=100).prop_map(|(name, usage)| DiskUsage::new(name, usage))
}

fn host(threshold: u8, disks: Vec<String>) -> Host {
    Host::new("web1", "10.0.0.1", "ops", threshold, disks)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A record qualifies iff its disk is monitored (prefix-insensitive) and
    /// its usage is at or above the threshold
    #[test]
    fn qualifies_iff_monitored_and_at_threshold(
        threshold in 0u8..=100,
        disks in prop::collection::vec(arb_disk_id(), 1..4),
        usages in prop::collection::vec(arb_usage(), 0..12),
    ) {
        let host = host(threshold, disks.clone());
        let expected: Vec<DiskUsage> = usages
            .iter()
            .filter(|u| {
                u.usage >= u32::from(threshold)
                    && disks.iter().any(|d| strip_dev(d) == strip_dev(&u.name))
            })
            .cloned()
            .collect();

        prop_assert_eq!(breaching_disks(&host, usages), expected);
    }

    /// Usage equal to the threshold always qualifies
    #[test]
    fn equality_qualifies(threshold in 0u8..=100, device in arb_device(), prefixed in any::<bool>()) {
        let host = host(threshold, vec![device.clone()]);
        let name = if prefixed { format!("/dev/{device}") } else { device };
        let usage = DiskUsage::new(name, u32::from(threshold));
        prop_assert_eq!(breaching_disks(&host, vec![usage]).len(), 1);
    }

    /// One below the threshold never qualifies
    #[test]
    fn below_threshold_never_qualifies(threshold in 1u8..=100, device in arb_device()) {
        let host = host(threshold, vec![device.clone()]);
        let usage = DiskUsage::new(device, u32::from(threshold) - 1);
        prop_assert!(breaching_disks(&host, vec![usage]).is_empty());
    }
}
