//! Filesystem usage per mount point

use serde::{Deserialize, Serialize};
use sysinfo::Disks;
use vitals_config::constants::PSEUDO_FSTYPES;

use crate::memory::usage_percent;

/// Usage for a single mounted filesystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskUsage {
    pub mount_point: String,
    pub device: String,
    pub fstype: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub usage_percent: f64,
    pub removable: bool,
}

/// True for filesystem types that are skipped when no explicit mount-point
/// filter is given.
pub fn is_pseudo_fstype(fstype: &str) -> bool {
    PSEUDO_FSTYPES.contains(&fstype)
}

/// Collect usage for the requested mount points.
///
/// An empty filter reports every mounted filesystem except pseudo
/// filesystems; a non-empty filter reports exactly the listed mount points
/// (pseudo or not), silently skipping ones that are not mounted.
pub fn collect_disk_usage(mount_points: &[String]) -> Vec<DiskUsage> {
    let disks = Disks::new_with_refreshed_list();

    disks
        .list()
        .iter()
        .filter(|disk| {
            let mount = disk.mount_point().to_string_lossy();
            if mount_points.is_empty() {
                !is_pseudo_fstype(&disk.file_system().to_string_lossy())
            } else {
                mount_points.iter().any(|m| m == mount.as_ref())
            }
        })
        .map(|disk| {
            let total = disk.total_space();
            let free = disk.available_space();
            let used = total.saturating_sub(free);
            DiskUsage {
                mount_point: disk.mount_point().to_string_lossy().into_owned(),
                device: disk.name().to_string_lossy().into_owned(),
                fstype: disk.file_system().to_string_lossy().into_owned(),
                total_bytes: total,
                used_bytes: used,
                free_bytes: free,
                usage_percent: usage_percent(used, total),
                removable: disk.is_removable(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_fstypes_are_skipped() {
        assert!(is_pseudo_fstype("tmpfs"));
        assert!(is_pseudo_fstype("squashfs"));
        assert!(!is_pseudo_fstype("ext4"));
        assert!(!is_pseudo_fstype("btrfs"));
    }

    #[test]
    fn explicit_filter_restricts_results() {
        let all = collect_disk_usage(&[]);
        let filtered = collect_disk_usage(&["/definitely/not/mounted".to_string()]);
        assert!(filtered.is_empty());
        for disk in &all {
            assert!(!is_pseudo_fstype(&disk.fstype));
            assert!(disk.usage_percent >= 0.0 && disk.usage_percent <= 100.0);
        }
    }
}
