use std::path::{Path, PathBuf};

/// Device name prefixes whose partitions are named with a `p` separator, such as
/// `/dev/mmcblk0p1`, `/dev/nvme0n1p1`, or `/dev/loop0p1`.
const SEPARATED_PREFIXES: &[&str] = &["mmcblk", "loop", "nvme"];

/// Returns the path of partition `number` on the block device at `device`.
pub fn partition_path(device: &Path, number: u32) -> PathBuf {
    let separated = device
        .file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| SEPARATED_PREFIXES.iter().any(|prefix| name.starts_with(prefix)));

    let mut path = device.as_os_str().to_owned();
    if separated {
        path.push("p");
    }
    path.push(number.to_string());
    PathBuf::from(path)
}
