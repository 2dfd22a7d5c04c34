//! Commands which modify or reload the partition table of a device.

use crate::{Cmd, Tools};
use std::{ffi::OsStr, path::Path};

/// Replays one line of a parted script against `device`.
pub fn parted<S: AsRef<OsStr>>(tools: &Tools, device: &Path, words: &[S]) -> Cmd {
    Cmd::new(&*tools.parted)
        .arg(device)
        .args(&["-a", &*tools.align, "-s"])
        .args(words)
}

/// Informs the kernel of partition table changes on `device`, and then
/// re-enumerates its partitions.
pub fn reprobe(tools: &Tools, device: &Path) -> [Cmd; 2] {
    [
        Cmd::new(&*tools.partprobe).arg(device),
        Cmd::new(&*tools.partx).arg("-vu").arg(device),
    ]
}
