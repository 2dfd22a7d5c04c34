//! Commands for creating mount points, and mounting or unmounting partitions.

use crate::{Cmd, Tools};
use std::path::Path;

/// Creates the directory at `path`, along with any missing parents.
pub fn mkdir(tools: &Tools, path: &Path) -> Cmd { Cmd::new(&*tools.mkdir).arg("-p").arg(path) }

pub fn mount(tools: &Tools, device: &Path, target: &Path) -> Cmd {
    Cmd::new(&*tools.mount).arg(device).arg(target)
}

pub fn umount(tools: &Tools, device: &Path) -> Cmd { Cmd::new(&*tools.umount).arg(device) }
