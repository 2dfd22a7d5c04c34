use super::{Error, System};
use crate::{
    order::{mount_order, Order},
    Config, PartitionTable,
};
use disk_ops::{mount, Cmd};
use disk_types::partition_path;
use std::path::{Path, PathBuf};

/// Mounts each partition with a mount point beneath a prefix, parents first.
#[derive(Debug)]
pub struct MountSystem<'a> {
    pub device: &'a Path,
    pub prefix: &'a Path,
}

impl<'a> MountSystem<'a> {
    /// Location of a script's mount point beneath the prefix.
    pub fn target(&self, mount: &str) -> PathBuf {
        match mount.trim_start_matches('/') {
            "" => self.prefix.to_path_buf(),
            relative => self.prefix.join(relative),
        }
    }
}

impl<'a> System for MountSystem<'a> {
    fn plan(&self, script: &PartitionTable, config: &Config) -> Result<Vec<Cmd>, Error> {
        let tools = &config.tools;
        let mut cmds = Vec::new();

        for spec in mount_order(&script.partitions, Order::Ascending) {
            let target = self.target(spec.mount.as_deref().unwrap_or_default());
            let device = partition_path(self.device, spec.number);
            cmds.push(mount::mkdir(tools, &target));
            cmds.push(mount::mount(tools, &device, &target));
        }

        if cmds.is_empty() {
            warn!("script declares no mount points; nothing will be mounted");
        }

        Ok(cmds)
    }
}

/// Unmounts each partition with a mount point, children first.
#[derive(Debug)]
pub struct UmountSystem<'a> {
    pub device: &'a Path,
}

impl<'a> System for UmountSystem<'a> {
    fn plan(&self, script: &PartitionTable, config: &Config) -> Result<Vec<Cmd>, Error> {
        let cmds: Vec<Cmd> = mount_order(&script.partitions, Order::Descending)
            .map(|spec| mount::umount(&config.tools, &partition_path(self.device, spec.number)))
            .collect();

        if cmds.is_empty() {
            warn!("script declares no mount points; nothing will be unmounted");
        }

        Ok(cmds)
    }
}
