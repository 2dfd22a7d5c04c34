use super::{Error, System};
use crate::{Config, PartitionTable};
use disk_ops::{table, Cmd};
use std::path::Path;

/// Writes the partition table by handing each script line to parted.
#[derive(Debug)]
pub struct FormatSystem<'a> {
    pub device: &'a Path,
}

impl<'a> System for FormatSystem<'a> {
    fn plan(&self, script: &PartitionTable, config: &Config) -> Result<Vec<Cmd>, Error> {
        if script.commands.is_empty() {
            warn!("script has no commands; {} will only be re-probed", self.device.display());
        }

        let tools = &config.tools;
        let mut cmds: Vec<Cmd> = script
            .commands
            .iter()
            .map(|words| table::parted(tools, self.device, words))
            .collect();

        cmds.extend_from_slice(&table::reprobe(tools, self.device));
        Ok(cmds)
    }
}
