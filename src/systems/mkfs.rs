use super::{Error, System};
use crate::{Config, PartitionTable};
use disk_ops::{partition, table, Cmd};
use disk_types::{partition_path, FileSystem};
use std::path::Path;

/// Creates the file system of each partition.
#[derive(Debug)]
pub struct MkfsSystem<'a> {
    pub device: &'a Path,
}

impl<'a> System for MkfsSystem<'a> {
    fn plan(&self, script: &PartitionTable, config: &Config) -> Result<Vec<Cmd>, Error> {
        if script.partitions.is_empty() {
            warn!("script declares no partitions; no file systems will be created");
        }

        let tools = &config.tools;
        let mut cmds = Vec::with_capacity(script.partitions.len() + 2);

        // A single unsupported file system rejects the whole plan.
        for spec in &script.partitions {
            let fs = spec
                .filesystem
                .parse::<FileSystem>()
                .map_err(|why| Error::UnsupportedFileSystem(spec.number, why))?;

            cmds.push(partition::format(
                tools,
                &partition_path(self.device, spec.number),
                fs,
                spec.label.as_deref(),
                spec.reserved.as_deref(),
            ));
        }

        cmds.extend_from_slice(&table::reprobe(tools, self.device));
        Ok(cmds)
    }
}
