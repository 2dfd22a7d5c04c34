use crate::{size, Config, PartitionTable};
use disk_types::ByteSize;

/// Minimum device size for the script, using the slack and alignment of `config`.
pub fn minimum_size(script: &PartitionTable, config: &Config) -> ByteSize {
    if script.partitions.is_empty() {
        warn!("script declares no partitions; the size only covers the slack");
    }

    let bytes = size::minimum_size(&script.partitions, config.slack, config.alignment);
    debug!("minimum device size: {} bytes", bytes);
    bytes
}
