use disk_types::{ByteSize, PartitionSpec};

/// Smallest device, in bytes, which holds every partition of the script.
///
/// The last partition decides the size: its end offset, or its begin offset when it
/// extends to the end of the device. `slack` is added for file system overhead, and
/// the sum is rounded down to a multiple of `alignment`.
pub fn minimum_size(partitions: &[PartitionSpec], slack: ByteSize, alignment: u64) -> ByteSize {
    let used = partitions.iter().fold(ByteSize(0), |_, partition| {
        if partition.extends_to_end() {
            partition.begin
        } else {
            partition.end
        }
    });

    used.saturating_add(slack).align_down(alignment)
}
