//! Ordering of mount points, so that parents are mounted before their children
//! and unmounted after them.

use auto_enums::auto_enum;
use disk_types::PartitionSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Shallowest mount points first, for mounting.
    Ascending,
    /// Deepest mount points first, for unmounting. The exact reverse of `Ascending`.
    Descending,
}

/// Partitions which have a mount point, sorted by the depth of that mount point.
///
/// Partitions at equal depth keep their script order when ascending.
#[auto_enum(Iterator)]
pub fn mount_order(
    partitions: &[PartitionSpec],
    order: Order,
) -> impl Iterator<Item = &PartitionSpec> {
    let mut mounts: Vec<&PartitionSpec> =
        partitions.iter().filter(|partition| partition.mount.is_some()).collect();

    mounts.sort_by_key(|partition| partition.mount_depth());

    match order {
        Order::Ascending => mounts.into_iter(),
        Order::Descending => mounts.into_iter().rev(),
    }
}
