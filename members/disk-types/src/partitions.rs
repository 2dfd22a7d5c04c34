use crate::bytes::ByteSize;
use std::str::FromStr;

/// Defines whether the partition is a primary or logical partition.
///
/// # Note
///
/// Extended partitions never carry a file system, so they are not tracked.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PartitionType {
    Primary,
    Logical,
}

impl FromStr for PartitionType {
    type Err = ();

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let kind = match input {
            "primary" => PartitionType::Primary,
            "logical" => PartitionType::Logical,
            _ => return Err(()),
        };

        Ok(kind)
    }
}

impl Default for PartitionType {
    fn default() -> Self { PartitionType::Primary }
}

/// A partition declared by a provisioning script, along with the file system
/// metadata attached to it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PartitionSpec {
    /// The 1-based position of this partition among the script's partitions.
    pub number:     u32,
    pub variant:    PartitionType,
    /// File system token as written in the script. Validated when file systems are created.
    pub filesystem: Box<str>,
    pub label:      Option<Box<str>>,
    /// Percentage of blocks reserved for the super-user, passed through to `mkfs.ext4 -m`.
    pub reserved:   Option<Box<str>>,
    /// Mount point relative to the mount prefix.
    pub mount:      Option<Box<str>>,
    pub begin:      ByteSize,
    /// Zero when the partition extends to the end of the device.
    pub end:        ByteSize,
}

impl PartitionSpec {
    /// Number of non-empty components in the mount path; zero when there is no mount path.
    pub fn mount_depth(&self) -> usize {
        self.mount.as_ref().map_or(0, |mount| mount.split('/').filter(|s| !s.is_empty()).count())
    }

    pub fn extends_to_end(&self) -> bool { *self.end == 0 }
}
