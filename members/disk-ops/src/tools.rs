/// Names of the external programs that carry out each operation, and the
/// options handed to them which are not part of a provisioning script.
#[derive(Debug, Clone, PartialEq)]
pub struct Tools {
    pub parted:    Box<str>,
    /// Alignment policy passed to parted's `-a` flag.
    pub align:     Box<str>,
    pub partprobe: Box<str>,
    pub partx:     Box<str>,
    pub mkfs_vfat: Box<str>,
    pub mkfs_ext4: Box<str>,
    pub mkdir:     Box<str>,
    pub mount:     Box<str>,
    pub umount:    Box<str>,
}

impl Default for Tools {
    fn default() -> Self {
        Tools {
            parted:    "parted".into(),
            align:     "optimal".into(),
            partprobe: "partprobe".into(),
            partx:     "partx".into(),
            mkfs_vfat: "mkfs.vfat".into(),
            mkfs_ext4: "mkfs.ext4".into(),
            mkdir:     "mkdir".into(),
            mount:     "mount".into(),
            umount:    "umount".into(),
        }
    }
}
