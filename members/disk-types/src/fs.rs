use std::{fmt, str::FromStr};

/// Describes a file system format which can be created on a partition.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum FileSystem {
    Ext4,
    Fat32,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error(display = "unsupported file system: {}", _0)]
pub struct UnsupportedFileSystem(pub Box<str>);

impl FromStr for FileSystem {
    type Err = UnsupportedFileSystem;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let type_ = match string.to_lowercase().as_str() {
            "ext4" => FileSystem::Ext4,
            "fat32" => FileSystem::Fat32,
            _ => return Err(UnsupportedFileSystem(string.into())),
        };
        Ok(type_)
    }
}

impl From<FileSystem> for &'static str {
    fn from(fs: FileSystem) -> Self {
        match fs {
            FileSystem::Ext4 => "ext4",
            FileSystem::Fat32 => "fat32",
        }
    }
}

impl fmt::Display for FileSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let str: &'static str = (*self).into();
        f.write_str(str)
    }
}
