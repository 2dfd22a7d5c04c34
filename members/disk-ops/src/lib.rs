#[macro_use]
extern crate err_derive;
#[macro_use]
extern crate log;

pub mod command;
pub mod mount;
pub mod table;
mod tools;

pub use self::{command::*, tools::Tools};

pub mod partition {
    use crate::{Cmd, Tools};
    use disk_types::FileSystem;
    use std::path::Path;

    /// Command which creates the file system `fs` on the partition at `device`.
    pub fn format(
        tools: &Tools,
        device: &Path,
        fs: FileSystem,
        label: Option<&str>,
        reserved: Option<&str>,
    ) -> Cmd {
        let cmd = match fs {
            FileSystem::Fat32 => {
                let mut cmd = Cmd::new(&*tools.mkfs_vfat);
                if let Some(label) = label {
                    cmd = cmd.args(&["-n", label]);
                }
                cmd
            }
            FileSystem::Ext4 => {
                let mut cmd = Cmd::new(&*tools.mkfs_ext4);
                if let Some(label) = label {
                    cmd = cmd.args(&["-L", label]);
                }
                if let Some(reserved) = reserved {
                    cmd = cmd.args(&["-m", reserved]);
                }
                cmd
            }
        };

        cmd.arg(device)
    }

}
