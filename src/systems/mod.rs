//! Systems which turn a parsed script into the external commands for each mode.

pub mod format;
pub mod mkfs;
pub mod mount;
pub mod size;

use crate::{script, Config, PartitionTable};
use disk_ops::Cmd;
use disk_types::UnsupportedFileSystem;
use std::{
    fmt,
    io::{self, Write},
    path::PathBuf,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(display = "failed to parse provisioning script")]
    Script(#[error(source)] script::Error),
    #[error(display = "cannot create a file system on partition {}", _0)]
    UnsupportedFileSystem(u32, #[error(source)] UnsupportedFileSystem),
    #[error(display = "{} sequence aborted", _0)]
    Command(&'static str, #[error(source)] disk_ops::Error),
    #[error(display = "failed to write the device size")]
    Output(#[error(source)] io::Error),
}

/// Builds the ordered list of commands which carries out one mode.
pub trait System {
    fn plan(&self, table: &PartitionTable, config: &Config) -> Result<Vec<Cmd>, Error>;
}

/// What an invocation was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Replay the script's parted commands against the device.
    Format { device: PathBuf },
    /// Create the file system of every partition.
    Mkfs { device: PathBuf },
    /// Mount every partition with a mount point beneath `prefix`.
    Mount { device: PathBuf, prefix: PathBuf },
    /// Unmount every partition with a mount point.
    Umount { device: PathBuf },
    /// Print the minimum size of a device which fits the script.
    PrintSize,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Format { .. } => "format",
            Mode::Mkfs { .. } => "mkfs",
            Mode::Mount { .. } => "mount",
            Mode::Umount { .. } => "umount",
            Mode::PrintSize => "print-size",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

/// Commands which carry out `mode`. Printing the size requires none.
pub fn plan(mode: &Mode, table: &PartitionTable, config: &Config) -> Result<Vec<Cmd>, Error> {
    match mode {
        Mode::Format { device } => format::FormatSystem { device }.plan(table, config),
        Mode::Mkfs { device } => mkfs::MkfsSystem { device }.plan(table, config),
        Mode::Mount { device, prefix } => {
            mount::MountSystem { device, prefix }.plan(table, config)
        }
        Mode::Umount { device } => mount::UmountSystem { device }.plan(table, config),
        Mode::PrintSize => Ok(Vec::new()),
    }
}

/// Parses `script` and carries out `mode`, writing command echoes and the printed
/// size to `out`.
///
/// Nothing is executed unless the whole script parses and every command can be built.
/// The first failing command aborts the rest of the sequence; commands which already
/// completed are left in place.
pub fn run<W: Write>(
    mode: &Mode,
    script: &str,
    config: &Config,
    name: &str,
    out: &mut W,
) -> Result<(), Error> {
    let table: PartitionTable = script.parse()?;
    info!(
        "{}: script has {} commands and {} partitions",
        mode,
        table.commands.len(),
        table.partitions.len()
    );

    if let Mode::PrintSize = mode {
        let size = size::minimum_size(&table, config);
        return writeln!(out, "{}", size).map_err(Error::Output);
    }

    let cmds = plan(mode, &table, config)?;
    debug!("{}: planned {} commands", mode, cmds.len());

    config.runner(name).run_with(&cmds, out).map_err(|why| Error::Command(mode.name(), why))?;

    info!("{}: finished", mode);
    Ok(())
}
