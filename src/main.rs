#[macro_use]
extern crate err_derive;

use clap::{ArgAction, Parser, Subcommand};
use disk_provisioner::{Config, Mode};
use std::{
    env,
    ffi::OsString,
    io::{self, Read},
    path::PathBuf,
    process,
};

/// Partitions, formats, and mounts devices according to a parted script read from stdin.
#[derive(Debug, Parser)]
#[command(name = "disk", version)]
struct Cli {
    /// Increase logging verbosity; may be repeated.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print the commands which would run, without running them.
    #[arg(long, global = true)]
    dry_run: bool,

    /// Directories to search for external programs, instead of PATH.
    #[arg(long, global = true, env = "DISK_SEARCH_PATH")]
    search_path: Option<OsString>,

    #[command(subcommand)]
    mode: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the partition table to DEVICE.
    Format { device: PathBuf },
    /// Create the file systems of each partition on DEVICE.
    Mkfs { device: PathBuf },
    /// Mount the partitions of DEVICE beneath PREFIX.
    Mount { device: PathBuf, prefix: PathBuf },
    /// Unmount the partitions of DEVICE.
    Umount { device: PathBuf },
    /// Print the minimum size, in bytes, of a device which fits the script.
    PrintSize,
}

impl From<Command> for Mode {
    fn from(command: Command) -> Self {
        match command {
            Command::Format { device } => Mode::Format { device },
            Command::Mkfs { device } => Mode::Mkfs { device },
            Command::Mount { device, prefix } => Mode::Mount { device, prefix },
            Command::Umount { device } => Mode::Umount { device },
            Command::PrintSize => Mode::PrintSize,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(display = "failed to read the script from stdin")]
    Stdin(#[error(source)] io::Error),
    #[error(display = "{} failed", _0)]
    Run(Mode, #[error(source)] disk_provisioner::Error),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(why) = run(cli) {
        eprintln!("{}: {}", program_name(), error_chain(&why));
        process::exit(1);
    }
}

/// The error followed by each of its causes, separated by `": "`.
fn error_chain(why: &dyn std::error::Error) -> String {
    let mut error_message = format!("{}", why);
    let mut cause = why.source();
    while let Some(source) = cause {
        error_message.push_str(&format!(": {}", source));
        cause = source.source();
    }

    error_message
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = Config { dry_run: cli.dry_run, search_path: cli.search_path, ..Config::default() };
    let mode = Mode::from(cli.mode);

    let mut script = String::new();
    io::stdin().read_to_string(&mut script).map_err(Error::Stdin)?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    disk_provisioner::run(&mode, &script, &config, &program_name(), &mut stdout)
        .map_err(|why| Error::Run(mode, why))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn program_name() -> String {
    env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("disk"))
}
