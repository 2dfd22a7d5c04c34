use disk_ops::{Runner, Tools};
use disk_types::{ByteSize, GIB};
use std::ffi::OsString;

/// Settings for a single invocation, constructed once and passed to each system.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Programs which carry out each operation.
    pub tools:       Tools,
    /// Headroom added to the space taken by partitions when computing the device size.
    pub slack:       ByteSize,
    /// Device sizes are rounded down to a multiple of this many bytes.
    pub alignment:   u64,
    /// Echo commands without executing them.
    pub dry_run:     bool,
    /// Where programs are searched for, in `PATH` syntax. `PATH` is used when unset.
    pub search_path: Option<OsString>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tools:       Tools::default(),
            slack:       ByteSize(2 * GIB),
            alignment:   4096,
            dry_run:     false,
            search_path: None,
        }
    }
}

impl Config {
    pub fn runner(&self, name: impl Into<Box<str>>) -> Runner {
        Runner::new(name).search_path(self.search_path.clone()).dry_run(self.dry_run)
    }
}
