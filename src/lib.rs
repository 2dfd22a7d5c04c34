//! Interpreter for disk provisioning scripts.
//!
//! A provisioning script is a list of parted commands whose `mkpart` lines may
//! carry file system metadata. From one script, the interpreter plans the
//! external commands which partition a device, create its file systems, mount
//! them in nesting order, or compute how large the device must be.

#[macro_use]
extern crate err_derive;
#[macro_use]
extern crate log;

mod config;
pub mod order;
pub mod script;
pub mod size;
pub mod systems;

pub use self::{
    config::Config,
    order::{mount_order, Order},
    script::{PartitionTable, ScriptLine},
    systems::{plan, run, Error, Mode, System},
};
pub use disk_ops::{Cmd, Runner, Tools};
pub use disk_types::*;

#[cfg(test)]
mod tests;
