#[macro_use]
extern crate err_derive;
#[macro_use]
extern crate shrinkwraprs;

pub mod bytes;
pub mod device;
pub mod fs;
pub mod partitions;

pub use crate::{bytes::*, device::*, fs::*, partitions::*};
