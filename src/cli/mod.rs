//! Command-line interface module.

mod args;
pub mod check;
pub mod dump;
pub mod init;
pub mod inspect;

pub use args::{Cli, Commands, DumpArgs, DumpFormat};
