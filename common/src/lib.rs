//! Shared library for all `acmi-*` crates.
//!
//! This is a configuration file/struct neutral loading engine (see
//! [`ConfigEngine`]) and a logging initialiser (see [`init_logging`]), kept
//! separate from the enrichment engine so both the CLI and tests can use
//! them without pulling in the whole stack.
//!

pub use config::*;
pub use error::*;
pub use logging::*;

mod config;
mod error;
mod logging;
