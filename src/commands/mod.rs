//! # Command Implementations
//!
//! Each submodule handles one CLI command.

pub mod detect;
pub mod info;
pub mod stage;
