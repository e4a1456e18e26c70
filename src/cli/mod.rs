// File: src/cli/mod.rs
//! Terminal front end: argument parsing, the numbered menu and output rendering.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{CliArgs, Command, OutputFormat};
pub use commands::{execute_command, Menu, MenuExit};
