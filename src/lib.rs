// File: src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;

pub use crate::config::ThesaurusConfig;
pub use crate::core::engine::ThesaurusEngine;
pub use crate::error::{Result, ThesaurusError};
