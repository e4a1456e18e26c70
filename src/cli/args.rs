// File: src/cli/args.rs
//! Command line arguments for the thesaurus binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::Level;

use crate::config::ThesaurusConfig;
use crate::error::Result;

/// Personal thesaurus manager. Runs the interactive menu unless a command is given.
#[derive(Parser, Debug, Clone)]
#[command(name = "thesaurus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct CliArgs {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Synonym file, overrides the configuration
    #[arg(long)]
    pub synonyms: Option<PathBuf>,

    /// History file, overrides the configuration
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Output format for commands
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl CliArgs {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    /// Configuration file (or defaults) with the path flags applied on top.
    pub fn resolve_config(&self) -> Result<ThesaurusConfig> {
        let mut config = match &self.config {
            Some(path) => ThesaurusConfig::from_file(path)?,
            None => ThesaurusConfig::default(),
        };
        if let Some(path) = &self.synonyms {
            config.synonym_file = path.clone();
        }
        if let Some(path) = &self.history {
            config.history_file = path.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Read-only commands for scripting. None of them save.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Every entry with its synonyms, in storage order
    List,
    /// Known words in alphabetical order
    Sorted {
        /// Only words starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Synonyms of one word
    Find { word: String },
    /// The action history, most recent first
    History,
    /// Index occupancy figures
    Stats,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}
