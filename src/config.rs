// File: src/config.rs
//! Runtime settings: where the two data files live and how input is normalized.

use crate::core::normalize::CaseStyle;
use crate::error::{Result, ThesaurusError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SYNONYM_FILE: &str = "synonymList.txt";
pub const DEFAULT_HISTORY_FILE: &str = "history.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThesaurusConfig {
    pub synonym_file: PathBuf,
    pub history_file: PathBuf,
    /// Convention for entry words.
    pub word_case: CaseStyle,
    /// Convention for synonyms, including those read from the synonym file.
    pub synonym_case: CaseStyle,
    /// Whether interactive additions are written to the history log.
    pub record_history: bool,
}

impl Default for ThesaurusConfig {
    fn default() -> Self {
        Self {
            synonym_file: PathBuf::from(DEFAULT_SYNONYM_FILE),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            word_case: CaseStyle::Lowercase,
            synonym_case: CaseStyle::Capitalized,
            record_history: true,
        }
    }
}

impl ThesaurusConfig {
    /// Reads a JSON config file. Missing keys fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.synonym_file.as_os_str().is_empty() {
            return Err(ThesaurusError::config("synonym_file must not be empty"));
        }
        if self.history_file.as_os_str().is_empty() {
            return Err(ThesaurusError::config("history_file must not be empty"));
        }
        if self.synonym_file == self.history_file {
            return Err(ThesaurusError::config(
                "synonym_file and history_file must be different files",
            ));
        }
        Ok(())
    }
}
