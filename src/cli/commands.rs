// File: src/cli/commands.rs
//! The interactive menu and the one-shot scripting commands.

use std::io::{BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tracing::{debug, warn};

use crate::cli::args::{Command, OutputFormat};
use crate::cli::output::{write_entries, write_history, write_stats, write_synonyms, write_words};
use crate::core::engine::ThesaurusEngine;
use crate::error::{Result, ThesaurusError};

/// Runs a scripting command against an already loaded engine.
pub fn execute_command<W: Write>(
    command: &Command,
    engine: &ThesaurusEngine,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List => write_entries(out, engine.entries(), format),
        Command::Sorted { prefix: None } => write_words(out, &engine.sorted_words(), format),
        Command::Sorted { prefix: Some(prefix) } => {
            write_words(out, &engine.words_with_prefix(prefix), format)
        }
        Command::Find { word } => {
            let word = engine.normalize_word(word);
            let synonyms = engine.find_synonyms(&word)?;
            write_synonyms(out, &word, &synonyms, format)
        }
        Command::History => write_history(out, engine.history(), format),
        Command::Stats => write_stats(out, &engine.stats(), format),
    }
}

const MENU: &str = "\
Menu:
 1. View all words and synonyms
 2. View words alphabetically
 3. Find synonyms of a word
 4. Add a new word
 5. Add a synonym to a word
 6. Delete a word
 7. Delete a synonym
 8. View action history
 9. Save and exit
10. Find words by prefix
11. Index statistics";

/// How a menu session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user chose save-and-exit and both files were written.
    Saved,
    /// Input ran out before save-and-exit; nothing was written.
    EndOfInput,
}

/// Numbered menu over any line-oriented input.
///
/// With `interactive` set the screen is cleared before each menu and every action
/// waits for Enter, like a terminal session. Without it the menu just reads lines,
/// which is how it is driven from tests and pipes.
pub struct Menu<'a, R, W> {
    engine: &'a mut ThesaurusEngine,
    input: R,
    output: W,
    interactive: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(engine: &'a mut ThesaurusEngine, input: R, output: W, interactive: bool) -> Self {
        Self { engine, input, output, interactive }
    }

    pub fn run(&mut self) -> Result<MenuExit> {
        loop {
            if self.interactive {
                queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choice: ")? else {
                warn!("Input closed before save-and-exit; changes were not saved");
                return Ok(MenuExit::EndOfInput);
            };

            let done = match choice.parse::<u32>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(_) => {
                    writeln!(self.output, "Invalid choice.")?;
                    Some(false)
                }
            };
            match done {
                Some(true) => return Ok(MenuExit::Saved),
                Some(false) => {}
                None => return Ok(MenuExit::EndOfInput),
            }
            if self.interactive && self.prompt("Press Enter to continue...")?.is_none() {
                return Ok(MenuExit::EndOfInput);
            }
        }
    }

    /// Reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts for a word and normalizes it with the word convention.
    fn prompt_word(&mut self, label: &str) -> Result<Option<String>> {
        Ok(self.prompt(label)?.map(|raw| self.engine.normalize_word(&raw)))
    }

    fn prompt_synonym(&mut self, label: &str) -> Result<Option<String>> {
        Ok(self.prompt(label)?.map(|raw| self.engine.normalize_synonym(&raw)))
    }

    /// Prints a recoverable failure; anything else is passed up.
    fn report(&mut self, err: ThesaurusError) -> Result<()> {
        match err {
            ThesaurusError::NotFound { .. }
            | ThesaurusError::AlreadyExists(_)
            | ThesaurusError::InvalidInput(_) => {
                debug!("Menu action rejected: {}", err);
                writeln!(self.output, "{}", capitalize_first(&err.to_string()))?;
                Ok(())
            }
            other => Err(other),
        }
    }

    /// `Some(true)` after a successful save, `Some(false)` to keep going, `None` when
    /// input ran out mid-action.
    fn dispatch(&mut self, choice: u32) -> Result<Option<bool>> {
        let format = OutputFormat::Human;
        match choice {
            1 => write_entries(&mut self.output, self.engine.entries(), format)?,
            2 => write_words(&mut self.output, &self.engine.sorted_words(), format)?,
            3 => {
                let Some(word) = self.prompt_word("Enter word: ")? else { return Ok(None) };
                match self.engine.find_synonyms(&word) {
                    Ok(synonyms) => write_synonyms(&mut self.output, &word, &synonyms, format)?,
                    Err(e) => self.report(e)?,
                }
            }
            4 => {
                let Some(word) = self.prompt_word("Enter new word: ")? else { return Ok(None) };
                let record = self.engine.config().record_history;
                match self.engine.add_word(&word, record) {
                    Ok(()) => writeln!(self.output, "Word '{}' added.", word)?,
                    Err(e) => self.report(e)?,
                }
            }
            5 => {
                let Some(word) = self.prompt_word("Enter word: ")? else { return Ok(None) };
                let Some(synonym) = self.prompt_synonym("Enter synonym: ")? else {
                    return Ok(None);
                };
                let record = self.engine.config().record_history;
                match self.engine.add_synonym(&word, &synonym, record) {
                    Ok(true) => writeln!(self.output, "Synonym '{}' added to '{}'.", synonym, word)?,
                    Ok(false) => {
                        writeln!(self.output, "'{}' is already a synonym of '{}'.", synonym, word)?
                    }
                    Err(e) => self.report(e)?,
                }
            }
            6 => {
                let Some(word) = self.prompt_word("Enter word to delete: ")? else {
                    return Ok(None);
                };
                match self.engine.delete_word(&word) {
                    Ok(entry) => writeln!(
                        self.output,
                        "Deleted '{}' and its {} synonym(s).",
                        word,
                        entry.synonym_count()
                    )?,
                    Err(e) => self.report(e)?,
                }
            }
            7 => {
                let Some(word) = self.prompt_word("Enter word: ")? else { return Ok(None) };
                let Some(synonym) = self.prompt_synonym("Enter synonym to delete: ")? else {
                    return Ok(None);
                };
                match self.engine.delete_synonym(&word, &synonym) {
                    Ok(()) => {
                        writeln!(self.output, "Synonym '{}' deleted from '{}'.", synonym, word)?
                    }
                    Err(e) => self.report(e)?,
                }
            }
            8 => write_history(&mut self.output, self.engine.history(), format)?,
            9 => match self.engine.save() {
                Ok(()) => {
                    writeln!(self.output, "Data saved.")?;
                    return Ok(Some(true));
                }
                Err(e) => {
                    warn!("Save failed: {}", e);
                    writeln!(self.output, "Failed to save: {}", e)?;
                }
            },
            10 => {
                let Some(prefix) = self.prompt("Enter prefix: ")? else { return Ok(None) };
                write_words(&mut self.output, &self.engine.words_with_prefix(&prefix), format)?;
            }
            11 => write_stats(&mut self.output, &self.engine.stats(), format)?,
            _ => writeln!(self.output, "Invalid choice.")?,
        }
        Ok(Some(false))
    }
}

fn capitalize_first(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>() + ".",
        None => String::new(),
    }
}
