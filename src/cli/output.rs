// File: src/cli/output.rs
//! Rendering of engine data for the menu and the scripting commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::core::history::HistoryStack;
use crate::core::index::{IndexStats, WordEntry};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct EntryView<'a> {
    word: &'a str,
    synonyms: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct SynonymsView<'a> {
    word: &'a str,
    synonyms: &'a [String],
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// `word: Syn1, Syn2`, synonyms most recent first.
pub fn entry_line(entry: &WordEntry) -> String {
    let synonyms: Vec<&str> = entry.synonyms().collect();
    if synonyms.is_empty() {
        format!("{}:", entry.word())
    } else {
        format!("{}: {}", entry.word(), synonyms.join(", "))
    }
}

pub fn write_entries<'a, W, I>(out: &mut W, entries: I, format: OutputFormat) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a WordEntry>,
{
    match format {
        OutputFormat::Human => {
            let mut empty = true;
            for entry in entries {
                writeln!(out, "{}", entry_line(entry))?;
                empty = false;
            }
            if empty {
                writeln!(out, "No words yet.")?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let views: Vec<EntryView> = entries
                .into_iter()
                .map(|e| EntryView { word: e.word(), synonyms: e.synonyms().collect() })
                .collect();
            write_json(out, &views)
        }
    }
}

/// Numbered list, one word per line.
pub fn write_words<W: Write>(out: &mut W, words: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if words.is_empty() {
                writeln!(out, "No words found.")?;
            }
            for (i, word) in words.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, word)?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, words),
    }
}

pub fn write_synonyms<W: Write>(
    out: &mut W,
    word: &str,
    synonyms: &[String],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human if synonyms.is_empty() => {
            writeln!(out, "'{}' has no synonyms yet.", word)?;
            Ok(())
        }
        OutputFormat::Human => {
            writeln!(out, "Synonyms of '{}': {}", word, synonyms.join(", "))?;
            Ok(())
        }
        OutputFormat::Json => write_json(out, &SynonymsView { word, synonyms }),
    }
}

pub fn write_history<W: Write>(out: &mut W, history: &HistoryStack, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(out, "=============== Action History ===============")?;
            if history.is_empty() {
                writeln!(out, "No history yet.")?;
            }
            for entry in history.iter() {
                writeln!(out, "{:<30} {}", entry.timestamp, entry.action)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let entries: Vec<_> = history.iter().collect();
            write_json(out, &entries)
        }
    }
}

pub fn write_stats<W: Write>(out: &mut W, stats: &IndexStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(out, "Words:            {}", stats.words)?;
            writeln!(out, "Synonyms:         {}", stats.synonyms)?;
            writeln!(out, "Occupied buckets: {}", stats.occupied_buckets)?;
            writeln!(out, "Longest chain:    {}", stats.longest_chain)?;
            Ok(())
        }
        OutputFormat::Json => write_json(out, stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::index::WordIndex;

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_entry_lines() {
        let mut index = WordIndex::new();
        index.insert_word("happy").unwrap();
        assert_eq!(entry_line(index.find("happy").unwrap()), "happy:");
        index.insert_synonym("happy", "Glad").unwrap();
        index.insert_synonym("happy", "Joyful").unwrap();
        assert_eq!(entry_line(index.find("happy").unwrap()), "happy: Joyful, Glad");

        let text = render(|out| write_entries(out, index.iter(), OutputFormat::Human));
        assert_eq!(text, "happy: Joyful, Glad\n");

        let json = render(|out| write_entries(out, index.iter(), OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["word"], "happy");
        assert_eq!(value[0]["synonyms"][1], "Glad");
    }

    #[test]
    fn test_empty_outputs() {
        let index = WordIndex::new();
        assert_eq!(
            render(|out| write_entries(out, index.iter(), OutputFormat::Human)),
            "No words yet.\n"
        );
        let history = HistoryStack::new();
        let text = render(|out| write_history(out, &history, OutputFormat::Human));
        assert!(text.ends_with("No history yet.\n"));
        assert_eq!(render(|out| write_words(out, &[], OutputFormat::Json)).trim(), "[]");
    }

    #[test]
    fn test_history_rows() {
        let mut history = HistoryStack::new();
        history.push_loaded("2024-01-01 10:00:00", "Create a new entry 'happy'");
        let json = render(|out| write_history(out, &history, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["timestamp"], "2024-01-01 10:00:00");
        assert_eq!(value[0]["action"], "Create a new entry 'happy'");
    }

    #[test]
    fn test_synonyms_and_words() {
        let synonyms = vec!["Glad".to_string(), "Joyful".to_string()];
        assert_eq!(
            render(|out| write_synonyms(out, "happy", &synonyms, OutputFormat::Human)),
            "Synonyms of 'happy': Glad, Joyful\n"
        );
        assert_eq!(
            render(|out| write_synonyms(out, "lonely", &[], OutputFormat::Human)),
            "'lonely' has no synonyms yet.\n"
        );
        let words = vec!["apple".to_string(), "banana".to_string()];
        assert_eq!(
            render(|out| write_words(out, &words, OutputFormat::Human)),
            "1. apple\n2. banana\n"
        );
    }
}
