// File: src/persistence.rs
//! Plain-text storage for the word index and the history log.
//!
//! Synonym file, one entry per line: `word : Syn1, Syn2`. A word without synonyms is
//! written as `word :`.
//!
//! History file, most recent first: `YYYY-MM-DD HH:MM:SS,description`.
use crate::core::engine::ThesaurusEngine;
use crate::core::history::HistoryStack;
use crate::core::index::{WordEntry, WordIndex};
use crate::error::Result;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Writes through a temp file in the destination directory, then renames it over `path`.
fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&File>) -> io::Result<()>,
{
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        write(&mut writer)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Reads the whole file up front as `(line number, text)` pairs, starting at 1.
///
/// Lines that are not valid UTF-8 are logged and left out so one bad line cannot cut
/// the load short. Any I/O error fails the read before the caller applies anything.
fn read_text_lines(path: &Path) -> Result<Vec<(usize, String)>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => lines.push((line_no, line)),
            Err(_) => warn!("{}:{}: not valid UTF-8, skipping", path.display(), line_no),
        }
    }
    Ok(lines)
}

pub fn format_synonym_line(entry: &WordEntry) -> String {
    let mut line = format!("{} :", entry.word());
    for (i, synonym) in entry.synonyms().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push(' ');
        line.push_str(synonym);
    }
    line
}

/// Splits a synonym-file line into its raw word and synonyms.
///
/// Nothing is normalized here. Returns `None` for lines without a colon. Empty
/// synonym fields are dropped.
pub fn parse_synonym_line(line: &str) -> Option<(&str, Vec<&str>)> {
    let (word, rest) = line.split_once(':')?;
    let synonyms = rest.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
    Some((word.trim(), synonyms))
}

/// Entries in storage order, synonyms most recent first.
pub fn save_synonyms(index: &WordIndex, path: &Path) -> Result<()> {
    write_atomically(path, |writer| {
        for entry in index.iter() {
            writeln!(writer, "{}", format_synonym_line(entry))?;
        }
        Ok(())
    })
}

/// Reads the synonym file into `engine` without touching its history.
///
/// Words are normalized with the engine's word convention and synonyms with its synonym
/// convention. Each line's synonyms are applied oldest first so the in-memory order
/// matches the order they were saved in. Returns the number of lines that named a word.
pub fn load_synonyms(engine: &mut ThesaurusEngine, path: &Path) -> Result<usize> {
    let lines = read_text_lines(path)?;
    let mut loaded = 0;

    for (line_no, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let Some((raw_word, raw_synonyms)) = parse_synonym_line(&line) else {
            warn!("{}:{}: no ':' separator, skipping", path.display(), line_no);
            continue;
        };
        let word = engine.normalize_word(raw_word);
        if word.is_empty() {
            warn!("{}:{}: empty word, skipping", path.display(), line_no);
            continue;
        }

        match engine.add_word(&word, false) {
            Ok(()) => {}
            Err(e) if e.is_already_exists() => debug!("Merging repeated entry '{}'", word),
            Err(e) => {
                warn!("{}:{}: {}, skipping", path.display(), line_no, e);
                continue;
            }
        }
        for raw in raw_synonyms.into_iter().rev() {
            let synonym = engine.normalize_synonym(raw);
            if let Err(e) = engine.add_synonym(&word, &synonym, false) {
                warn!("{}:{}: {}, skipping synonym", path.display(), line_no, e);
            }
        }
        loaded += 1;
    }
    Ok(loaded)
}

/// Splits a history line on its first comma. Both halves are trimmed and must be non-empty.
pub fn parse_history_line(line: &str) -> Option<(&str, &str)> {
    let (timestamp, action) = line.split_once(',')?;
    let (timestamp, action) = (timestamp.trim(), action.trim());
    (!timestamp.is_empty() && !action.is_empty()).then_some((timestamp, action))
}

/// Most recent entry on the first line.
pub fn save_history(history: &HistoryStack, path: &Path) -> Result<()> {
    write_atomically(path, |writer| {
        for entry in history.iter() {
            writeln!(writer, "{},{}", entry.timestamp, entry.action)?;
        }
        Ok(())
    })
}

/// Restores a history file onto `history`.
///
/// The file holds the newest entry first, so lines are pushed bottom to top and the
/// stack reads back in the same order it was saved. Returns the number of entries kept.
pub fn load_history(history: &mut HistoryStack, path: &Path) -> Result<usize> {
    let mut entries = Vec::new();

    for (line_no, line) in read_text_lines(path)? {
        match parse_history_line(&line) {
            Some((timestamp, action)) => entries.push((timestamp.to_string(), action.to_string())),
            None if line.trim().is_empty() => {}
            None => warn!("{}:{}: malformed history line, skipping", path.display(), line_no),
        }
    }

    let count = entries.len();
    for (timestamp, action) in entries.into_iter().rev() {
        history.push_loaded(timestamp, action);
    }
    Ok(count)
}
