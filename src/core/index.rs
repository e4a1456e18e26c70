// File: src/core/index.rs
use crate::error::{Result, ThesaurusError};
use serde::Serialize;
use tracing::debug;

/// Number of hash buckets. Fixed for the lifetime of an index.
pub const BUCKET_COUNT: usize = 503;
/// Starting value of the multiplicative string hash.
pub const HASH_SEED: u32 = 5381;

/// Maps a word to its bucket: `h = h * 33 + byte` from `HASH_SEED`, modulo `BUCKET_COUNT`.
///
/// Case-sensitive. Callers normalize before hashing or "Apple" and "apple" land in
/// different entries.
pub fn bucket_of(word: &str) -> usize {
    let hash = word
        .bytes()
        .fold(HASH_SEED, |h, b| (h << 5).wrapping_add(h).wrapping_add(u32::from(b)));
    (hash % BUCKET_COUNT as u32) as usize
}

/// Rejects text the synonym file cannot hold: line breaks anywhere, plus the separator
/// `forbidden` for the field (`:` ends a word, `,` ends a synonym).
fn check_storable(text: &str, field: &str, forbidden: &[char]) -> Result<()> {
    let bad = text.chars().find(|c| *c == '\n' || *c == '\r' || forbidden.contains(c));
    match bad {
        Some(c) => Err(ThesaurusError::invalid_input(format!(
            "{} '{}' must not contain {:?}",
            field,
            text.escape_debug(),
            c
        ))),
        None => Ok(()),
    }
}

/// A stored word together with the synonyms it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    /// Oldest first; read back to front so the newest synonym comes out first.
    synonyms: Vec<String>,
}

impl WordEntry {
    fn new(word: &str) -> Self {
        Self { word: word.to_string(), synonyms: Vec::new() }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Synonyms, most recently added first.
    pub fn synonyms(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.synonyms.iter().rev().map(String::as_str)
    }

    pub fn synonym_count(&self) -> usize {
        self.synonyms.len()
    }

    /// Exact, case-sensitive match.
    pub fn has_synonym(&self, synonym: &str) -> bool {
        self.synonyms.iter().any(|s| s == synonym)
    }
}

/// Occupancy figures for the whole table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub words: usize,
    pub synonyms: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
}

/// Fixed-bucket hash table from a normalized word to its synonym set.
///
/// Each bucket is a chain of entries. New entries go to the head of their chain, so a
/// bucket reads back newest first. Nothing in here normalizes: all `&str` arguments are
/// expected to be trimmed and case-folded by the caller.
#[derive(Debug, Clone)]
pub struct WordIndex {
    /// Each chain is stored oldest first and read in reverse.
    buckets: Vec<Vec<WordEntry>>,
    len: usize,
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl WordIndex {
    pub fn new() -> Self {
        Self { buckets: vec![Vec::new(); BUCKET_COUNT], len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Scans the word's bucket for an exact match.
    pub fn find(&self, word: &str) -> Option<&WordEntry> {
        self.buckets[bucket_of(word)].iter().find(|e| e.word == word)
    }

    fn find_mut(&mut self, word: &str) -> Option<&mut WordEntry> {
        self.buckets[bucket_of(word)].iter_mut().find(|e| e.word == word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    /// Creates an empty entry at the head of the word's chain.
    pub fn insert_word(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Err(ThesaurusError::invalid_input("word must not be empty"));
        }
        check_storable(word, "word", &[':'])?;
        if self.contains(word) {
            return Err(ThesaurusError::AlreadyExists(word.to_string()));
        }
        let bucket = bucket_of(word);
        self.buckets[bucket].push(WordEntry::new(word));
        self.len += 1;
        debug!("Inserted '{}' into bucket {}", word, bucket);
        Ok(())
    }

    /// Prepends `synonym` to the entry's synonym list.
    ///
    /// Returns `Ok(false)` without changing anything when the entry already holds the
    /// exact same synonym string. The word has to exist first.
    pub fn insert_synonym(&mut self, word: &str, synonym: &str) -> Result<bool> {
        if word.is_empty() || synonym.is_empty() {
            return Err(ThesaurusError::invalid_input("word and synonym must not be empty"));
        }
        check_storable(synonym, "synonym", &[','])?;
        let entry = self
            .find_mut(word)
            .ok_or_else(|| ThesaurusError::not_found(format!("word '{}'", word)))?;
        if entry.has_synonym(synonym) {
            return Ok(false);
        }
        entry.synonyms.push(synonym.to_string());
        debug!("Added synonym '{}' to '{}'", synonym, word);
        Ok(true)
    }

    /// Unlinks the entry from its chain and hands it back with all its synonyms.
    pub fn remove_word(&mut self, word: &str) -> Result<WordEntry> {
        if word.is_empty() {
            return Err(ThesaurusError::invalid_input("word must not be empty"));
        }
        let chain = &mut self.buckets[bucket_of(word)];
        let position = chain
            .iter()
            .position(|e| e.word == word)
            .ok_or_else(|| ThesaurusError::not_found(format!("word '{}'", word)))?;
        let entry = chain.remove(position);
        self.len -= 1;
        debug!("Removed '{}' with {} synonyms", word, entry.synonyms.len());
        Ok(entry)
    }

    /// Removes one synonym, leaving the rest of the entry untouched.
    pub fn remove_synonym(&mut self, word: &str, synonym: &str) -> Result<()> {
        if word.is_empty() || synonym.is_empty() {
            return Err(ThesaurusError::invalid_input("word and synonym must not be empty"));
        }
        let entry = self
            .find_mut(word)
            .ok_or_else(|| ThesaurusError::not_found(format!("word '{}'", word)))?;
        let position = entry.synonyms.iter().position(|s| s == synonym).ok_or_else(|| {
            ThesaurusError::not_found(format!("synonym '{}' of '{}'", synonym, word))
        })?;
        entry.synonyms.remove(position);
        debug!("Removed synonym '{}' from '{}'", synonym, word);
        Ok(())
    }

    /// Every entry, bucket 0 first and newest first inside a bucket.
    ///
    /// This is storage order, not alphabetical order; use the trie for that.
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.buckets.iter().flat_map(|chain| chain.iter().rev())
    }

    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
        self.len = 0;
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            words: self.len,
            synonyms: self.iter().map(WordEntry::synonym_count).sum(),
            occupied_buckets: self.buckets.iter().filter(|c| !c.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
        }
    }
}
