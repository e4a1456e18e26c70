// File: src/core/engine.rs
use crate::config::ThesaurusConfig;
use crate::core::history::HistoryStack;
use crate::core::index::{IndexStats, WordEntry, WordIndex};
use crate::core::trie::WordTrie;
use crate::error::{Result, ThesaurusError};
use crate::persistence::{load_history, load_synonyms, save_history, save_synonyms};
use tracing::{info, warn};

/// The whole thesaurus session: hashed index, ordered trie and action history.
///
/// Every mutation goes through here so the trie sees each word the index accepts.
/// Arguments are expected to be normalized already; `normalize_word` and
/// `normalize_synonym` apply the configured conventions for callers holding raw input.
pub struct ThesaurusEngine {
    index: WordIndex,
    trie: WordTrie,
    history: HistoryStack,
    config: ThesaurusConfig,
}

impl ThesaurusEngine {
    pub fn new(config: ThesaurusConfig) -> Self {
        Self {
            index: WordIndex::new(),
            trie: WordTrie::new(),
            history: HistoryStack::new(),
            config,
        }
    }

    /// Restores both data files named by `config`. A file that cannot be read is logged
    /// and skipped; the session then starts without that data.
    pub fn from_files_or_new(config: ThesaurusConfig) -> Self {
        let mut engine = Self::new(config);

        let synonym_file = engine.config.synonym_file.clone();
        match load_synonyms(&mut engine, &synonym_file) {
            Ok(count) => info!("Loaded {} words from {}", count, synonym_file.display()),
            Err(e) => warn!("Failed to load {} for synonyms: {}", synonym_file.display(), e),
        }

        let history_file = engine.config.history_file.clone();
        match load_history(&mut engine.history, &history_file) {
            Ok(count) => info!("Loaded {} history entries from {}", count, history_file.display()),
            Err(e) => warn!("Failed to load {} for history: {}", history_file.display(), e),
        }

        engine
    }

    pub fn config(&self) -> &ThesaurusConfig {
        &self.config
    }

    pub fn normalize_word(&self, raw: &str) -> String {
        self.config.word_case.apply(raw)
    }

    pub fn normalize_synonym(&self, raw: &str) -> String {
        self.config.synonym_case.apply(raw)
    }

    /// Adds an empty entry. Fails with `AlreadyExists` when the word is present.
    pub fn add_word(&mut self, word: &str, record_history: bool) -> Result<()> {
        self.index.insert_word(word)?;
        self.trie.insert(word);
        if record_history {
            self.history.push(format!("Create a new entry '{}'", word));
        }
        Ok(())
    }

    /// Adds a synonym to an existing word. `Ok(false)` means it was already there.
    pub fn add_synonym(&mut self, word: &str, synonym: &str, record_history: bool) -> Result<bool> {
        let inserted = self.index.insert_synonym(word, synonym)?;
        if inserted && record_history {
            self.history.push(format!("Add synonym '{}' to '{}'", synonym, word));
        }
        Ok(inserted)
    }

    /// Removes the entry and all of its synonyms. Always audited.
    ///
    /// The word stays in the trie, so it still shows up in `sorted_words`.
    pub fn delete_word(&mut self, word: &str) -> Result<WordEntry> {
        let entry = self.index.remove_word(word)?;
        self.history.push(format!("Delete {} from word entry", word));
        Ok(entry)
    }

    /// Removes one synonym from a word. Always audited.
    pub fn delete_synonym(&mut self, word: &str, synonym: &str) -> Result<()> {
        self.index.remove_synonym(word, synonym)?;
        self.history.push(format!("Delete synonym '{}' from '{}'", synonym, word));
        Ok(())
    }

    pub fn find_word(&self, word: &str) -> Option<&WordEntry> {
        self.index.find(word)
    }

    /// Synonyms of `word`, most recent first. An entry without synonyms gives an empty list.
    pub fn find_synonyms(&self, word: &str) -> Result<Vec<String>> {
        if word.is_empty() {
            return Err(ThesaurusError::invalid_input("word must not be empty"));
        }
        self.index
            .find(word)
            .map(|entry| entry.synonyms().map(str::to_string).collect())
            .ok_or_else(|| ThesaurusError::not_found(format!("word '{}'", word)))
    }

    /// Entries in storage order: bucket by bucket, newest first within a bucket.
    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.index.iter()
    }

    /// Every word ever added, alphabetically.
    pub fn sorted_words(&self) -> Vec<String> {
        self.trie.words()
    }

    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.trie.words_with_prefix(prefix)
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Drops all words, trie paths and history.
    pub fn clear(&mut self) {
        self.index.clear();
        self.trie = WordTrie::new();
        self.history.clear();
    }

    /// Writes both files named by the configuration.
    pub fn save(&self) -> Result<()> {
        save_synonyms(&self.index, &self.config.synonym_file)?;
        save_history(&self.history, &self.config.history_file)?;
        info!(
            "Saved {} words to {} and {} history entries to {}",
            self.index.len(),
            self.config.synonym_file.display(),
            self.history.len(),
            self.config.history_file.display()
        );
        Ok(())
    }
}
