// File: tests/session.rs
use std::collections::{BTreeMap, BTreeSet};
use std::fs;

use tempfile::tempdir;
use thesaurus_core::core::index::bucket_of;
use thesaurus_core::{ThesaurusConfig, ThesaurusEngine};

fn config_in(dir: &std::path::Path) -> ThesaurusConfig {
    ThesaurusConfig {
        synonym_file: dir.join("synonymList.txt"),
        history_file: dir.join("history.txt"),
        ..ThesaurusConfig::default()
    }
}

fn snapshot(engine: &ThesaurusEngine) -> BTreeMap<String, BTreeSet<String>> {
    engine
        .entries()
        .map(|e| (e.word().to_string(), e.synonyms().map(str::to_string).collect()))
        .collect()
}

#[test]
fn save_and_reload_restores_words_synonyms_and_history() {
    let dir = tempdir().unwrap();
    let mut engine = ThesaurusEngine::new(config_in(dir.path()));

    for word in ["happy", "sad", "quick", "bright"] {
        engine.add_word(word, true).unwrap();
    }
    engine.add_synonym("happy", "Glad", true).unwrap();
    engine.add_synonym("happy", "Joyful", true).unwrap();
    engine.add_synonym("sad", "Glum", true).unwrap();
    engine.add_synonym("quick", "Fast", true).unwrap();
    engine.add_synonym("quick", "Swift", true).unwrap();
    engine.delete_synonym("quick", "Fast").unwrap();
    engine.delete_word("bright").unwrap();

    let words_before = snapshot(&engine);
    let history_before: Vec<_> = engine.history().iter().cloned().collect();
    engine.save().unwrap();

    engine.clear();
    assert!(engine.is_empty());

    let restored = ThesaurusEngine::from_files_or_new(config_in(dir.path()));
    assert_eq!(snapshot(&restored), words_before);
    assert_eq!(restored.find_synonyms("happy").unwrap(), vec!["Joyful", "Glad"]);
    let history_after: Vec<_> = restored.history().iter().cloned().collect();
    assert_eq!(history_after, history_before);
    assert_eq!(history_after[0].action, "Delete bright from word entry");

    // Only surviving words are written, so the restored trie no longer has "bright".
    assert_eq!(restored.sorted_words(), vec!["happy", "quick", "sad"]);
}

#[test]
fn history_order_survives_three_pushes() {
    let dir = tempdir().unwrap();
    let mut engine = ThesaurusEngine::new(config_in(dir.path()));
    engine.add_word("a", true).unwrap();
    engine.add_word("b", true).unwrap();
    engine.add_word("c", true).unwrap();

    let actions = |e: &ThesaurusEngine| -> Vec<String> {
        e.history().iter().map(|h| h.action.clone()).collect()
    };
    let expected = vec![
        "Create a new entry 'c'".to_string(),
        "Create a new entry 'b'".to_string(),
        "Create a new entry 'a'".to_string(),
    ];
    assert_eq!(actions(&engine), expected);

    engine.save().unwrap();
    let restored = ThesaurusEngine::from_files_or_new(config_in(dir.path()));
    assert_eq!(actions(&restored), expected);
}

#[test]
fn missing_files_start_an_empty_session() {
    let dir = tempdir().unwrap();
    let engine = ThesaurusEngine::from_files_or_new(config_in(dir.path()));
    assert!(engine.is_empty());
    assert!(engine.history().is_empty());
}

#[test]
fn storage_listing_follows_hash_buckets() {
    let dir = tempdir().unwrap();
    let mut engine = ThesaurusEngine::new(config_in(dir.path()));
    for word in ["banana", "apple", "cherry"] {
        engine.add_word(word, false).unwrap();
    }

    let listed: Vec<&str> = engine.entries().map(|e| e.word()).collect();
    let mut by_bucket = vec!["banana", "apple", "cherry"];
    by_bucket.sort_by_key(|w| bucket_of(w));
    assert_eq!(listed, by_bucket);
    assert_eq!(engine.sorted_words(), vec!["apple", "banana", "cherry"]);

    engine.save().unwrap();
    let lines = fs::read_to_string(dir.path().join("synonymList.txt")).unwrap();
    let saved: Vec<&str> = lines.lines().collect();
    let expected: Vec<String> = by_bucket.iter().map(|w| format!("{} :", w)).collect();
    assert_eq!(saved, expected);
}

#[test]
fn deleted_word_stays_in_alphabetical_listing() {
    let dir = tempdir().unwrap();
    let mut engine = ThesaurusEngine::new(config_in(dir.path()));
    engine.add_word("apple", false).unwrap();
    engine.add_word("banana", false).unwrap();
    engine.delete_word("apple").unwrap();

    assert!(engine.find_word("apple").is_none());
    assert_eq!(engine.sorted_words(), vec!["apple", "banana"]);
    assert_eq!(engine.len(), 1);
}
