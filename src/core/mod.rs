// File: src/core/mod.rs
pub mod engine;
pub mod history;
pub mod index;
pub mod normalize;
pub mod trie;
