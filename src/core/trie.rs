// File: src/core/trie.rs
use tracing::warn;

const ALPHABET: usize = 26;

type NodeId = usize;

#[derive(Clone)]
struct TrieNode {
    /// One slot per letter `a..=z`, indexing into `WordTrie::nodes`.
    children: [Option<NodeId>; ALPHABET],
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: [None; ALPHABET], terminal: false }
    }
}

/// Ordered set of every word ever added to the thesaurus.
///
/// Nodes live in one arena; node 0 is the root. Only the Latin letters `a..=z` are
/// addressable, so anything else is dropped on insert. Supporting Unicode words would
/// need a map-based child table instead of the fixed array.
///
/// There is no removal: deleting an entry from the index leaves its path here.
#[derive(Clone)]
pub struct WordTrie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()], words: 0 }
    }

    /// Maps a normalized character to its child slot.
    fn slot(c: char) -> Option<usize> {
        c.is_ascii_lowercase().then(|| (c as u8 - b'a') as usize)
    }

    /// Trims and lowercases a private copy of `word`, then marks its path terminal.
    ///
    /// Characters outside `a..=z` are skipped with a warning. Returns false when nothing
    /// addressable was left or the word was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let normalized = word.trim().to_lowercase();
        let mut node_idx = 0;
        let mut depth = 0;
        for c in normalized.chars() {
            let Some(slot) = Self::slot(c) else {
                warn!("Skipping character {:?} in '{}': not a letter a-z", c, normalized);
                continue;
            };
            let next_idx = if let Some(id) = self.nodes[node_idx].children[slot] {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children[slot] = Some(new_node_id);
                new_node_id
            };
            node_idx = next_idx;
            depth += 1;
        }

        if depth == 0 || self.nodes[node_idx].terminal {
            return false;
        }
        self.nodes[node_idx].terminal = true;
        self.words += 1;
        true
    }

    fn locate(&self, path: &str) -> Option<NodeId> {
        let mut node_idx = 0;
        for c in path.chars() {
            node_idx = self.nodes[node_idx].children[Self::slot(c)?]?;
        }
        Some(node_idx)
    }

    pub fn contains(&self, word: &str) -> bool {
        let normalized = word.trim().to_lowercase();
        !normalized.is_empty()
            && self.locate(&normalized).is_some_and(|id| self.nodes[id].terminal)
    }

    /// Number of terminal paths.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// All words in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut result = Vec::with_capacity(self.words);
        let mut path = String::new();
        self.collect(0, &mut path, &mut result);
        result
    }

    /// Words starting with `prefix` (trimmed and lowercased), in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut path = prefix.trim().to_lowercase();
        let mut result = Vec::new();
        if let Some(start) = self.locate(&path) {
            self.collect(start, &mut path, &mut result);
        }
        result
    }

    /// Pre-order walk; children are visited `a` to `z` so output comes out sorted.
    /// Recursion depth is bounded by the longest stored word.
    fn collect(&self, node_idx: NodeId, path: &mut String, out: &mut Vec<String>) {
        let node = &self.nodes[node_idx];
        if node.terminal {
            out.push(path.clone());
        }
        for (slot, child) in node.children.iter().enumerate() {
            if let Some(child_idx) = *child {
                path.push((b'a' + slot as u8) as char);
                self.collect(child_idx, path, out);
                path.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_enumeration() {
        let mut trie = WordTrie::new();
        for word in ["banana", "apple", "cherry"] {
            assert!(trie.insert(word));
        }
        assert_eq!(trie.words(), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_prefixes_and_nested_words() {
        let mut trie = WordTrie::new();
        for word in ["car", "cart", "ca", "carbon", "dog"] {
            trie.insert(word);
        }
        assert_eq!(trie.words(), vec!["ca", "car", "carbon", "cart", "dog"]);
        assert_eq!(trie.words_with_prefix("car"), vec!["car", "carbon", "cart"]);
        assert_eq!(trie.words_with_prefix(" CAR "), vec!["car", "carbon", "cart"]);
        assert!(trie.words_with_prefix("x").is_empty());
        assert!(trie.words_with_prefix("c-").is_empty());
        assert_eq!(trie.words_with_prefix("").len(), 5);
    }

    #[test]
    fn test_insert_normalizes_and_skips_non_letters() {
        let mut trie = WordTrie::new();
        assert!(trie.insert("  Apple "));
        assert!(trie.contains("apple"));
        assert!(trie.contains("APPLE"));

        assert!(trie.insert("well-being"));
        assert!(trie.contains("wellbeing"));

        assert!(!trie.insert("123"));
        assert!(!trie.insert(""));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_duplicate_insert_counts_once() {
        let mut trie = WordTrie::new();
        assert!(trie.insert("apple"));
        assert!(!trie.insert("apple"));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.words(), vec!["apple"]);
    }

    #[test]
    fn test_prefix_is_not_a_word() {
        let mut trie = WordTrie::new();
        trie.insert("apple");
        assert!(!trie.contains("app"));
        assert!(!trie.contains(""));
        assert!(!trie.is_empty());
    }
}
