//! Prohibited-content matching for slugs.
//!
//! A [`ContentFilter`] is a trie built once from a fixed word list. Queries are
//! substring checks run against an obfuscation-normalized copy of the text, so
//! `adm1n` and `a@min`-style spellings of a listed word are caught too. Stored
//! words are never normalized.

use std::collections::HashMap;

/// Words that may not appear anywhere in a slug.
///
/// Includes route and system names that would be confusing as public short
/// links, plus common profanity.
pub const PROHIBITED_WORDS: &[&str] = &[
    "admin", "administrator", "api", "root", "sys", "config", "server", "system", "backend",
    "frontend", "login", "logout", "signin", "signup", "auth", "token", "jwt", "password",
    "secret", "superuser", "test", "debug", "staging", "prod", "production", "god", "null",
    "undefined", "void", "error", "health", "ass", "fuck", "shit", "damn", "bitch",
];

/// Answers "does this text contain prohibited content?".
///
/// Services depend on this trait rather than on [`ContentFilter`] so tests can
/// substitute a mock checker.
#[cfg_attr(test, mockall::automock)]
pub trait ContentChecker: Send + Sync {
    /// Returns true if `text` contains a prohibited word after obfuscation
    /// normalization.
    fn contains(&self, text: &str) -> bool;
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

/// Trie-backed prohibited word matcher.
///
/// Immutable once built, so it can be shared across threads without locking.
#[derive(Debug, Default)]
pub struct ContentFilter {
    root: TrieNode,
    words: usize,
}

impl ContentFilter {
    /// Builds a filter from `words`.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        for word in words {
            filter.insert(word.as_ref());
        }
        filter
    }

    /// Builds a filter from [`PROHIBITED_WORDS`].
    pub fn with_default_words() -> Self {
        Self::new(PROHIBITED_WORDS.iter().copied())
    }

    /// Adds a word, lowercased. Empty words are ignored: a terminal root
    /// would match every input.
    fn insert(&mut self, word: &str) {
        let word = word.to_lowercase();
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
    }

    /// Number of distinct words in the filter.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Walks the trie from every starting offset and reports the first
    /// terminal node reached.
    fn matches(&self, text: &[char]) -> bool {
        (0..text.len()).any(|start| {
            let mut node = &self.root;
            for c in &text[start..] {
                match node.children.get(c) {
                    Some(child) if child.terminal => return true,
                    Some(child) => node = child,
                    None => break,
                }
            }
            false
        })
    }
}

impl ContentChecker for ContentFilter {
    fn contains(&self, text: &str) -> bool {
        self.matches(&deobfuscate(text))
    }
}

/// Maps look-alike digits and symbols to the letters they usually stand for,
/// then lowercases.
pub fn deobfuscate(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| match c {
            '0' => 'o',
            '1' => 'i',
            '3' => 'e',
            '4' | '@' => 'a',
            '5' | '$' => 's',
            '7' => 't',
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect()
}
