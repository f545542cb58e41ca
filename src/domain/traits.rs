// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - WordnetLoader implements LexicalSource
//   - A future WiktionaryLoader could also implement it
//   - The application layer only sees LexicalSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::synset::SynsetEntry;

// ─── LexicalSource ────────────────────────────────────────────────────────────
/// Any component that can supply (word, definition) material.
///
/// Implementations:
///   - WordnetLoader → reads the WordNet 3.0 database files
///   - (future) WiktionaryLoader → reads a Wiktionary dump
pub trait LexicalSource {
    /// Load every synset from this source.
    /// Failing to load the resource at all is fatal for the run.
    fn load_all(&self) -> Result<Vec<SynsetEntry>>;
}

// ─── Tokenize ─────────────────────────────────────────────────────────────────
/// Any component that can turn definition text into word tokens.
///
/// Implementations:
///   - Normalizer → HuggingFace tokenizers pre-tokenizer + lowercasing
pub trait Tokenize {
    /// Tokenize one definition. Empty input must yield an empty
    /// token list, not an error — a single bad definition never
    /// aborts the whole run.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
