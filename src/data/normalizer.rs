// ============================================================
// Layer 4 — Definition Normalizer
// ============================================================
// Turns raw definition text into the token sequence stored in
// the dataset files.
//
// Two steps:
//   1. Pre-tokenize with the HuggingFace `tokenizers` crate's
//      Whitespace pre-tokenizer. It splits on the pattern
//      \w+|[^\w\s]+ so punctuation becomes its own token:
//      "a cat's fur" → ["a", "cat", "'", "s", "fur"]
//   2. Lowercase every token.
//
// The description side of a reverse dictionary must match the
// tokenization of whatever corpus the embeddings were trained
// on, so the tokenizer is an external dependency on purpose —
// its exact behavior belongs to the tokenizers crate, not to
// this pipeline.
//
// Empty or whitespace-only definitions produce an empty token
// list rather than an error: one bad gloss must never abort a
// run over the whole of WordNet.
//
// Reference: tokenizers crate documentation (pre-tokenizers)

use anyhow::Result;
use tokenizers::pre_tokenizers::whitespace::Whitespace;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

use crate::domain::traits::Tokenize;

/// Tokenizes and lowercases definition text.
pub struct Normalizer {
    /// The word-level pre-tokenizer from the tokenizers crate
    pre_tokenizer: Whitespace,
}

impl Normalizer {
    /// Create a new Normalizer
    pub fn new() -> Self {
        Self { pre_tokenizer: Whitespace }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenize for Normalizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let mut pretokenized = PreTokenizedString::from(trimmed);
        self.pre_tokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| anyhow::anyhow!("Tokenisation error: {e}"))?;

        let tokens = pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .map(|(token, _, _)| token.to_lowercase())
            .collect();

        Ok(tokens)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        Normalizer::new().tokenize(text).unwrap()
    }

    #[test]
    fn test_splits_on_whitespace() {
        assert_eq!(
            tokenize("a small domesticated carnivorous mammal"),
            vec!["a", "small", "domesticated", "carnivorous", "mammal"]
        );
    }

    #[test]
    fn test_lowercases_tokens() {
        assert_eq!(tokenize("Felis Catus"), vec!["felis", "catus"]);
    }

    #[test]
    fn test_punctuation_becomes_own_token() {
        let tokens = tokenize("soft fur, no roar");
        assert_eq!(tokens, vec!["soft", "fur", ",", "no", "roar"]);
    }

    #[test]
    fn test_empty_text_gives_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }

    #[test]
    fn test_extra_whitespace_is_ignored() {
        assert_eq!(tokenize("  thick   soft  fur "), vec!["thick", "soft", "fur"]);
    }
}
