// ============================================================
// Layer 3 — Instance Domain Type
// ============================================================
// Represents a single reverse-dictionary example in domain
// terms: a target word and the tokenized description that
// should retrieve it.
//
// Example:
//   word:        "cat"
//   description: ["feline", "mammal", "usually", "having", ...]
//
// Instances are what the split files contain, one per line:
//
//   <word>;<token token token ...>\n
//
// The `;` delimiter is escaped as `\;` inside the description,
// so serializing and parsing a line is a lossless round trip.
// Target words are never written with a `;` in them — the
// builder skips such lemmas (WordNet itself contains none).

use serde::{Deserialize, Serialize};

/// The character separating the target word from its description
pub const FIELD_DELIMITER: char = ';';

/// One labelled (target word, tokenized description) example.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instance {
    /// The word the description should map back to
    pub word: String,

    /// The tokenized, lowercased definition of the word
    pub description: Vec<String>,
}

impl Instance {
    /// Create a new Instance
    pub fn new(word: impl Into<String>, description: Vec<String>) -> Self {
        Self { word: word.into(), description }
    }

    /// Render this instance as one dataset line (without the
    /// trailing newline). Delimiters inside description tokens
    /// are escaped so the line stays parseable.
    pub fn to_csv_line(&self) -> String {
        let escaped = self.description.join(" ").replace(';', "\\;");
        format!("{};{}", self.word, escaped)
    }

    /// Parse one dataset line back into an Instance.
    ///
    /// The target word never contains the delimiter (enforced at
    /// build time), so the first `;` on the line is always the
    /// field separator.
    pub fn parse_csv_line(line: &str) -> Option<Self> {
        let (word, rest) = line.split_once(FIELD_DELIMITER)?;
        if word.is_empty() {
            return None;
        }

        let description = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split(' ')
                .map(|token| token.replace("\\;", ";"))
                .collect()
        };

        Some(Self::new(word, description))
    }
}
