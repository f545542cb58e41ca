// ============================================================
// Layer 3 — Synset Domain Types
// ============================================================
// A synset is WordNet's unit of meaning: a set of lemmas
// (surface forms) that share one definition. The reverse
// dictionary maps the definition back to each lemma, so one
// synset fans out into one Instance per usable lemma.
//
// Example:
//   Synset 02121620-n
//     lemmas:     ["cat", "true_cat"]
//     definition: "feline mammal usually having thick soft fur ..."
//
// Reference: Fellbaum (1998), WordNet: An Electronic Lexical Database
//            wndb(5WN) database file manual page

use serde::{Deserialize, Serialize};

/// The four WordNet database files plus the satellite-adjective
/// subtype that shares data.adj with plain adjectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    AdjectiveSatellite,
    Adverb,
}

impl PartOfSpeech {
    /// Parse the one-character synset type field of a data file line.
    pub fn from_ss_type(c: char) -> Option<Self> {
        match c {
            'n' => Some(Self::Noun),
            'v' => Some(Self::Verb),
            'a' => Some(Self::Adjective),
            's' => Some(Self::AdjectiveSatellite),
            'r' => Some(Self::Adverb),
            _   => None,
        }
    }

    /// Parse the numeric ss_type digit used inside sense keys
    /// (lemma%1:... is a noun sense, %5:... an adjective satellite).
    pub fn from_sense_key_digit(d: u8) -> Option<Self> {
        match d {
            1 => Some(Self::Noun),
            2 => Some(Self::Verb),
            3 => Some(Self::Adjective),
            4 => Some(Self::Adverb),
            5 => Some(Self::AdjectiveSatellite),
            _ => None,
        }
    }
}

/// One surface form of a synset.
///
/// Multi-word lemmas use `_` as the separator in the database files
/// ("true_cat"); they are excluded from the dataset because the
/// target side of a reverse-dictionary instance is a single word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lemma {
    /// Surface form exactly as stored in the data file
    pub name: String,

    /// WordNet sense key from index.sense, e.g. "cat%1:05:00::".
    /// Used by sense-key filter lists.
    pub sense_key: Option<String>,
}

impl Lemma {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), sense_key: None }
    }

    /// True for collocations like "true_cat" — excluded from the dataset
    pub fn is_multiword(&self) -> bool {
        self.name.contains('_')
    }
}

/// One synset read from a WordNet data file.
/// Immutable once loaded — the pipeline only derives from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynsetEntry {
    /// Byte offset of the synset in its data file — together with
    /// the part of speech this identifies the synset uniquely
    pub offset: u64,

    /// Which data file the synset came from
    pub pos: PartOfSpeech,

    /// All surface forms of the synset, in file order
    pub lemmas: Vec<Lemma>,

    /// The definition part of the gloss (example sentences removed)
    pub definition: String,
}

impl SynsetEntry {
    pub fn new(
        offset:     u64,
        pos:        PartOfSpeech,
        lemmas:     Vec<Lemma>,
        definition: impl Into<String>,
    ) -> Self {
        Self { offset, pos, lemmas, definition: definition.into() }
    }
}
