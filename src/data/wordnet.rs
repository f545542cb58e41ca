// ============================================================
// Layer 4 — WordNet Loader
// ============================================================
// Parses the WordNet 3.0 database files into SynsetEntry values.
//
// How the database files work:
//   dict/data.{noun,verb,adj,adv} hold one synset per line:
//
//   offset lex_filenum ss_type w_cnt word lex_id [word lex_id ...]
//     p_cnt [pointers ...] [frames ...] | gloss
//
//   - offset is the byte offset of the line (decimal, 8 digits)
//   - w_cnt is the number of (word, lex_id) pairs, in HEX
//   - the gloss after `|` is "definition; "example"; "example""
//   - lines starting with two spaces are the license header
//
//   dict/index.sense maps every sense key to its synset:
//
//   lemma%ss_type:lex_filenum:lex_id:head:head_id offset rank tag_cnt
//
// We parse the word list and gloss of every synset, drop the
// pointer/frame section, and attach sense keys so that filter
// lists keyed on sense keys can be applied later.
//
// A missing or malformed database file is fatal — without the
// resource there is no dataset to build.
//
// Reference: wndb(5WN) and senseidx(5WN) manual pages
//            Fellbaum (1998), WordNet: An Electronic Lexical Database

use anyhow::{bail, Context, Result};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::domain::synset::{Lemma, PartOfSpeech, SynsetEntry};
use crate::domain::traits::LexicalSource;

/// The four data files of a WordNet 3.0 `dict/` directory
const DATA_FILES: [&str; 4] = ["data.noun", "data.verb", "data.adj", "data.adv"];

/// Map from (part of speech, synset offset) to the lowercased
/// lemma / sense key pairs recorded for that synset in index.sense
type SenseIndex = HashMap<(PartOfSpeech, u64), Vec<(String, String)>>;

/// Loads all synsets from a WordNet 3.0 `dict/` directory.
/// Implements the LexicalSource trait from Layer 3.
pub struct WordnetLoader {
    /// Path to the directory containing the database files
    dir: PathBuf,
}

impl WordnetLoader {
    /// Create a new WordnetLoader pointed at a `dict/` directory
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }
}

/// Implement the LexicalSource trait so the application layer
/// can call load_all() without knowing about the file format
impl LexicalSource for WordnetLoader {
    fn load_all(&self) -> Result<Vec<SynsetEntry>> {
        if !self.dir.exists() {
            bail!(
                "WordNet directory '{}' does not exist — download WNdb-3.0 \
                 and point --wordnet-dir at its dict/ directory",
                self.dir.display()
            );
        }

        // Sense keys first, so entries can be annotated as they are read
        let sense_index = load_sense_index(&self.dir.join("index.sense"))?;

        let mut entries = Vec::new();
        for name in DATA_FILES {
            let path   = self.dir.join(name);
            let before = entries.len();
            load_data_file(&path, &sense_index, &mut entries)?;
            tracing::debug!("{}: {} synsets", name, entries.len() - before);
        }

        tracing::info!("Loaded {} synsets from '{}'", entries.len(), self.dir.display());
        Ok(entries)
    }
}

/// Parse one data.{pos} file, appending its synsets to `entries`.
fn load_data_file(
    path:        &Path,
    sense_index: &SenseIndex,
    entries:     &mut Vec<SynsetEntry>,
) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read WordNet data file '{}'", path.display()))?;

    for (line_no, line) in content.lines().enumerate() {
        // License header lines start with two spaces; skip blanks too
        if line.starts_with("  ") || line.trim().is_empty() {
            continue;
        }

        let mut entry = parse_data_line(line).with_context(|| {
            format!("Malformed synset at {}:{}", path.display(), line_no + 1)
        })?;

        attach_sense_keys(&mut entry, sense_index);
        entries.push(entry);
    }

    Ok(())
}

/// Parse a single synset line (everything documented in wndb(5WN)).
fn parse_data_line(line: &str) -> Result<SynsetEntry> {
    // The gloss is everything after the first `|`
    let (fields, gloss) = line
        .split_once('|')
        .context("missing '|' gloss separator")?;

    let mut it = fields.split_whitespace();

    let offset: u64 = it
        .next()
        .context("missing synset offset")?
        .parse()
        .context("synset offset is not a number")?;

    // lex_filenum is not needed for the dataset
    let _lex_filenum = it.next().context("missing lex_filenum")?;

    let ss_type = it.next().context("missing ss_type")?;
    let pos = ss_type
        .chars()
        .next()
        .and_then(PartOfSpeech::from_ss_type)
        .with_context(|| format!("unknown ss_type '{}'", ss_type))?;

    // The word count is stored in hexadecimal
    let w_cnt = usize::from_str_radix(it.next().context("missing w_cnt")?, 16)
        .context("w_cnt is not a hex number")?;

    let mut lemmas = Vec::with_capacity(w_cnt);
    for _ in 0..w_cnt {
        let word = it.next().context("truncated word list")?;
        let _lex_id = it.next().context("missing lex_id")?;
        lemmas.push(Lemma::new(strip_adjective_marker(word)));
    }

    // Pointers and verb frames between the word list and the gloss
    // are irrelevant here and are dropped with the iterator.

    Ok(SynsetEntry::new(offset, pos, lemmas, definition_from_gloss(gloss)))
}

/// Adjective lemmas can carry a syntactic marker suffix:
/// "(a)" attributive, "(p)" predicative, "(ip)" postnominal.
/// The marker is position metadata, not part of the word.
fn strip_adjective_marker(word: &str) -> &str {
    for marker in ["(a)", "(p)", "(ip)"] {
        if let Some(stripped) = word.strip_suffix(marker) {
            return stripped;
        }
    }
    word
}

/// A gloss is `definition; "example"; "example"`. Only the
/// unquoted parts form the definition; example sentences are
/// dropped. Several unquoted parts are rejoined with "; ",
/// matching how NLTK exposes Synset.definition().
fn definition_from_gloss(gloss: &str) -> String {
    let parts: Vec<&str> = gloss
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty() && !part.starts_with('"'))
        .collect();
    parts.join("; ")
}

/// Read index.sense into a (pos, offset) → [(lemma, sense key)] map.
fn load_sense_index(path: &Path) -> Result<SenseIndex> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read sense index '{}'", path.display()))?;

    let mut index: SenseIndex = HashMap::new();

    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let parsed = parse_sense_line(line).with_context(|| {
            format!("Malformed sense entry at {}:{}", path.display(), line_no + 1)
        })?;
        let (pos, offset, lemma, key) = parsed;

        index.entry((pos, offset)).or_default().push((lemma, key));
    }

    tracing::debug!("Sense index covers {} synsets", index.len());
    Ok(index)
}

/// Parse one `index.sense` line into (pos, offset, lemma, sense key).
fn parse_sense_line(line: &str) -> Result<(PartOfSpeech, u64, String, String)> {
    let mut it = line.split_whitespace();

    let key = it.next().context("missing sense key")?;
    let offset: u64 = it
        .next()
        .context("missing synset offset")?
        .parse()
        .context("synset offset is not a number")?;

    // Sense key layout: lemma%ss_type:lex_filenum:lex_id:head:head_id
    let (lemma, tail) = key.split_once('%').context("sense key has no '%'")?;
    let digit: u8 = tail
        .split(':')
        .next()
        .context("sense key has no ss_type")?
        .parse()
        .context("sense key ss_type is not a number")?;
    let pos = PartOfSpeech::from_sense_key_digit(digit)
        .with_context(|| format!("unknown sense key ss_type '{}'", digit))?;

    Ok((pos, offset, lemma.to_string(), key.to_string()))
}

/// Attach sense keys from the index to the lemmas of one entry.
/// Sense keys store lemmas lowercased, so matching is case-folded.
fn attach_sense_keys(entry: &mut SynsetEntry, index: &SenseIndex) {
    let Some(senses) = index.get(&(entry.pos, entry.offset)) else {
        tracing::warn!(
            "No sense index entries for synset {}-{:?}",
            entry.offset,
            entry.pos
        );
        return;
    };

    for lemma in &mut entry.lemmas {
        let folded = lemma.name.to_lowercase();
        if let Some((_, key)) = senses.iter().find(|(name, _)| *name == folded) {
            lemma.sense_key = Some(key.clone());
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // A shortened data.noun line for the "cat" synset
    const CAT_LINE: &str = "02121620 05 n 02 cat 0 true_cat 0 002 @ 02120997 n 0000 \
                            ~ 02122298 n 0000 | feline mammal usually having thick soft fur; \
                            \"cats like milk\"";

    #[test]
    fn test_parses_offset_pos_and_lemmas() {
        let entry = parse_data_line(CAT_LINE).unwrap();
        assert_eq!(entry.offset, 2121620);
        assert_eq!(entry.pos, PartOfSpeech::Noun);

        let names: Vec<&str> = entry.lemmas.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["cat", "true_cat"]);
    }

    #[test]
    fn test_gloss_examples_are_dropped() {
        let entry = parse_data_line(CAT_LINE).unwrap();
        assert_eq!(entry.definition, "feline mammal usually having thick soft fur");
    }

    #[test]
    fn test_unquoted_gloss_parts_are_kept() {
        let def = definition_from_gloss(
            "a small unit; one of several; \"an example sentence\"",
        );
        assert_eq!(def, "a small unit; one of several");
    }

    #[test]
    fn test_adjective_markers_are_stripped() {
        assert_eq!(strip_adjective_marker("galore(ip)"), "galore");
        assert_eq!(strip_adjective_marker("former(a)"), "former");
        assert_eq!(strip_adjective_marker("cat"), "cat");
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        // No gloss separator at all
        assert!(parse_data_line("02121620 05 n 01 cat 0 000").is_err());
        // Word count larger than the word list
        assert!(parse_data_line("02121620 05 n 05 cat 0 000 | a feline").is_err());
    }

    #[test]
    fn test_sense_line_parsing() {
        let (pos, offset, lemma, key) =
            parse_sense_line("cat%1:05:00:: 02121620 1 18").unwrap();
        assert_eq!(pos, PartOfSpeech::Noun);
        assert_eq!(offset, 2121620);
        assert_eq!(lemma, "cat");
        assert_eq!(key, "cat%1:05:00::");
    }

    #[test]
    fn test_load_all_attaches_sense_keys() {
        let dir = tempfile::tempdir().unwrap();

        // Minimal dict/ fixture: one noun synset, empty other files
        let mut data_noun = std::fs::File::create(dir.path().join("data.noun")).unwrap();
        writeln!(data_noun, "  1 license header line").unwrap();
        writeln!(data_noun, "{}", CAT_LINE).unwrap();

        for name in ["data.verb", "data.adj", "data.adv"] {
            std::fs::write(dir.path().join(name), "  1 license header line\n").unwrap();
        }
        std::fs::write(
            dir.path().join("index.sense"),
            "cat%1:05:00:: 02121620 1 18\ntrue_cat%1:05:01:: 02121620 1 0\n",
        )
        .unwrap();

        let loader  = WordnetLoader::new(dir.path().to_str().unwrap());
        let entries = loader.load_all().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].lemmas[0].sense_key.as_deref(), Some("cat%1:05:00::"));
        assert_eq!(
            entries[0].lemmas[1].sense_key.as_deref(),
            Some("true_cat%1:05:01::")
        );
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let loader = WordnetLoader::new("/definitely/not/a/wordnet/dir");
        assert!(loader.load_all().is_err());
    }
}
