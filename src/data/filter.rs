// ============================================================
// Layer 4 — Lemma Filter Lists
// ============================================================
// The published dataset only contains target words that exist
// in the embedding spaces the paper evaluates against. Words
// outside those vocabularies are excluded via filter lists:
//
//   - one list of WordNet sense keys missing from the DeConf
//     multi-sense embeddings (matched against Lemma::sense_key)
//   - one list of surface forms missing from the pretrained
//     word2vec vocabulary (matched against Lemma::name)
//
// Both kinds are plain text, one entry per line, and any number
// of lists can be merged into a single FilterList. An entry
// excludes a lemma when it equals either the lemma's surface
// form or its sense key, so one code path serves both kinds.

use anyhow::{Context, Result};
use std::{collections::HashSet, fs, path::Path};

use crate::domain::synset::Lemma;

/// A merged set of excluded lemma names and sense keys.
#[derive(Debug, Default)]
pub struct FilterList {
    entries: HashSet<String>,
}

impl FilterList {
    /// An empty filter that excludes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and merge any number of filter list files.
    /// A missing file is fatal — silently building an unfiltered
    /// dataset would not be the dataset the flags asked for.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut entries = HashSet::new();

        for path in paths {
            let path    = path.as_ref();
            let content = fs::read_to_string(path)
                .with_context(|| format!("Cannot read filter list '{}'", path.display()))?;

            let before = entries.len();
            for line in content.lines() {
                let line = line.trim();
                if !line.is_empty() {
                    entries.insert(line.to_string());
                }
            }

            tracing::info!(
                "Filter list '{}': {} entries",
                path.display(),
                entries.len() - before
            );
        }

        Ok(Self { entries })
    }

    /// True if this lemma must not appear as a target word.
    pub fn excludes(&self, lemma: &Lemma) -> bool {
        if self.entries.contains(&lemma.name) {
            return true;
        }
        match &lemma.sense_key {
            Some(key) => self.entries.contains(key),
            None      => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn lemma_with_key(name: &str, key: &str) -> Lemma {
        let mut lemma = Lemma::new(name);
        lemma.sense_key = Some(key.to_string());
        lemma
    }

    #[test]
    fn test_excludes_by_surface_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filterlist_word2vec.txt");
        std::fs::write(&path, "aardwolf\nzyzzyva\n").unwrap();

        let filter = FilterList::from_paths(&[&path]).unwrap();
        assert!(filter.excludes(&Lemma::new("aardwolf")));
        assert!(!filter.excludes(&Lemma::new("cat")));
    }

    #[test]
    fn test_excludes_by_sense_key() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("filterlist_deconf.txt");
        std::fs::write(&path, "cat%1:05:00::\n").unwrap();

        let filter = FilterList::from_paths(&[&path]).unwrap();
        assert!(filter.excludes(&lemma_with_key("cat", "cat%1:05:00::")));
        // Same surface form, different sense — not excluded
        assert!(!filter.excludes(&lemma_with_key("cat", "cat%1:18:01::")));
    }

    #[test]
    fn test_merges_multiple_lists() {
        let dir = tempfile::tempdir().unwrap();
        let a   = dir.path().join("a.txt");
        let b   = dir.path().join("b.txt");
        std::fs::write(&a, "alpha\n").unwrap();
        std::fs::write(&b, "beta\n\n  \n").unwrap();

        let filter = FilterList::from_paths(&[&a, &b]).unwrap();
        assert_eq!(filter.len(), 2);
        assert!(filter.excludes(&Lemma::new("alpha")));
        assert!(filter.excludes(&Lemma::new("beta")));
    }

    #[test]
    fn test_empty_filter_excludes_nothing() {
        let filter = FilterList::empty();
        assert!(filter.is_empty());
        assert!(!filter.excludes(&Lemma::new("anything")));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        assert!(FilterList::from_paths(&["/no/such/filterlist.txt"]).is_err());
    }
}
