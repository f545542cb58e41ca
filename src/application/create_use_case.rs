// ============================================================
// Layer 2 — CreateUseCase
// ============================================================
// Orchestrates the full dataset build in order:
//
//   Step 1: Load filter lists            (Layer 4 - data)
//   Step 2: Load WordNet synsets         (Layer 4 - data)
//   Step 3: Seeded shuffle + 3-way split (Layer 4 - data)
//   Step 4: Tokenize into instances      (Layer 4 - data)
//   Step 5: Write the split files        (Layer 6 - infra)
//   Step 6: Write the run manifest       (Layer 6 - infra)
//
// The split happens BEFORE instances are built, on whole
// synsets, so no definition ever appears in more than one set.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::DatasetSplits,
    filter::FilterList,
    normalizer::Normalizer,
    splitter::{split_three_way, SplitConfig},
    wordnet::WordnetLoader,
};
use crate::domain::{
    instance::{Instance, FIELD_DELIMITER},
    synset::SynsetEntry,
    traits::{LexicalSource, Tokenize},
};
use crate::infra::{manifest::DatasetManifest, split_writer::SplitWriter};

// ─── Creation Configuration ──────────────────────────────────────────────────
// All parameters of a dataset build. Serialisable so the values
// end up, via the manifest, next to the files they produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConfig {
    pub wordnet_dir:    String,
    pub out_dir:        String,
    pub train_fraction: f64,
    pub dev_fraction:   f64,
    pub test_fraction:  f64,
    pub seed:           u64,
    pub filterlists:    Vec<String>,
}

impl Default for CreateConfig {
    fn default() -> Self {
        Self {
            wordnet_dir:    "data/wordnet/dict".to_string(),
            out_dir:        "dataset".to_string(),
            train_fraction: 0.8,
            dev_fraction:   0.1,
            test_fraction:  0.1,
            seed:           742382,
            filterlists:    Vec::new(),
        }
    }
}

/// What `create` reports back to the CLI once the files are on disk.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub train_instances: usize,
    pub dev_instances:   usize,
    pub test_instances:  usize,
}

// ─── CreateUseCase ────────────────────────────────────────────────────────────
// Owns the config and runs the full build pipeline.
pub struct CreateUseCase {
    config: CreateConfig,
}

impl CreateUseCase {
    /// Create a new CreateUseCase with the given configuration
    pub fn new(config: CreateConfig) -> Self {
        Self { config }
    }

    /// Execute the full pipeline end to end: build the splits in
    /// memory, then write the three files and the manifest.
    pub fn execute(&self) -> Result<DatasetSummary> {
        let cfg = &self.config;

        let (splits, manifest) = self.build()?;

        // ── Step 5: Write the split files ─────────────────────────────────────
        // One file per split, input order preserved, failures fatal
        let writer = SplitWriter::new(&cfg.out_dir)?;
        for (name, instances) in splits.iter_named() {
            writer.write_split(name, instances)?;
        }

        // ── Step 6: Write the run manifest ────────────────────────────────────
        manifest.save(std::path::Path::new(&cfg.out_dir))?;

        tracing::info!(
            "Dataset complete: {} instances across the three splits",
            splits.total_instances()
        );

        Ok(DatasetSummary {
            train_instances: manifest.train_instances,
            dev_instances:   manifest.dev_instances,
            test_instances:  manifest.test_instances,
        })
    }

    /// Build the dataset in memory without touching the output
    /// directory. This is the programmatic entry point — callers
    /// that want the instance lists directly use this and skip
    /// the files entirely.
    pub fn build(&self) -> Result<(DatasetSplits, DatasetManifest)> {
        let cfg = &self.config;

        // ── Step 1: Load filter lists ─────────────────────────────────────────
        // Lemmas outside the embedding vocabularies never become instances
        let filter = FilterList::from_paths(&cfg.filterlists)?;
        if !filter.is_empty() {
            tracing::info!("{} filter entries active", filter.len());
        }

        // ── Step 2: Load all WordNet synsets ──────────────────────────────────
        let loader  = WordnetLoader::new(&cfg.wordnet_dir);
        let entries = loader.load_all()?;

        // ── Step 3: Seeded shuffle and train/dev/test cut ─────────────────────
        // Splitting along synsets (and not instances) is important
        // to not taint the test data.
        let split_cfg = SplitConfig::new(
            cfg.train_fraction,
            cfg.dev_fraction,
            cfg.test_fraction,
            cfg.seed,
        )?;
        let (train_synsets, dev_synsets, test_synsets) =
            split_three_way(entries, &split_cfg);
        tracing::info!(
            "Split: {} train / {} dev / {} test synsets",
            train_synsets.len(),
            dev_synsets.len(),
            test_synsets.len()
        );

        // ── Step 4: Convert each split's synsets into instances ───────────────
        let normalizer = Normalizer::new();
        let train = build_instances(&train_synsets, &normalizer, &filter);
        let dev   = build_instances(&dev_synsets,   &normalizer, &filter);
        let test  = build_instances(&test_synsets,  &normalizer, &filter);

        let manifest = DatasetManifest {
            seed:            cfg.seed,
            train_fraction:  cfg.train_fraction,
            dev_fraction:    cfg.dev_fraction,
            test_fraction:   cfg.test_fraction,
            filterlists:     cfg.filterlists.clone(),
            train_synsets:   train_synsets.len(),
            dev_synsets:     dev_synsets.len(),
            test_synsets:    test_synsets.len(),
            train_instances: train.len(),
            dev_instances:   dev.len(),
            test_instances:  test.len(),
        };

        Ok((DatasetSplits::new(train, dev, test), manifest))
    }
}

// ─── Instance Construction ────────────────────────────────────────────────────
// A synset can have multiple lemmas; each surviving lemma becomes
// one Instance sharing the synset's tokenized definition.
//
// A lemma survives when it is:
//   - a single word (no `_` collocations),
//   - free of the record delimiter `;`,
//   - not on any filter list.
//
// A synset whose definition tokenizes to nothing, or cannot be
// tokenized at all, yields zero instances — logged and skipped,
// never fatal.
pub fn build_instances(
    entries:   &[SynsetEntry],
    tokenizer: &impl Tokenize,
    filter:    &FilterList,
) -> Vec<Instance> {
    let mut instances = Vec::new();

    for entry in entries {
        let tokens = match tokenizer.tokenize(&entry.definition) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::warn!(
                    "Skipping synset {}-{:?}: {}",
                    entry.offset,
                    entry.pos,
                    e
                );
                continue;
            }
        };

        // Empty definition → zero instances, not a crash
        if tokens.is_empty() {
            tracing::debug!("Synset {}-{:?} has an empty definition", entry.offset, entry.pos);
            continue;
        }

        for lemma in &entry.lemmas {
            // Multi-word phrases are indicated by `_`
            if lemma.is_multiword() {
                continue;
            }

            // Delimiter safety: a `;` in the target word would make
            // the record format ambiguous
            if lemma.name.contains(FIELD_DELIMITER) {
                tracing::warn!("Skipping lemma '{}': contains the delimiter", lemma.name);
                continue;
            }

            if filter.excludes(lemma) {
                continue;
            }

            instances.push(Instance::new(lemma.name.clone(), tokens.clone()));
        }
    }

    instances
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::synset::{Lemma, PartOfSpeech};
    use std::path::Path;

    /// Whitespace tokenizer stub so the tests control every token
    struct StubTokenizer;

    impl Tokenize for StubTokenizer {
        fn tokenize(&self, text: &str) -> Result<Vec<String>> {
            if text == "boom" {
                anyhow::bail!("stub failure");
            }
            Ok(text.split_whitespace().map(str::to_lowercase).collect())
        }
    }

    fn synset(offset: u64, lemmas: &[&str], definition: &str) -> SynsetEntry {
        SynsetEntry::new(
            offset,
            PartOfSpeech::Noun,
            lemmas.iter().map(|l| Lemma::new(*l)).collect(),
            definition,
        )
    }

    #[test]
    fn test_each_lemma_becomes_an_instance() {
        let entries = [synset(1, &["cat", "kitty"], "a small mammal")];
        let out = build_instances(&entries, &StubTokenizer, &FilterList::empty());

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].word, "cat");
        assert_eq!(out[1].word, "kitty");
        assert_eq!(out[0].description, out[1].description);
    }

    #[test]
    fn test_multiword_lemmas_are_dropped() {
        let entries = [synset(1, &["cat", "true_cat"], "a small mammal")];
        let out = build_instances(&entries, &StubTokenizer, &FilterList::empty());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word, "cat");
    }

    #[test]
    fn test_empty_definition_yields_no_instances() {
        let entries = [synset(1, &["cat"], "   ")];
        let out = build_instances(&entries, &StubTokenizer, &FilterList::empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_tokenizer_failure_skips_only_that_synset() {
        let entries = [
            synset(1, &["bad"],  "boom"),
            synset(2, &["good"], "a fine definition"),
        ];
        let out = build_instances(&entries, &StubTokenizer, &FilterList::empty());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word, "good");
    }

    #[test]
    fn test_delimiter_bearing_lemma_is_dropped() {
        let entries = [synset(1, &["we;rd", "fine"], "some definition")];
        let out = build_instances(&entries, &StubTokenizer, &FilterList::empty());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word, "fine");
    }

    /// Write a ten-synset WordNet fixture the real loader can parse
    fn write_wordnet_fixture(dir: &Path) {
        use std::fmt::Write as _;

        let mut data_noun = String::from("  1 license header line\n");
        let mut index     = String::new();
        for i in 0..10u64 {
            writeln!(
                data_noun,
                "{:08} 05 n 01 word{} 0 000 | definition number {} of the fixture",
                i + 1,
                i,
                i
            )
            .unwrap();
            writeln!(index, "word{}%1:05:00:: {:08} 1 0", i, i + 1).unwrap();
        }

        std::fs::write(dir.join("data.noun"), data_noun).unwrap();
        for name in ["data.verb", "data.adj", "data.adv"] {
            std::fs::write(dir.join(name), "  1 license header line\n").unwrap();
        }
        std::fs::write(dir.join("index.sense"), index).unwrap();
    }

    #[test]
    fn test_execute_is_deterministic_and_matches_manifest() {
        let wordnet = tempfile::tempdir().unwrap();
        write_wordnet_fixture(wordnet.path());

        let run = |out_dir: &Path| {
            let cfg = CreateConfig {
                wordnet_dir: wordnet.path().to_str().unwrap().to_string(),
                out_dir:     out_dir.to_str().unwrap().to_string(),
                ..CreateConfig::default()
            };
            CreateUseCase::new(cfg).execute().unwrap();
        };

        let out_a = tempfile::tempdir().unwrap();
        let out_b = tempfile::tempdir().unwrap();
        run(out_a.path());
        run(out_b.path());

        let manifest = DatasetManifest::load(out_a.path()).unwrap();
        let mut written_total = 0;

        for name in ["train", "dev", "test"] {
            let file   = format!("{name}.csv");
            let first  = std::fs::read_to_string(out_a.path().join(&file)).unwrap();
            let second = std::fs::read_to_string(out_b.path().join(&file)).unwrap();

            // Same seed, fractions and input ⇒ byte-identical files
            assert_eq!(first, second, "{file} differs between runs");

            // The manifest records exactly what was written
            assert_eq!(manifest.instances_for(name), Some(first.lines().count()));
            written_total += first.lines().count();
        }

        // Every fixture synset has one single-word lemma, so all ten
        // end up in exactly one of the three files
        assert_eq!(written_total, 10);
        assert_eq!(manifest.train_synsets, 8);
        assert_eq!(manifest.dev_synsets, 1);
        assert_eq!(manifest.test_synsets, 1);
    }

    #[test]
    fn test_two_senses_of_a_word_yield_two_instances() {
        // "bank" appears in two different synsets — both survive
        let entries = [
            synset(1, &["bank"], "a financial institution"),
            synset(2, &["bank"], "sloping land beside water"),
        ];
        let out = build_instances(&entries, &StubTokenizer, &FilterList::empty());

        assert_eq!(out.len(), 2);
        assert_ne!(out[0].description, out[1].description);
    }
}
