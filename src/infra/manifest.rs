// ============================================================
// Layer 6 — Run Manifest
// ============================================================
// Saves and restores manifest.json next to the split files.
//
// What gets recorded per run:
//   1. The seed and split fractions — enough to reproduce the
//      exact same files from the same WordNet copy
//   2. Synset and instance counts per split — enough for
//      `inspect` to verify a file was not truncated or edited
//   3. The filter lists that were applied
//
// Why save this separately from the split files?
//   The split files are the published artifact and carry no
//   header row, so the parameters that produced them have to
//   live somewhere auditable.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};
use serde::{Deserialize, Serialize};

/// Everything needed to audit or reproduce one `create` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetManifest {
    /// Seed of the synset shuffle
    pub seed: u64,

    /// The three split fractions, in train/dev/test order
    pub train_fraction: f64,
    pub dev_fraction:   f64,
    pub test_fraction:  f64,

    /// Filter list files that were applied
    pub filterlists: Vec<String>,

    /// Number of synsets assigned to each split
    pub train_synsets: usize,
    pub dev_synsets:   usize,
    pub test_synsets:  usize,

    /// Number of instances written to each split file
    pub train_instances: usize,
    pub dev_instances:   usize,
    pub test_instances:  usize,
}

impl DatasetManifest {
    /// The instance count recorded for a split, by name.
    pub fn instances_for(&self, split: &str) -> Option<usize> {
        match split {
            "train" => Some(self.train_instances),
            "dev"   => Some(self.dev_instances),
            "test"  => Some(self.test_instances),
            _       => None,
        }
    }

    /// Save the manifest as pretty-printed JSON in `dir`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = dir.join("manifest.json");
        let json = serde_json::to_string_pretty(self)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

        tracing::debug!("Saved run manifest to '{}'", path.display());
        Ok(())
    }

    /// Load the manifest written by a previous `create` run.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join("manifest.json");

        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read manifest from '{}'. \
                 Make sure you have run 'create' before 'inspect'.",
                path.display()
            )
        })?;

        Ok(serde_json::from_str(&json)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manifest() -> DatasetManifest {
        DatasetManifest {
            seed:            742382,
            train_fraction:  0.8,
            dev_fraction:    0.1,
            test_fraction:   0.1,
            filterlists:     vec!["filterlist_word2vec.txt".to_string()],
            train_synsets:   8,
            dev_synsets:     1,
            test_synsets:    1,
            train_instances: 12,
            dev_instances:   2,
            test_instances:  1,
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir      = tempfile::tempdir().unwrap();
        let manifest = sample_manifest();

        manifest.save(dir.path()).unwrap();
        let loaded = DatasetManifest::load(dir.path()).unwrap();

        assert_eq!(loaded, manifest);
    }

    #[test]
    fn test_instances_for_split_names() {
        let manifest = sample_manifest();
        assert_eq!(manifest.instances_for("train"), Some(12));
        assert_eq!(manifest.instances_for("dev"),   Some(2));
        assert_eq!(manifest.instances_for("test"),  Some(1));
        assert_eq!(manifest.instances_for("bogus"), None);
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DatasetManifest::load(dir.path()).is_err());
    }
}
