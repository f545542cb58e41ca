// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Reads one previously written split back and summarises it:
//
//   Step 1: Load the run manifest         (Layer 6 - infra)
//   Step 2: Parse the split file          (Layer 6 - infra)
//   Step 3: Cross-check counts + report
//
// Parsing the file exercises the same record format the writer
// produces, so `inspect` doubles as an end-to-end check that a
// published dataset is intact.

use anyhow::{bail, Result};
use std::{collections::HashSet, path::Path};

use crate::data::dataset::SPLIT_NAMES;
use crate::infra::{manifest::DatasetManifest, split_writer};

/// What `inspect` reports back to the CLI.
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub split:               String,
    pub instances:           usize,
    pub distinct_words:      usize,
    pub avg_description_len: f64,
    pub sample_lines:        Vec<String>,
}

pub struct InspectUseCase {
    out_dir: String,
    split:   String,
}

impl InspectUseCase {
    pub fn new(out_dir: String, split: String) -> Self {
        Self { out_dir, split }
    }

    /// Parse the split file, verify it against the manifest, and
    /// summarise it. `samples` example lines are included verbatim.
    pub fn report(&self, samples: usize) -> Result<SplitReport> {
        if !SPLIT_NAMES.contains(&self.split.as_str()) {
            bail!(
                "Unknown split '{}' — expected one of: {}",
                self.split,
                SPLIT_NAMES.join(", ")
            );
        }

        let dir = Path::new(&self.out_dir);

        // ── Step 1: Load the manifest of the producing run ────────────────────
        let manifest = DatasetManifest::load(dir)?;

        // ── Step 2: Parse the split file back into instances ──────────────────
        let path      = dir.join(format!("{}.csv", self.split));
        let instances = split_writer::read_split(&path)?;

        // ── Step 3: Cross-check against the manifest ──────────────────────────
        // A mismatch means the file was edited or truncated after
        // the run — worth flagging, but the file itself parsed fine.
        if let Some(expected) = manifest.instances_for(&self.split) {
            if expected != instances.len() {
                tracing::warn!(
                    "Manifest records {} instances for '{}' but the file has {}",
                    expected,
                    self.split,
                    instances.len()
                );
            }
        }

        let distinct_words: HashSet<&str> =
            instances.iter().map(|i| i.word.as_str()).collect();

        let token_total: usize = instances.iter().map(|i| i.description.len()).sum();
        let avg_description_len = if instances.is_empty() {
            0.0
        } else {
            token_total as f64 / instances.len() as f64
        };

        let sample_lines = instances
            .iter()
            .take(samples)
            .map(|i| i.to_csv_line())
            .collect();

        Ok(SplitReport {
            split: self.split.clone(),
            instances: instances.len(),
            distinct_words: distinct_words.len(),
            avg_description_len,
            sample_lines,
        })
    }
}
