// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `create` and `inspect`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::create_use_case::CreateConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the train/dev/test reverse-dictionary dataset
    Create(CreateArgs),

    /// Read a built split back and report statistics on it
    Inspect(InspectArgs),
}

/// All arguments for the `create` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Directory with the WordNet 3.0 database files
    /// (data.noun, data.verb, data.adj, data.adv, index.sense)
    #[arg(long, default_value = "data/wordnet/dict")]
    pub wordnet_dir: String,

    /// Directory to write train.csv, dev.csv, test.csv and manifest.json
    #[arg(long, default_value = "dataset")]
    pub out_dir: String,

    /// Fraction of synsets assigned to the training set
    #[arg(long, default_value_t = 0.8)]
    pub train_fraction: f64,

    /// Fraction of synsets assigned to the development set
    #[arg(long, default_value_t = 0.1)]
    pub dev_fraction: f64,

    /// Fraction of synsets assigned to the test set
    /// The three fractions must sum to 1.0
    #[arg(long, default_value_t = 0.1)]
    pub test_fraction: f64,

    /// Seed for the synset shuffle — fixing it makes repeated
    /// runs over the same WordNet copy byte-identical
    #[arg(long, default_value_t = 742382)]
    pub seed: u64,

    /// Filter list files (one lemma or sense key per line) naming
    /// target words to exclude, e.g. words missing from a pretrained
    /// embedding vocabulary. May be given multiple times.
    #[arg(long = "filterlist")]
    pub filterlists: Vec<String>,
}

/// Convert CLI CreateArgs into the application-layer CreateConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<CreateArgs> for CreateConfig {
    fn from(a: CreateArgs) -> Self {
        CreateConfig {
            wordnet_dir:    a.wordnet_dir,
            out_dir:        a.out_dir,
            train_fraction: a.train_fraction,
            dev_fraction:   a.dev_fraction,
            test_fraction:  a.test_fraction,
            seed:           a.seed,
            filterlists:    a.filterlists,
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Directory where the dataset was written by `create`
    #[arg(long, default_value = "dataset")]
    pub out_dir: String,

    /// Which split to inspect: train, dev or test
    #[arg(long, default_value = "train")]
    pub split: String,

    /// Number of example lines to print
    #[arg(long, default_value_t = 3)]
    pub samples: usize,
}
