// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw WordNet database
// files to the per-split instance lists.
//
// The pipeline flows in this order:
//
//   WordNet dict/ files
//       │
//       ▼
//   WordnetLoader     → parses synsets and sense keys
//       │
//       ▼
//   FilterList        → drops lemmas excluded from the embeddings
//       │
//       ▼
//   Splitter          → seeded shuffle + train/dev/test cut
//       │
//       ▼
//   Normalizer        → tokenizes and lowercases definitions
//       │
//       ▼
//   DatasetSplits     → in-memory Vec<Instance> per split
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Parses the WordNet 3.0 database files
pub mod wordnet;

/// Tokenizes and lowercases definition text
pub mod normalizer;

/// Exclusion lists for lemmas outside the embedding vocabularies
pub mod filter;

/// Seeded shuffle and three-way split of synsets
pub mod splitter;

/// The in-memory train/dev/test instance lists
pub mod dataset;
