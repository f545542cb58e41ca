// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits defining the core concepts
// of the dataset: synsets, instances, and the abstractions
// the other layers implement.
//
// Rules for this layer:
//   - NO tokenizer or clap types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no corpus on disk needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A WordNet synset as read from the lexical resource
pub mod synset;

// One (target word, tokenized description) training example
pub mod instance;

// Core abstractions (traits) that other layers implement
pub mod traits;
