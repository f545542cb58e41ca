// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the output side of the pipeline — everything that
// touches the destination directory:
//
//   split_writer.rs — Writes each split as a UTF-8 text file,
//                     one `word;tok tok tok` record per line,
//                     and reads such files back for inspection.
//
//   manifest.rs     — Saves and loads manifest.json, which
//                     records the seed, fractions and per-split
//                     counts of a run so the output is auditable
//                     and `inspect` can cross-check it.
//
// Why is this a separate layer?
//   The data layer builds instance lists without knowing where
//   they go; this layer knows the file layout without knowing
//   how the instances were built. Swapping the destination
//   (e.g. for an archive format) touches only this layer.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Split file writing and reading
pub mod split_writer;

/// Run manifest persistence
pub mod manifest;
