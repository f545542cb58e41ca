// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (building the dataset or inspecting it).
//
// Rules for this layer:
//   - No file-format parsing here (that's Layer 4 and 6)
//   - No UI or printing here (that's Layer 1)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The dataset creation workflow
pub mod create_use_case;

// The dataset inspection workflow
pub mod inspect_use_case;
