// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal each:
// converting a dataset, or previewing its encoding.
//
// Rules for this layer:
//   - No parsing or encoding logic here (Layer 4)
//   - No file-format knowledge here (Layer 6)
//   - No printing here (Layer 1)
//   - Only workflow coordination

// The full ARFF → .pat conversion workflow
pub mod convert_use_case;

// Parse-only encoding preview
pub mod inspect_use_case;
