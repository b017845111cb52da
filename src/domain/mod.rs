// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and traits defining the core
// concepts of the converter. No file I/O, no clap types,
// no randomness — just what things ARE.

// Attribute declarations and one-hot codes
pub mod attribute;

// Raw rows, encoded rows, and the dataset with its unit counts
pub mod dataset;

// The conversion error kinds
pub mod error;

// Missing-value report and the end-of-run summary
pub mod report;

// Core abstractions implemented by other layers
pub mod traits;
