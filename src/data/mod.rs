// ============================================================
// Layer 4 — Conversion Pipeline
// ============================================================
// This layer takes an ARFF file all the way to the encoded,
// scaled, partitioned rows that the writer serializes.
//
// The pipeline flows in this order:
//
//   .arff file
//       │
//       ▼
//   ArffFileParser   → attribute table + raw rows
//                      (rows with `?` dropped here when the
//                       discard-missing policy is active)
//       │
//       ▼
//   Encoder          → fixed-width token rows, one-hot nominals,
//                      missing-value report
//       │
//       ▼
//   scaler           → numeric class column min-max scaled to [0,1]
//       │
//       ▼
//   split_patterns   → train / validation / test partitions
//
// Each module is responsible for exactly one step.

/// Parses @ATTRIBUTE declarations and @DATA rows
pub mod parser;

/// One-hot encodes nominal fields, applies the missing-value policy
pub mod encoder;

/// Min-max scales a numeric class column
pub mod scaler;

/// Shuffles and partitions rows into train/validation/test
pub mod splitter;
