// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-format concerns that don't belong to the pipeline itself:
//
//   pat_writer.rs    — Serializes encoded rows into the SNNS
//                      pattern file format, and knows the
//                      -train/-valid/-test naming convention
//                      for split output files.
//
//   report_writer.rs — Persists the end-of-run summary
//                      (encoding table, missing-value counts)
//                      as JSON when --report is given.

/// SNNS .pat serialization and split-file naming
pub mod pat_writer;

/// Optional JSON run report
pub mod report_writer;
