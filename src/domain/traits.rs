// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer works against this trait instead of a
// concrete parser, so the source of a dataset can be swapped
// without touching the pipeline:
//   - ArffFileParser → reads an .arff file from disk
//   - tests          → parse in-memory strings directly

use crate::domain::dataset::ParsedArff;
use crate::domain::error::ConvertError;

/// Any component that can produce a parsed ARFF dataset.
pub trait ArffSource {
    /// Load and parse the full dataset: attribute declarations,
    /// raw data rows, and the count of rows discarded for
    /// containing missing values.
    fn load(&self) -> Result<ParsedArff, ConvertError>;
}
