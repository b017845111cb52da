// ============================================================
// Layer 3 — Dataset Domain Types
// ============================================================
// The three shapes data takes as it moves through the pipeline:
//
//   RawRow     — string fields split from one @DATA line,
//                one field per declared attribute
//   EncodedRow — fixed-width token row: nominal fields expanded
//                to their one-hot tokens, numeric fields one token
//   Dataset    — all encoded rows plus the derived unit counts
//
// Invariant: every EncodedRow has exactly inputs + outputs tokens,
// and the class column(s) are always the LAST `outputs` tokens.

use serde::{Deserialize, Serialize};

use crate::domain::attribute::AttributeSpec;

/// One data line split on commas, fields trimmed. Transient —
/// discarded once encoded.
pub type RawRow = Vec<String>;

/// One fixed-width pattern row. A nominal attribute of N categories
/// contributes N tokens, a numeric attribute contributes one.
pub type EncodedRow = Vec<String>;

/// Everything the parser extracts from an ARFF file.
#[derive(Debug, Clone)]
pub struct ParsedArff {
    /// Attribute declarations in file order; the last one is the class
    pub attributes: Vec<AttributeSpec>,

    /// Raw data rows, already filtered when discard-missing is active
    pub rows: Vec<RawRow>,

    /// Number of rows dropped for containing `?`
    pub discarded: usize,
}

/// The encoded dataset with its derived pattern-file unit counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub rows: Vec<EncodedRow>,

    /// Sum of all non-class attribute widths
    pub inputs: usize,

    /// Width of the class attribute: 1 if numeric, N if nominal
    pub outputs: usize,
}

impl Dataset {
    /// Derive the unit counts from the attribute list. The class is
    /// the last declared attribute, so inputs = total width - outputs.
    pub fn new(rows: Vec<EncodedRow>, attributes: &[AttributeSpec]) -> Self {
        let total: usize = attributes.iter().map(AttributeSpec::width).sum();
        let outputs = attributes.last().map_or(0, AttributeSpec::width);

        Self {
            rows,
            inputs: total - outputs,
            outputs,
        }
    }

    /// Fixed token width of every row.
    pub fn width(&self) -> usize {
        self.inputs + self.outputs
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_counts_nominal_class() {
        let attrs = vec![
            AttributeSpec::numeric("age"),
            AttributeSpec::nominal("outlook", vec!["a".into(), "b".into(), "c".into()]),
            AttributeSpec::nominal("class", vec!["yes".into(), "no".into()]),
        ];
        let ds = Dataset::new(Vec::new(), &attrs);
        assert_eq!(ds.inputs,  4); // 1 + 3
        assert_eq!(ds.outputs, 2);
        assert_eq!(ds.width(), 6);
    }

    #[test]
    fn test_unit_counts_numeric_class() {
        let attrs = vec![
            AttributeSpec::nominal("outlook", vec!["a".into(), "b".into(), "c".into()]),
            AttributeSpec::numeric("price"),
        ];
        let ds = Dataset::new(Vec::new(), &attrs);
        assert_eq!(ds.inputs,  3);
        assert_eq!(ds.outputs, 1);
    }
}
