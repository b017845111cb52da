// ============================================================
// Layer 3 — Attribute Domain Types
// ============================================================
// Represents a single ARFF attribute declaration.
//
// An attribute is either:
//   - NUMERIC: one input/output unit, the value is used directly
//   - NOMINAL: N input/output units, the value is one-hot encoded
//
// The one-hot code for category k of an N-category attribute is
// N binary tokens with a single "1" at position k:
//   {a,b,c} → a = 1 0 0, b = 0 1 0, c = 0 0 1
//
// Missing-value codes (used when missing values are encoded
// rather than discarded):
//   - NUMERIC: the single token "0"
//   - NOMINAL: all N tokens "0" (no bit set)

use serde::{Deserialize, Serialize};

/// One category of a nominal attribute: the original label from
/// the ARFF declaration and its one-hot token sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominalValue {
    /// The label as declared, e.g. "sunny"
    pub label: String,

    /// The one-hot code, one token per category, e.g. ["1","0","0"]
    pub code: Vec<String>,
}

/// Tagged attribute type. The legacy dictionary records ("type" key
/// holding a string) become an explicit enum so the encoder cannot
/// meet an attribute of unknown kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AttributeKind {
    /// Value passes through verbatim (class columns get scaled later)
    Numeric,

    /// Value is replaced by the matching category's one-hot code
    Nominal { values: Vec<NominalValue> },
}

/// A single `@ATTRIBUTE` declaration, built once by the parser and
/// read-only afterwards. The LAST declared attribute is always the
/// class label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSpec {
    /// Attribute name (second token of the declaration line)
    pub name: String,

    /// Numeric or nominal, with the nominal category table inline
    pub kind: AttributeKind,
}

impl AttributeSpec {
    /// A numeric attribute: width 1, value used directly.
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Numeric,
        }
    }

    /// A nominal attribute with categories in declaration order.
    /// Each category gets the one-hot code for its zero-based index.
    pub fn nominal(name: impl Into<String>, labels: Vec<String>) -> Self {
        let width  = labels.len();
        let values = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| NominalValue {
                label,
                code: one_hot(width, Some(i)),
            })
            .collect();

        Self {
            name: name.into(),
            kind: AttributeKind::Nominal { values },
        }
    }

    /// Number of pattern-file units this attribute occupies:
    /// 1 for numeric, category count for nominal.
    pub fn width(&self) -> usize {
        match &self.kind {
            AttributeKind::Numeric           => 1,
            AttributeKind::Nominal { values } => values.len(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, AttributeKind::Numeric)
    }

    /// The substitution code used when a missing value (`?`) is
    /// encoded rather than discarded: "0" for numeric, all-zero
    /// one-hot string for nominal.
    pub fn missing_code(&self) -> Vec<String> {
        match &self.kind {
            AttributeKind::Numeric           => vec!["0".to_string()],
            AttributeKind::Nominal { values } => one_hot(values.len(), None),
        }
    }
}

/// Build a one-hot token sequence of the given width.
/// `set_bit = None` produces the all-zero missing code.
pub fn one_hot(width: usize, set_bit: Option<usize>) -> Vec<String> {
    let mut code = vec!["0".to_string(); width];
    if let Some(i) = set_bit {
        code[i] = "1".to_string();
    }
    code
}
