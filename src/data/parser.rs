// ============================================================
// Layer 4 — ARFF Parser
// ============================================================
// Reads an ARFF file and produces the attribute table plus the
// raw data rows, handling the discard-missing policy inline so
// dropped rows never reach the encoder.
//
// Recognised ARFF subset:
//   %...                          comment, skipped
//   @ATTRIBUTE <name> <numtype>   numeric attribute
//   @ATTRIBUTE <name> {a,b,c}     nominal attribute
//   @DATA                         start of the data section
//   a,b,c,...                     one data row per line
//
// Keyword matching is case-insensitive on the line prefix.
// String/date/relational attribute types are out of scope and
// their declaration lines are skipped with a warning.
//
// Legacy quirk, preserved on purpose: a line is classified
// NUMERIC by *substring* match on the type tokens, so a nominal
// declaration whose labels contain "real" or "numeric" is
// misclassified as numeric. Matches the original converter.

use std::fs;

use crate::domain::attribute::AttributeSpec;
use crate::domain::dataset::{ParsedArff, RawRow};
use crate::domain::error::ConvertError;
use crate::domain::traits::ArffSource;

/// Type tokens that mark an attribute as numeric.
const NUMERIC_TYPE_TOKENS: [&str; 4] = ["real", "REAL", "numeric", "NUMERIC"];

/// Parses an .arff file from disk.
/// Implements the ArffSource trait from Layer 3.
pub struct ArffFileParser {
    /// Path to the input .arff file
    path: String,

    /// When true, data rows containing `?` are dropped (and counted)
    discard_missing: bool,
}

impl ArffFileParser {
    pub fn new(path: impl Into<String>, discard_missing: bool) -> Self {
        Self {
            path: path.into(),
            discard_missing,
        }
    }
}

impl ArffSource for ArffFileParser {
    fn load(&self) -> Result<ParsedArff, ConvertError> {
        let text = fs::read_to_string(&self.path)?;
        let parsed = parse_arff(&text, self.discard_missing)?;

        tracing::info!(
            "Parsed '{}': {} attributes, {} data rows ({} discarded)",
            self.path,
            parsed.attributes.len(),
            parsed.rows.len(),
            parsed.discarded,
        );
        Ok(parsed)
    }
}

/// Parse ARFF text into attributes + raw rows.
/// Split out from the file wrapper so tests can run on in-memory
/// strings without touching disk.
pub fn parse_arff(text: &str, discard_missing: bool) -> Result<ParsedArff, ConvertError> {
    let mut attributes: Vec<AttributeSpec> = Vec::new();
    let mut rows: Vec<RawRow> = Vec::new();
    let mut discarded = 0usize;
    let mut in_data = false;
    let mut line_num = 0usize;

    for raw in text.lines() {
        line_num += 1;
        let line = raw.trim();

        // Comments and blank lines carry no data in either section
        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        if in_data {
            // Discard-missing policy: a row containing `?` anywhere
            // is dropped before it ever reaches the encoder
            if discard_missing && line.contains('?') {
                discarded += 1;
                continue;
            }

            let fields: RawRow = line.split(',').map(|f| f.trim().to_string()).collect();

            // Arity must match the declarations — the legacy tool
            // indexed out of range here, which we refuse to do
            if fields.len() != attributes.len() {
                return Err(ConvertError::format(
                    line_num,
                    format!(
                        "row has {} fields, expected {}",
                        fields.len(),
                        attributes.len()
                    ),
                ));
            }
            rows.push(fields);
            continue;
        }

        let upper = line.to_uppercase();
        if upper.starts_with("@ATTRIBUTE") {
            if let Some(attr) = parse_attribute(line, line_num)? {
                attributes.push(attr);
            } else {
                tracing::warn!("Skipping unsupported attribute declaration: {line}");
            }
        } else if upper.starts_with("@DATA") {
            if attributes.is_empty() {
                return Err(ConvertError::format(
                    line_num,
                    "no attributes declared before @DATA",
                ));
            }
            in_data = true;
        }
    }

    if !in_data {
        return Err(ConvertError::format(line_num, "@DATA section never found"));
    }

    Ok(ParsedArff {
        attributes,
        rows,
        discarded,
    })
}

/// Classify one @ATTRIBUTE line. Returns None for declarations
/// this converter does not support (string, date, relational).
fn parse_attribute(
    line: &str,
    line_num: usize,
) -> Result<Option<AttributeSpec>, ConvertError> {
    // Substring match on the type tokens, checked BEFORE the brace —
    // this is the legacy classification order
    if NUMERIC_TYPE_TOKENS.iter().any(|t| line.contains(t)) {
        let name = attribute_name(line, line_num)?;
        return Ok(Some(AttributeSpec::numeric(name)));
    }

    if let Some(brace) = line.find('{') {
        let name = attribute_name(line, line_num)?;

        // Everything between the first '{' and the final character
        // of the (trimmed) line — mirrors the legacy slice, which
        // assumes the declaration ends with '}'
        let rest = &line[brace + 1..];
        let inner = rest
            .char_indices()
            .last()
            .map_or("", |(i, _)| &rest[..i]);

        let labels: Vec<String> = inner.split(',').map(|l| l.trim().to_string()).collect();
        return Ok(Some(AttributeSpec::nominal(name, labels)));
    }

    Ok(None)
}

/// The attribute name is the second whitespace-separated token.
fn attribute_name(line: &str, line_num: usize) -> Result<String, ConvertError> {
    line.split_whitespace()
        .nth(1)
        .map(|n| n.to_string())
        .ok_or_else(|| ConvertError::format(line_num, "attribute declaration has no name"))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attribute::AttributeKind;

    const WEATHER: &str = "\
% weather dataset
@RELATION weather
@ATTRIBUTE outlook {sunny, overcast, rainy}
@ATTRIBUTE temperature NUMERIC
@ATTRIBUTE play {yes, no}
@DATA
sunny, 85, no
overcast, 83, yes
rainy, ?, yes
";

    #[test]
    fn test_parses_attributes_and_rows() {
        let parsed = parse_arff(WEATHER, false).unwrap();
        assert_eq!(parsed.attributes.len(), 3);
        assert_eq!(parsed.rows.len(), 3);
        assert_eq!(parsed.discarded, 0);

        assert_eq!(parsed.attributes[0].name, "outlook");
        assert_eq!(parsed.attributes[0].width(), 3);
        assert!(parsed.attributes[1].is_numeric());
        assert_eq!(parsed.attributes[2].width(), 2);

        // fields are trimmed
        assert_eq!(parsed.rows[0], vec!["sunny", "85", "no"]);
    }

    #[test]
    fn test_discard_missing_counts_dropped_rows() {
        let parsed = parse_arff(WEATHER, true).unwrap();
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.discarded, 1);
    }

    #[test]
    fn test_keyword_case_insensitive() {
        let text = "\
@attribute outlook {a,b}
@attribute class {x,y}
@data
a,x
";
        let parsed = parse_arff(text, true).unwrap();
        assert_eq!(parsed.attributes.len(), 2);
        assert_eq!(parsed.rows.len(), 1);
    }

    #[test]
    fn test_nominal_labels_trimmed_in_order() {
        let text = "\
@ATTRIBUTE outlook { sunny , overcast , rainy }
@ATTRIBUTE class {yes,no}
@DATA
sunny,yes
";
        let parsed = parse_arff(text, true).unwrap();
        match &parsed.attributes[0].kind {
            AttributeKind::Nominal { values } => {
                let labels: Vec<&str> = values.iter().map(|v| v.label.as_str()).collect();
                assert_eq!(labels, vec!["sunny", "overcast", "rainy"]);
            }
            AttributeKind::Numeric => panic!("expected nominal"),
        }
    }

    #[test]
    fn test_type_token_substring_wins_over_braces() {
        // A nominal declaration whose labels contain "real" is
        // classified numeric — preserved legacy behavior
        let text = "\
@ATTRIBUTE estate {real,fake}
@ATTRIBUTE class {x,y}
@DATA
real,x
";
        let parsed = parse_arff(text, true).unwrap();
        assert!(parsed.attributes[0].is_numeric());
    }

    #[test]
    fn test_missing_data_section_is_format_error() {
        let text = "@ATTRIBUTE a NUMERIC\n@ATTRIBUTE b {x,y}\n";
        let err = parse_arff(text, true).unwrap_err();
        assert!(matches!(err, ConvertError::Format { .. }));
    }

    #[test]
    fn test_arity_mismatch_is_format_error() {
        let text = "\
@ATTRIBUTE a NUMERIC
@ATTRIBUTE b {x,y}
@DATA
1.0
";
        let err = parse_arff(text, true).unwrap_err();
        match err {
            ConvertError::Format { line, .. } => assert_eq!(line, 4),
            other => panic!("expected FormatError, got {other:?}"),
        }
    }

    #[test]
    fn test_data_before_attributes_is_format_error() {
        let err = parse_arff("@DATA\n1,2\n", true).unwrap_err();
        assert!(matches!(err, ConvertError::Format { .. }));
    }
}
