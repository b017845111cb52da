// ============================================================
// Layer 4 — Row Encoder
// ============================================================
// Turns raw string rows into fixed-width numeric token rows:
//
//   NOMINAL field → the matching category's one-hot tokens
//   NUMERIC field → the token verbatim
//   missing (`?`) → the attribute's missing code, recorded in
//                   the MissingValueReport
//
// A nominal token that matches no declared category (and is not
// `?`) is a hard EncodingError by default. The legacy converter
// silently left the raw token in place; that behavior is kept
// available behind the legacy-passthrough switch and nowhere else.

use crate::domain::attribute::{AttributeKind, AttributeSpec};
use crate::domain::dataset::{EncodedRow, RawRow};
use crate::domain::error::ConvertError;
use crate::domain::report::MissingValueReport;

pub struct Encoder<'a> {
    attributes: &'a [AttributeSpec],

    /// When false, unmatched nominal tokens pass through verbatim
    /// instead of failing (legacy compatibility)
    strict: bool,
}

impl<'a> Encoder<'a> {
    pub fn new(attributes: &'a [AttributeSpec], legacy_passthrough: bool) -> Self {
        Self {
            attributes,
            strict: !legacy_passthrough,
        }
    }

    /// Encode all rows. Returns the encoded rows plus the report of
    /// missing-value substitutions (attribute index → code/count).
    pub fn encode(
        &self,
        rows: &[RawRow],
    ) -> Result<(Vec<EncodedRow>, MissingValueReport), ConvertError> {
        let width: usize = self.attributes.iter().map(AttributeSpec::width).sum();
        let mut report = MissingValueReport::default();
        let mut encoded = Vec::with_capacity(rows.len());

        for row in rows {
            let mut out: EncodedRow = Vec::with_capacity(width);

            for (i, (field, attr)) in row.iter().zip(self.attributes).enumerate() {
                match &attr.kind {
                    AttributeKind::Numeric => {
                        if field == "?" {
                            // Unreachable when discard-missing is on
                            // (rows were dropped at parse time), but
                            // stays defined for robustness
                            let code = attr.missing_code();
                            report.record(i, field, &code);
                            out.extend(code);
                        } else {
                            out.push(field.clone());
                        }
                    }
                    AttributeKind::Nominal { values } => {
                        if field == "?" {
                            let code = attr.missing_code();
                            report.record(i, field, &code);
                            out.extend(code);
                        } else if let Some(value) =
                            values.iter().find(|v| v.label == *field)
                        {
                            out.extend(value.code.iter().cloned());
                        } else if self.strict {
                            return Err(ConvertError::encoding(&attr.name, field));
                        } else {
                            // Legacy passthrough: the raw token stays,
                            // so the row ends up narrower than `width`.
                            // Faithful to the original, bug included.
                            out.push(field.clone());
                        }
                    }
                }
            }

            encoded.push(out);
        }

        Ok((encoded, report))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> Vec<AttributeSpec> {
        vec![
            AttributeSpec::nominal("outlook", vec!["a".into(), "b".into(), "c".into()]),
            AttributeSpec::numeric("price"),
        ]
    }

    #[test]
    fn test_one_nominal_one_numeric_row() {
        let attrs = attrs();
        let encoder = Encoder::new(&attrs, false);
        let rows = vec![vec!["a".to_string(), "1.0".to_string()]];

        let (encoded, report) = encoder.encode(&rows).unwrap();
        assert_eq!(encoded, vec![vec!["1", "0", "0", "1.0"]]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_every_row_has_full_width() {
        let attrs = vec![
            AttributeSpec::nominal("x", vec!["p".into(), "q".into()]),
            AttributeSpec::numeric("y"),
            AttributeSpec::nominal("class", vec!["yes".into(), "no".into(), "maybe".into()]),
        ];
        let encoder = Encoder::new(&attrs, false);
        let rows = vec![
            vec!["p".to_string(), "3.5".to_string(), "no".to_string()],
            vec!["q".to_string(), "?".to_string(), "maybe".to_string()],
        ];

        let (encoded, _) = encoder.encode(&rows).unwrap();
        let width: usize = attrs.iter().map(AttributeSpec::width).sum();
        assert_eq!(width, 6);
        for row in &encoded {
            assert_eq!(row.len(), width);
        }
    }

    #[test]
    fn test_missing_nominal_encodes_all_zeros_and_reports() {
        let attrs = attrs();
        let encoder = Encoder::new(&attrs, false);
        let rows = vec![
            vec!["?".to_string(), "1.0".to_string()],
            vec!["?".to_string(), "2.0".to_string()],
        ];

        let (encoded, report) = encoder.encode(&rows).unwrap();
        assert_eq!(encoded[0], vec!["0", "0", "0", "1.0"]);

        let entry = &report.entries[&0];
        assert_eq!(entry.code, "0 0 0");
        assert_eq!(entry.original, "?");
        assert_eq!(entry.count, 2);
    }

    #[test]
    fn test_missing_numeric_becomes_zero_and_reports() {
        let attrs = attrs();
        let encoder = Encoder::new(&attrs, false);
        let rows = vec![vec!["b".to_string(), "?".to_string()]];

        let (encoded, report) = encoder.encode(&rows).unwrap();
        assert_eq!(encoded[0], vec!["0", "1", "0", "0"]);
        assert_eq!(report.entries[&1].code, "0");
        assert_eq!(report.entries[&1].count, 1);
    }

    #[test]
    fn test_unknown_label_fails_in_strict_mode() {
        let attrs = attrs();
        let encoder = Encoder::new(&attrs, false);
        let rows = vec![vec!["zzz".to_string(), "1.0".to_string()]];

        let err = encoder.encode(&rows).unwrap_err();
        match err {
            ConvertError::Encoding { attribute, token } => {
                assert_eq!(attribute, "outlook");
                assert_eq!(token, "zzz");
            }
            other => panic!("expected EncodingError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_label_passes_through_in_legacy_mode() {
        let attrs = attrs();
        let encoder = Encoder::new(&attrs, true);
        let rows = vec![vec!["zzz".to_string(), "1.0".to_string()]];

        let (encoded, report) = encoder.encode(&rows).unwrap();
        // raw token kept in place, row narrower than full width
        assert_eq!(encoded[0], vec!["zzz", "1.0"]);
        assert!(report.is_empty());
    }
}
