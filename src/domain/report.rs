// ============================================================
// Layer 3 — Run Report Types
// ============================================================
// Everything a conversion reports back to the caller:
//
//   MissingValueReport — which attributes had `?` values encoded,
//                        with the substituted code and a count.
//                        (The legacy tool accumulated this in a
//                        global dict; here it is an explicit value
//                        returned by the encoder.)
//   RunSummary         — files written, unit counts, the attribute
//                        encoding table, and the missing-value
//                        report, rendered for the terminal and
//                        serialisable as JSON for --report.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::domain::attribute::{AttributeKind, AttributeSpec};

/// One attribute's missing-value substitutions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingValueEntry {
    /// The code that replaced the missing marker, space-joined
    pub code: String,

    /// The original token, always "?"
    pub original: String,

    /// How many rows had this attribute missing
    pub count: usize,
}

/// Missing-value substitutions keyed by attribute index.
/// BTreeMap keeps the report in attribute-declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissingValueReport {
    pub entries: BTreeMap<usize, MissingValueEntry>,
}

impl MissingValueReport {
    /// Record one substitution: first occurrence creates the entry,
    /// repeats only increment the count.
    pub fn record(&mut self, attr_index: usize, original: &str, code: &[String]) {
        self.entries
            .entry(attr_index)
            .and_modify(|e| e.count += 1)
            .or_insert_with(|| MissingValueEntry {
                code:     code.join(" "),
                original: original.to_string(),
                count:    1,
            });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One output pattern file and how many patterns it holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrittenFile {
    pub path: String,
    pub patterns: usize,
}

/// The full result of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub files: Vec<WrittenFile>,
    pub inputs: usize,
    pub outputs: usize,

    /// Rows dropped during parsing for containing `?`
    pub discarded_rows: usize,

    /// The attribute table, last entry = class label
    pub attributes: Vec<AttributeSpec>,

    pub missing: MissingValueReport,
}

impl RunSummary {
    /// Render the end-of-run report: output files, unit counts, the
    /// per-attribute encoding table, and missing-value substitutions.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for file in &self.files {
            let _ = writeln!(out, "File output to: {} ({} cases)", file.path, file.patterns);
        }

        if self.discarded_rows == 0 && self.missing.is_empty() {
            out.push_str("\nNo missing values were detected\n");
        } else if self.discarded_rows > 0 {
            let _ = writeln!(
                out,
                "\nDiscarded {} cases with missing data",
                self.discarded_rows
            );
        }

        let _ = writeln!(out, "\nNumber of inputs: {}", self.inputs);
        let _ = writeln!(out, "Number of outputs: {}", self.outputs);
        out.push_str("\nAttribute encoding (the last listed is the class label)\n");

        for (idx, attr) in self.attributes.iter().enumerate() {
            let _ = writeln!(out, "{}", attr.name);
            match &attr.kind {
                AttributeKind::Numeric => {
                    out.push_str("\tNUMERIC\n");
                }
                AttributeKind::Nominal { values } => {
                    for value in values {
                        let _ = writeln!(out, "\t{} -> {}", value.label, value.code.join(" "));
                    }
                }
            }
            if let Some(entry) = self.missing.entries.get(&idx) {
                let _ = writeln!(
                    out,
                    "\t{} -> {} ({} cases)",
                    entry.original, entry.code, entry.count
                );
            }
        }

        out
    }
}
