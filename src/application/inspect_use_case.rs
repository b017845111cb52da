// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Dry-run companion to the converter: parses an ARFF file and
// renders the attribute encoding table and unit counts without
// writing any pattern files. Useful for checking how a dataset
// will be encoded before committing to a conversion.

use std::fmt::Write as _;

use anyhow::{Context, Result};

use crate::data::parser::ArffFileParser;
use crate::domain::attribute::{AttributeKind, AttributeSpec};
use crate::domain::traits::ArffSource;

pub struct InspectUseCase {
    arff_path: String,
}

impl InspectUseCase {
    pub fn new(arff_path: impl Into<String>) -> Self {
        Self {
            arff_path: arff_path.into(),
        }
    }

    /// Parse the file and render its encoding preview.
    pub fn execute(&self) -> Result<String> {
        // Keep every row so the count reflects the whole file
        let parser = ArffFileParser::new(&self.arff_path, false);
        let parsed = parser
            .load()
            .with_context(|| format!("Cannot inspect '{}'", self.arff_path))?;

        let total: usize = parsed.attributes.iter().map(AttributeSpec::width).sum();
        let outputs = parsed.attributes.last().map_or(0, AttributeSpec::width);

        let mut out = String::new();
        let _ = writeln!(out, "{}", self.arff_path);
        let _ = writeln!(
            out,
            "{} attributes, {} data rows",
            parsed.attributes.len(),
            parsed.rows.len()
        );
        let _ = writeln!(out, "Number of inputs: {}", total - outputs);
        let _ = writeln!(out, "Number of outputs: {outputs}");
        out.push_str("\nAttribute encoding (the last listed is the class label)\n");

        for attr in &parsed.attributes {
            let _ = writeln!(out, "{}", attr.name);
            match &attr.kind {
                AttributeKind::Numeric => out.push_str("\tNUMERIC\n"),
                AttributeKind::Nominal { values } => {
                    for value in values {
                        let _ = writeln!(out, "\t{} -> {}", value.label, value.code.join(" "));
                    }
                }
            }
        }

        Ok(out)
    }
}
