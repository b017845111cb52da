// ============================================================
// Layer 2 — ConvertUseCase
// ============================================================
// Orchestrates the full conversion pipeline in order:
//
//   Step 1: Parse the ARFF file        (Layer 4 - data)
//   Step 2: Encode rows                (Layer 4 - data)
//   Step 3: Scale a numeric class      (Layer 4 - data)
//   Step 4: Split train/valid/test     (Layer 4 - data)
//   Step 5: Write pattern file(s)      (Layer 6 - infra)
//   Step 6: Optional JSON report       (Layer 6 - infra)
//
// Returns a RunSummary; printing it is the CLI layer's job.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::data::{
    encoder::Encoder,
    parser::ArffFileParser,
    scaler::scale_numeric_class,
    splitter::split_patterns,
};
use crate::domain::dataset::{Dataset, EncodedRow};
use crate::domain::report::{RunSummary, WrittenFile};
use crate::domain::traits::ArffSource;
use crate::infra::pat_writer::{split_path, PatWriter};
use crate::infra::report_writer::write_report;

// ─── Conversion Configuration ────────────────────────────────────────────────
// All knobs for one conversion run. Serialisable so a run can be
// reproduced from a saved config. Defaults match the legacy tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Input .arff file
    pub arff_path: String,

    /// Output .pat path; with splitting enabled this is the stem
    /// that gains -train/-valid/-test before the extension
    pub pat_path: String,

    /// Test partition fraction of the full dataset; 0 disables splitting
    pub test_size: f64,

    /// Validation fraction of the REMAINING train rows
    pub validation_size: f64,

    /// Drop rows containing `?` instead of encoding missing codes
    pub discard_missing: bool,

    /// Keep the legacy behavior of passing unmatched nominal
    /// tokens through verbatim instead of failing
    pub legacy_passthrough: bool,

    /// Fixed RNG seed for a reproducible split
    pub seed: Option<u64>,

    /// Where to write the JSON run report, if anywhere
    pub report_path: Option<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            arff_path:          String::new(),
            pat_path:           String::new(),
            test_size:          0.33,
            validation_size:    0.33,
            discard_missing:    true,
            legacy_passthrough: false,
            seed:               None,
            report_path:        None,
        }
    }
}

/// The legacy tool accepted any yes-like token for its
/// discard-missing option: yes/y/t/true, case-insensitive.
pub fn is_yes_like(token: &str) -> bool {
    matches!(
        token.to_uppercase().as_str(),
        "YES" | "Y" | "T" | "TRUE"
    )
}

// ─── ConvertUseCase ───────────────────────────────────────────────────────────
pub struct ConvertUseCase {
    config: ConvertConfig,
}

impl ConvertUseCase {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Execute the full conversion pipeline end to end.
    pub fn execute(&self) -> Result<RunSummary> {
        let cfg = &self.config;

        // ── Step 1: Parse the ARFF file ───────────────────────────────────────
        let parser = ArffFileParser::new(&cfg.arff_path, cfg.discard_missing);
        let parsed = parser
            .load()
            .with_context(|| format!("Cannot convert '{}'", cfg.arff_path))?;

        if parsed.rows.is_empty() {
            tracing::warn!("'{}' contains no data rows", cfg.arff_path);
        }

        // ── Step 2: Encode rows ───────────────────────────────────────────────
        // Nominal fields become one-hot tokens; missing values are
        // substituted and recorded (they were already dropped at
        // parse time when discard-missing is on)
        let encoder = Encoder::new(&parsed.attributes, cfg.legacy_passthrough);
        let (rows, missing) = encoder.encode(&parsed.rows)?;
        let mut dataset = Dataset::new(rows, &parsed.attributes);

        // ── Step 3: Scale a numeric class to [0,1] ────────────────────────────
        // Nominal classes are already one-hot and need no scaling
        if let Some(class) = parsed.attributes.last() {
            if class.is_numeric() {
                scale_numeric_class(&mut dataset, &class.name)?;
            }
        }

        // ── Step 4 + 5: Split and write ───────────────────────────────────────
        let writer = PatWriter::new();
        let files  = self.write_outputs(&writer, &mut dataset)?;

        let summary = RunSummary {
            files,
            inputs:         dataset.inputs,
            outputs:        dataset.outputs,
            discarded_rows: parsed.discarded,
            attributes:     parsed.attributes,
            missing,
        };

        // ── Step 6: Optional JSON report ──────────────────────────────────────
        if let Some(report_path) = &cfg.report_path {
            write_report(Path::new(report_path), &summary)?;
        }

        Ok(summary)
    }

    /// Partition (when test_size > 0) and write each output file,
    /// returning the written paths with their pattern counts.
    fn write_outputs(
        &self,
        writer: &PatWriter,
        dataset: &mut Dataset,
    ) -> Result<Vec<WrittenFile>> {
        let cfg = &self.config;
        let pat = Path::new(&cfg.pat_path);
        let rows = std::mem::take(&mut dataset.rows);

        // No test fraction → the whole dataset goes to one file
        if cfg.test_size <= 0.0 {
            let file = self.write_one(writer, pat.to_path_buf(), &rows, dataset)?;
            return Ok(vec![file]);
        }

        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let sets = split_patterns(rows, cfg.test_size, cfg.validation_size, &mut rng);

        let mut files = Vec::new();
        files.push(self.write_one(writer, split_path(pat, "train"), &sets.train, dataset)?);
        if let Some(valid) = &sets.valid {
            files.push(self.write_one(writer, split_path(pat, "valid"), valid, dataset)?);
        }
        files.push(self.write_one(writer, split_path(pat, "test"), &sets.test, dataset)?);
        Ok(files)
    }

    fn write_one(
        &self,
        writer: &PatWriter,
        path: PathBuf,
        rows: &[EncodedRow],
        dataset: &Dataset,
    ) -> Result<WrittenFile> {
        writer
            .write(&path, rows, dataset.inputs, dataset.outputs)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        Ok(WrittenFile {
            path:     path.display().to_string(),
            patterns: rows.len(),
        })
    }
}
