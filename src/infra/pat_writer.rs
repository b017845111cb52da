// ============================================================
// Layer 6 — SNNS Pattern File Writer
// ============================================================
// Serializes encoded rows into the fixed SNNS/JavaNNS pattern
// file format (UTF-8 text):
//
//   SNNS pattern definition file V3.2
//   generated at Mon Apr 25 15:58:23 1994
//
//   No. of patterns : <N>
//   No. of input units : <inputs>
//   No. of output units : <outputs>
//   <row tokens, space-joined, one row per line>
//
// The timestamp is the current local time in the classic ctime
// shape the SNNS tools emit; tests inject a fixed string so the
// output is byte-stable.
//
// Split-file naming convention:
//   data.pat → data-train.pat / data-valid.pat / data-test.pat

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::domain::dataset::EncodedRow;
use crate::domain::error::ConvertError;

pub struct PatWriter {
    /// The "generated at" header line content
    timestamp: String,
}

impl PatWriter {
    /// A writer stamping files with the current local time.
    pub fn new() -> Self {
        Self {
            timestamp: Local::now().format("%a %b %e %H:%M:%S %Y").to_string(),
        }
    }

    /// A writer with a fixed timestamp, for reproducible output.
    pub fn with_timestamp(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }

    /// Render one pattern file body.
    pub fn render(&self, rows: &[EncodedRow], inputs: usize, outputs: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "SNNS pattern definition file V3.2");
        let _ = writeln!(out, "generated at {}", self.timestamp);
        out.push('\n');
        let _ = writeln!(out, "No. of patterns : {}", rows.len());
        let _ = writeln!(out, "No. of input units : {inputs}");
        let _ = writeln!(out, "No. of output units : {outputs}");

        for row in rows {
            let _ = writeln!(out, "{}", row.join(" "));
        }
        out
    }

    /// Render and write one pattern file.
    pub fn write(
        &self,
        path: &Path,
        rows: &[EncodedRow],
        inputs: usize,
        outputs: usize,
    ) -> Result<(), ConvertError> {
        fs::write(path, self.render(rows, inputs, outputs))?;
        tracing::info!("Wrote {} patterns to '{}'", rows.len(), path.display());
        Ok(())
    }
}

impl Default for PatWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert a split suffix before the extension:
/// `data.pat` + `train` → `data-train.pat`.
/// A path without an extension just gets the suffix appended.
pub fn split_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let file_name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-{suffix}.{ext}"),
        None      => format!("{stem}-{suffix}"),
    };
    path.with_file_name(file_name)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_header_and_rows() {
        let writer = PatWriter::with_timestamp("Mon Apr 25 15:58:23 1994");
        let rows = vec![
            vec!["1".to_string(), "0".to_string(), "0.5".to_string()],
            vec!["0".to_string(), "1".to_string(), "1".to_string()],
        ];

        let text = writer.render(&rows, 2, 1);
        let expected = "\
SNNS pattern definition file V3.2
generated at Mon Apr 25 15:58:23 1994

No. of patterns : 2
No. of input units : 2
No. of output units : 1
1 0 0.5
0 1 1
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_empty_dataset() {
        let writer = PatWriter::with_timestamp("x");
        let text = writer.render(&[], 3, 2);
        assert!(text.contains("No. of patterns : 0"));
        assert!(text.ends_with("No. of output units : 2\n"));
    }

    #[test]
    fn test_split_path_inserts_suffix_before_extension() {
        let p = split_path(Path::new("out/data.pat"), "train");
        assert_eq!(p, PathBuf::from("out/data-train.pat"));
    }

    #[test]
    fn test_split_path_without_extension() {
        let p = split_path(Path::new("data"), "test");
        assert_eq!(p, PathBuf::from("data-test"));
    }
}
