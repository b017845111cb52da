// ============================================================
// Layer 4 — Numeric Class Scaler
// ============================================================
// Min-max normalises a NUMERIC class column to [0,1]:
//
//   scaled = (x - min) / (max - min)
//
// Only the LAST token of each row mutates; everything else is
// untouched. The legacy tool delegated this to a vectorised-math
// library, but plain indexed arithmetic is all that is needed.
//
// Edge case: max == min leaves no range to scale over, so every
// value becomes 0 (the legacy behavior was an undefined division
// by zero). Callers skip this step entirely for nominal classes.

use crate::domain::dataset::Dataset;
use crate::domain::error::ConvertError;

/// Scale the class column of `dataset` in place. `class_name` is
/// only used for error reporting.
pub fn scale_numeric_class(
    dataset: &mut Dataset,
    class_name: &str,
) -> Result<(), ConvertError> {
    if dataset.rows.is_empty() {
        return Ok(());
    }

    // First pass: parse the column and find the observed range
    let mut values = Vec::with_capacity(dataset.rows.len());
    for row in &dataset.rows {
        let token = row.last().map(String::as_str).unwrap_or("");
        let value: f64 = token
            .parse()
            .map_err(|_| ConvertError::encoding(class_name, token))?;
        values.push(value);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    // Second pass: rewrite the last token of every row
    for (row, value) in dataset.rows.iter_mut().zip(values) {
        let scaled = if range == 0.0 { 0.0 } else { (value - min) / range };
        if let Some(last) = row.last_mut() {
            *last = format!("{scaled}");
        }
    }

    tracing::debug!("Scaled class '{class_name}' from [{min}, {max}] to [0, 1]");
    Ok(())
}
