// ============================================================
// Layer 3 — Pipeline Errors
// ============================================================
// The three ways a conversion can fail. All are fatal for the
// invocation — there is no partial-success or retry path.
//
// Missing values are NOT errors: they are recorded in the
// MissingValueReport and surfaced at the end of a successful run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Malformed ARFF: missing @DATA, no attributes, or a data row
    /// whose field count does not match the declaration count.
    #[error("malformed ARFF at line {line}: {msg}")]
    Format { line: usize, msg: String },

    /// A token that is neither a declared category nor a recognised
    /// missing marker (strict mode), or a class value that cannot be
    /// scaled numerically.
    #[error("attribute '{attribute}': cannot encode token '{token}'")]
    Encoding { attribute: String, token: String },

    /// Unreadable input or unwritable output path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    pub fn format(line: usize, msg: impl Into<String>) -> Self {
        Self::Format { line, msg: msg.into() }
    }

    pub fn encoding(attribute: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Encoding {
            attribute: attribute.into(),
            token:     token.into(),
        }
    }
}
