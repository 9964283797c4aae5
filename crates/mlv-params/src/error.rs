//! Parse failures on string payloads.
//!
//! These never escape the resolver; they select its raw-string fallback.

/// Why a `STRING` payload was not rendered as structured JSON.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The payload is not valid JSON (this includes the empty string).
    #[error("malformed JSON payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The payload decodes to something readable as a finite number.
    #[error("payload decodes to a number")]
    Numeric,
}
