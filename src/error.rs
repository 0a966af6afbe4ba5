use std::borrow::Cow;

/// Result type used across the enumeration builder.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while building an enumeration from dynamic input.
///
/// Individual entries never fail: missing or malformed fields fall through
/// the `desc -> val -> key` defaulting chain instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The entry list was not a sequence (for example a JSON object or `null`).
    #[error("enumer expects an array of entries, found {found}")]
    NotASequence { found: Cow<'static, str> },

    /// The entry list could not be parsed as JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Helper constructor for the non-sequence case when the offending kind is known.
    #[must_use]
    pub fn not_a_sequence(found: impl Into<Cow<'static, str>>) -> Self {
        Self::NotASequence {
            found: found.into(),
        }
    }
}
