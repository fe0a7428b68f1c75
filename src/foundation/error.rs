/// Convenience result type used across scrollfx.
pub type ScrollfxResult<T> = Result<T, ScrollfxError>;

/// Top-level error taxonomy used by the document-model APIs.
///
/// Orchestration itself never errors: bad element configuration degrades to
/// "no effect" for that element (unknown preset keys are dropped, malformed
/// overrides fall back to defaults, targetless parallax elements are
/// skipped). Errors exist only for structural misuse of the document model.
#[derive(thiserror::Error, Debug)]
pub enum ScrollfxError {
    /// Invalid node handle or node-kind mismatch in the element document.
    #[error("document error: {0}")]
    Document(String),

    /// Invalid user-provided data while building documents or registries.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollfxError {
    /// Build a [`ScrollfxError::Document`] value.
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Build a [`ScrollfxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
