/// Errors that can occur while reading an emoji data source.
///
/// The registry parser never produces a parse error: malformed lines are
/// skipped. Annotation documents are stricter, since guessing at an unknown
/// shape would silently drop every keyword.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized annotation document: {0}")]
    UnrecognizedShape(String),
}

impl SourceError {
    pub fn unrecognized_shape(msg: impl Into<String>) -> Self {
        Self::UnrecognizedShape(msg.into())
    }
}
