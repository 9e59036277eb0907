use thiserror::Error;

/// Failures reported by a [`ThemeHost`](crate::ThemeHost).
///
/// These never reach the user: the theme preference logs them and carries on as if the
/// value were unset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("local storage is not available")]
    StorageUnavailable,

    #[error("the document has no root element")]
    NoRootElement,

    #[error("javascript error: {0}")]
    Js(String),
}

/// The persisted theme string was neither `"light"` nor `"dark"`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown theme `{0}`")]
pub struct ParseThemeError(pub String);

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize the event log: {0}")]
    Serialize(#[from] serde_json::Error),
}
