use thiserror::Error;

/// Errors emitted by the records HTTP services.
#[derive(Debug, Error)]
pub(crate) enum RecordsError {
    #[error("Records request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Records payload malformed: {0}")]
    Decode(#[from] serde_json::Error),
}
