use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("no webhook URL configured")]
    MissingWebhookUrl,

    #[error("failed to reach the spreadsheet webhook: {0}")]
    Transport(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
