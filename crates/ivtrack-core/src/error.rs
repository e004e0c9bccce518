use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("unknown room: {0}")]
    UnknownRoom(String),

    #[error("unknown access type: {0}")]
    UnknownAccessType(String),

    #[error("unknown outcome: {0}")]
    UnknownOutcome(String),

    #[error("unknown sex: {0}")]
    UnknownSex(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
