#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read key {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write key {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("Stored projects are malformed: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("Failed to serialize projects: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Comment text must not be empty")]
    EmptyComment,
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("No API key configured for the generative service")]
    MissingApiKey,

    #[error("Request to generative service failed: {0}")]
    Transport(String),

    #[error("Generative service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Generative service returned no text")]
    EmptyResponse,

    #[error("Could not decode generative service reply: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AssistantError::Decode(err.to_string())
        } else {
            AssistantError::Transport(err.to_string())
        }
    }
}
