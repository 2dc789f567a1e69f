/// Failure of a generation call. Every variant is terminal; nothing retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(String),
    #[error("mood text is empty")]
    EmptyMood,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("backend returned no text")]
    EmptyReply,
    #[error("failed to decode palette: {0}")]
    Decode(String),
    #[error("no image generated")]
    NoImage,
}

impl From<reqwest::Error> for GenerateError {
    fn from(err: reqwest::Error) -> Self {
        GenerateError::Transport(err.to_string())
    }
}
