use thiserror::Error;

pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("api error: {0}")]
    Api(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ChatError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        ChatError::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        ChatError::Config(msg.into())
    }

    pub fn logging_error(msg: impl Into<String>) -> Self {
        ChatError::Logging(msg.into())
    }
}
