use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Token sequence is not decodable: {0}")]
    Decode(String),

    #[error("Tokenizer failed to initialize: {0}")]
    Init(String),

    #[error("Tokenizer error: {0}")]
    Other(#[from] anyhow::Error),
}

impl TokenizerError {
    /// True for decode-boundary failures, the only recoverable variant.
    pub fn is_decode(&self) -> bool {
        matches!(self, TokenizerError::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, TokenizerError>;
