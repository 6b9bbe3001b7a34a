use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum JexError {
    #[error("no input provided.\n\nUsage: jex <JSON_FILE> or cat <JSON_FILE> | jex")]
    NoInput,

    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("IO error: {0}")]
    Io(String),
}

// Stored as a message so the error stays Clone + PartialEq
impl From<std::io::Error> for JexError {
    fn from(err: std::io::Error) -> Self {
        JexError::Io(err.to_string())
    }
}
