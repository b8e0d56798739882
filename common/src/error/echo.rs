use thiserror::Error;

#[derive(Error, Debug)]
pub enum EchoError {
    // Line is longer than the configured limit
    #[error("Line #{line:02} is longer than {max} characters")]
    LineTooLong { line: usize, max: usize },

    // Input ended early
    #[error("Expected {expected} lines, input ended after {found}")]
    MissingLines { expected: usize, found: usize },

    #[error("Wrapped io::Error: {0}")]
    Io(#[from] std::io::Error),
}
