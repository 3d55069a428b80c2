use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ReaderModeError {
    /// The document has no root node to extract from.
    #[error("document has no root node")]
    MissingRoot,

    /// A configuration value is outside its valid domain.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ReaderModeError>;
