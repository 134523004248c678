use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    #[error("Key cannot be the empty string")]
    EmptyKey,
    #[error("Index with leading zeros is not allowed: {term}")]
    LeadingZerosIndex { term: String },
    #[error("Key cannot begin with a digit: {term}")]
    KeyBeginsWithDigit { term: String },
    #[error("Index {index} exceeds maximum ({maximum})")]
    IndexExceedsMaximum { index: i64, maximum: i64 },
    #[error("Index {index} is below minimum ({minimum})")]
    IndexBelowMinimum { index: i64, minimum: i64 },
    #[error("Invalid key: {term}")]
    InvalidKey { term: String },
    #[error("Element of type {type_name} cannot be used as an index or key")]
    InvalidElementForIndex { type_name: String },
    #[error("Term cannot be null")]
    NullTerm,
    #[error("Term is not a key: {term}")]
    NotAKey { term: String },
    #[error("Term is not an index: {term}")]
    NotAnIndex { term: String },
    #[error("Config error: {0}")]
    Config(String),
}

impl TermError {
    /// Stable name of the error kind, for diagnostics that format their own messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyKey => "EmptyKey",
            Self::LeadingZerosIndex { .. } => "LeadingZerosIndex",
            Self::KeyBeginsWithDigit { .. } => "KeyBeginsWithDigit",
            Self::IndexExceedsMaximum { .. } => "IndexExceedsMaximum",
            Self::IndexBelowMinimum { .. } => "IndexBelowMinimum",
            Self::InvalidKey { .. } => "InvalidKey",
            Self::InvalidElementForIndex { .. } => "InvalidElementForIndex",
            Self::NullTerm => "NullTerm",
            Self::NotAKey { .. } => "NotAKey",
            Self::NotAnIndex { .. } => "NotAnIndex",
            Self::Config(_) => "Config",
        }
    }
}

pub type Result<T> = std::result::Result<T, TermError>;

// Helper conversions
impl From<config::ConfigError> for TermError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
