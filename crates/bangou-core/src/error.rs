use thiserror::Error;

/// Errors that can occur during number extraction and classification.
#[derive(Debug, Error)]
pub enum BangouError {
    /// The input string is empty or contains only whitespace.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// A studio rule's detector matched but its extractor did not capture
    /// the groups it formats.
    #[error("rule {rule:?} matched but did not capture a number")]
    MalformedCapture {
        /// Name of the studio rule that failed.
        rule: &'static str,
    },

    /// The uncensored prefix list supplied by configuration is unusable.
    #[error("invalid uncensored prefix configuration: {0}")]
    ConfigurationInvalid(String),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for bangou operations.
pub type Result<T> = std::result::Result<T, BangouError>;
