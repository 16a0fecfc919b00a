use thiserror::Error;

pub type Result<T> = std::result::Result<T, SuggestError>;

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("input too large: {0}")]
    InputTooLarge(String),

    #[error("malformed automaton: {0}")]
    MalformedAutomaton(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Fst(#[from] fst::Error),
}

impl SuggestError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::InputTooLarge(_) => "INPUT_TOO_LARGE",
            Self::MalformedAutomaton(_) => "MALFORMED_AUTOMATON",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Fst(_) => "FST_ERROR",
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedAutomaton(message.into())
    }
}
