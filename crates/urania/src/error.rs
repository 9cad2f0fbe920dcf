use thiserror::Error;

/// Errors raised at the lookup boundary (name parsing) and by template bank validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UraniaError {
    #[error("Unknown celestial body: {0}")]
    UnknownBody(String),
    #[error("Unknown zodiac sign: {0}")]
    UnknownSign(String),
    #[error("Unknown influence category: {0}")]
    UnknownCategory(String),
    #[error("Invalid template bank: {0}")]
    InvalidTemplateBank(String),
}
