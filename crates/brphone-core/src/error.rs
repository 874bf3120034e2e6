use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhoneError {
    #[error("phone number cannot be null or empty")]
    NullOrEmptyInput,
    #[error("phone number is not in a valid format: {0}")]
    MalformedInput(String),
    #[error("invalid render mode: {0}")]
    InvalidRenderMode(String),
    #[error("cannot compare a phone number with {0}")]
    IncompatibleComparison(&'static str),
    #[error("phone number matching exceeded {}ms", .budget.as_millis())]
    MatchTimedOut { budget: Duration },
}

impl From<crate::grammar::MatchTimedOut> for PhoneError {
    fn from(err: crate::grammar::MatchTimedOut) -> Self {
        PhoneError::MatchTimedOut { budget: err.budget }
    }
}
