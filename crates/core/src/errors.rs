use thiserror::Error;

use crate::{config::ConfigError, flows::QuizTransitionError};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    QuizTransition(#[from] QuizTransitionError),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl From<ConfigError> for ApplicationError {
    fn from(value: ConfigError) -> Self {
        Self::Configuration(value.to_string())
    }
}

impl From<QuizTransitionError> for ApplicationError {
    fn from(value: QuizTransitionError) -> Self {
        Self::Domain(DomainError::from(value))
    }
}

impl ApplicationError {
    /// Stable class name used in machine-readable command output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::QuizTransition(_)) => "quiz_transition",
            Self::Configuration(_) => "config_validation",
        }
    }
}
