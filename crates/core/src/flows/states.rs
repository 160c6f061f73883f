use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizState {
    Question(u8),
    Results,
}

impl QuizState {
    pub fn question(&self) -> Option<u8> {
        match self {
            Self::Question(question) => Some(*question),
            Self::Results => None,
        }
    }

    pub fn is_results(&self) -> bool {
        matches!(self, Self::Results)
    }
}

/// Discrete inputs from the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizEvent {
    OptionSelected { question: u8, value: String },
    NavigateNext,
    NavigateBack,
    RestartRequested,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizContext {
    pub current_answered: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizAction {
    StoreAnswer { question: u8, value: String },
    ShowQuestion(u8),
    ComputeRecommendation,
    ClearAnswers,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    pub from: QuizState,
    pub to: QuizState,
    pub event: QuizEvent,
    pub actions: Vec<QuizAction>,
}
