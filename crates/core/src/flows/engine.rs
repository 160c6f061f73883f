use thiserror::Error;

use crate::domain::question::{is_valid_question, TOTAL_QUESTIONS};
use crate::flows::states::{QuizAction, QuizContext, QuizEvent, QuizState, TransitionOutcome};

/// Transition table of the questionnaire. Pure: the caller owns the state.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuizFlow;

impl QuizFlow {
    pub fn initial_state(&self) -> QuizState {
        QuizState::Question(1)
    }

    pub fn transition(
        &self,
        current: &QuizState,
        event: &QuizEvent,
        context: &QuizContext,
    ) -> Result<TransitionOutcome, QuizTransitionError> {
        transition_quiz(current, event, context)
    }

    /// Restart is accepted from every state.
    pub fn restart(&self, current: &QuizState) -> TransitionOutcome {
        TransitionOutcome {
            from: *current,
            to: self.initial_state(),
            event: QuizEvent::RestartRequested,
            actions: vec![QuizAction::ClearAnswers, QuizAction::ShowQuestion(1)],
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QuizTransitionError {
    #[error("question {question} is outside 1..=12")]
    QuestionOutOfRange { question: u8 },
    #[error("answer for question {question} does not match current state {state:?}")]
    QuestionMismatch { state: QuizState, question: u8 },
    #[error("question {question} has no recorded answer")]
    UnansweredQuestion { question: u8 },
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("quiz is complete; {event:?} requires a restart")]
    QuizComplete { event: QuizEvent },
}

fn transition_quiz(
    current: &QuizState,
    event: &QuizEvent,
    context: &QuizContext,
) -> Result<TransitionOutcome, QuizTransitionError> {
    use QuizAction::{ComputeRecommendation, ShowQuestion, StoreAnswer};
    use QuizEvent::{NavigateBack, NavigateNext, OptionSelected, RestartRequested};
    use QuizState::{Question, Results};

    let (to, actions) = match (current, event) {
        (_, RestartRequested) => return Ok(QuizFlow.restart(current)),
        (Results, _) => return Err(QuizTransitionError::QuizComplete { event: event.clone() }),
        (Question(active), OptionSelected { question, value }) => {
            if !is_valid_question(*question) {
                return Err(QuizTransitionError::QuestionOutOfRange { question: *question });
            }
            if question != active {
                return Err(QuizTransitionError::QuestionMismatch {
                    state: *current,
                    question: *question,
                });
            }
            (Question(*active), vec![StoreAnswer { question: *question, value: value.clone() }])
        }
        (Question(active), NavigateNext) => {
            if !context.current_answered {
                return Err(QuizTransitionError::UnansweredQuestion { question: *active });
            }
            if *active < TOTAL_QUESTIONS {
                (Question(active + 1), vec![ShowQuestion(active + 1)])
            } else {
                (Results, vec![ComputeRecommendation])
            }
        }
        (Question(active), NavigateBack) => {
            if *active <= 1 {
                return Err(QuizTransitionError::AtFirstQuestion);
            }
            (Question(active - 1), vec![ShowQuestion(active - 1)])
        }
    };

    Ok(TransitionOutcome { from: *current, to, event: event.clone(), actions })
}
