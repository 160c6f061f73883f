pub mod engine;
pub mod session;
pub mod states;

pub use engine::{QuizFlow, QuizTransitionError};
pub use session::{QuizSession, SessionId};
pub use states::{QuizAction, QuizContext, QuizEvent, QuizState, TransitionOutcome};
