use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::audit::{AuditCategory, AuditContext, AuditEvent, AuditOutcome, AuditSink};
use crate::domain::answer::Answer;
use crate::domain::profile::UserProfile;
use crate::domain::question::TOTAL_QUESTIONS;
use crate::flows::engine::{QuizFlow, QuizTransitionError};
use crate::flows::states::{QuizAction, QuizContext, QuizEvent, QuizState, TransitionOutcome};
use crate::recommend::{RecommendationBundle, RecommendationEngine};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// One visitor's pass through the questionnaire.
///
/// Rejected events return an error and leave the session exactly as it was;
/// none of them are fatal.
#[derive(Clone, Debug)]
pub struct QuizSession {
    id: SessionId,
    flow: QuizFlow,
    state: QuizState,
    answers: BTreeMap<u8, Answer>,
    started_at: DateTime<Utc>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self::with_id(SessionId(Uuid::new_v4().to_string()))
    }

    pub fn with_id(id: SessionId) -> Self {
        let flow = QuizFlow;
        let session = Self {
            id,
            flow,
            state: flow.initial_state(),
            answers: BTreeMap::new(),
            started_at: Utc::now(),
        };
        info!(
            event_name = "quiz.session.started",
            session_id = %session.id.0,
            total_questions = TOTAL_QUESTIONS,
            "quiz session started"
        );
        session
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Stays at the last question once results are shown.
    pub fn current_index(&self) -> u8 {
        self.state.question().unwrap_or(TOTAL_QUESTIONS)
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_results()
    }

    pub fn is_answered(&self, question: u8) -> bool {
        self.answers.contains_key(&question)
    }

    pub fn answer(&self, question: u8) -> Option<&Answer> {
        self.answers.get(&question)
    }

    /// Answers in question order.
    pub fn answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile::from_answers(self.answers.values())
    }

    pub fn record_answer(
        &mut self,
        question: u8,
        value: impl Into<String>,
    ) -> Result<TransitionOutcome, QuizTransitionError> {
        self.apply(QuizEvent::OptionSelected { question, value: value.into() })
    }

    pub fn advance(&mut self) -> Result<TransitionOutcome, QuizTransitionError> {
        self.apply(QuizEvent::NavigateNext)
    }

    pub fn retreat(&mut self) -> Result<TransitionOutcome, QuizTransitionError> {
        self.apply(QuizEvent::NavigateBack)
    }

    pub fn restart(&mut self) -> TransitionOutcome {
        let outcome = self.flow.restart(&self.state);
        self.commit(&outcome);
        outcome
    }

    pub fn apply(&mut self, event: QuizEvent) -> Result<TransitionOutcome, QuizTransitionError> {
        let context = QuizContext {
            current_answered: self.state.question().is_some_and(|q| self.is_answered(q)),
        };

        match self.flow.transition(&self.state, &event, &context) {
            Ok(outcome) => {
                self.commit(&outcome);
                Ok(outcome)
            }
            Err(error) => {
                debug!(
                    event_name = "quiz.transition_rejected",
                    session_id = %self.id.0,
                    state = ?self.state,
                    error = %error,
                    "quiz event ignored"
                );
                Err(error)
            }
        }
    }

    pub fn apply_with_audit<S>(
        &mut self,
        event: QuizEvent,
        sink: &S,
        audit: &AuditContext,
    ) -> Result<TransitionOutcome, QuizTransitionError>
    where
        S: AuditSink,
    {
        let result = self.apply(event);
        match &result {
            Ok(outcome) => {
                sink.emit(
                    AuditEvent::new(
                        Some(self.id.clone()),
                        audit.correlation_id.clone(),
                        "quiz.transition_applied",
                        AuditCategory::Navigation,
                        audit.actor.clone(),
                        AuditOutcome::Success,
                    )
                    .with_metadata("from", format!("{:?}", outcome.from))
                    .with_metadata("to", format!("{:?}", outcome.to))
                    .with_metadata("event", format!("{:?}", outcome.event)),
                );
            }
            Err(error) => {
                sink.emit(
                    AuditEvent::new(
                        Some(self.id.clone()),
                        audit.correlation_id.clone(),
                        "quiz.transition_rejected",
                        AuditCategory::Navigation,
                        audit.actor.clone(),
                        AuditOutcome::Rejected,
                    )
                    .with_metadata("error", error.to_string()),
                );
            }
        }
        result
    }

    /// `None` until the session has reached results.
    pub fn recommend<R>(&self, engine: &R) -> Option<RecommendationBundle>
    where
        R: RecommendationEngine,
    {
        self.is_complete().then(|| engine.recommend(&self.profile()))
    }

    pub fn recommend_with_audit<R, S>(
        &self,
        engine: &R,
        sink: &S,
        audit: &AuditContext,
    ) -> Option<RecommendationBundle>
    where
        R: RecommendationEngine,
        S: AuditSink,
    {
        let bundle = self.recommend(engine)?;
        sink.emit(
            AuditEvent::new(
                Some(self.id.clone()),
                audit.correlation_id.clone(),
                "recommendation.delivered",
                AuditCategory::Recommendation,
                audit.actor.clone(),
                AuditOutcome::Success,
            )
            .with_metadata("stack_name", bundle.stack_name.clone())
            .with_metadata("score", bundle.scores.score.to_string())
            .with_metadata("variety_bonus", bundle.scores.variety_bonus.to_string())
            .with_metadata("variety_applied", bundle.variety_applied.to_string()),
        );
        Some(bundle)
    }

    fn commit(&mut self, outcome: &TransitionOutcome) {
        for action in &outcome.actions {
            match action {
                QuizAction::StoreAnswer { question, value } => {
                    self.answers.insert(*question, Answer::new(*question, value.clone()));
                }
                QuizAction::ClearAnswers => self.answers.clear(),
                QuizAction::ShowQuestion(_) | QuizAction::ComputeRecommendation => {}
            }
        }
        self.state = outcome.to;
        debug!(
            event_name = "quiz.transition_applied",
            session_id = %self.id.0,
            from = ?outcome.from,
            to = ?outcome.to,
            answered = self.answers.len(),
            "quiz transition applied"
        );
    }
}
