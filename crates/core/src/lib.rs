pub mod audit;
pub mod config;
pub mod domain;
pub mod errors;
pub mod flows;
pub mod recommend;

pub use audit::{AuditContext, AuditEvent, AuditSink, InMemoryAuditSink, TracingAuditSink};
pub use config::{AppConfig, ConfigError, LoadOptions, QuizConfig};
pub use domain::answer::Answer;
pub use domain::product::{BundleProduct, ProductSku};
pub use domain::profile::UserProfile;
pub use domain::question::{ProfileField, QUESTIONS, TOTAL_QUESTIONS};
pub use errors::{ApplicationError, DomainError};
pub use flows::{QuizEvent, QuizSession, QuizState, QuizTransitionError, SessionId};
pub use recommend::{
    DeterministicRecommendationEngine, RecommendationBundle, RecommendationEngine, ScoreResult,
    Tier,
};
