//! Recommendation decision engine.
//!
//! Scores a completed profile against fixed weight tables, picks a tier by
//! score band, resolves the tier's branch, and builds the bundle the
//! presentation layer renders.

pub mod cart;
pub mod catalog;
pub mod engine;
pub mod scoring;
pub mod types;

pub use cart::{CartPayload, DEFAULT_CART_ENDPOINT};
pub use engine::{DeterministicRecommendationEngine, RecommendationEngine};
pub use scoring::{compute_score, compute_variety_bonus, ScoreResult};
pub use types::{BundleKind, ProductMix, RecommendationBundle, Tier};
